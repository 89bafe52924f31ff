use derive_more::{Add, AddAssign, Sum};
use thiserror::Error;
use tracing::debug;

use crate::{Euro, market::Share};

/// Highest number of preserved decimal digits the DP solver accepts. Keeps
/// scaled budgets and profit sums comfortably inside u64 even for datasets
/// with a few thousand rows.
pub const MAX_PRECISION: u32 = 9;

/// Widest share set the bitmask enumeration can represent.
pub const MAX_EXHAUSTIVE_SHARES: usize = 63;

#[derive(Debug, Error, PartialEq)]
pub enum SolverError {
    #[error("budget must not be negative, got {0}")]
    NegativeBudget(Euro),
    #[error("precision {0} exceeds the supported maximum of {MAX_PRECISION}")]
    PrecisionTooLarge(u32),
    #[error("{0} shares exceed the {MAX_EXHAUSTIVE_SHARES}-share limit of the exhaustive search")]
    TooManyShares(usize),
}

/// A monetary value multiplied by 10^precision and truncated. The DP table
/// is indexed and filled exclusively in this integer space, so capacity and
/// share values must be scaled with the same factor.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Add, AddAssign, Sum,
)]
struct Scaled(u64);

impl Scaled {
    fn from_euros(value: Euro, factor: u64) -> Self {
        Scaled((value * factor as f64) as u64)
    }

    fn to_euros(self, factor: u64) -> Euro {
        self.0 as f64 / factor as f64
    }
}

/// The outcome of one solver run: the shares to buy and their totals.
/// Infeasible inputs are not an error, they yield an empty selection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    pub chosen: Vec<Share>,
    pub total_cost: Euro,
    pub total_profit: Euro,
}

/// Enumerates every subset of `shares` and returns the most profitable one
/// that fits in `budget`. O(2^N), kept as the reference the DP solver is
/// checked against. Ties go to the first subset found.
pub fn exhaustive(shares: &[Share], budget: Euro) -> Result<Selection, SolverError> {
    if budget < 0.0 {
        return Err(SolverError::NegativeBudget(budget));
    }
    if shares.len() > MAX_EXHAUSTIVE_SHARES {
        return Err(SolverError::TooManyShares(shares.len()));
    }
    let mut best = Selection::default();
    for mask in 1u64..(1u64 << shares.len()) {
        let mut cost = 0.0;
        let mut profit = 0.0;
        let mut feasible = true;
        for (i, share) in shares.iter().enumerate() {
            if mask & (1 << i) == 0 {
                continue;
            }
            cost += share.cost;
            profit += share.profit;
            // Over budget already, the remaining bits cannot save this mask.
            if cost > budget {
                feasible = false;
                break;
            }
        }
        if feasible && profit > best.total_profit {
            debug!(mask, cost, profit, "new best subset");
            best = Selection {
                chosen: shares
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| mask & (1 << i) != 0)
                    .map(|(_, share)| share.clone())
                    .collect(),
                total_cost: cost,
                total_profit: profit,
            };
        }
    }
    Ok(best)
}

/// 0/1 knapsack over a dense profit table, O(N·C) where C is the budget
/// scaled to `precision` decimal digits. Callers must pre-filter shares with
/// non-positive cost or profit; ingestion already does.
pub fn dynamic(shares: &[Share], budget: Euro, precision: u32) -> Result<Selection, SolverError> {
    if budget < 0.0 {
        return Err(SolverError::NegativeBudget(budget));
    }
    if precision > MAX_PRECISION {
        return Err(SolverError::PrecisionTooLarge(precision));
    }
    let factor = 10u64.pow(precision);
    let capacity = Scaled::from_euros(budget, factor).0 as usize;
    let scaled: Vec<(Scaled, Scaled)> = shares
        .iter()
        .map(|share| {
            (
                Scaled::from_euros(share.cost, factor),
                Scaled::from_euros(share.profit, factor),
            )
        })
        .collect();

    let n = shares.len();
    let mut table = vec![vec![Scaled::default(); capacity + 1]; n + 1];
    for y in 1..=n {
        let (cost, profit) = scaled[y - 1];
        let cost = cost.0 as usize;
        for x in 1..=capacity {
            table[y][x] = if cost <= x {
                table[y - 1][x].max(profit + table[y - 1][x - cost])
            } else {
                table[y - 1][x]
            };
        }
    }

    // Walk back from the full table: a cell differing from the row above
    // means the share of that row was taken.
    let mut chosen = Vec::new();
    let mut total_cost = Scaled::default();
    let mut total_profit = Scaled::default();
    let mut col = capacity;
    for row in (1..=n).rev() {
        if col == 0 {
            break;
        }
        if table[row][col] != table[row - 1][col] {
            let (cost, profit) = scaled[row - 1];
            chosen.push(shares[row - 1].clone());
            total_cost += cost;
            total_profit += profit;
            col -= cost.0 as usize;
        }
    }
    debug!(n, capacity, chosen = chosen.len(), "backtrack complete");
    Ok(Selection {
        chosen,
        total_cost: total_cost.to_euros(factor),
        total_profit: total_profit.to_euros(factor),
    })
}
