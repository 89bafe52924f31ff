use std::time::Duration;

use tabled::{Table, Tabled};

use crate::solver::Selection;

#[derive(Tabled)]
struct Row<'a> {
    #[tabled(rename = "Share")]
    name: &'a str,
    #[tabled(rename = "Cost (EUR)")]
    cost: String,
    #[tabled(rename = "Profit 2y (EUR)")]
    profit: String,
}

/// Renders one solver run as human-readable text: elapsed wall time of the
/// solve call, the chosen shares, and their totals at `precision` decimals.
pub fn print(
    algorithm: &str,
    share_count: usize,
    precision: u32,
    selection: &Selection,
    elapsed: Duration,
) {
    let decimals = precision as usize;
    println!(
        "{algorithm} solver over {share_count} shares finished in {:.6} s",
        elapsed.as_secs_f64()
    );
    if selection.chosen.is_empty() {
        println!("No affordable combination of shares.");
        println!();
        return;
    }
    let rows: Vec<Row> = selection
        .chosen
        .iter()
        .map(|share| Row {
            name: &share.name,
            cost: format!("{:.decimals$}", share.cost),
            profit: format!("{:.decimals$}", share.profit),
        })
        .collect();
    println!("{}", Table::new(rows));
    println!(
        "Total profit over 2 years: {:.decimals$} EUR",
        selection.total_profit
    );
    println!("Total cost: {:.decimals$} EUR", selection.total_cost);
    println!();
}
