use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_complete::Shell;

use sharepick::Euro;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Algorithm {
    /// Try every subset, O(2^N)
    Exhaustive,
    /// Knapsack profit table, O(N*C)
    Dynamic,
    /// Run both and report each
    Both,
}

#[derive(Parser, Debug)]
#[command(about = "Pick the most profitable set of shares that fits the budget")]
pub(crate) struct Cli {
    #[arg(
        help = "Shares CSV with name,price,profit columns",
        required_unless_present = "completions"
    )]
    pub dataset: Option<PathBuf>,
    #[arg(short, long, help = "Settings file")]
    pub config: Option<PathBuf>,
    #[arg(short, long, help = "Maximum spend in euros")]
    pub budget: Option<Euro>,
    #[arg(short, long, help = "Decimal digits preserved by the dynamic solver")]
    pub precision: Option<u32>,
    #[arg(short, long, value_enum, default_value_t = Algorithm::Dynamic, help = "Solver to run")]
    pub algorithm: Algorithm,
    #[arg(long, value_enum, help = "Generate shell completions and exit")]
    pub completions: Option<Shell>,
}
