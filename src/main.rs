use std::time::Instant;

use clap::{CommandFactory, Parser};
use directories::ProjectDirs;
use tracing::info;

use sharepick::{market::Market, report, settings::Settings, solver};

use crate::cli::Algorithm;

mod cli;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let opts = cli::Cli::parse();

    if let Some(shell) = opts.completions {
        let mut cmd = cli::Cli::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
        return Ok(());
    }

    let mut settings = match opts.config.as_ref() {
        Some(path) => Settings::load_from_file(path)?,
        None => match ProjectDirs::from("org", "quotidian", "sharepick")
            .map(|pdirs| pdirs.config_dir().join("config.yml"))
        {
            Some(path) if path.exists() => Settings::load_from_file(&path)?,
            _ => Settings::default(),
        },
    };
    if let Some(budget) = opts.budget {
        settings.budget = budget;
    }
    if let Some(precision) = opts.precision {
        settings.precision = precision;
    }

    let Some(dataset) = opts.dataset else {
        anyhow::bail!("Failed to get dataset path");
    };
    let market = Market::load_from_file(&dataset)?;
    info!(
        shares = market.len(),
        budget = settings.budget,
        precision = settings.precision,
        "loaded dataset"
    );
    println!(
        "Budget: {} EUR, {} purchasable shares",
        settings.budget,
        market.len()
    );
    println!();

    if matches!(opts.algorithm, Algorithm::Exhaustive | Algorithm::Both) {
        let start = Instant::now();
        let selection = solver::exhaustive(&market.shares, settings.budget)?;
        report::print(
            "Exhaustive",
            market.len(),
            settings.precision,
            &selection,
            start.elapsed(),
        );
    }
    if matches!(opts.algorithm, Algorithm::Dynamic | Algorithm::Both) {
        let start = Instant::now();
        let selection = solver::dynamic(&market.shares, settings.budget, settings.precision)?;
        report::print(
            "Dynamic",
            market.len(),
            settings.precision,
            &selection,
            start.elapsed(),
        );
    }
    Ok(())
}
