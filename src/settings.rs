use std::path::PathBuf;

use anyhow::Context;
use serde::Deserialize;

use crate::Euro;

/// Solve-time configuration: how much the client may spend and how many
/// decimal digits the DP solver preserves when scaling to integers.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Settings {
    pub budget: Euro,
    #[serde(default)]
    pub precision: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            budget: 500.0,
            precision: 0,
        }
    }
}

impl Settings {
    pub fn load_from_file(path: &PathBuf) -> anyhow::Result<Self> {
        let file = std::fs::File::open(path)
            .with_context(|| format!("Failed to open settings file {path:?}"))?;
        let settings: Settings = serde_yaml::from_reader(file)?;
        anyhow::ensure!(
            settings.budget >= 0.0,
            "Budget must not be negative, got {}",
            settings.budget
        );
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precision_defaults_to_zero() {
        let settings: Settings = serde_yaml::from_str("Budget: 750.5\n").unwrap();
        assert_eq!(settings.budget, 750.5);
        assert_eq!(settings.precision, 0);
    }

    #[test]
    fn parses_both_fields() {
        let settings: Settings = serde_yaml::from_str("Budget: 500\nPrecision: 2\n").unwrap();
        assert_eq!(settings.budget, 500.0);
        assert_eq!(settings.precision, 2);
    }
}
