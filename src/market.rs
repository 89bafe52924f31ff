use std::{io::Read, path::PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::{Euro, Percent};

enum Columns {
    Name = 0,
    Price = 1,
    ProfitPercent = 2,
}

#[derive(Debug, Error)]
pub enum MarketError {
    #[error("unexpected csv headers, want name,price,profit")]
    UnexpectedHeaders,
    #[error("row {row}: missing field '{field}'")]
    MissingField { row: u64, field: &'static str },
    #[error("row {row}: '{value}' is not a valid {field}")]
    BadNumber {
        row: u64,
        field: &'static str,
        value: String,
    },
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// A purchasable share: what it costs today and what it is projected to
/// earn over the two-year horizon, both in euros.
#[derive(Debug, Clone, PartialEq)]
pub struct Share {
    pub name: String,
    pub cost: Euro,
    pub profit: Euro,
}

#[derive(Debug)]
pub struct Market {
    pub shares: Vec<Share>,
}

impl Market {
    pub fn load_from_file(path: &PathBuf) -> Result<Self, MarketError> {
        let rdr = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
        parse_shares(rdr)
    }

    pub fn len(&self) -> usize {
        self.shares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }
}

fn field<'a>(
    row: &'a csv::StringRecord,
    line: u64,
    col: Columns,
    name: &'static str,
) -> Result<&'a str, MarketError> {
    row.get(col as usize)
        .ok_or(MarketError::MissingField { row: line, field: name })
}

fn number(line: u64, name: &'static str, raw: &str) -> Result<f64, MarketError> {
    // Percentage columns sometimes carry a trailing '%'.
    raw.trim()
        .trim_end_matches('%')
        .parse::<f64>()
        .map_err(|_| MarketError::BadNumber {
            row: line,
            field: name,
            value: raw.to_string(),
        })
}

fn parse_shares<R: Read>(mut csv_reader: csv::Reader<R>) -> Result<Market, MarketError> {
    let headers = csv_reader.headers()?;
    if headers.get(Columns::Name as usize) != Some("name")
        && headers.get(Columns::Price as usize) != Some("price")
        && headers.get(Columns::ProfitPercent as usize) != Some("profit")
    {
        warn!(?headers, "Unexpected headers");
        return Err(MarketError::UnexpectedHeaders);
    }
    let mut shares = Vec::new();
    for (idx, row) in csv_reader.records().enumerate() {
        let row = row?;
        debug!(?row, "parsed row");
        let line = idx as u64 + 2;
        let name = field(&row, line, Columns::Name, "name")?;
        let price: Euro = number(line, "price", field(&row, line, Columns::Price, "price")?)?;
        let pct: Percent = number(
            line,
            "profit percentage",
            field(&row, line, Columns::ProfitPercent, "profit percentage")?,
        )?;
        // Free or money-losing rows can never be part of an optimum and a
        // zero cost would break the discrete capacity steps downstream.
        if price <= 0.0 || pct <= 0.0 {
            debug!(name, price, pct, "dropping non-positive row");
            continue;
        }
        shares.push(Share {
            name: name.to_string(),
            cost: price,
            profit: price * pct / 100.0,
        });
    }
    Ok(Market { shares })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(data: &str) -> Result<Market, MarketError> {
        parse_shares(csv::ReaderBuilder::new().flexible(true).from_reader(data.as_bytes()))
    }

    #[test]
    fn parses_rows_and_derives_profit() {
        let market = parse("name,price,profit\nAction-1,20,5%\nAction-2,50,10%\n").unwrap();
        assert_eq!(market.len(), 2);
        assert_eq!(market.shares[0].name, "Action-1");
        assert_eq!(market.shares[0].cost, 20.0);
        assert_eq!(market.shares[0].profit, 1.0);
        assert_eq!(market.shares[1].profit, 5.0);
    }

    #[test]
    fn percent_sign_is_optional() {
        let market = parse("name,price,profit\nA,100,12\n").unwrap();
        assert_eq!(market.shares[0].profit, 12.0);
    }

    #[test]
    fn drops_non_positive_rows() {
        let market = parse(
            "name,price,profit\nA,0,5%\nB,-12.5,7%\nC,30,-2%\nD,30,0%\nE,10,4%\n",
        )
        .unwrap();
        assert_eq!(market.len(), 1);
        assert_eq!(market.shares[0].name, "E");
    }

    #[test]
    fn malformed_number_aborts() {
        let err = parse("name,price,profit\nA,abc,5%\n").unwrap_err();
        assert!(matches!(err, MarketError::BadNumber { row: 2, .. }));
    }

    #[test]
    fn missing_field_aborts() {
        let err = parse("name,price,profit\nA,12\n").unwrap_err();
        assert!(matches!(
            err,
            MarketError::MissingField { row: 2, field: "profit percentage" }
        ));
    }
}
