//! Historical volatility from a series of closing prices.
//!
//! Volatility is the sample standard deviation of simple period returns
//! `c[i] / c[i-1] - 1`, annualized by `sqrt(periods_per_year)`. For daily
//! closes use [`TRADING_DAYS_PER_YEAR`].

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use statrs::statistics::Statistics;
use tracing::debug;

/// Trading sessions in a year, used to annualize daily volatility
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Simple returns between consecutive closes. Empty for fewer than two closes.
pub fn simple_returns(closes: &[f64]) -> Vec<f64> {
    closes.windows(2).map(|w| w[1] / w[0] - 1.0).collect()
}

/// Annualized sample volatility of `closes`.
///
/// # Errors
///
/// * fewer than three closes (at least two returns are needed for a sample deviation)
/// * any close that is non-finite or not strictly positive
/// * `periods_per_year` not strictly positive
pub fn annualized_volatility(closes: &[f64], periods_per_year: f64) -> Result<f64> {
    if closes.len() < 3 {
        return Err(anyhow!(
            "Need at least 3 closing prices to estimate volatility, got: {}",
            closes.len()
        ));
    }
    if let Some((i, c)) = closes
        .iter()
        .enumerate()
        .find(|(_, c)| !(c.is_finite() && **c > 0.0))
    {
        return Err(anyhow!("Invalid closing price at index {}: {}", i, c));
    }
    if !(periods_per_year > 0.0) {
        return Err(anyhow!(
            "periods_per_year must be positive, got: {}",
            periods_per_year
        ));
    }

    let returns = simple_returns(closes);
    let period_vol = returns.iter().std_dev();
    Ok(period_vol * periods_per_year.sqrt())
}

/// Read the numeric column `column` from a CSV file with a header row.
pub fn load_closes_csv<P: AsRef<Path>>(path: P, column: &str) -> Result<Vec<f64>> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Could not open price file {}", path.display()))?;

    let idx = reader
        .headers()?
        .iter()
        .position(|h| h.trim() == column)
        .ok_or_else(|| anyhow!("Column '{}' not found in {}", column, path.display()))?;

    let mut closes = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        let cell = record
            .get(idx)
            .ok_or_else(|| anyhow!("Row {} has no '{}' field", row + 1, column))?;
        let value: f64 = cell
            .trim()
            .parse()
            .with_context(|| format!("Row {}: cannot parse '{}' as a price", row + 1, cell))?;
        closes.push(value);
    }

    debug!(count = closes.len(), path = %path.display(), "loaded closing prices");
    Ok(closes)
}
