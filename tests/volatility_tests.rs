mod test_utils;

use bs_greeks::volatility::simple_returns;
use bs_greeks::{annualized_volatility, load_closes_csv, TRADING_DAYS_PER_YEAR};
use test_utils::{assert_close, write_temp_file};

const CLOSES: [f64; 6] = [100.0, 101.0, 99.5, 102.0, 103.5, 103.0];

#[test]
fn test_simple_returns() {
    let returns = simple_returns(&[100.0, 110.0, 99.0]);
    assert_eq!(returns.len(), 2);
    assert_close("first return", returns[0], 0.1, 1e-15);
    assert_close("second return", returns[1], -0.1, 1e-15);

    assert!(simple_returns(&[100.0]).is_empty());
    assert!(simple_returns(&[]).is_empty());
}

/// Sample standard deviation of daily returns, scaled by sqrt(252).
#[test]
fn test_annualized_volatility_daily() {
    let vol = annualized_volatility(&CLOSES, TRADING_DAYS_PER_YEAR).expect("Should estimate");
    assert_close("annualized vol", vol, 0.25220876447817353, 1e-12);
}

/// A constant-growth series has zero dispersion of returns.
#[test]
fn test_constant_returns_have_zero_volatility() {
    let closes: Vec<f64> = (0..10).map(|i| 100.0 * 2.0_f64.powi(i)).collect();
    let vol = annualized_volatility(&closes, TRADING_DAYS_PER_YEAR).expect("Should estimate");
    assert!(vol.abs() < 1e-12, "Expected zero volatility, got {}", vol);
}

#[test]
fn test_periods_per_year_scaling() {
    let daily = annualized_volatility(&CLOSES, 1.0).expect("Should estimate");
    let weekly = annualized_volatility(&CLOSES, 52.0).expect("Should estimate");
    assert_close("weekly scaling", weekly, daily * 52.0_f64.sqrt(), 1e-12);
}

#[test]
fn test_annualized_volatility_rejects_bad_input() {
    assert!(annualized_volatility(&[100.0, 101.0], TRADING_DAYS_PER_YEAR).is_err());
    assert!(annualized_volatility(&[100.0, 0.0, 101.0], TRADING_DAYS_PER_YEAR).is_err());
    assert!(annualized_volatility(&[100.0, f64::NAN, 101.0], TRADING_DAYS_PER_YEAR).is_err());
    assert!(annualized_volatility(&CLOSES, 0.0).is_err());
    assert!(annualized_volatility(&CLOSES, f64::NAN).is_err());
}

#[test]
fn test_load_closes_csv() {
    let path = write_temp_file(
        "closes.csv",
        "date,open,close\n\
         2024-01-02,99.0,100.0\n\
         2024-01-03,100.0,101.0\n\
         2024-01-04,101.0,99.5\n\
         2024-01-05,99.5,102.0\n\
         2024-01-08,102.0,103.5\n\
         2024-01-09,103.5,103.0\n",
    );

    let closes = load_closes_csv(&path, "close").expect("CSV should load");
    assert_eq!(closes, CLOSES.to_vec());

    let vol = annualized_volatility(&closes, TRADING_DAYS_PER_YEAR).expect("Should estimate");
    assert_close("annualized vol from csv", vol, 0.25220876447817353, 1e-12);

    let err = load_closes_csv(&path, "adj_close").expect_err("Missing column should fail");
    assert!(format!("{}", err).contains("adj_close"), "Unexpected error: {}", err);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_load_closes_csv_bad_cell() {
    let path = write_temp_file("bad_closes.csv", "close\n100.0\nn/a\n101.0\n");
    let err = load_closes_csv(&path, "close").expect_err("Bad cell should fail");
    assert!(format!("{}", err).contains("Row 2"), "Unexpected error: {}", err);
    let _ = std::fs::remove_file(&path);
}
