#![allow(dead_code)] // Each test binary uses a different subset of helpers

use std::io::Write;
use std::path::PathBuf;

use bs_greeks::OptionInputs;

/// Textbook at-the-money scenario: S=100, K=100, T=1, r=5%, sigma=20%
pub fn reference_inputs() -> OptionInputs {
    OptionInputs::new(100.0, 100.0, 1.0, 0.05, 0.2)
}

/// Assert `actual` is within `tol` of `expected`, naming the quantity on failure
pub fn assert_close(name: &str, actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() < tol,
        "{} should be {} (tol {}), got {}",
        name,
        expected,
        tol,
        actual
    );
}

/// Write `contents` to a fresh file in the system temp directory and return its path
pub fn write_temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("bs_greeks_{}_{}", std::process::id(), name));
    let mut file = std::fs::File::create(&path).expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp file");
    path
}
