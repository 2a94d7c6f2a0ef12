use std::io::{IsTerminal, Write};
use std::process::ExitCode;

use anyhow::Result;
use tracing::{warn, Level};

use bs_greeks::cli::{parse_args, render_report, usage};
use bs_greeks::{price_call_with_config, PricingConfig};

fn main() -> ExitCode {
    // Diagnostics go to stderr; stdout carries only the report.
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    // Non-UTF-8 operands are read lossily and then parsed like any other text.
    let mut args = std::env::args_os().map(|a| a.to_string_lossy().into_owned());
    let program = args.next().unwrap_or_else(|| "black_scholes".to_string());
    let operands: Vec<String> = args.collect();

    let inputs = match parse_args(&operands) {
        Ok(inputs) => inputs,
        Err(_) => {
            eprintln!("{}", usage(&program));
            return ExitCode::from(1);
        }
    };

    if !inputs.is_in_domain() {
        warn!(
            ?inputs,
            "spot, strike, maturity and volatility should be positive; results may be NaN or infinite"
        );
    }

    let greeks = price_call_with_config(&inputs, &PricingConfig::literal());
    match print_report(&render_report(&greeks)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Failed to write report: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn print_report(report: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(report.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
