// demos/pricing_demo.rs

//! Demonstration of volatility estimation and call pricing
//!
//! This example shows how to:
//! 1. Estimate annualized volatility from a series of daily closes
//! 2. Price a European call and its Greeks with the command-line conventions
//! 3. Re-report the same evaluation with scaled vega and per-day theta

use anyhow::Result;
use bs_greeks::{
    annualized_volatility, price_call, price_call_with_config, CallGreeks, OptionInputs,
    PricingConfig, TRADING_DAYS_PER_YEAR,
};

fn main() -> Result<()> {
    println!("Black-Scholes Call Pricing Demo");
    println!("===============================");

    let closes = create_demo_closes();
    let spot = closes[closes.len() - 1];

    println!("\nStep 1: Estimating volatility from {} closes...", closes.len());
    let volatility = annualized_volatility(&closes, TRADING_DAYS_PER_YEAR)?;
    println!("  Last close:            ${:.2}", spot);
    println!("  Annualized volatility: {:.2}%", volatility * 100.0);

    let inputs = OptionInputs::new(spot, 105.0, 0.5, 0.045, volatility);

    println!("\nStep 2: Pricing with command-line conventions...");
    print_greeks(&price_call(&inputs));

    println!("\nStep 3: Same option, desk conventions (scaled vega, theta per day)...");
    print_greeks(&price_call_with_config(&inputs, &PricingConfig::desk()));

    Ok(())
}

fn print_greeks(greeks: &CallGreeks) {
    println!("  Price: ${:.4}", greeks.price);
    println!("  Delta: {:.4}", greeks.delta);
    println!("  Gamma: {:.4}", greeks.gamma);
    println!("  Theta: {:.4}", greeks.theta);
    println!("  Vega:  {:.4}", greeks.vega);
    println!("  Rho:   {:.4}", greeks.rho);
}

/// A short synthetic price history oscillating around an upward drift
fn create_demo_closes() -> Vec<f64> {
    (0..60)
        .map(|day| {
            let d = day as f64;
            100.0 * (1.0 + 0.001 * d) * (1.0 + 0.015 * (0.7 * d).sin())
        })
        .collect()
}
