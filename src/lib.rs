//! # bs-greeks: Closed-Form European Call Pricing
//!
//! `bs-greeks` evaluates the Black-Scholes price of a European call option together with
//! its five standard sensitivities from five scalar market inputs: spot `S`, strike `K`,
//! maturity `T` in years, continuously-compounded rate `r` and volatility `σ`.
//!
//! ## Core Features
//!
//! - **Call Pricing**: `S·N(d1) − K·e^(−rT)·N(d2)` with a full-precision normal CDF
//! - **Greeks**: delta, gamma, theta, vega and rho as independent pure functions
//! - **Reporting Conventions**: choose scaled or unscaled vega and annual or daily theta
//! - **Historical Volatility**: annualized sample volatility from closing prices
//!
//! ## Quick Start
//!
//! ```rust
//! use bs_greeks::{price_call, OptionInputs};
//!
//! let inputs = OptionInputs::new(100.0, 100.0, 1.0, 0.05, 0.2);
//! let greeks = price_call(&inputs);
//!
//! assert!((greeks.price - 10.4506).abs() < 1e-4);
//! assert!((greeks.delta - 0.6368).abs() < 1e-4);
//! ```
//!
//! ## Numerical Behaviour
//!
//! No function validates its inputs. Degenerate values such as `T = 0` or `σ = 0`
//! produce NaN or infinities following IEEE-754 rules; nothing panics and nothing
//! returns an error.

// ================================================================================================
// MODULES
// ================================================================================================

pub mod cli;
pub mod config;
pub mod models;
pub mod volatility;

// ================================================================================================
// IMPORTS
// ================================================================================================

use tracing::trace;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

// Conventions and their presets
pub use config::{PricingConfig, ThetaConvention, VegaConvention};

// Inputs, outputs and the formula layer
pub use models::bs::types::{CallGreeks, OptionInputs};
pub use models::bs::{
    bs_call_price, bs_delta, bs_gamma, bs_rho, bs_theta, bs_vega, bs_vega_scaled, d1, d2,
    norm_cdf, norm_pdf,
};

// Volatility estimation
pub use volatility::{annualized_volatility, load_closes_csv, TRADING_DAYS_PER_YEAR};

// ================================================================================================
// PRICING
// ================================================================================================

/// Price a European call and its Greeks with the command-line conventions.
///
/// Equivalent to [`price_call_with_config`] with [`PricingConfig::literal()`]: vega is
/// `S·n(d1)` without the `√T` factor and theta is a per-year rate.
///
/// # Example
///
/// ```rust
/// use bs_greeks::{price_call, OptionInputs};
///
/// let greeks = price_call(&OptionInputs::new(100.0, 100.0, 1.0, 0.05, 0.2));
/// assert!((greeks.theta + 6.414).abs() < 1e-3);
/// assert!((greeks.vega - 37.52).abs() < 1e-2);
/// ```
pub fn price_call(inputs: &OptionInputs) -> CallGreeks {
    price_call_with_config(inputs, &PricingConfig::literal())
}

/// Price a European call and its Greeks under the conventions in `config`.
///
/// # Example
///
/// ```rust
/// use bs_greeks::{price_call_with_config, OptionInputs, PricingConfig};
///
/// let inputs = OptionInputs::new(100.0, 100.0, 0.25, 0.05, 0.2);
/// let desk = price_call_with_config(&inputs, &PricingConfig::desk());
/// let literal = price_call_with_config(&inputs, &PricingConfig::literal());
///
/// assert!((desk.vega - literal.vega * 0.5).abs() < 1e-12);
/// assert!((desk.theta - literal.theta / 365.0).abs() < 1e-12);
/// ```
pub fn price_call_with_config(inputs: &OptionInputs, config: &PricingConfig) -> CallGreeks {
    let greeks = CallGreeks::compute(inputs, config);
    trace!(?inputs, ?greeks, "priced european call");
    greeks
}
