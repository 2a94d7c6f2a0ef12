// Closed-form Black-Scholes call pricing and Greeks.
//
// Every function takes the raw market inputs and recomputes d1/d2 itself, so
// each output can be evaluated on its own. Nothing is validated: degenerate
// inputs (t = 0, sigma = 0, non-positive spot or strike) flow through IEEE-754
// arithmetic and come back as NaN or infinities.

pub mod types;

use std::f64::consts::{FRAC_1_SQRT_2, PI};

/// Standard normal cumulative distribution function, `0.5 * erfc(-x / sqrt(2))`.
///
/// The complementary error function keeps full double precision in both tails,
/// so the result saturates to exactly `0.0` / `1.0` instead of going negative or
/// above one for large `|x|`.
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * libm::erfc(-x * FRAC_1_SQRT_2)
}

/// Standard normal probability density function.
pub fn norm_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

/// Risk-adjusted moneyness `(ln(S/K) + (r + sigma^2/2) T) / (sigma sqrt(T))`.
#[allow(non_snake_case)]
pub fn d1(S: f64, K: f64, T: f64, r: f64, sigma: f64) -> f64 {
    ((S / K).ln() + (r + 0.5 * sigma * sigma) * T) / (sigma * T.sqrt())
}

/// `d1 - sigma sqrt(T)`.
#[allow(non_snake_case)]
pub fn d2(S: f64, K: f64, T: f64, r: f64, sigma: f64) -> f64 {
    d1(S, K, T, r, sigma) - sigma * T.sqrt()
}

/// Price of a European call option.
#[allow(non_snake_case)]
pub fn bs_call_price(S: f64, K: f64, T: f64, r: f64, sigma: f64) -> f64 {
    let d1 = d1(S, K, T, r, sigma);
    let d2 = d2(S, K, T, r, sigma);
    S * norm_cdf(d1) - K * (-r * T).exp() * norm_cdf(d2)
}

/// Sensitivity of the call price to the spot, `N(d1)`.
#[allow(non_snake_case)]
pub fn bs_delta(S: f64, K: f64, T: f64, r: f64, sigma: f64) -> f64 {
    norm_cdf(d1(S, K, T, r, sigma))
}

/// Second derivative of the call price with respect to the spot.
#[allow(non_snake_case)]
pub fn bs_gamma(S: f64, K: f64, T: f64, r: f64, sigma: f64) -> f64 {
    let d1 = d1(S, K, T, r, sigma);
    (-0.5 * d1 * d1).exp() / (S * sigma * (2.0 * PI * T).sqrt())
}

/// Time decay of the call, expressed per year (not divided by a day count).
#[allow(non_snake_case)]
pub fn bs_theta(S: f64, K: f64, T: f64, r: f64, sigma: f64) -> f64 {
    let d1 = d1(S, K, T, r, sigma);
    let d2 = d2(S, K, T, r, sigma);
    let decay = -S * (-0.5 * d1 * d1).exp() * sigma / (2.0 * (2.0 * PI * T).sqrt());
    let carry = r * K * (-r * T).exp() * norm_cdf(d2);
    decay - carry
}

/// Volatility sensitivity as `S * n(d1)`, without the `sqrt(T)` factor.
///
/// This is the historical convention of the command-line tool and is what
/// [`PricingConfig::literal`](crate::PricingConfig::literal) reports. Use
/// [`bs_vega_scaled`] for `dC/dsigma`.
#[allow(non_snake_case)]
pub fn bs_vega(S: f64, K: f64, T: f64, r: f64, sigma: f64) -> f64 {
    S * norm_pdf(d1(S, K, T, r, sigma))
}

/// Textbook vega, `S * n(d1) * sqrt(T)`.
#[allow(non_snake_case)]
pub fn bs_vega_scaled(S: f64, K: f64, T: f64, r: f64, sigma: f64) -> f64 {
    bs_vega(S, K, T, r, sigma) * T.sqrt()
}

/// Sensitivity of the call price to the risk-free rate.
#[allow(non_snake_case)]
pub fn bs_rho(S: f64, K: f64, T: f64, r: f64, sigma: f64) -> f64 {
    K * T * (-r * T).exp() * norm_cdf(d2(S, K, T, r, sigma))
}
