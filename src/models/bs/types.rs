use serde::{Deserialize, Serialize};

use super::{bs_call_price, bs_delta, bs_gamma, bs_rho, bs_theta, bs_vega, bs_vega_scaled};
use crate::config::{PricingConfig, ThetaConvention, VegaConvention};

/// The five market inputs of a single Black-Scholes evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionInputs {
    /// Underlying spot price
    pub spot: f64,
    /// Strike price
    pub strike: f64,
    /// Time to maturity in years
    pub years_to_exp: f64,
    /// Continuously-compounded risk-free rate (as decimal, may be negative)
    pub rate: f64,
    /// Annualized volatility (as decimal, e.g., 0.2 for 20%)
    pub volatility: f64,
}

impl OptionInputs {
    pub fn new(spot: f64, strike: f64, years_to_exp: f64, rate: f64, volatility: f64) -> Self {
        Self {
            spot,
            strike,
            years_to_exp,
            rate,
            volatility,
        }
    }

    /// Whether spot, strike, maturity and volatility are all strictly positive.
    ///
    /// Informational only: pricing never rejects inputs, it lets NaN and
    /// infinities propagate.
    pub fn is_in_domain(&self) -> bool {
        self.spot > 0.0 && self.strike > 0.0 && self.years_to_exp > 0.0 && self.volatility > 0.0
    }
}

/// Call price together with its five first- and second-order sensitivities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CallGreeks {
    pub price: f64,
    pub delta: f64,
    pub gamma: f64,
    /// Per year, or per day when the config asks for [`ThetaConvention::PerDay`]
    pub theta: f64,
    pub vega: f64,
    pub rho: f64,
}

impl CallGreeks {
    /// Evaluate every output for `inputs` under the conventions in `config`.
    pub fn compute(inputs: &OptionInputs, config: &PricingConfig) -> Self {
        let OptionInputs {
            spot: s,
            strike: k,
            years_to_exp: t,
            rate: r,
            volatility: sigma,
        } = *inputs;

        let vega = match config.vega {
            VegaConvention::Unscaled => bs_vega(s, k, t, r, sigma),
            VegaConvention::Scaled => bs_vega_scaled(s, k, t, r, sigma),
        };

        let annual_theta = bs_theta(s, k, t, r, sigma);
        let theta = match config.theta {
            ThetaConvention::PerYear => annual_theta,
            ThetaConvention::PerDay => annual_theta / config.days_per_year,
        };

        Self {
            price: bs_call_price(s, k, t, r, sigma),
            delta: bs_delta(s, k, t, r, sigma),
            gamma: bs_gamma(s, k, t, r, sigma),
            theta,
            vega,
            rho: bs_rho(s, k, t, r, sigma),
        }
    }
}
