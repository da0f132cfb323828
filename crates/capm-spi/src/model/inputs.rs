//! Input model for the CAPM formula.

use serde::{Deserialize, Serialize};

/// The three scalar inputs to the CAPM formula.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CapmInputs {
    /// Risk-free rate as a fractional annual rate.
    pub risk_free_rate: f64,
    /// Sensitivity of the asset to the market (dimensionless).
    pub beta: f64,
    /// Expected market return as a fractional annual rate.
    pub expected_market_return: f64,
}

impl CapmInputs {
    pub fn new(risk_free_rate: f64, beta: f64, expected_market_return: f64) -> Self {
        Self {
            risk_free_rate,
            beta,
            expected_market_return,
        }
    }

    /// True when every component is a finite number.
    pub fn is_finite(&self) -> bool {
        self.risk_free_rate.is_finite()
            && self.beta.is_finite()
            && self.expected_market_return.is_finite()
    }
}
