//! Formula engine implementation.

use capm_spi::{CapmError, CapmInputs, ExpectedReturnModel, Result};

/// Standard CAPM calculator.
#[derive(Debug, Clone, Default)]
pub struct CapmCalculator;

impl CapmCalculator {
    /// Create a new calculator.
    pub fn new() -> Self {
        Self
    }
}

impl ExpectedReturnModel for CapmCalculator {
    fn expected_return(&self, inputs: &CapmInputs) -> f64 {
        expected_return(
            inputs.risk_free_rate,
            inputs.beta,
            inputs.expected_market_return,
        )
    }
}

/// Expected return of an asset under CAPM: `E(R) = Rf + beta * (E(Rm) - Rf)`.
///
/// Pure arithmetic. Non-finite inputs propagate IEEE-754 semantics
/// unchanged (NaN in, NaN out); they are never special-cased here.
pub fn expected_return(risk_free_rate: f64, beta: f64, expected_market_return: f64) -> f64 {
    risk_free_rate + beta * (expected_market_return - risk_free_rate)
}

/// Validate inputs read from the interaction surface.
///
/// The formula itself accepts any floats; this check belongs to the
/// read boundary, where a control handing back a non-finite value is a
/// calculation failure.
pub fn validate_inputs(inputs: &CapmInputs) -> Result<()> {
    let components = [
        ("risk_free_rate", inputs.risk_free_rate),
        ("beta", inputs.beta),
        ("expected_market_return", inputs.expected_market_return),
    ];
    for (name, value) in components {
        if !value.is_finite() {
            return Err(CapmError::InvalidInput {
                name: name.to_string(),
                reason: "not a finite number".to_string(),
            });
        }
    }
    Ok(())
}
