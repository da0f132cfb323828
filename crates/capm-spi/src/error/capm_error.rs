//! CAPM calculator error types.

use thiserror::Error;

/// Calculation failures, caught at the interaction-shell boundary.
#[derive(Debug, Error)]
pub enum CapmError {
    #[error("Invalid input: {name} - {reason}")]
    InvalidInput { name: String, reason: String },

    #[error("Calculation error: {0}")]
    CalculationError(String),
}

/// Result type alias for calculator operations.
pub type Result<T> = std::result::Result<T, CapmError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let error = CapmError::InvalidInput {
            name: "risk_free_rate".to_string(),
            reason: "not a finite number".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid input: risk_free_rate - not a finite number"
        );
    }

    #[test]
    fn test_calculation_error_display() {
        let error = CapmError::CalculationError("control read failed".to_string());
        assert_eq!(error.to_string(), "Calculation error: control read failed");
    }

    #[test]
    fn test_result_alias() {
        fn fails() -> Result<f64> {
            Err(CapmError::CalculationError("boom".to_string()))
        }
        assert!(fails().is_err());
    }
}
