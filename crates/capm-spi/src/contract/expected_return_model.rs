//! Expected-return model trait.

use crate::model::CapmInputs;

/// Formula engine trait.
///
/// Implementations must be deterministic and referentially transparent:
/// identical inputs always yield identical output, with no side effects.
pub trait ExpectedReturnModel: Send + Sync {
    /// Calculate the expected return for the given inputs.
    fn expected_return(&self, inputs: &CapmInputs) -> f64;
}
