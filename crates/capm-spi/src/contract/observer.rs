//! Calculation telemetry hook.

use crate::error::CapmError;
use crate::model::CapmInputs;

/// Observer notified around formula-engine invocations.
///
/// Optional capability: the interaction shell may inject one to record
/// calculations to an operator-facing log. Implementations never surface
/// anything to the end user and never affect the calculation itself.
pub trait CalculationObserver: Send + Sync {
    /// Called after a successful calculation with the inputs used.
    fn on_calculation(&self, inputs: &CapmInputs, result: f64);

    /// Called when a calculation request fails before the formula runs.
    fn on_failure(&self, error: &CapmError);
}

/// Observer that records nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl CalculationObserver for NoopObserver {
    fn on_calculation(&self, _inputs: &CapmInputs, _result: f64) {}

    fn on_failure(&self, _error: &CapmError) {}
}
