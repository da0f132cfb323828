//! Tracing-backed calculation observer.

use capm_spi::{CalculationObserver, CapmError, CapmInputs};

/// Observer that records calculations as `tracing` events.
///
/// Diagnostic detail stays in the operator-facing log; nothing here is
/// shown to the end user.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl TracingObserver {
    pub fn new() -> Self {
        Self
    }
}

impl CalculationObserver for TracingObserver {
    fn on_calculation(&self, inputs: &CapmInputs, result: f64) {
        tracing::info!(
            risk_free_rate = inputs.risk_free_rate,
            beta = inputs.beta,
            expected_market_return = inputs.expected_market_return,
            result,
            "calculated expected return"
        );
    }

    fn on_failure(&self, error: &CapmError) {
        tracing::error!(%error, "calculation failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observer_calls_do_not_panic_without_subscriber() {
        let observer = TracingObserver::new();
        observer.on_calculation(&CapmInputs::new(0.03, 1.2, 0.08), 0.09);
        observer.on_failure(&CapmError::CalculationError("boom".to_string()));
    }

    #[test]
    fn test_observer_as_trait_object() {
        let observer: Box<dyn CalculationObserver> = Box::new(TracingObserver::new());
        observer.on_calculation(&CapmInputs::new(0.0, 0.0, 0.0), 0.0);
    }
}
