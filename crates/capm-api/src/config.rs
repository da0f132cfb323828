//! Calculator configuration types.

use serde::{Deserialize, Serialize};

// ============================================================================
// Slider Configuration
// ============================================================================

/// Bounds and step granularity for one slider control.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SliderConfig {
    /// Lower bound (inclusive).
    pub min: f64,
    /// Upper bound (inclusive).
    pub max: f64,
    /// Step granularity.
    pub step: f64,
}

impl SliderConfig {
    /// Create a slider configuration.
    ///
    /// `step` must be positive and `max` must not be below `min`;
    /// `steps()` and `value_at()` are meaningless otherwise.
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        debug_assert!(step > 0.0, "slider step must be positive");
        debug_assert!(max >= min, "slider bounds must be ordered");
        Self { min, max, step }
    }

    /// Number of discrete positions above the minimum.
    pub fn steps(&self) -> u32 {
        ((self.max - self.min) / self.step).round() as u32
    }

    /// Value at a discrete position, clamped to the bounds.
    ///
    /// Positions are integer step counts so repeated adjustment cannot
    /// accumulate floating-point drift; the bounds are hit exactly.
    pub fn value_at(&self, position: u32) -> f64 {
        let position = position.min(self.steps());
        if position == self.steps() {
            self.max
        } else {
            self.min + position as f64 * self.step
        }
    }

    /// True when the value lies within the bounds.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

// ============================================================================
// Calculator Configuration
// ============================================================================

/// Slider configuration for the three calculator controls.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Risk-free rate control.
    pub risk_free_rate: SliderConfig,
    /// Beta control.
    pub beta: SliderConfig,
    /// Expected market return control.
    pub expected_market_return: SliderConfig,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            risk_free_rate: SliderConfig::new(0.0, 1.0, 0.01),
            beta: SliderConfig::new(0.0, 2.0, 0.01),
            expected_market_return: SliderConfig::new(0.0, 1.0, 0.01),
        }
    }
}

// ============================================================================
// Display Configuration
// ============================================================================

/// Result display contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Fixed prefix for the result line.
    pub prefix: String,
    /// Placeholder shown before the first calculation.
    pub placeholder: String,
    /// Decimal places for the computed value.
    pub precision: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            prefix: "Expected Return: ".to_string(),
            placeholder: "N/A".to_string(),
            precision: 2,
        }
    }
}
