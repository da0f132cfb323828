//! CAPM Calculator Facade
//!
//! Unified re-exports for the calculator library.
//!
//! This facade provides access to all calculator components:
//! - `contract` - Traits (ExpectedReturnModel, CalculationObserver)
//! - `error` - Error types (CapmError, Result)
//! - `model` - Input model (CapmInputs)
//! - `config` - Configuration (SliderConfig, CalculatorConfig, DisplayConfig)
//! - `engine` - Formula engine (expected_return, CapmCalculator)
//! - `format` - Display formatting (format_result)
//! - `telemetry` - Tracing observer (TracingObserver)

// Re-export everything from SPI (traits, errors, types)
pub use capm_spi::*;

// Re-export everything from API (configs)
pub use capm_api::*;

// Re-export everything from Core (implementations)
pub use capm_core::*;
