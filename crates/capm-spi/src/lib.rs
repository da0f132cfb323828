//! CAPM Calculator Service Provider Interface
//!
//! Defines traits and types for the expected-return calculator:
//! the formula-engine contract, the telemetry hook, the input model,
//! and error types.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::*;
pub use error::*;
pub use model::*;
