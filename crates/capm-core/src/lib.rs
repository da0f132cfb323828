//! CAPM Calculator Core
//!
//! Implementations for the formula engine, input validation, result
//! formatting, and the tracing-backed telemetry observer.

pub mod engine;
pub mod format;
pub mod telemetry;

pub use engine::*;
pub use format::*;
pub use telemetry::*;
