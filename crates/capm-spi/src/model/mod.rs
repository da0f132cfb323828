//! Data models for the CAPM calculator.

mod inputs;

pub use inputs::*;
