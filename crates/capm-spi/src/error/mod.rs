//! Error types for the CAPM calculator.

mod capm_error;

pub use capm_error::*;
