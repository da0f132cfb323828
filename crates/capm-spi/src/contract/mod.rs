//! Trait contracts for the CAPM calculator.

mod expected_return_model;
mod observer;

pub use expected_return_model::*;
pub use observer::*;
