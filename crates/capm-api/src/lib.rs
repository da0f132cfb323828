//! CAPM Calculator API
//!
//! Configuration types for the calculator: slider bounds and step
//! granularity, and the result display contract.

pub mod config;

pub use config::*;
