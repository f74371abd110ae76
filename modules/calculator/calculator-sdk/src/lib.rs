//! Calculator SDK
//!
//! This crate provides everything needed to consume the calculator:
//! - API trait (`CalculatorClientV1`)
//! - Operation identifiers and metadata (`Operation`, `Arity`)
//! - Result values (`Value`)
//! - Error types (`CalculatorError`)
//!
//! ## Usage
//!
//! ```ignore
//! use calculator_sdk::{CalculatorClientV1, Operation};
//!
//! let value = client.evaluate(Operation::Sqrt, &[16.0])?;
//! assert_eq!(value.to_string(), "4");
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![deny(rust_2018_idioms)]

mod api;
mod errors;
mod models;

pub use api::CalculatorClientV1;
pub use errors::CalculatorError;
pub use models::{Arity, Operation, Value, format_real};
