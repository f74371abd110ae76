//! Calculator Module
//!
//! Eleven arithmetic and scientific operations behind one evaluation path,
//! plus the HTTP surface of the web shell.
//!
//! ## Architecture
//!
//! - `domain/operations.rs` - Static operation table (guard + formula per operation)
//! - `domain/service.rs` - `Service`, the `CalculatorClientV1` implementation
//! - `domain/render.rs` / `domain/input.rs` - Result lines and operand parsing for both shells
//! - `api/rest/` - HTML form, JSON API, `OpenAPI` document and Problem mapping
//!
//! Shells depend on `calculator-sdk` for the client trait and hold the
//! service as `Arc<dyn CalculatorClientV1>`.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub use config::CalculatorConfig;

/// Name of this module's section under `modules.` in the app config.
pub const MODULE_NAME: &str = "calculator";

// === INTERNAL MODULES ===
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;

pub use api::rest::routes::router;
pub use domain::Service;
