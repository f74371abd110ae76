//! Domain layer for calculator module
//!
//! Contains the operation table, the service and the helpers both shells
//! share for reading operands and printing results.

pub mod input;
pub mod operations;
pub mod render;
pub mod service;

pub use input::parse_operand;
pub use render::render_expression;
pub use service::Service;
