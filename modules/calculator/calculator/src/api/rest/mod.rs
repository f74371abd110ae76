//! HTTP surface of the calculator: HTML form at `/`, JSON API under
//! `/calculator/v1`.

pub mod dto;
pub mod error;
pub mod form;
pub mod handlers;
pub mod openapi;
pub mod page;
pub mod routes;
