//! Route registration for calculator module

use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Extension, Router};
use calculator_sdk::CalculatorClientV1;

use super::{form, handlers, openapi};

pub const FORM_PATH: &str = "/";
pub const OPERATIONS_PATH: &str = "/calculator/v1/operations";
pub const EVALUATE_PATH: &str = "/calculator/v1/evaluate";
pub const OPENAPI_PATH: &str = "/calculator/v1/openapi.json";

/// Build the calculator router: HTML form plus JSON API.
///
/// # Arguments
/// * `client` - Evaluation backend shared by every handler
pub fn router(client: Arc<dyn CalculatorClientV1>) -> Router {
    Router::new()
        // GET / - form, optionally preselecting `?operation=<id>`
        // POST / - urlencoded submission (operation, a, b)
        .route(FORM_PATH, get(form::show_form).post(form::submit_form))
        .route(OPERATIONS_PATH, get(handlers::list_operations))
        .route(EVALUATE_PATH, post(handlers::evaluate))
        .route(OPENAPI_PATH, get(openapi::openapi_json))
        .layer(Extension(client))
}
