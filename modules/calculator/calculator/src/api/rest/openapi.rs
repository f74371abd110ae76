use axum::Json;
use calckit_errors::Problem;
use utoipa::OpenApi;

use super::dto::{EvaluateRequest, EvaluateResponse, OperationDto};
use super::handlers;

#[derive(OpenApi)]
#[openapi(
    info(title = "Calculator API", description = "Arithmetic and scientific operations"),
    paths(handlers::evaluate, handlers::list_operations),
    components(schemas(EvaluateRequest, EvaluateResponse, OperationDto, Problem)),
    tags((name = "calculator", description = "Operation evaluation"))
)]
pub struct CalculatorApiDoc;

/// Serve the `OpenAPI` document of the JSON API
#[allow(clippy::unused_async)] // axum handler signature
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(CalculatorApiDoc::openapi())
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn document_lists_both_endpoints() {
        let doc = CalculatorApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/calculator/v1/evaluate"));
        assert!(doc.paths.paths.contains_key("/calculator/v1/operations"));
        let schemas = doc.components.unwrap().schemas;
        assert!(schemas.contains_key("EvaluateRequest"));
        assert!(schemas.contains_key("Problem"));
    }
}
