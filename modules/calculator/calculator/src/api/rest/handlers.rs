use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::{Extension, Json};
use calckit_errors::Problem;
use calculator_sdk::{CalculatorClientV1, CalculatorError, Operation, Value};
use tokio::task::JoinError;
use tracing::{Instrument, Span, error, field::Empty, info_span};

use super::dto::{EvaluateRequest, EvaluateResponse, OperationDto};
use super::error::{calculator_error_to_problem, internal_problem, invalid_request_problem};
use super::routes::EVALUATE_PATH;

/// Run one evaluation off the async worker threads.
///
/// Factorial results are computed exactly, so a single call can take a
/// noticeable amount of CPU time even below the configured ceiling.
pub(super) async fn evaluate_blocking(
    client: Arc<dyn CalculatorClientV1>,
    operation: Operation,
    operands: Vec<f64>,
) -> Result<Result<Value, CalculatorError>, JoinError> {
    tokio::task::spawn_blocking(move || client.evaluate(operation, &operands))
        .await
}

/// Evaluate one operation
#[utoipa::path(
    post,
    path = "/calculator/v1/evaluate",
    tag = "calculator",
    request_body = EvaluateRequest,
    responses(
        (status = 200, description = "Result of the operation", body = EvaluateResponse),
        (status = 400, description = "Unknown operation, wrong operand count or malformed body",
            body = Problem, content_type = "application/problem+json"),
        (status = 422, description = "Operand outside the operation's domain",
            body = Problem, content_type = "application/problem+json"),
        (status = 500, description = "Internal error",
            body = Problem, content_type = "application/problem+json"),
    )
)]
pub async fn evaluate(
    Extension(client): Extension<Arc<dyn CalculatorClientV1>>,
    payload: Result<Json<EvaluateRequest>, JsonRejection>,
) -> Result<Json<EvaluateResponse>, Problem> {
    let span = info_span!("evaluate", operation = Empty);
    async move {
        let Json(req) = match payload {
            Ok(json) => json,
            Err(rej) => return Err(invalid_request_problem(rej.body_text(), EVALUATE_PATH)),
        };
        Span::current().record("operation", req.operation.as_str());

        let operation: Operation = req
            .operation
            .parse()
            .map_err(|e| calculator_error_to_problem(&e, EVALUATE_PATH))?;

        let outcome = evaluate_blocking(client, operation, req.operands.clone())
            .await
            .map_err(|e| {
                error!(error = %e, "evaluation task failed");
                internal_problem(EVALUATE_PATH)
            })?;

        match outcome {
            Ok(value) => Ok(Json(EvaluateResponse::new(operation, req.operands, &value))),
            Err(e) => Err(calculator_error_to_problem(&e, EVALUATE_PATH)),
        }
    }
    .instrument(span)
    .await
}

/// List the supported operations
#[utoipa::path(
    get,
    path = "/calculator/v1/operations",
    tag = "calculator",
    responses(
        (status = 200, description = "Supported operations in menu order", body = [OperationDto]),
    )
)]
#[allow(clippy::unused_async)] // axum handler signature
pub async fn list_operations(
    Extension(client): Extension<Arc<dyn CalculatorClientV1>>,
) -> Json<Vec<OperationDto>> {
    let operations = client.operations().iter().copied();
    Json(operations.map(OperationDto::from).collect())
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::api::rest::routes::{OPERATIONS_PATH, router};
    use crate::domain::Service;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    fn app() -> axum::Router {
        router(Arc::new(Service::default()))
    }

    async fn post_json(body: &str) -> (StatusCode, Option<String>, serde_json::Value) {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(EVALUATE_PATH)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_owned()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().to_owned());
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, content_type, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn sqrt_of_sixteen() {
        let (status, _, body) = post_json(r#"{"operation":"sqrt","operands":[16]}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["operation"], "sqrt");
        assert_eq!(body["result"], "4");
        assert_eq!(body["value"], 4.0);
        assert_eq!(body["expression"], "\u{221a}16 = 4");
    }

    #[tokio::test]
    async fn factorial_of_five() {
        let (status, _, body) = post_json(r#"{"operation":"factorial","operands":[5]}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"], "120");
        assert_eq!(body["expression"], "5! = 120");
    }

    #[tokio::test]
    async fn divide_by_zero_is_a_problem() {
        let request = r#"{"operation":"divide","operands":[5,0]}"#;
        let (status, content_type, body) = post_json(request).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(content_type.as_deref(), Some("application/problem+json"));
        assert_eq!(body["code"], "CALC_DIVISION_BY_ZERO");
        assert_eq!(body["detail"], "division by zero");
        assert_eq!(body["status"], 422);
        assert_eq!(body["instance"], EVALUATE_PATH);
    }

    #[tokio::test]
    async fn unknown_operation_is_bad_request() {
        let request = r#"{"operation":"modulo","operands":[5,2]}"#;
        let (status, _, body) = post_json(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "CALC_UNKNOWN_OPERATION");
    }

    #[tokio::test]
    async fn wrong_operand_count_is_bad_request() {
        let (status, _, body) = post_json(r#"{"operation":"add","operands":[5]}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "CALC_ARITY_MISMATCH");
    }

    #[tokio::test]
    async fn malformed_body_is_a_problem() {
        let request = r#"{"operation":"add","operands":"#;
        let (status, content_type, body) = post_json(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(content_type.as_deref(), Some("application/problem+json"));
        assert_eq!(body["code"], "CALC_INVALID_REQUEST");
    }

    #[tokio::test]
    async fn too_large_factorial_is_unprocessable() {
        let request = r#"{"operation":"factorial","operands":[1000000]}"#;
        let (status, _, body) = post_json(request).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["code"], "CALC_FACTORIAL_TOO_LARGE");
    }

    #[tokio::test]
    async fn lists_operations_in_menu_order() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri(OPERATIONS_PATH)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let ops: Vec<OperationDto> = serde_json::from_slice(&bytes).unwrap();
        let ids: Vec<&str> = ops.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(
            ids.join(","),
            "add,subtract,multiply,divide,power,sqrt,sin,cos,tan,ln,factorial"
        );
    }
}
