//! Handlers of the HTML form at `/`.

use std::sync::Arc;

use axum::Extension;
use axum::extract::{Form, Query};
use axum::response::Html;
use calculator_sdk::{CalculatorClientV1, CalculatorError, Operation};
use serde::Deserialize;
use tracing::error;

use super::handlers::evaluate_blocking;
use super::page::{FormPage, Outcome};
use crate::domain::{parse_operand, render_expression};

#[derive(Debug, Default, Deserialize)]
pub struct FormQuery {
    pub operation: Option<String>,
}

/// Urlencoded body of the form. Missing fields read as empty text.
#[derive(Debug, Default, Deserialize)]
pub struct FormSubmission {
    #[serde(default)]
    pub operation: String,
    #[serde(default)]
    pub a: String,
    #[serde(default)]
    pub b: String,
}

/// Render the empty form, preselecting `?operation=<id>` when given.
#[allow(clippy::unused_async)] // axum handler signature
pub async fn show_form(Query(query): Query<FormQuery>) -> Html<String> {
    let page = match query.operation.as_deref().map(str::parse::<Operation>) {
        None => FormPage::new(Operation::ALL[0]),
        Some(Ok(op)) => FormPage::new(op),
        Some(Err(e)) => {
            let failure = Outcome::Failure(e.to_string());
            FormPage::new(Operation::ALL[0]).with_outcome(failure)
        }
    };
    Html(page.to_string())
}

/// Evaluate a submission and re-render the page with the outcome.
///
/// Always answers 200: failures are part of the page, not HTTP errors.
pub async fn submit_form(
    Extension(client): Extension<Arc<dyn CalculatorClientV1>>,
    Form(submission): Form<FormSubmission>,
) -> Html<String> {
    let FormSubmission { operation, a, b } = submission;

    let operation = match operation.parse::<Operation>() {
        Ok(op) => op,
        Err(e) => {
            let page = FormPage::new(Operation::ALL[0])
                .with_inputs(a, b)
                .with_outcome(Outcome::Failure(e.to_string()));
            return Html(page.to_string());
        }
    };

    let raw = [a.as_str(), b.as_str()];
    let outcome = evaluate_submission(client, operation, raw).await;
    let page = FormPage::new(operation)
        .with_inputs(a, b)
        .with_outcome(outcome);
    Html(page.to_string())
}

async fn evaluate_submission(
    client: Arc<dyn CalculatorClientV1>,
    operation: Operation,
    raw: [&str; 2],
) -> Outcome {
    let operands = match raw[..operation.arity().count()]
        .iter()
        .copied()
        .map(parse_operand)
        .collect::<Result<Vec<f64>, CalculatorError>>()
    {
        Ok(operands) => operands,
        Err(e) => return Outcome::Failure(e.to_string()),
    };

    match evaluate_blocking(client, operation, operands.clone()).await {
        Ok(Ok(value)) => Outcome::Success(render_expression(operation, &operands, &value)),
        Ok(Err(e)) => Outcome::Failure(e.to_string()),
        Err(e) => {
            error!(error = %e, "evaluation task failed");
            Outcome::Failure("internal error, please try again".to_owned())
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use crate::api::rest::routes::router;
    use crate::domain::Service;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use std::sync::Arc;
    use tower::ServiceExt;

    async fn send(request: Request<Body>) -> (StatusCode, String) {
        let response = router(Arc::new(Service::default()))
            .oneshot(request)
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    async fn submit(body: &'static str) -> (StatusCode, String) {
        send(
            Request::builder()
                .method("POST")
                .uri("/")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
    }

    #[tokio::test]
    async fn get_renders_default_form() {
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let (status, html) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains(r#"<option value="add" selected>"#));
        assert!(html.contains("Calculate"));
    }

    #[tokio::test]
    async fn get_preselects_operation() {
        let (_, html) = send(
            Request::builder()
                .uri("/?operation=factorial")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert!(html.contains(r#"<option value="factorial" selected>"#));
        assert!(html.contains("Whole number"));
        assert!(!html.contains(r#"name="b""#));
    }

    #[tokio::test]
    async fn get_with_unknown_operation_explains() {
        let (status, html) = send(
            Request::builder()
                .uri("/?operation=modulo")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("unknown operation: &#39;modulo&#39;"));
    }

    #[tokio::test]
    async fn sqrt_of_sixteen() {
        let (status, html) = submit("operation=sqrt&a=16").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Result: \u{221a}16 = 4"));
        assert!(html.contains(r#"value="16""#));
    }

    #[tokio::test]
    async fn divide_by_zero_shows_error_and_keeps_inputs() {
        let (status, html) = submit("operation=divide&a=5&b=0").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Error: division by zero"));
        assert!(html.contains(r#"value="5""#));
        assert!(html.contains(r#"value="0""#));
    }

    #[tokio::test]
    async fn factorial_of_five() {
        let (_, html) = submit("operation=factorial&a=5").await;
        assert!(html.contains("Result: 5! = 120"));
    }

    #[tokio::test]
    async fn unparseable_operand_is_reported_inline() {
        let (status, html) = submit("operation=add&a=abc&b=2").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Error: invalid number: &#39;abc&#39;"));
    }

    #[tokio::test]
    async fn missing_second_operand_is_invalid_input() {
        let (_, html) = submit("operation=power&a=2").await;
        assert!(html.contains("Error: invalid number: &#39;&#39;"));
    }

    #[tokio::test]
    async fn unary_submission_ignores_second_field() {
        let (_, html) = submit("operation=ln&a=1&b=garbage").await;
        assert!(html.contains("Result: ln(1) = 0"));
    }
}
