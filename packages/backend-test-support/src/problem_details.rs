//! Response assertions for backend error contracts.
//!
//! Independent of backend types: bodies are parsed into local mirrors.

use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::CONTENT_TYPE;
use actix_web::http::StatusCode;
use serde::Deserialize;

const PROBLEM_TYPE_BASE: &str = "https://crabbie.app/errors/";

/// Mirror of the backend's ProblemDetails body.
#[derive(Debug, Deserialize)]
pub struct ProblemDetailsLike {
    #[serde(rename = "type")]
    pub type_: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub code: String,
    pub trace_id: String,
}

fn header<'a>(resp: &'a ServiceResponse<BoxBody>, name: &str) -> Option<&'a str> {
    resp.headers().get(name).and_then(|v| v.to_str().ok())
}

/// Assert an RFC 7807 problem response and return its parsed body.
///
/// Checks status, content type, `x-trace-id` parity with the body, the
/// `type` URL, the code, and optionally a detail substring.
pub async fn assert_problem_details(
    resp: ServiceResponse<BoxBody>,
    expected_status: StatusCode,
    expected_code: &str,
    expected_detail_contains: Option<&str>,
) -> ProblemDetailsLike {
    assert_eq!(resp.status(), expected_status);

    let content_type = header(&resp, CONTENT_TYPE.as_str()).unwrap_or_default();
    assert!(
        content_type.starts_with("application/problem+json"),
        "Content-Type must be application/problem+json (got {content_type})"
    );
    let trace_id = header(&resp, "x-trace-id")
        .expect("x-trace-id header should be present")
        .to_string();

    let body = actix_web::test::read_body(resp).await;
    let problem: ProblemDetailsLike = serde_json::from_slice(&body).unwrap_or_else(|_| {
        panic!(
            "Failed to parse error body as ProblemDetails. Raw body: {}",
            String::from_utf8_lossy(&body)
        )
    });

    assert_eq!(problem.trace_id, trace_id, "body trace_id should match x-trace-id");
    assert_eq!(problem.code, expected_code);
    assert_eq!(problem.status, expected_status.as_u16());
    assert_eq!(problem.type_, format!("{PROBLEM_TYPE_BASE}{expected_code}"));
    if let Some(expected_detail) = expected_detail_contains {
        assert!(
            problem.detail.contains(expected_detail),
            "Expected detail to contain '{}', but got '{}'",
            expected_detail,
            problem.detail
        );
    }
    problem
}

/// Assert a plain-text response with an exact body.
pub async fn assert_plain_text(
    resp: ServiceResponse<BoxBody>,
    expected_status: StatusCode,
    expected_body: &str,
) {
    assert_eq!(resp.status(), expected_status);

    let content_type = header(&resp, CONTENT_TYPE.as_str()).unwrap_or_default();
    assert!(
        content_type.starts_with("text/plain"),
        "Content-Type must be text/plain (got {content_type})"
    );

    let body = actix_web::test::read_body(resp).await;
    assert_eq!(std::str::from_utf8(&body).expect("utf-8 body"), expected_body);
}
