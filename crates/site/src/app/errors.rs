use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use rodentia_core::DomainError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::InvariantViolation(msg) => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "invariant_violation", msg)
        }
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
    }
}

/// Out-of-domain facet value in a query string.
pub fn invalid_facet(err: DomainError) -> axum::response::Response {
    tracing::debug!(error = %err, "rejected filter selection");
    json_error(StatusCode::BAD_REQUEST, "invalid_facet", err.to_string())
}

/// Query string that does not deserialize at all, e.g. a repeated facet key.
pub fn invalid_query(rejection: QueryRejection) -> axum::response::Response {
    let message = rejection.body_text();
    tracing::debug!(error = %message, "rejected query string");
    json_error(StatusCode::BAD_REQUEST, "invalid_query", message)
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn parts(res: axum::response::Response) -> (StatusCode, serde_json::Value) {
        let status = res.status();
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn domain_errors_map_to_status_and_code() {
        let (status, body) = parts(domain_error_to_response(DomainError::validation("bad"))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "validation_error", "message": "bad"}));

        let (status, body) = parts(domain_error_to_response(DomainError::invariant("dup"))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "invariant_violation");

        let (status, body) = parts(domain_error_to_response(DomainError::NotFound)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "not_found");
    }

    #[tokio::test]
    async fn invalid_facet_is_a_bad_request() {
        let (status, body) = parts(invalid_facet(DomainError::validation("unknown size value: huge"))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "invalid_facet");
        assert_eq!(body["message"], "validation failed: unknown size value: huge");
    }
}
