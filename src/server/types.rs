//! Server request and response data structures.

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::error::Category;

use crate::config::{EMPTY_DOMAIN_MESSAGE, FETCH_FAILED_MESSAGE, INVALID_REQUEST_MESSAGE};
use crate::error_handling::ClassifyError;

/// Body of `POST /classify`.
#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub domain: String,
}

impl ClassifyRequest {
    /// Parses a request body.
    ///
    /// The body is read as JSON whatever its `Content-Type`, so clients that
    /// omit the header are still served.
    pub fn from_body(body: Result<Bytes, BytesRejection>) -> Result<Self, RequestRejection> {
        let body = body.map_err(RequestRejection::Body)?;
        serde_json::from_slice(&body).map_err(RequestRejection::Json)
    }
}

/// A `POST /classify` body that could not be read or parsed.
#[derive(Debug)]
pub enum RequestRejection {
    /// The body could not be read (e.g. it exceeds the size limit).
    Body(BytesRejection),
    /// The body is not JSON, or `domain` is missing or not a string.
    Json(serde_json::Error),
}

impl RequestRejection {
    /// 400 for unreadable or syntactically broken bodies, 422 for well-formed
    /// JSON of the wrong shape.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RequestRejection::Body(rejection) => rejection.status(),
            RequestRejection::Json(err) => match err.classify() {
                Category::Data => StatusCode::UNPROCESSABLE_ENTITY,
                Category::Syntax | Category::Eof | Category::Io => StatusCode::BAD_REQUEST,
            },
        }
    }

    fn detail(&self) -> String {
        match self {
            RequestRejection::Body(rejection) => rejection.body_text(),
            RequestRejection::Json(err) => err.to_string(),
        }
    }
}

impl IntoResponse for RequestRejection {
    fn into_response(self) -> Response {
        log::debug!("Rejected classify request: {}", self.detail());
        let body = ErrorBody::Invalid {
            error: INVALID_REQUEST_MESSAGE,
            detail: self.detail(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

/// JSON body for a failed request.
///
/// `Message` is `{"error": ...}`; `Domain` is `{"domain": ..., "error": ...}`;
/// `Invalid` is `{"error": "invalid_request", "detail": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ErrorBody {
    Message { error: &'static str },
    Domain { domain: String, error: &'static str },
    Invalid { error: &'static str, detail: String },
}

impl From<&ClassifyError> for ErrorBody {
    fn from(err: &ClassifyError) -> Self {
        match err {
            ClassifyError::EmptyDomain => ErrorBody::Message {
                error: EMPTY_DOMAIN_MESSAGE,
            },
            ClassifyError::FetchFailed { domain, .. } => ErrorBody::Domain {
                domain: domain.clone(),
                error: FETCH_FAILED_MESSAGE,
            },
        }
    }
}

impl ClassifyError {
    /// HTTP status for this failure.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ClassifyError::EmptyDomain => StatusCode::BAD_REQUEST,
            ClassifyError::FetchFailed { .. } => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ClassifyError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(ErrorBody::from(&self))).into_response()
    }
}

/// JSON response for `/health`
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub vendors: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::{FetchError, FetchErrorKind};

    fn fetch_failed(domain: &str) -> ClassifyError {
        ClassifyError::FetchFailed {
            domain: domain.to_string(),
            source: FetchError {
                kind: FetchErrorKind::Timeout,
                url: format!("https://{}/", domain),
                message: "operation timed out".to_string(),
            },
        }
    }

    fn parse(body: &'static str) -> Result<ClassifyRequest, RequestRejection> {
        ClassifyRequest::from_body(Ok(Bytes::from_static(body.as_bytes())))
    }

    #[test]
    fn test_empty_domain_body() {
        let err = ClassifyError::EmptyDomain;
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        let json = serde_json::to_string(&ErrorBody::from(&err)).expect("serializes");
        assert_eq!(json, r#"{"error":"No domain received"}"#);
    }

    #[test]
    fn test_fetch_failed_body() {
        let err = fetch_failed("example.com");
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
        let json = serde_json::to_string(&ErrorBody::from(&err)).expect("serializes");
        assert_eq!(json, r#"{"domain":"example.com","error":"fetch_failed"}"#);
    }

    #[test]
    fn test_into_response_status() {
        let response = fetch_failed("example.com").into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            response
                .headers()
                .get(axum::http::header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok()),
            Some("application/json")
        );
    }

    #[test]
    fn test_classify_request_requires_string_domain() {
        assert_eq!(parse(r#"{"domain": "a.com"}"#).expect("valid").domain, "a.com");
        assert!(parse(r#"{"domain": 42}"#).is_err());
        assert!(parse(r#"{}"#).is_err());
    }

    #[test]
    fn test_rejection_status_by_category() {
        let cases = [
            (r#"{not json"#, StatusCode::BAD_REQUEST),
            ("", StatusCode::BAD_REQUEST),
            (r#"{"domain": "a.com""#, StatusCode::BAD_REQUEST),
            (r#"{"domain": 42}"#, StatusCode::UNPROCESSABLE_ENTITY),
            (r#"{"site": "a.com"}"#, StatusCode::UNPROCESSABLE_ENTITY),
        ];
        for (body, expected) in cases {
            let rejection = parse(body).unwrap_err();
            assert_eq!(rejection.status_code(), expected, "body {:?}", body);
        }
    }

    #[test]
    fn test_rejection_response_is_json() {
        let response = parse(r#"{"domain": 42}"#).unwrap_err().into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            response
                .headers()
                .get(axum::http::header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok()),
            Some("application/json")
        );
    }

    #[test]
    fn test_invalid_body_shape() {
        let body = ErrorBody::Invalid {
            error: INVALID_REQUEST_MESSAGE,
            detail: "missing field `domain`".to_string(),
        };
        let json = serde_json::to_string(&body).expect("serializes");
        assert_eq!(
            json,
            r#"{"error":"invalid_request","detail":"missing field `domain`"}"#
        );
    }
}
