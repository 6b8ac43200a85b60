//! Uniform response envelope
//!
//! Every entity route answers with `{code, error_desc, value}` and transport
//! status 200; the effective status lives in the body's `code` field. The
//! wire contract is deliberately uniform - clients branch on `code`, never
//! on the HTTP status. Kept as-is from the system this replaces; auth
//! failures are the one exception and carry a real 401.

use axum::{http::StatusCode, response::IntoResponse, response::Response, Json};
use serde::Serialize;

use crate::domain::DomainError;

#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub code: u16,
    pub error_desc: Option<String>,
    pub value: Option<T>,
}

impl<T> Envelope<T> {
    /// Success. `value: None` serializes as `value: null` and means
    /// "nothing found", which is not an error in this contract.
    pub fn ok(value: Option<T>) -> Self {
        Self {
            code: 200,
            error_desc: None,
            value,
        }
    }

    /// Failure with a human-readable description. All failure kinds map to
    /// code 500 on the wire.
    pub fn failure(err: DomainError) -> Self {
        Self {
            code: 500,
            error_desc: Some(err.to_string()),
            value: None,
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

impl<T> From<Result<Option<T>, DomainError>> for Envelope<T> {
    fn from(res: Result<Option<T>, DomainError>) -> Self {
        match res {
            Ok(value) => Envelope::ok(value),
            Err(err) => Envelope::failure(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_envelope_shape() {
        let env = Envelope::ok(Some(7));
        let json = serde_json::to_value(&env).unwrap();
        assert_eq!(json["code"], 200);
        assert_eq!(json["error_desc"], serde_json::Value::Null);
        assert_eq!(json["value"], 7);
    }

    #[test]
    fn not_found_is_a_success_with_null_value() {
        let env: Envelope<i32> = Envelope::ok(None);
        let json = serde_json::to_value(&env).unwrap();
        assert_eq!(json["code"], 200);
        assert_eq!(json["value"], serde_json::Value::Null);
    }

    #[test]
    fn failure_envelope_shape() {
        let env: Envelope<i32> = Envelope::failure(DomainError::Conflict(
            "UNIQUE constraint failed: books.name".to_string(),
        ));
        let json = serde_json::to_value(&env).unwrap();
        assert_eq!(json["code"], 500);
        assert!(json["error_desc"].as_str().unwrap().contains("UNIQUE"));
        assert_eq!(json["value"], serde_json::Value::Null);
    }
}
