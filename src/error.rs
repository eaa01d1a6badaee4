//! Error Types
//!
//! Failures of the HTTP collaborators and the session store.

use helpbridge_core::registration::FieldErrors;
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// General failure message from the server
    #[error("{0}")]
    Rejected(String),

    #[error("Please correct the highlighted fields")]
    Validation(FieldErrors),

    #[error("Unexpected response: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Deserialize)]
struct FieldError {
    param: String,
    msg: String,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
    errors: Option<Vec<FieldError>>,
}

impl ApiError {
    /// Interpret a non-success response body: `{errors: [{param, msg}]}`
    /// or `{message}`
    pub fn from_response_body(status: u16, body: &str) -> Self {
        let parsed = serde_json::from_str::<ErrorBody>(body).unwrap_or_default();
        match parsed {
            ErrorBody { errors: Some(errors), .. } if !errors.is_empty() => {
                ApiError::Validation(errors.into_iter().map(|e| (e.param, e.msg)).collect())
            }
            ErrorBody { message: Some(msg), .. } | ErrorBody { error: Some(msg), .. } => {
                ApiError::Rejected(msg)
            }
            _ => ApiError::Rejected(format!("Request failed with status {}", status)),
        }
    }

    /// Per-field messages, empty unless this is a validation failure
    pub fn field_errors(&self) -> FieldErrors {
        match self {
            ApiError::Validation(errors) => errors.clone(),
            _ => FieldErrors::new(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SessionError {
    #[error("Session storage unavailable: {0}")]
    Unavailable(String),

    #[error("Could not write session: {0}")]
    Write(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_errors_body() {
        let body = r#"{"errors":[{"param":"email","msg":"Email already registered"},{"param":"phone","msg":"Invalid"}]}"#;
        let err = ApiError::from_response_body(422, body);
        let fields = err.field_errors();
        assert_eq!(fields["email"], "Email already registered");
        assert_eq!(fields.len(), 2);
        assert_eq!(err.to_string(), "Please correct the highlighted fields");
    }

    #[test]
    fn test_message_body() {
        let err = ApiError::from_response_body(401, r#"{"message":"Invalid credentials"}"#);
        assert_eq!(err.to_string(), "Invalid credentials");
        assert!(err.field_errors().is_empty());

        let err = ApiError::from_response_body(500, r#"{"error":"Server exploded"}"#);
        assert_eq!(err.to_string(), "Server exploded");
    }

    #[test]
    fn test_unparseable_body() {
        let err = ApiError::from_response_body(502, "<html>Bad gateway</html>");
        assert_eq!(err.to_string(), "Request failed with status 502");

        let err = ApiError::from_response_body(400, r#"{"errors":[]}"#);
        assert_eq!(err.to_string(), "Request failed with status 400");
    }
}
