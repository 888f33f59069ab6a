use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Request error: {0}")]
    Request(String),
    #[error("{message}")]
    Server { status: u16, message: String },
    #[error("Parse error: {0}")]
    Decode(String),
    #[error("Please sign in again")]
    Unauthenticated,
}

impl ApiError {
    /// Session token missing, expired or rejected
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            ApiError::Unauthenticated | ApiError::Server { status: 401, .. }
        )
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    response: Option<ErrorList>,
}

// Shape used by the auth layer for rejected tokens
#[derive(Deserialize)]
struct ErrorList {
    #[serde(default)]
    errors: Vec<String>,
}

/// Builds the error for a non-2xx response from its status and body
pub fn server_error(status: u16, status_text: &str, body: &str) -> ApiError {
    let parsed = serde_json::from_str::<ErrorBody>(body).ok();
    let message = parsed
        .and_then(|b| {
            b.error
                .or(b.message)
                .or_else(|| b.response.and_then(|r| r.errors.into_iter().next()))
        })
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| {
            if status_text.is_empty() {
                format!("HTTP {}", status)
            } else {
                format!("HTTP {}: {}", status, status_text)
            }
        });

    ApiError::Server { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_error_field_of_body() {
        let err = server_error(400, "BAD REQUEST", r#"{"error": "Phone number already registered"}"#);
        assert_eq!(
            err,
            ApiError::Server { status: 400, message: "Phone number already registered".into() }
        );
        assert_eq!(err.to_string(), "Phone number already registered");
    }

    #[test]
    fn reads_auth_layer_error_list() {
        let body = r#"{"meta": {"code": 401}, "response": {"errors": ["You must sign in to view this resource."]}}"#;
        let err = server_error(401, "UNAUTHORIZED", body);
        assert_eq!(err.to_string(), "You must sign in to view this resource.");
        assert!(err.is_unauthorized());
    }

    #[test]
    fn falls_back_to_status_text() {
        let err = server_error(500, "INTERNAL SERVER ERROR", "<html>oops</html>");
        assert_eq!(err.to_string(), "HTTP 500: INTERNAL SERVER ERROR");
        assert!(!err.is_unauthorized());
        assert_eq!(server_error(502, "", "").to_string(), "HTTP 502");
    }
}
