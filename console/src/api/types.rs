use serde::{Deserialize, Serialize};
use serde_json::Value;

use hrconsole_core::DataSourceError;

/// Error body returned by the back end, also used for client-side failures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
    /// HTTP status of the response, when there was one.
    #[serde(skip)]
    pub status: Option<u16>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for ApiError {}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl ApiError {
    fn with_code(msg: impl Into<String>, code: &str) -> Self {
        Self {
            error: msg.into(),
            code: code.to_string(),
            details: None,
            status: None,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "VALIDATION_ERROR")
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "UNKNOWN")
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "REQUEST_FAILED")
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }
}

impl From<ApiError> for DataSourceError {
    fn from(error: ApiError) -> Self {
        match error.status {
            Some(status) => DataSourceError::Rejected {
                status,
                message: error.error,
            },
            None if error.code == "REQUEST_FAILED" => DataSourceError::Transport(error.error),
            None => DataSourceError::Payload(error.error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_helpers_set_expected_codes() {
        let validation = ApiError::validation("invalid payload");
        assert_eq!(validation.code, "VALIDATION_ERROR");
        assert_eq!(validation.error, "invalid payload");
        assert!(validation.details.is_none());

        assert_eq!(ApiError::unknown("something failed").code, "UNKNOWN");
        assert_eq!(ApiError::request_failed("network error").code, "REQUEST_FAILED");
    }

    #[test]
    fn api_error_display_and_string_conversion_match_error_text() {
        let error = ApiError::unknown("boom");
        assert_eq!(format!("{}", error), "boom");

        let raw: String = ApiError::validation("bad input").into();
        assert_eq!(raw, "bad input");
    }

    #[test]
    fn back_end_error_body_parses_without_status() {
        let parsed: ApiError = serde_json::from_value(serde_json::json!({
            "error": "Request not found or already processed",
            "code": "CONFLICT"
        }))
        .unwrap();
        assert_eq!(parsed.code, "CONFLICT");
        assert_eq!(parsed.status, None);
    }

    #[test]
    fn converts_into_data_source_errors() {
        let rejected: DataSourceError = ApiError::unknown("gone").with_status(404).into();
        assert_eq!(
            rejected,
            DataSourceError::Rejected {
                status: 404,
                message: "gone".into()
            }
        );

        let transport: DataSourceError = ApiError::request_failed("refused").into();
        assert_eq!(transport, DataSourceError::Transport("refused".into()));

        let payload: DataSourceError = ApiError::unknown("bad json").into();
        assert_eq!(payload, DataSourceError::Payload("bad json".into()));
    }
}
