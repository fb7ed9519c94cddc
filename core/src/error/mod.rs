use crate::models::RequestStatus;
use crate::types::RecordId;
use thiserror::Error;

/// Conditions reported by record-set and lifecycle operations.
///
/// None of these are raised for expected outcomes such as an empty filter
/// result or a clamped page number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("request {id} is already {status}")]
    InvalidTransition { id: RecordId, status: RequestStatus },
    #[error("record {0} not found")]
    NotFound(RecordId),
    #[error("data source unavailable: {0}")]
    DataSourceUnavailable(#[from] DataSourceError),
}

impl CoreError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        CoreError::InvalidArgument(msg.into())
    }

    /// Stable machine-readable code, mirroring the back end's error codes.
    pub fn code(&self) -> &'static str {
        match self {
            CoreError::InvalidArgument(_) => "INVALID_ARGUMENT",
            CoreError::InvalidTransition { .. } => "INVALID_TRANSITION",
            CoreError::NotFound(_) => "NOT_FOUND",
            CoreError::DataSourceUnavailable(_) => "DATA_SOURCE_UNAVAILABLE",
        }
    }
}

/// Failure reported by a `DataSource` implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataSourceError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("back end responded with {status}: {message}")]
    Rejected { status: u16, message: String },
    #[error("unexpected payload: {0}")]
    Payload(String),
}

/// Failure reported by a `Notifier`. Never rolls back core state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("notifier failed: {0}")]
pub struct NotifyError(pub String);

impl NotifyError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_error_maps_codes() {
        assert_eq!(
            CoreError::invalid_argument("page size").code(),
            "INVALID_ARGUMENT"
        );
        assert_eq!(
            CoreError::InvalidTransition {
                id: RecordId::from("att-001"),
                status: RequestStatus::Approved,
            }
            .code(),
            "INVALID_TRANSITION"
        );
        assert_eq!(
            CoreError::NotFound(RecordId::from(3)).code(),
            "NOT_FOUND"
        );
        assert_eq!(
            CoreError::from(DataSourceError::Transport("timeout".into())).code(),
            "DATA_SOURCE_UNAVAILABLE"
        );
    }

    #[test]
    fn invalid_transition_message_names_request_and_status() {
        let err = CoreError::InvalidTransition {
            id: RecordId::from("att-001"),
            status: RequestStatus::Rejected,
        };
        assert_eq!(err.to_string(), "request att-001 is already rejected");
    }

    #[test]
    fn data_source_error_display_includes_status() {
        let err = DataSourceError::Rejected {
            status: 503,
            message: "maintenance".into(),
        };
        assert_eq!(
            err.to_string(),
            "back end responded with 503: maintenance"
        );
    }
}
