//! Gateway error types

use thiserror::Error;

use super::report::ErrorReport;
use super::transport::TransportError;

/// Broad failure category, for callers that branch on it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Business,
    Http,
    Transport,
    Decode,
    Encode,
}

/// Gateway errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// Envelope with a non-zero code
    #[error("{message}")]
    Business { code: i64, message: String },

    /// Non-2xx HTTP status; message from the body when the server sent one
    #[error("{message}")]
    Http { status: u16, message: String },

    /// No response
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Response body did not match the expected shape
    #[error("Invalid response: {0}")]
    Decode(String),

    /// Request body could not be serialized
    #[error("Invalid request body: {0}")]
    Encode(String),
}

impl GatewayError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GatewayError::Business { .. } => ErrorKind::Business,
            GatewayError::Http { .. } => ErrorKind::Http,
            GatewayError::Transport(_) => ErrorKind::Transport,
            GatewayError::Decode(_) => ErrorKind::Decode,
            GatewayError::Encode(_) => ErrorKind::Encode,
        }
    }

    /// How this error is shown to the user
    pub fn report(&self) -> ErrorReport {
        ErrorReport::classify(self.to_string())
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        GatewayError::Decode(err.to_string())
    }
}

/// Result type for gateway calls
pub type GatewayResult<T> = Result<T, GatewayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_is_display() {
        let err = GatewayError::Business {
            code: 1,
            message: "Record not found".into(),
        };
        assert_eq!(err.to_string(), "Record not found");
        assert_eq!(err.kind(), ErrorKind::Business);

        let err = GatewayError::from(TransportError::Timeout);
        assert_eq!(err.to_string(), "Request timeout");
        assert_eq!(err.kind(), ErrorKind::Transport);
    }

    #[test]
    fn test_report_classification() {
        let err = GatewayError::Http {
            status: 403,
            message: "You do not have permission to perform this action.".into(),
        };
        assert!(err.report().is_permission_denied());

        let err = GatewayError::Decode("expected value".into());
        assert!(!err.report().is_permission_denied());
    }
}
