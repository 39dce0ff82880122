use serde::{Deserialize, Serialize};

/// Unified error type for record-set writer operations.
///
/// Network-level variants carry a `provider` field identifying which writer
/// produced the error. All variants are serializable for structured error
/// reporting.
///
/// [`ApiFailure`](Self::ApiFailure) is the only variant that represents a
/// completed HTTP exchange with a non-success status; the apply loop uses it
/// to decide whether the create fallback applies. Transport-level failures
/// ([`NetworkError`](Self::NetworkError), [`Timeout`](Self::Timeout)) abort
/// directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum WriterError {
    /// A network-level error occurred (DNS resolution failure, connection
    /// refused, etc.).
    NetworkError {
        /// Writer that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Writer that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The requested DNS record type is not in the supported set.
    ///
    /// Raised before any network call is made for the record.
    UnsupportedRecordType {
        /// The unsupported record type string, uppercased.
        record_type: String,
    },

    /// The API answered with a non-success HTTP status.
    ApiFailure {
        /// Writer that produced the error.
        provider: String,
        /// HTTP status code of the response.
        status: u16,
        /// Response body text, as returned by the API.
        body: String,
    },
}

impl std::fmt::Display for WriterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { provider, detail } => {
                write!(f, "[{provider}] Network error: {detail}")
            }
            Self::Timeout { provider, detail } => {
                write!(f, "[{provider}] Request timeout: {detail}")
            }
            Self::UnsupportedRecordType { record_type } => {
                write!(f, "Record type \"{record_type}\" is not supported")
            }
            Self::ApiFailure {
                provider,
                status,
                body,
            } => {
                write!(f, "[{provider}] API request failed (HTTP {status}): {body}")
            }
        }
    }
}

impl std::error::Error for WriterError {}

/// Convenience type alias for `Result<T, WriterError>`.
pub type Result<T> = std::result::Result<T, WriterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_network_error() {
        let e = WriterError::NetworkError {
            provider: "desec".to_string(),
            detail: "connection refused".to_string(),
        };
        assert_eq!(e.to_string(), "[desec] Network error: connection refused");
    }

    #[test]
    fn display_timeout() {
        let e = WriterError::Timeout {
            provider: "desec".to_string(),
            detail: "30s elapsed".to_string(),
        };
        assert_eq!(e.to_string(), "[desec] Request timeout: 30s elapsed");
    }

    #[test]
    fn display_unsupported_record_type() {
        let e = WriterError::UnsupportedRecordType {
            record_type: "FOO".to_string(),
        };
        assert_eq!(e.to_string(), "Record type \"FOO\" is not supported");
    }

    #[test]
    fn display_api_failure() {
        let e = WriterError::ApiFailure {
            provider: "desec".to_string(),
            status: 403,
            body: "{\"detail\":\"Invalid token.\"}".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "[desec] API request failed (HTTP 403): {\"detail\":\"Invalid token.\"}"
        );
    }

    #[test]
    fn serialize_tagged_by_code() {
        let e = WriterError::ApiFailure {
            provider: "desec".to_string(),
            status: 400,
            body: "bad request".to_string(),
        };
        let json_res = serde_json::to_string(&e);
        assert!(json_res.is_ok(), "serialization failed: {json_res:?}");
        let Ok(json) = json_res else {
            return;
        };
        assert!(json.contains("\"code\":\"ApiFailure\""));
        assert!(json.contains("\"status\":400"));
    }

    #[test]
    fn deserialize_roundtrip() {
        let original = WriterError::NetworkError {
            provider: "desec".to_string(),
            detail: "connection refused".to_string(),
        };
        let json_res = serde_json::to_string(&original);
        assert!(json_res.is_ok(), "serialization failed: {json_res:?}");
        let Ok(json) = json_res else {
            return;
        };
        let back_res: serde_json::Result<WriterError> = serde_json::from_str(&json);
        assert!(back_res.is_ok(), "deserialization failed: {back_res:?}");
        let Ok(back) = back_res else {
            return;
        };
        assert_eq!(back.to_string(), original.to_string());
    }
}
