//! Response envelope module
//!
//! Every lookup operation returns an `Envelope`: success with a payload or
//! error with a human-readable message. The dispatcher serializes it verbatim,
//! so the serde representation is the wire format.

use serde::Serialize;

/// Uniform success/error wrapper.
///
/// Serializes as `{"status":"success", ...payload fields}` on success and
/// `{"status":"error","error_message":"..."}` on error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Envelope<T> {
    Success {
        #[serde(flatten)]
        payload: T,
    },
    Error {
        error_message: String,
    },
}

impl<T> Envelope<T> {
    pub fn success(payload: T) -> Self {
        Self::Success { payload }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            error_message: message.into(),
        }
    }

    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The error message, if this is an error envelope.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Error { error_message } => Some(error_message),
        }
    }
}

/// Payload carrying a single human-readable report line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub report: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_serialization_flattens_payload() {
        let envelope = Envelope::success(Report {
            report: "all clear".to_string(),
        });
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"status": "success", "report": "all clear"})
        );
    }

    #[test]
    fn test_error_serialization() {
        let envelope = Envelope::<Report>::error("something went wrong");
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"status": "error", "error_message": "something went wrong"})
        );
    }

    #[test]
    fn test_error_message_accessor() {
        let err = Envelope::<Report>::error("nope");
        assert!(!err.is_success());
        assert_eq!(err.error_message(), Some("nope"));

        let ok = Envelope::success(Report {
            report: "fine".to_string(),
        });
        assert!(ok.is_success());
        assert_eq!(ok.error_message(), None);
    }
}
