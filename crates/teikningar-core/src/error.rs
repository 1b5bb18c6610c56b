use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

pub type Result<T> = std::result::Result<T, TeikningarError>;

#[derive(Debug, Error)]
pub enum TeikningarError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "sqlite")]
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorPayload {
    pub code: String,
    pub message: String,
    pub operation: String,
    pub trace_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
}

impl TeikningarError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_FAILED",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Io(_) => "IO_ERROR",
            Self::Json(_) => "JSON_ERROR",
            #[cfg(feature = "sqlite")]
            Self::Sqlite(_) => "SQLITE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    pub(crate) fn mutex_poisoned(name: &str) -> Self {
        Self::Internal(format!("{name} mutex poisoned"))
    }

    pub fn to_payload(
        &self,
        operation: impl Into<String>,
        subject: Option<String>,
    ) -> ErrorPayload {
        ErrorPayload {
            code: self.code().to_string(),
            message: self.to_string(),
            operation: operation.into(),
            trace_id: Uuid::new_v4().to_string(),
            subject,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_carries_code_and_operation() {
        let err = TeikningarError::NotFound("blueprint abc".to_string());
        let payload = err.to_payload("favorite.add", Some("abc".to_string()));
        assert_eq!(payload.code, "NOT_FOUND");
        assert_eq!(payload.operation, "favorite.add");
        assert_eq!(payload.message, "not found: blueprint abc");
        assert_eq!(payload.subject.as_deref(), Some("abc"));
        assert!(Uuid::parse_str(&payload.trace_id).is_ok());
    }

    #[test]
    fn payload_omits_absent_subject() {
        let err = TeikningarError::Validation("bad".to_string());
        let value = serde_json::to_value(err.to_payload("search", None)).expect("serialize");
        assert!(value.get("subject").is_none());
        assert_eq!(value["code"], "VALIDATION_FAILED");
    }
}
