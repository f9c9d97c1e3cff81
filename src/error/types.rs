// src/error/types.rs
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// The subtype fetch did not complete. Transport failures, non-success
    /// statuses and unparseable bodies all fold into this one kind; none is
    /// distinguished further and none is retried.
    #[error("Error getting resource subtypes: ({status}) {detail}")]
    Fetch { status: String, detail: String },

    #[error("Other error: {0}")]
    Other(String),
}

impl AppError {
    pub fn fetch(status: impl Into<String>, detail: impl Into<String>) -> Self {
        AppError::Fetch {
            status: status.into(),
            detail: detail.into(),
        }
    }
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
