use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Read path: shown to the user through the error view.
    Load,
    /// Write path: logged only.
    Submit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{kind:?}: {message}")]
pub struct CatalogFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl CatalogFailure {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn load(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Load, message)
    }

    pub fn submit(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Submit, message)
    }
}
