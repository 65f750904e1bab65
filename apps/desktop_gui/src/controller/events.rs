//! UI/backend events and error modeling for desktop GUI controller.

use catalog_core::CatalogAction;
use shared::error::{CatalogFailure, FailureKind};

#[derive(Debug)]
pub enum UiEvent {
    BackendUnavailable(String),
    Catalog(CatalogAction),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Transport,
    Server,
    Validation,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    LoadCatalog,
    SubmitProduct,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let message_lower = message.to_ascii_lowercase();
        let category = if message_lower.contains("malformed")
            || message_lower.contains("invalid")
            || message_lower.contains("missing field")
            || message_lower.contains("expected")
        {
            UiErrorCategory::Validation
        } else if message_lower.contains("server rejected")
            || message_lower.contains("status 5")
            || message_lower.contains("status 4")
        {
            UiErrorCategory::Server
        } else if message_lower.contains("timed out")
            || message_lower.contains("connection")
            || message_lower.contains("dns")
            || message_lower.contains("request failed")
            || message_lower.contains("disconnect")
        {
            UiErrorCategory::Transport
        } else {
            UiErrorCategory::Unknown
        };

        Self {
            category,
            context,
            message,
        }
    }

    pub fn from_failure(failure: &CatalogFailure) -> Self {
        let context = match failure.kind {
            FailureKind::Load => UiErrorContext::LoadCatalog,
            FailureKind::Submit => UiErrorContext::SubmitProduct,
        };
        Self::from_message(context, failure.message.clone())
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Short hint rendered under the load error view.
    pub fn hint(&self) -> &'static str {
        match self.category {
            UiErrorCategory::Transport => "Catalog server unreachable; check the network.",
            UiErrorCategory::Server => "Catalog server rejected the request.",
            UiErrorCategory::Validation => "Catalog server sent data in an unexpected shape.",
            UiErrorCategory::Unknown => "Catalog could not be loaded.",
        }
    }
}
