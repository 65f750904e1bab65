//! Folds UI events into the catalog state and yields backend commands.

use catalog_core::{CatalogAction, CatalogState};
use shared::{domain::LoadStatus, error::CatalogFailure};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

#[derive(Debug, Default)]
pub struct CatalogController {
    state: CatalogState,
    status_line: String,
    load_error: Option<UiError>,
}

impl CatalogController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    pub fn status_line(&self) -> &str {
        &self.status_line
    }

    pub fn set_status_line(&mut self, status: impl Into<String>) {
        self.status_line = status.into();
    }

    pub fn load_error(&self) -> Option<&UiError> {
        self.load_error.as_ref()
    }

    pub fn apply(&mut self, action: CatalogAction) -> Option<BackendCommand> {
        let loading = self.state.status() == LoadStatus::Loading;
        match &action {
            CatalogAction::CatalogLoadFailed(failure) if loading => {
                let err = UiError::from_failure(failure);
                tracing::warn!(
                    context = ?err.context(),
                    category = ?err.category(),
                    error = err.message(),
                    "catalog load failed"
                );
                self.load_error = Some(err);
            }
            CatalogAction::CatalogLoaded(products) if loading => {
                self.status_line = format!("{} products", products.len());
            }
            CatalogAction::ProductCreated(product) => {
                self.status_line = format!("Added \"{}\"", product.title);
            }
            _ => {}
        }
        self.state.apply(action).map(BackendCommand::from)
    }

    pub fn handle_event(&mut self, event: UiEvent) -> Option<BackendCommand> {
        match event {
            UiEvent::Catalog(action) => self.apply(action),
            UiEvent::BackendUnavailable(message) => {
                let err = UiError::from_message(UiErrorContext::BackendStartup, message.clone());
                self.status_line = err.message().to_string();
                // No worker will ever answer the pending load.
                self.apply(CatalogAction::CatalogLoadFailed(CatalogFailure::load(message)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use shared::domain::{Product, ProductDraft, ProductId};

    use super::*;

    fn product(id: i64, title: &str) -> Product {
        Product {
            id: ProductId(id),
            title: title.to_string(),
            price: 1.0,
            description: String::new(),
            category: String::new(),
            image: String::new(),
        }
    }

    #[test]
    fn mount_yields_fetch_command_once() {
        let mut controller = CatalogController::new();
        assert_eq!(
            controller.apply(CatalogAction::Mount),
            Some(BackendCommand::FetchCatalog)
        );
        assert_eq!(controller.apply(CatalogAction::Mount), None);
    }

    #[test]
    fn load_failure_event_records_user_facing_error() {
        let mut controller = CatalogController::new();
        controller.apply(CatalogAction::Mount);
        controller.handle_event(UiEvent::Catalog(CatalogAction::CatalogLoadFailed(
            CatalogFailure::load("request failed: connection refused"),
        )));

        assert_eq!(controller.state().status(), LoadStatus::Error);
        let err = controller.load_error().expect("load error");
        assert_eq!(err.context(), UiErrorContext::LoadCatalog);
    }

    #[test]
    fn submit_failure_is_not_surfaced() {
        let mut controller = CatalogController::new();
        controller.apply(CatalogAction::Mount);
        controller.apply(CatalogAction::CatalogLoaded(vec![product(1, "A")]));
        let status_before = controller.status_line().to_string();

        controller.apply(CatalogAction::OpenModal);
        let cmd = controller.apply(CatalogAction::Submit);
        assert_eq!(
            cmd,
            Some(BackendCommand::CreateProduct {
                draft: ProductDraft::default()
            })
        );
        controller.handle_event(UiEvent::Catalog(CatalogAction::ProductCreateFailed(
            CatalogFailure::submit("request failed"),
        )));

        assert!(controller.load_error().is_none());
        assert_eq!(controller.status_line(), status_before);
        assert_eq!(controller.state().products().len(), 1);
        assert!(!controller.state().is_modal_open());
    }

    #[test]
    fn backend_startup_failure_ends_pending_load() {
        let mut controller = CatalogController::new();
        controller.apply(CatalogAction::Mount);
        controller.handle_event(UiEvent::BackendUnavailable(
            "backend worker startup failure: invalid endpoint".into(),
        ));

        assert_eq!(controller.state().status(), LoadStatus::Error);
        assert!(controller.status_line().contains("startup failure"));
    }

    #[test]
    fn created_product_updates_status_line() {
        let mut controller = CatalogController::new();
        controller.apply(CatalogAction::Mount);
        controller.apply(CatalogAction::CatalogLoaded(Vec::new()));
        assert_eq!(controller.status_line(), "0 products");

        controller.handle_event(UiEvent::Catalog(CatalogAction::ProductCreated(product(
            2, "New",
        ))));
        assert_eq!(controller.status_line(), "Added \"New\"");
        assert_eq!(controller.state().products().len(), 1);
    }
}
