//! Catalog view state and the reducer that owns every transition on it.

use shared::{
    domain::{LoadStatus, Product, ProductDraft},
    error::CatalogFailure,
};
use tracing::{debug, error, info, warn};

#[derive(Debug, Clone, PartialEq)]
pub enum CatalogAction {
    Mount,
    CatalogLoaded(Vec<Product>),
    CatalogLoadFailed(CatalogFailure),
    OpenModal,
    CancelModal,
    DraftChanged(ProductDraft),
    ClearDraft,
    Submit,
    ProductCreated(Product),
    ProductCreateFailed(CatalogFailure),
}

impl CatalogAction {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Mount => "mount",
            Self::CatalogLoaded(_) => "catalog_loaded",
            Self::CatalogLoadFailed(_) => "catalog_load_failed",
            Self::OpenModal => "open_modal",
            Self::CancelModal => "cancel_modal",
            Self::DraftChanged(_) => "draft_changed",
            Self::ClearDraft => "clear_draft",
            Self::Submit => "submit",
            Self::ProductCreated(_) => "product_created",
            Self::ProductCreateFailed(_) => "product_create_failed",
        }
    }
}

/// Requests the reducer hands to whoever executes network work.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogEffect {
    FetchCatalog,
    CreateProduct(ProductDraft),
}

/// Which branch the rendering layer shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CatalogView<'a> {
    Loading,
    Error,
    Grid(&'a [Product]),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogState {
    status: LoadStatus,
    products: Vec<Product>,
    draft: Option<ProductDraft>,
    modal_open: bool,
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn draft(&self) -> Option<&ProductDraft> {
        self.draft.as_ref()
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn view(&self) -> CatalogView<'_> {
        match self.status {
            LoadStatus::Idle | LoadStatus::Loading => CatalogView::Loading,
            LoadStatus::Error => CatalogView::Error,
            LoadStatus::Success => CatalogView::Grid(&self.products),
        }
    }

    pub fn apply(&mut self, action: CatalogAction) -> Option<CatalogEffect> {
        match action {
            CatalogAction::Mount => {
                if self.status != LoadStatus::Idle {
                    debug!(status = self.status.label(), "catalog already mounted");
                    return None;
                }
                self.status = LoadStatus::Loading;
                Some(CatalogEffect::FetchCatalog)
            }
            CatalogAction::CatalogLoaded(products) => {
                if self.status != LoadStatus::Loading {
                    warn!(
                        status = self.status.label(),
                        "ignoring catalog load completion outside of loading"
                    );
                    return None;
                }
                info!(count = products.len(), "catalog loaded");
                self.status = LoadStatus::Success;
                self.products = products;
                None
            }
            CatalogAction::CatalogLoadFailed(failure) => {
                if self.status != LoadStatus::Loading {
                    warn!(
                        status = self.status.label(),
                        "ignoring catalog load failure outside of loading"
                    );
                    return None;
                }
                warn!(error = %failure.message, "catalog load failed");
                self.status = LoadStatus::Error;
                None
            }
            CatalogAction::OpenModal => {
                self.modal_open = true;
                None
            }
            CatalogAction::CancelModal => {
                self.modal_open = false;
                None
            }
            CatalogAction::DraftChanged(draft) => {
                self.draft = Some(draft);
                None
            }
            CatalogAction::ClearDraft => {
                self.draft = None;
                None
            }
            CatalogAction::Submit => {
                self.modal_open = false;
                let draft = self.draft.clone().unwrap_or_default();
                Some(CatalogEffect::CreateProduct(draft))
            }
            CatalogAction::ProductCreated(product) => {
                info!(id = product.id.0, title = %product.title, "product created");
                self.products.push(product);
                None
            }
            CatalogAction::ProductCreateFailed(failure) => {
                error!(error = %failure.message, "product submission failed");
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod tests;
