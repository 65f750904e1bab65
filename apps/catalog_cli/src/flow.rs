//! One CLI invocation: mount a session, wait for the catalog, optionally
//! submit a product, and render the result.

use std::sync::Arc;

use catalog_core::{CatalogAction, CatalogApi, CatalogSession};
use shared::domain::{LoadStatus, ProductDraft, ProductId};
use tokio::runtime::Handle;

use crate::render::render_catalog;

#[derive(Debug, Clone, PartialEq)]
pub enum CatalogCommand {
    List,
    Add(ProductDraft),
}

impl CatalogCommand {
    /// A price that is not a finite number is left out of the draft.
    pub fn add(mut draft: ProductDraft) -> Self {
        draft.price = draft.price.filter(|price| price.is_finite());
        Self::Add(draft)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub status: LoadStatus,
    /// Set when an `add` was confirmed by the backend.
    pub created: Option<ProductId>,
    pub lines: Vec<String>,
}

impl Outcome {
    pub fn load_failed(&self) -> bool {
        self.status == LoadStatus::Error
    }
}

pub async fn run_command(api: Arc<dyn CatalogApi>, command: CatalogCommand) -> Outcome {
    let mut session = CatalogSession::new(api, Handle::current());
    session.mount();
    session.next_completion().await;

    let mut lines = Vec::new();
    let mut created = None;
    if let CatalogCommand::Add(draft) = command {
        let before = session.state().products().len();
        session.dispatch(CatalogAction::OpenModal);
        session.dispatch(CatalogAction::DraftChanged(draft));
        session.dispatch(CatalogAction::Submit);
        session.next_completion().await;

        created = session.state().products().get(before).map(|product| product.id);
        lines.push(match created {
            Some(id) => format!("created product id={}", id.0),
            None => "product was not added; see log for details".to_string(),
        });
    }

    lines.extend(render_catalog(session.state()));
    Outcome {
        status: session.state().status(),
        created,
        lines,
    }
}
