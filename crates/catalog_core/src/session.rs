//! Executes reducer effects as background tasks and feeds their completions
//! back into the owned [`CatalogState`].

use std::sync::Arc;

use shared::error::CatalogFailure;
use tokio::{runtime::Handle, sync::mpsc, task::JoinHandle};
use tracing::{debug, info};

use crate::{
    api::CatalogApi,
    state::{CatalogAction, CatalogEffect, CatalogState},
};

/// Runs one effect to completion and converts the outcome into the action
/// that reports it.
pub async fn run_effect(api: &dyn CatalogApi, effect: CatalogEffect) -> CatalogAction {
    match effect {
        CatalogEffect::FetchCatalog => match api.list_products().await {
            Ok(products) => CatalogAction::CatalogLoaded(products),
            Err(err) => CatalogAction::CatalogLoadFailed(CatalogFailure::load(err.to_string())),
        },
        CatalogEffect::CreateProduct(draft) => match api.create_product(&draft).await {
            Ok(product) => CatalogAction::ProductCreated(product),
            Err(err) => {
                CatalogAction::ProductCreateFailed(CatalogFailure::submit(err.to_string()))
            }
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EffectKind {
    FetchCatalog,
    CreateProduct,
}

impl EffectKind {
    fn of(effect: &CatalogEffect) -> Self {
        match effect {
            CatalogEffect::FetchCatalog => Self::FetchCatalog,
            CatalogEffect::CreateProduct(_) => Self::CreateProduct,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::FetchCatalog => "fetch_catalog",
            Self::CreateProduct => "create_product",
        }
    }

    fn died(self) -> CatalogAction {
        let message = format!("{} task ended without a response", self.name());
        match self {
            Self::FetchCatalog => CatalogAction::CatalogLoadFailed(CatalogFailure::load(message)),
            Self::CreateProduct => {
                CatalogAction::ProductCreateFailed(CatalogFailure::submit(message))
            }
        }
    }
}

/// Guarantees one completion per task: if the effect unwinds, the matching
/// failure action is sent from `drop`. Aborted tasks stay silent.
struct CompletionGuard {
    completions_tx: mpsc::UnboundedSender<CatalogAction>,
    kind: EffectKind,
    sent: bool,
}

impl CompletionGuard {
    fn complete(mut self, action: CatalogAction) {
        self.sent = true;
        let _ = self.completions_tx.send(action);
    }
}

impl Drop for CompletionGuard {
    fn drop(&mut self) {
        if !self.sent && std::thread::panicking() {
            tracing::error!(effect = self.kind.name(), "catalog request task panicked");
            let _ = self.completions_tx.send(self.kind.died());
        }
    }
}

pub struct CatalogSession {
    state: CatalogState,
    api: Arc<dyn CatalogApi>,
    runtime: Handle,
    completions_tx: mpsc::UnboundedSender<CatalogAction>,
    completions_rx: mpsc::UnboundedReceiver<CatalogAction>,
    in_flight: Vec<JoinHandle<()>>,
}

impl CatalogSession {
    pub fn new(api: Arc<dyn CatalogApi>, runtime: Handle) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self {
            state: CatalogState::new(),
            api,
            runtime,
            completions_tx,
            completions_rx,
            in_flight: Vec::new(),
        }
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    pub fn mount(&mut self) {
        self.dispatch(CatalogAction::Mount);
    }

    /// Applies `action` and starts any request it asks for. Never waits on
    /// the network.
    pub fn dispatch(&mut self, action: CatalogAction) {
        debug!(action = action.name(), "dispatching catalog action");
        if let Some(effect) = self.state.apply(action) {
            self.spawn_effect(effect);
        }
    }

    /// Applies every completion that has already arrived. Returns how many
    /// were applied.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(action) = self.completions_rx.try_recv() {
            self.dispatch(action);
            applied += 1;
        }
        applied
    }

    /// Waits for the next completion and applies it. Returns `None` once
    /// nothing is left in flight. Every spawned task reports exactly once,
    /// including tasks whose request panicked.
    pub async fn next_completion(&mut self) -> Option<&'static str> {
        if let Ok(action) = self.completions_rx.try_recv() {
            return Some(self.apply_completion(action));
        }
        self.reap_finished();
        if self.in_flight.is_empty() {
            // A task that finished between the two checks has already sent.
            let action = self.completions_rx.try_recv().ok()?;
            return Some(self.apply_completion(action));
        }
        let action = self.completions_rx.recv().await?;
        Some(self.apply_completion(action))
    }

    pub(crate) fn in_flight(&mut self) -> usize {
        self.reap_finished();
        self.in_flight.len()
    }

    /// Aborts every outstanding request. Pending completions are discarded.
    pub fn shutdown(&mut self) {
        for handle in self.in_flight.drain(..) {
            handle.abort();
        }
        while self.completions_rx.try_recv().is_ok() {}
    }

    fn apply_completion(&mut self, action: CatalogAction) -> &'static str {
        let name = action.name();
        self.dispatch(action);
        name
    }

    fn spawn_effect(&mut self, effect: CatalogEffect) {
        self.reap_finished();
        let kind = EffectKind::of(&effect);
        info!(effect = kind.name(), "issuing catalog request");

        let api = Arc::clone(&self.api);
        let guard = CompletionGuard {
            completions_tx: self.completions_tx.clone(),
            kind,
            sent: false,
        };
        let handle = self.runtime.spawn(async move {
            let action = run_effect(api.as_ref(), effect).await;
            guard.complete(action);
        });
        self.in_flight.push(handle);
    }

    fn reap_finished(&mut self) {
        self.in_flight.retain(|handle| !handle.is_finished());
    }
}

impl Drop for CatalogSession {
    fn drop(&mut self) {
        if !self.in_flight.is_empty() {
            debug!(count = self.in_flight.len(), "aborting in-flight catalog requests");
        }
        self.shutdown();
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
