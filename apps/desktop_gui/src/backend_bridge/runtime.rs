//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use catalog_core::{run_effect, CatalogApi, HttpCatalogApi, Settings};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

/// Starts the backend worker thread. Every command runs as its own task so a
/// pending load never holds back a submission. Tasks still in flight are
/// dropped with the runtime once the UI side hangs up.
///
/// Completions are never dropped: a full UI queue makes the reporting task
/// wait for room instead.
pub fn launch(settings: Settings, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                let _ = ui_tx.send(UiEvent::BackendUnavailable(format!(
                    "backend worker startup failure: failed to build runtime: {err}"
                )));
                return;
            }
        };

        let api: Arc<dyn CatalogApi> = match HttpCatalogApi::new(&settings) {
            Ok(api) => {
                tracing::info!(
                    list_url = %api.list_url(),
                    create_url = %api.create_url(),
                    "backend worker ready"
                );
                Arc::new(api)
            }
            Err(err) => {
                tracing::error!("invalid catalog endpoint settings: {err}");
                let _ = ui_tx.send(UiEvent::BackendUnavailable(format!(
                    "backend worker startup failure: {err}"
                )));
                return;
            }
        };

        serve_commands(&runtime, api, cmd_rx, ui_tx);
        tracing::debug!("ui command queue closed; backend worker exiting");
    });
}

pub(crate) fn serve_commands(
    runtime: &tokio::runtime::Runtime,
    api: Arc<dyn CatalogApi>,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) {
    while let Ok(cmd) = cmd_rx.recv() {
        let cmd_name = cmd.name();
        tracing::debug!(command = cmd_name, "backend received command");
        let api = Arc::clone(&api);
        let ui_tx = ui_tx.clone();
        runtime.spawn(async move {
            let action = run_effect(api.as_ref(), cmd.into_effect()).await;
            let event = UiEvent::Catalog(action);
            match tokio::task::spawn_blocking(move || ui_tx.send(event)).await {
                Ok(Ok(())) => {}
                Ok(Err(_)) => {
                    tracing::debug!(command = cmd_name, "ui went away before completion");
                }
                Err(err) => {
                    tracing::warn!(command = cmd_name, "failed to deliver completion: {err}");
                }
            }
        });
    }
}
