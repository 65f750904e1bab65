//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

/// Returns `false` when the command could not be queued; `status` then holds
/// the reason.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) -> bool {
    let cmd_name = cmd.name();
    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            true
        }
        Err(TrySendError::Full(_)) => {
            *status = "UI command queue is full; please retry".to_string();
            tracing::warn!(command = cmd_name, "ui->backend command queue is full");
            false
        }
        Err(TrySendError::Disconnected(_)) => {
            *status = "Backend command processor disconnected (possible startup failure)"
                .to_string();
            tracing::error!(command = cmd_name, "ui->backend command queue disconnected");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use crossbeam_channel::bounded;

    use super::*;

    #[test]
    fn queues_command_when_there_is_room() {
        let (tx, rx) = bounded(1);
        let mut status = String::new();
        assert!(dispatch_backend_command(&tx, BackendCommand::FetchCatalog, &mut status));
        assert_eq!(rx.try_recv().ok(), Some(BackendCommand::FetchCatalog));
        assert!(status.is_empty());
    }

    #[test]
    fn reports_full_queue() {
        let (tx, _rx) = bounded(1);
        let mut status = String::new();
        dispatch_backend_command(&tx, BackendCommand::FetchCatalog, &mut status);
        assert!(!dispatch_backend_command(
            &tx,
            BackendCommand::FetchCatalog,
            &mut status
        ));
        assert!(status.contains("full"));
    }

    #[test]
    fn reports_disconnected_backend() {
        let (tx, rx) = bounded::<BackendCommand>(1);
        drop(rx);
        let mut status = String::new();
        assert!(!dispatch_backend_command(
            &tx,
            BackendCommand::FetchCatalog,
            &mut status
        ));
        assert!(status.contains("disconnected"));
    }
}
