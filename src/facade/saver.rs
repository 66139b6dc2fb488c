use crate::core::{DbError, Result};
use crate::storage::TableStore;
use log::warn;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{RwLock, oneshot};
use tokio::task::JoinHandle;
use tokio::time::sleep;

/// Background worker that saves the registry's schemas on a fixed period.
pub(crate) struct SaveWorker {
    stop_tx: Option<oneshot::Sender<()>>,
    join_handle: Option<JoinHandle<()>>,
}

impl SaveWorker {
    /// Signals the worker to stop and waits for it to finish.
    ///
    /// No final save is performed; changes since the last tick stay in memory
    /// only.
    pub async fn stop(mut self) -> Result<()> {
        if let Some(stop_tx) = self.stop_tx.take() {
            let _ = stop_tx.send(());
        }

        if let Some(join_handle) = self.join_handle.take() {
            join_handle
                .await
                .map_err(|err| DbError::Internal(format!("save worker join: {}", err)))?;
        }
        Ok(())
    }
}

impl Drop for SaveWorker {
    fn drop(&mut self) {
        if let Some(stop_tx) = self.stop_tx.take() {
            let _ = stop_tx.send(());
        }
        if let Some(join_handle) = self.join_handle.take() {
            join_handle.abort();
        }
    }
}

/// Spawns the periodic save task.
///
/// Each tick takes a read guard on the store and invokes `save`; failures are
/// logged and swallowed, the next tick is the only retry. The stop signal
/// wins over a pending tick, so shutdown never waits a full period.
pub(crate) fn spawn_save_worker(
    store: Arc<RwLock<TableStore>>,
    interval: Duration,
) -> SaveWorker {
    let (stop_tx, mut stop_rx) = oneshot::channel::<()>();

    let join_handle = tokio::spawn(async move {
        loop {
            tokio::select! {
                _ = &mut stop_rx => {
                    break;
                }
                _ = sleep(interval) => {
                    let guard = store.read().await;
                    if let Err(err) = guard.save() {
                        warn!("periodic save failed: {}", err);
                    }
                }
            }
        }
    });

    SaveWorker {
        stop_tx: Some(stop_tx),
        join_handle: Some(join_handle),
    }
}
