//! Background persistence writer.
//!
//! `dispatch` never waits on storage: it hands the encoded slice to a
//! single writer task over a channel. One task means records reach the
//! adapter in dispatch order; nothing else is guaranteed. `flush` is the
//! awaited round-trip for callers that need read-after-write.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

use crate::storage::StorageAdapter;

enum PersistCommand {
    Write { key: String, record: String },
    Remove { key: String },
    Flush(oneshot::Sender<()>),
}

pub(crate) struct PersistWriter {
    sender: mpsc::UnboundedSender<PersistCommand>,
}

impl PersistWriter {
    /// Spawn the writer on the current tokio runtime.
    ///
    /// Returns `None` outside a runtime; the store then keeps state in
    /// memory only.
    pub(crate) fn spawn(storage: Arc<dyn StorageAdapter>) -> Option<Self> {
        let handle = tokio::runtime::Handle::try_current().ok()?;
        let (sender, receiver) = mpsc::unbounded_channel();
        handle.spawn(writer_loop(storage, receiver));
        Some(Self { sender })
    }

    pub(crate) fn write(&self, key: String, record: String) {
        self.send(PersistCommand::Write { key, record });
    }

    pub(crate) fn remove(&self, key: String) {
        self.send(PersistCommand::Remove { key });
    }

    /// Wait until every command queued before this call has been handled.
    pub(crate) async fn flush(&self) {
        let (done, wait) = oneshot::channel();
        self.send(PersistCommand::Flush(done));
        let _ = wait.await;
    }

    fn send(&self, command: PersistCommand) {
        if self.sender.send(command).is_err() {
            warn!("persistence writer stopped, record dropped");
        }
    }
}

async fn writer_loop(
    storage: Arc<dyn StorageAdapter>,
    mut receiver: mpsc::UnboundedReceiver<PersistCommand>,
) {
    while let Some(command) = receiver.recv().await {
        match command {
            PersistCommand::Write { key, record } => {
                let bytes = record.len();
                match storage.set(&key, record).await {
                    Ok(_) => debug!(key = %key, bytes, adapter = storage.name(), "slice persisted"),
                    Err(e) => warn!(key = %key, error = %e, "failed to persist slice"),
                }
            }
            PersistCommand::Remove { key } => {
                if let Err(e) = storage.remove(&key).await {
                    warn!(key = %key, error = %e, "failed to remove persisted slice");
                }
            }
            PersistCommand::Flush(done) => {
                let _ = done.send(());
            }
        }
    }
    debug!("persistence writer finished");
}
