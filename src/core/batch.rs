//! Deferred-request queue for batch mode

use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

use crate::core::command::Command;
use crate::core::models::ApiMethod;

/// A command waiting in the batch queue, in insertion order.
///
/// Created on each `defer_*` call and consumed atomically when the batch
/// is flushed.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingRequest {
    command: Command,
}

impl PendingRequest {
    pub(crate) fn new(command: Command) -> Self {
        Self { command }
    }

    /// Method the queued command invokes.
    pub fn method(&self) -> ApiMethod {
        self.command.method()
    }

    pub(crate) fn into_command(self) -> Command {
        self.command
    }
}

/// Ordered queue of pending requests shared by the clones of a client.
///
/// The mutex serializes concurrent `push` calls so the final ordering is
/// well-defined, and `take_all` swaps the whole queue out under the lock,
/// so a push racing a flush can never be dropped or duplicated. The lock
/// is never held across a network await.
#[derive(Debug, Clone, Default)]
pub struct BatchQueue {
    entries: Arc<Mutex<Vec<PendingRequest>>>,
}

impl BatchQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a command to the queue without contacting the network.
    pub async fn push(&self, command: Command) {
        let mut entries = self.entries.lock().await;
        entries.push(PendingRequest::new(command));
        debug!("Deferred command, {} now pending", entries.len());
    }

    /// Number of commands currently waiting.
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    /// Whether the queue is empty.
    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }

    /// Take ownership of every queued request, leaving the queue empty.
    pub async fn take_all(&self) -> Vec<PendingRequest> {
        let mut entries = self.entries.lock().await;
        std::mem::take(&mut *entries)
    }
}
