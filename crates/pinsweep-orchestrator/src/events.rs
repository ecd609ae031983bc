//! Progress events and the fire-and-forget channel that carries them
//!
//! Event payloads keep the original consumer protocol: a tagged `action`
//! field with camelCase names, `pincode`/`update` field spellings included.

use pinsweep_core::OutcomeKind;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::debug;

/// Buffered events per subscriber before the oldest are dropped
pub const EVENT_BUFFER: usize = 64;

/// Events emitted by the orchestrator for a consumer to render
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum CheckEvent {
    /// One location finished (successfully or not)
    #[serde(rename_all = "camelCase")]
    UpdateSingleStatus {
        pincode: String,
        status: OutcomeKind,
        message: String,
        /// Progress text, "Checking {n}/{total}: {city} ({pincode})..."
        update: String,
    },
    /// Coarse progress text
    UpdateStatus { status: String },
    /// The run drained its queue
    CheckComplete { status: String },
    /// The run could not be started
    CheckError { error: String },
}

/// Broadcast channel for check events.
///
/// Emission never fails and never blocks: with no subscriber attached the
/// event is dropped, and a lagging subscriber loses the oldest events first.
#[derive(Debug, Clone)]
pub struct EventChannel {
    sender: broadcast::Sender<CheckEvent>,
}

impl EventChannel {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to events emitted after this call
    pub fn subscribe(&self) -> broadcast::Receiver<CheckEvent> {
        self.sender.subscribe()
    }

    /// Emit an event, dropping it silently when nobody is listening
    pub fn emit(&self, event: CheckEvent) {
        if self.sender.send(event).is_err() {
            debug!("No consumer attached, event dropped");
        }
    }
}

impl Default for EventChannel {
    fn default() -> Self {
        Self::new(EVENT_BUFFER)
    }
}
