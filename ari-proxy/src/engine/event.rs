//! Engine event stream handle.

use crate::wire::ResourceKey;
use serde_json::Value;
use tokio::sync::mpsc;

/// One SDK-decoded engine event: its type, the resource keys it references
/// (the dialog fan-out input), and the full event body.
#[derive(Clone, Debug)]
pub struct EngineEvent {
    pub kind: String,
    pub keys: Vec<ResourceKey>,
    pub payload: Value,
}

impl EngineEvent {
    pub fn new(kind: impl Into<String>, payload: Value) -> Self {
        Self {
            kind: kind.into(),
            keys: Vec::new(),
            payload,
        }
    }

    pub fn with_key(mut self, key: ResourceKey) -> Self {
        self.keys.push(key);
        self
    }
}

/// Receiving half of an all-events subscription. Dropping the handle closes
/// the channel, which the client binding treats as subscription
/// cancellation.
pub struct EngineEvents {
    events: mpsc::Receiver<EngineEvent>,
}

impl EngineEvents {
    pub fn new(events: mpsc::Receiver<EngineEvent>) -> Self {
        Self { events }
    }

    /// Next event, or `None` once the engine side has shut down.
    pub async fn next(&mut self) -> Option<EngineEvent> {
        self.events.recv().await
    }
}
