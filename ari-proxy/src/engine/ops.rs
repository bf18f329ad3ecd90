//! Per-resource-family operation traits.
//!
//! One trait per engine resource family, carrying exactly the verbs the
//! request dispatcher translates into. Every method has a default body
//! answering [`EngineError::Unsupported`] so that client bindings and test
//! doubles implement only the surface they serve.
//!
//! Data verbs return the resource representation as opaque JSON; list verbs
//! return resource keys; command verbs return nothing.

use crate::engine::{AsteriskInfo, EngineError};
use crate::wire::ResourceKey;
use async_trait::async_trait;
use serde_json::Value;

#[async_trait]
pub trait ApplicationOps: Send + Sync {
    async fn data(&self, _name: &str) -> Result<Value, EngineError> {
        Err(EngineError::Unsupported)
    }

    async fn list(&self) -> Result<Vec<ResourceKey>, EngineError> {
        Err(EngineError::Unsupported)
    }

    async fn subscribe(&self, _name: &str, _event_source: &str) -> Result<(), EngineError> {
        Err(EngineError::Unsupported)
    }

    async fn unsubscribe(&self, _name: &str, _event_source: &str) -> Result<(), EngineError> {
        Err(EngineError::Unsupported)
    }
}

#[async_trait]
pub trait AsteriskOps: Send + Sync {
    /// Engine identity and version. Queried once at boot for the node id.
    async fn info(&self) -> Result<AsteriskInfo, EngineError> {
        Err(EngineError::Unsupported)
    }

    async fn variable_get(&self, _name: &str) -> Result<String, EngineError> {
        Err(EngineError::Unsupported)
    }

    async fn variable_set(&self, _name: &str, _value: &str) -> Result<(), EngineError> {
        Err(EngineError::Unsupported)
    }
}

/// Dynamic configuration objects, addressed by `(class, kind, id)`.
#[async_trait]
pub trait ConfigOps: Send + Sync {
    async fn data(&self, _class: &str, _kind: &str, _id: &str) -> Result<Value, EngineError> {
        Err(EngineError::Unsupported)
    }

    async fn delete(&self, _class: &str, _kind: &str, _id: &str) -> Result<(), EngineError> {
        Err(EngineError::Unsupported)
    }

    async fn update(
        &self,
        _class: &str,
        _kind: &str,
        _id: &str,
        _fields: Value,
    ) -> Result<(), EngineError> {
        Err(EngineError::Unsupported)
    }
}

/// Log channels.
#[async_trait]
pub trait LoggingOps: Send + Sync {
    async fn create(&self, _channel: &str, _levels: &str) -> Result<(), EngineError> {
        Err(EngineError::Unsupported)
    }

    async fn data(&self, _channel: &str) -> Result<Value, EngineError> {
        Err(EngineError::Unsupported)
    }

    async fn delete(&self, _channel: &str) -> Result<(), EngineError> {
        Err(EngineError::Unsupported)
    }

    async fn list(&self) -> Result<Vec<ResourceKey>, EngineError> {
        Err(EngineError::Unsupported)
    }

    async fn rotate(&self, _channel: &str) -> Result<(), EngineError> {
        Err(EngineError::Unsupported)
    }
}

/// Loadable engine modules.
#[async_trait]
pub trait ModulesOps: Send + Sync {
    async fn data(&self, _name: &str) -> Result<Value, EngineError> {
        Err(EngineError::Unsupported)
    }

    async fn list(&self) -> Result<Vec<ResourceKey>, EngineError> {
        Err(EngineError::Unsupported)
    }

    async fn load(&self, _name: &str) -> Result<(), EngineError> {
        Err(EngineError::Unsupported)
    }

    async fn reload(&self, _name: &str) -> Result<(), EngineError> {
        Err(EngineError::Unsupported)
    }

    async fn unload(&self, _name: &str) -> Result<(), EngineError> {
        Err(EngineError::Unsupported)
    }
}

#[async_trait]
pub trait BridgeOps: Send + Sync {
    async fn add_channel(&self, _id: &str, _channel_id: &str) -> Result<(), EngineError> {
        Err(EngineError::Unsupported)
    }

    async fn create(
        &self,
        _id: &str,
        _bridge_type: &str,
        _name: &str,
    ) -> Result<Value, EngineError> {
        Err(EngineError::Unsupported)
    }

    async fn data(&self, _id: &str) -> Result<Value, EngineError> {
        Err(EngineError::Unsupported)
    }

    async fn delete(&self, _id: &str) -> Result<(), EngineError> {
        Err(EngineError::Unsupported)
    }

    async fn list(&self) -> Result<Vec<ResourceKey>, EngineError> {
        Err(EngineError::Unsupported)
    }

    async fn play(
        &self,
        _id: &str,
        _playback_id: &str,
        _media_uri: &str,
    ) -> Result<Value, EngineError> {
        Err(EngineError::Unsupported)
    }

    async fn record(&self, _id: &str, _name: &str, _options: Value) -> Result<Value, EngineError> {
        Err(EngineError::Unsupported)
    }

    async fn remove_channel(&self, _id: &str, _channel_id: &str) -> Result<(), EngineError> {
        Err(EngineError::Unsupported)
    }
}

#[async_trait]
pub trait ChannelOps: Send + Sync {
    async fn answer(&self, _id: &str) -> Result<(), EngineError> {
        Err(EngineError::Unsupported)
    }

    async fn busy(&self, _id: &str) -> Result<(), EngineError> {
        Err(EngineError::Unsupported)
    }

    async fn congestion(&self, _id: &str) -> Result<(), EngineError> {
        Err(EngineError::Unsupported)
    }

    /// Creates a channel from an opaque SDK request body.
    async fn create(&self, _request: Value) -> Result<Value, EngineError> {
        Err(EngineError::Unsupported)
    }

    async fn continue_in_dialplan(
        &self,
        _id: &str,
        _context: &str,
        _extension: &str,
        _priority: i32,
    ) -> Result<(), EngineError> {
        Err(EngineError::Unsupported)
    }

    async fn data(&self, _id: &str) -> Result<Value, EngineError> {
        Err(EngineError::Unsupported)
    }

    async fn dial(&self, _id: &str, _caller: &str, _timeout_secs: u32) -> Result<(), EngineError> {
        Err(EngineError::Unsupported)
    }

    async fn hangup(&self, _id: &str, _reason: &str) -> Result<(), EngineError> {
        Err(EngineError::Unsupported)
    }

    async fn hold(&self, _id: &str) -> Result<(), EngineError> {
        Err(EngineError::Unsupported)
    }

    async fn list(&self) -> Result<Vec<ResourceKey>, EngineError> {
        Err(EngineError::Unsupported)
    }

    async fn music_on_hold(&self, _id: &str, _class: &str) -> Result<(), EngineError> {
        Err(EngineError::Unsupported)
    }

    async fn mute(&self, _id: &str, _direction: &str) -> Result<(), EngineError> {
        Err(EngineError::Unsupported)
    }

    /// Originates a new outbound channel from an opaque SDK request body.
    async fn originate(&self, _request: Value) -> Result<Value, EngineError> {
        Err(EngineError::Unsupported)
    }

    async fn play(
        &self,
        _id: &str,
        _playback_id: &str,
        _media_uri: &str,
    ) -> Result<Value, EngineError> {
        Err(EngineError::Unsupported)
    }

    async fn record(&self, _id: &str, _name: &str, _options: Value) -> Result<Value, EngineError> {
        Err(EngineError::Unsupported)
    }

    async fn ring(&self, _id: &str) -> Result<(), EngineError> {
        Err(EngineError::Unsupported)
    }

    async fn send_dtmf(&self, _id: &str, _dtmf: &str, _options: Value) -> Result<(), EngineError> {
        Err(EngineError::Unsupported)
    }

    async fn silence(&self, _id: &str) -> Result<(), EngineError> {
        Err(EngineError::Unsupported)
    }

    async fn snoop(&self, _id: &str, _snoop_id: &str, _options: Value) -> Result<Value, EngineError> {
        Err(EngineError::Unsupported)
    }

    async fn stop_hold(&self, _id: &str) -> Result<(), EngineError> {
        Err(EngineError::Unsupported)
    }

    async fn stop_music_on_hold(&self, _id: &str) -> Result<(), EngineError> {
        Err(EngineError::Unsupported)
    }

    async fn stop_ring(&self, _id: &str) -> Result<(), EngineError> {
        Err(EngineError::Unsupported)
    }

    async fn stop_silence(&self, _id: &str) -> Result<(), EngineError> {
        Err(EngineError::Unsupported)
    }

    async fn unmute(&self, _id: &str, _direction: &str) -> Result<(), EngineError> {
        Err(EngineError::Unsupported)
    }

    async fn variable_get(&self, _id: &str, _name: &str) -> Result<String, EngineError> {
        Err(EngineError::Unsupported)
    }

    async fn variable_set(&self, _id: &str, _name: &str, _value: &str) -> Result<(), EngineError> {
        Err(EngineError::Unsupported)
    }
}

#[async_trait]
pub trait DeviceStateOps: Send + Sync {
    async fn data(&self, _name: &str) -> Result<Value, EngineError> {
        Err(EngineError::Unsupported)
    }

    async fn delete(&self, _name: &str) -> Result<(), EngineError> {
        Err(EngineError::Unsupported)
    }

    async fn list(&self) -> Result<Vec<ResourceKey>, EngineError> {
        Err(EngineError::Unsupported)
    }

    async fn update(&self, _name: &str, _state: &str) -> Result<(), EngineError> {
        Err(EngineError::Unsupported)
    }
}

/// Endpoints are addressed by `(technology, resource)`.
#[async_trait]
pub trait EndpointOps: Send + Sync {
    async fn data(&self, _tech: &str, _resource: &str) -> Result<Value, EngineError> {
        Err(EngineError::Unsupported)
    }

    async fn list(&self) -> Result<Vec<ResourceKey>, EngineError> {
        Err(EngineError::Unsupported)
    }

    async fn list_by_tech(&self, _tech: &str) -> Result<Vec<ResourceKey>, EngineError> {
        Err(EngineError::Unsupported)
    }
}

#[async_trait]
pub trait MailboxOps: Send + Sync {
    async fn data(&self, _name: &str) -> Result<Value, EngineError> {
        Err(EngineError::Unsupported)
    }

    async fn delete(&self, _name: &str) -> Result<(), EngineError> {
        Err(EngineError::Unsupported)
    }

    async fn list(&self) -> Result<Vec<ResourceKey>, EngineError> {
        Err(EngineError::Unsupported)
    }

    async fn update(
        &self,
        _name: &str,
        _old_messages: u32,
        _new_messages: u32,
    ) -> Result<(), EngineError> {
        Err(EngineError::Unsupported)
    }
}

#[async_trait]
pub trait PlaybackOps: Send + Sync {
    /// Drives a running playback: `pause`, `unpause`, `restart`, `stop`,
    /// `forward`, `reverse`.
    async fn control(&self, _id: &str, _operation: &str) -> Result<(), EngineError> {
        Err(EngineError::Unsupported)
    }

    async fn data(&self, _id: &str) -> Result<Value, EngineError> {
        Err(EngineError::Unsupported)
    }
}

#[async_trait]
pub trait LiveRecordingOps: Send + Sync {
    async fn data(&self, _id: &str) -> Result<Value, EngineError> {
        Err(EngineError::Unsupported)
    }

    async fn delete(&self, _id: &str) -> Result<(), EngineError> {
        Err(EngineError::Unsupported)
    }

    async fn mute(&self, _id: &str) -> Result<(), EngineError> {
        Err(EngineError::Unsupported)
    }

    async fn pause(&self, _id: &str) -> Result<(), EngineError> {
        Err(EngineError::Unsupported)
    }

    async fn resume(&self, _id: &str) -> Result<(), EngineError> {
        Err(EngineError::Unsupported)
    }

    /// Discards the recording without storing it.
    async fn scrap(&self, _id: &str) -> Result<(), EngineError> {
        Err(EngineError::Unsupported)
    }

    async fn stop(&self, _id: &str) -> Result<(), EngineError> {
        Err(EngineError::Unsupported)
    }

    async fn unmute(&self, _id: &str) -> Result<(), EngineError> {
        Err(EngineError::Unsupported)
    }
}

#[async_trait]
pub trait StoredRecordingOps: Send + Sync {
    async fn copy(&self, _id: &str, _destination: &str) -> Result<Value, EngineError> {
        Err(EngineError::Unsupported)
    }

    async fn data(&self, _id: &str) -> Result<Value, EngineError> {
        Err(EngineError::Unsupported)
    }

    async fn delete(&self, _id: &str) -> Result<(), EngineError> {
        Err(EngineError::Unsupported)
    }

    async fn list(&self) -> Result<Vec<ResourceKey>, EngineError> {
        Err(EngineError::Unsupported)
    }
}

#[async_trait]
pub trait SoundOps: Send + Sync {
    async fn data(&self, _name: &str) -> Result<Value, EngineError> {
        Err(EngineError::Unsupported)
    }

    async fn list(&self, _filters: Value) -> Result<Vec<ResourceKey>, EngineError> {
        Err(EngineError::Unsupported)
    }
}
