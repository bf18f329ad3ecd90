//! Scriptable engine client double.

use ari_proxy::engine::{
    ApplicationOps, AsteriskInfo, AsteriskOps, BridgeOps, ChannelOps, ConfigOps, DeviceStateOps,
    EndpointOps, EngineClient, EngineConnector, EngineError, EngineEvent, EngineEvents,
    LiveRecordingOps, LoggingOps, MailboxOps, ModulesOps, PlaybackOps, SoundOps,
    StoredRecordingOps, SystemInfo,
};
use ari_proxy::wire::ResourceKey;
use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::mpsc;

const EVENT_QUEUE_SIZE: usize = 256;

/// An engine whose identity, resources, and events are scripted by the
/// test. Every serviced operation is recorded in call order; operations a
/// test has no business reaching keep their unsupported-by-default answer.
pub struct MockEngine {
    application: String,
    entity_id: String,
    channels: Mutex<BTreeMap<String, Value>>,
    calls: Mutex<Vec<String>>,
    event_subscribers: Mutex<Vec<mpsc::Sender<EngineEvent>>>,
}

impl MockEngine {
    pub fn new(application: &str, entity_id: &str) -> Self {
        Self {
            application: application.to_string(),
            entity_id: entity_id.to_string(),
            channels: Mutex::new(BTreeMap::new()),
            calls: Mutex::new(Vec::new()),
            event_subscribers: Mutex::new(Vec::new()),
        }
    }

    /// Seeds a channel the data/list operations will serve.
    pub fn insert_channel(&self, id: &str, data: Value) {
        self.channels.lock().insert(id.to_string(), data);
    }

    /// Emits an event to every live all-events subscription.
    pub fn push_event(&self, event: EngineEvent) {
        for subscriber in self.event_subscribers.lock().iter() {
            let _ = subscriber.try_send(event.clone());
        }
    }

    /// Operations serviced so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    fn record(&self, call: String) {
        self.calls.lock().push(call);
    }
}

impl EngineClient for MockEngine {
    fn application_name(&self) -> String {
        self.application.clone()
    }

    fn subscribe_all(&self) -> EngineEvents {
        let (sender, receiver) = mpsc::channel(EVENT_QUEUE_SIZE);
        self.event_subscribers.lock().push(sender);
        EngineEvents::new(receiver)
    }

    fn application(&self) -> &dyn ApplicationOps {
        self
    }
    fn asterisk(&self) -> &dyn AsteriskOps {
        self
    }
    fn asterisk_config(&self) -> &dyn ConfigOps {
        self
    }
    fn asterisk_logging(&self) -> &dyn LoggingOps {
        self
    }
    fn asterisk_modules(&self) -> &dyn ModulesOps {
        self
    }
    fn bridge(&self) -> &dyn BridgeOps {
        self
    }
    fn channel(&self) -> &dyn ChannelOps {
        self
    }
    fn device_state(&self) -> &dyn DeviceStateOps {
        self
    }
    fn endpoint(&self) -> &dyn EndpointOps {
        self
    }
    fn mailbox(&self) -> &dyn MailboxOps {
        self
    }
    fn playback(&self) -> &dyn PlaybackOps {
        self
    }
    fn recording_live(&self) -> &dyn LiveRecordingOps {
        self
    }
    fn recording_stored(&self) -> &dyn StoredRecordingOps {
        self
    }
    fn sound(&self) -> &dyn SoundOps {
        self
    }
}

#[async_trait]
impl AsteriskOps for MockEngine {
    async fn info(&self) -> Result<AsteriskInfo, EngineError> {
        self.record("asterisk.info".to_string());
        Ok(AsteriskInfo {
            system_info: SystemInfo {
                entity_id: self.entity_id.clone(),
                version: "mock".to_string(),
            },
        })
    }
}

#[async_trait]
impl ApplicationOps for MockEngine {
    async fn subscribe(&self, name: &str, event_source: &str) -> Result<(), EngineError> {
        self.record(format!("application.subscribe {name} {event_source}"));
        Ok(())
    }

    async fn unsubscribe(&self, name: &str, event_source: &str) -> Result<(), EngineError> {
        self.record(format!("application.unsubscribe {name} {event_source}"));
        Ok(())
    }
}

#[async_trait]
impl ChannelOps for MockEngine {
    async fn answer(&self, id: &str) -> Result<(), EngineError> {
        self.record(format!("channel.answer {id}"));
        Ok(())
    }

    async fn data(&self, id: &str) -> Result<Value, EngineError> {
        self.record(format!("channel.data {id}"));
        self.channels
            .lock()
            .get(id)
            .cloned()
            .ok_or(EngineError::NotFound)
    }

    async fn hangup(&self, id: &str, reason: &str) -> Result<(), EngineError> {
        self.record(format!("channel.hangup {id} {reason}"));
        Ok(())
    }

    async fn list(&self) -> Result<Vec<ResourceKey>, EngineError> {
        self.record("channel.list".to_string());
        Ok(self
            .channels
            .lock()
            .keys()
            .map(|id| ResourceKey::typed("channel", id.clone()))
            .collect())
    }

    async fn play(
        &self,
        id: &str,
        playback_id: &str,
        media_uri: &str,
    ) -> Result<Value, EngineError> {
        self.record(format!("channel.play {id} {playback_id} {media_uri}"));
        Ok(json!({"id": playback_id, "media_uri": media_uri}))
    }
}

#[async_trait]
impl BridgeOps for MockEngine {
    async fn create(&self, id: &str, bridge_type: &str, name: &str) -> Result<Value, EngineError> {
        self.record(format!("bridge.create {id}"));
        Ok(json!({"id": id, "bridge_type": bridge_type, "name": name}))
    }
}

#[async_trait]
impl PlaybackOps for MockEngine {
    async fn control(&self, id: &str, operation: &str) -> Result<(), EngineError> {
        self.record(format!("playback.control {id} {operation}"));
        Ok(())
    }
}

impl ConfigOps for MockEngine {}
impl LoggingOps for MockEngine {}
impl ModulesOps for MockEngine {}
impl DeviceStateOps for MockEngine {}
impl EndpointOps for MockEngine {}
impl MailboxOps for MockEngine {}
impl LiveRecordingOps for MockEngine {}
impl StoredRecordingOps for MockEngine {}
impl SoundOps for MockEngine {}

/// Connector handing out an existing engine, for `Server::listen` tests.
pub struct ConnectableEngine(pub Arc<MockEngine>);

#[async_trait]
impl EngineConnector for ConnectableEngine {
    async fn connect(&self) -> Result<Arc<dyn EngineClient>, EngineError> {
        Ok(self.0.clone())
    }
}

/// Connector that always refuses, for connect failure-path tests.
pub struct FailingEngineConnector;

#[async_trait]
impl EngineConnector for FailingEngineConnector {
    async fn connect(&self) -> Result<Arc<dyn EngineClient>, EngineError> {
        Err(EngineError::Failure(
            "injected connect failure".to_string(),
        ))
    }
}
