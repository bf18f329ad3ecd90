/********************************************************************************
 * Copyright (c) 2026 Contributors to the Eclipse Foundation
 *
 * See the NOTICE file(s) distributed with this work for additional
 * information regarding copyright ownership.
 *
 * This program and the accompanying materials are made available under the
 * terms of the Apache License Version 2.0 which is available at
 * https://www.apache.org/licenses/LICENSE-2.0
 *
 * SPDX-License-Identifier: Apache-2.0
 ********************************************************************************/

//! Engine-to-bus event fan-out.

use crate::bus::publish_json;
use crate::context::ProxyContext;
use crate::engine::EngineEvent;
use crate::observability::events;
use crate::routing::dialog_fanout::dialogs_for_event;
use crate::wire::{subject, RawEvent};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

const COMPONENT: &str = "event_pump";

/// Drains the engine's all-events stream until cancellation. Dropping the
/// stream handle on exit cancels the engine-side subscription.
pub(crate) async fn run_event_pump(cx: Arc<ProxyContext>, cancel: CancellationToken) {
    let mut stream = cx.engine.subscribe_all();

    loop {
        tokio::select! {
            _ = cancel.cancelled() => return,
            next = stream.next() => {
                let Some(event) = next else {
                    info!(
                        event = events::EVENT_STREAM_CLOSED,
                        component = COMPONENT,
                        "engine event stream closed; stopping pump"
                    );
                    return;
                };
                pump_one(&cx, &event).await;
            }
        }
    }
}

/// Publishes one engine event: once on the canonical subject, then once per
/// interested dialog. Conversion and publish failures are logged and never
/// halt the pump; there is no caller to surface them to.
pub(crate) async fn pump_one(cx: &ProxyContext, engine_event: &EngineEvent) {
    let Some(mut raw) = RawEvent::from_parts(&engine_event.kind, &engine_event.payload) else {
        error!(
            event = events::EVENT_CONVERT_FAILED,
            component = COMPONENT,
            kind = engine_event.kind.as_str(),
            "failed to convert engine event; dropping"
        );
        return;
    };
    raw.header.set("application", cx.application.as_str());
    raw.header.set("asterisk", cx.node.as_str());

    // Canonical publish strictly precedes every dialog-scoped publish.
    let canonical = cx.event_subject();
    if let Err(err) = publish_json(cx.bus.as_ref(), &canonical, &raw).await {
        error!(
            event = events::EVENT_PUBLISH_FAILED,
            component = COMPONENT,
            subject = canonical.as_str(),
            kind = raw.kind.as_str(),
            err = %err,
            "failed to publish event"
        );
    }

    for dialog_id in dialogs_for_event(cx.dialog.as_ref(), engine_event) {
        let mut scoped = raw.clone();
        scoped.header.set("dialog", dialog_id.as_str());
        let target = subject::dialog_event(&cx.subject_prefix, &dialog_id);
        if let Err(err) = publish_json(cx.bus.as_ref(), &target, &scoped).await {
            error!(
                event = events::DIALOG_EVENT_PUBLISH_FAILED,
                component = COMPONENT,
                subject = target.as_str(),
                kind = scoped.kind.as_str(),
                err = %err,
                "failed to publish dialog-scoped event"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::pump_one;
    use crate::bus::{BusConnection, BusError, BusSubscriber};
    use crate::context::ProxyContext;
    use crate::engine::{
        ApplicationOps, AsteriskOps, BridgeOps, ChannelOps, ConfigOps, DeviceStateOps,
        EndpointOps, EngineClient, EngineEvent, EngineEvents, LiveRecordingOps, LoggingOps,
        MailboxOps, ModulesOps, PlaybackOps, SoundOps, StoredRecordingOps,
    };
    use crate::wire::{RawEvent, ResourceKey};
    use async_trait::async_trait;
    use dialog_registry::{DialogManager, MemoryDialogRegistry};
    use serde_json::json;
    use std::sync::{Arc, Mutex};
    use tokio::sync::mpsc;

    struct NoopEngine;

    impl EngineClient for NoopEngine {
        fn application_name(&self) -> String {
            "demo".to_string()
        }

        fn subscribe_all(&self) -> EngineEvents {
            let (_tx, rx) = mpsc::channel(1);
            EngineEvents::new(rx)
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

    impl ApplicationOps for NoopEngine {}
    impl AsteriskOps for NoopEngine {}
    impl ConfigOps for NoopEngine {}
    impl LoggingOps for NoopEngine {}
    impl ModulesOps for NoopEngine {}
    impl BridgeOps for NoopEngine {}
    impl ChannelOps for NoopEngine {}
    impl DeviceStateOps for NoopEngine {}
    impl EndpointOps for NoopEngine {}
    impl MailboxOps for NoopEngine {}
    impl PlaybackOps for NoopEngine {}
    impl LiveRecordingOps for NoopEngine {}
    impl StoredRecordingOps for NoopEngine {}
    impl SoundOps for NoopEngine {}

    #[derive(Default)]
    struct RecordingBus {
        published: Mutex<Vec<(String, Vec<u8>)>>,
    }

    impl RecordingBus {
        fn subjects(&self) -> Vec<String> {
            self.published
                .lock()
                .expect("publish log lock")
                .iter()
                .map(|(subject, _)| subject.clone())
                .collect()
        }

        fn decoded(&self, index: usize) -> RawEvent {
            let published = self.published.lock().expect("publish log lock");
            serde_json::from_slice(&published[index].1).expect("published event should decode")
        }
    }

    #[async_trait]
    impl BusConnection for RecordingBus {
        async fn publish(&self, subject: &str, payload: Vec<u8>) -> Result<(), BusError> {
            self.published
                .lock()
                .expect("publish log lock")
                .push((subject.to_string(), payload));
            Ok(())
        }

        async fn subscribe(&self, _subject: &str) -> Result<Box<dyn BusSubscriber>, BusError> {
            Err(BusError::Subscribe("not used in pump tests".to_string()))
        }

        async fn queue_subscribe(
            &self,
            _subject: &str,
            _queue_group: &str,
        ) -> Result<Box<dyn BusSubscriber>, BusError> {
            Err(BusError::Subscribe("not used in pump tests".to_string()))
        }
    }

    fn context(bus: Arc<RecordingBus>, dialog: Arc<dyn DialogManager>) -> ProxyContext {
        ProxyContext {
            application: "demo".to_string(),
            node: "node-A".to_string(),
            subject_prefix: "ari.".to_string(),
            engine: Arc::new(NoopEngine),
            bus,
            dialog,
        }
    }

    #[tokio::test]
    async fn canonical_publish_precedes_dialog_fanout() {
        let bus = Arc::new(RecordingBus::default());
        let registry = Arc::new(MemoryDialogRegistry::new());
        registry.bind("d1", "ch-1");
        let cx = context(bus.clone(), registry);

        let event = EngineEvent::new("StasisStart", json!({"channel": {"id": "ch-1"}}))
            .with_key(ResourceKey::typed("channel", "ch-1"));
        pump_one(&cx, &event).await;

        assert_eq!(
            bus.subjects(),
            vec![
                "ari.event.demo.node-A".to_string(),
                "ari.dialogevent.d1".to_string(),
            ]
        );

        let canonical = bus.decoded(0);
        assert_eq!(canonical.header.get("application"), Some("demo"));
        assert_eq!(canonical.header.get("asterisk"), Some("node-A"));
        assert_eq!(canonical.header.get("dialog"), None);

        let scoped = bus.decoded(1);
        assert_eq!(scoped.header.get("dialog"), Some("d1"));
        assert_eq!(scoped.kind, "StasisStart");
    }

    #[tokio::test]
    async fn unbound_event_only_publishes_canonically() {
        let bus = Arc::new(RecordingBus::default());
        let cx = context(bus.clone(), Arc::new(MemoryDialogRegistry::new()));

        let event = EngineEvent::new("ChannelDestroyed", json!({"channel": {"id": "ch-9"}}))
            .with_key(ResourceKey::typed("channel", "ch-9"));
        pump_one(&cx, &event).await;

        assert_eq!(bus.subjects(), vec!["ari.event.demo.node-A".to_string()]);
    }

    #[tokio::test]
    async fn dialog_bound_twice_receives_one_copy() {
        let bus = Arc::new(RecordingBus::default());
        let registry = Arc::new(MemoryDialogRegistry::new());
        registry.bind("d1", "ch-1");
        registry.bind("d1", "br-1");
        let cx = context(bus.clone(), registry);

        let event = EngineEvent::new("ChannelEnteredBridge", json!({}))
            .with_key(ResourceKey::typed("channel", "ch-1"))
            .with_key(ResourceKey::typed("bridge", "br-1"));
        pump_one(&cx, &event).await;

        assert_eq!(
            bus.subjects(),
            vec![
                "ari.event.demo.node-A".to_string(),
                "ari.dialogevent.d1".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn unconvertible_events_are_dropped() {
        let bus = Arc::new(RecordingBus::default());
        let cx = context(bus.clone(), Arc::new(MemoryDialogRegistry::new()));

        pump_one(&cx, &EngineEvent::new("Oddball", json!("not an object"))).await;

        assert!(bus.subjects().is_empty());
    }
}
