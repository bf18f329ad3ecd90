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

//! Telephony-engine seam.
//!
//! [`EngineClient`] is the surface the proxy consumes from the engine SDK:
//! the application name, a firehose event subscription, and one accessor
//! per resource family. The family traits in [`ops`] carry the closed verb
//! set the dispatcher translates into; a concrete SDK binding implements
//! them outside this crate.

pub mod event;
pub mod ops;

pub use event::{EngineEvent, EngineEvents};
pub use ops::{
    ApplicationOps, AsteriskOps, BridgeOps, ChannelOps, ConfigOps, DeviceStateOps, EndpointOps,
    LiveRecordingOps, LoggingOps, MailboxOps, ModulesOps, PlaybackOps, SoundOps,
    StoredRecordingOps,
};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// The addressed resource does not exist. Translated to the reserved
    /// `not_found` reply kind.
    #[error("resource not found")]
    NotFound,
    /// The client binding does not implement this operation.
    #[error("operation not supported by this engine client")]
    Unsupported,
    #[error("engine call failed: {0}")]
    Failure(String),
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct SystemInfo {
    /// Unique identifier of the engine instance; the proxy's node id.
    pub entity_id: String,
    #[serde(default)]
    pub version: String,
}

/// Answer to the boot-time identity query.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct AsteriskInfo {
    pub system_info: SystemInfo,
}

/// A connected engine client. Safe for concurrent calls after boot.
pub trait EngineClient: Send + Sync {
    /// Name of the engine application this client is registered under.
    fn application_name(&self) -> String;

    /// Subscribes to every event the engine emits. Dropping the returned
    /// handle cancels the subscription.
    fn subscribe_all(&self) -> EngineEvents;

    fn application(&self) -> &dyn ApplicationOps;
    fn asterisk(&self) -> &dyn AsteriskOps;
    fn asterisk_config(&self) -> &dyn ConfigOps;
    fn asterisk_logging(&self) -> &dyn LoggingOps;
    fn asterisk_modules(&self) -> &dyn ModulesOps;
    fn bridge(&self) -> &dyn BridgeOps;
    fn channel(&self) -> &dyn ChannelOps;
    fn device_state(&self) -> &dyn DeviceStateOps;
    fn endpoint(&self) -> &dyn EndpointOps;
    fn mailbox(&self) -> &dyn MailboxOps;
    fn playback(&self) -> &dyn PlaybackOps;
    fn recording_live(&self) -> &dyn LiveRecordingOps;
    fn recording_stored(&self) -> &dyn StoredRecordingOps;
    fn sound(&self) -> &dyn SoundOps;
}

/// Boot-time connection establishment for the engine side.
#[async_trait]
pub trait EngineConnector: Send + Sync {
    async fn connect(&self) -> Result<Arc<dyn EngineClient>, EngineError>;
}
