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

//! Message-bus seam.
//!
//! The proxy is written against these traits rather than a concrete bus
//! client. A conforming transport provides plain publish, per-subject
//! subscribe, and queue-group subscribe (exactly one member of a group
//! receives each matching message). Request/reply rides on the `reply`
//! subject carried by [`BusMessage`].

use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BusError {
    #[error("bus connection failed: {0}")]
    Connect(String),
    #[error("subscribe failed: {0}")]
    Subscribe(String),
    #[error("publish failed: {0}")]
    Publish(String),
    #[error("bus connection closed")]
    Closed,
}

/// One delivered bus message.
#[derive(Clone, Debug)]
pub struct BusMessage {
    pub subject: String,
    /// Reply subject for request/reply exchanges, when the caller expects
    /// an answer.
    pub reply: Option<String>,
    pub payload: Vec<u8>,
}

/// An established connection, safe for concurrent publishing from many
/// tasks.
#[async_trait]
pub trait BusConnection: Send + Sync {
    async fn publish(&self, subject: &str, payload: Vec<u8>) -> Result<(), BusError>;

    async fn subscribe(&self, subject: &str) -> Result<Box<dyn BusSubscriber>, BusError>;

    async fn queue_subscribe(
        &self,
        subject: &str,
        queue_group: &str,
    ) -> Result<Box<dyn BusSubscriber>, BusError>;
}

/// A live subscription. Dropping it without calling
/// [`unsubscribe`](BusSubscriber::unsubscribe) leaks the registration on
/// the bus side; the server always deregisters explicitly on shutdown.
#[async_trait]
pub trait BusSubscriber: Send {
    fn subject(&self) -> &str;

    /// Next message, or `None` once the connection is gone.
    async fn next(&mut self) -> Option<BusMessage>;

    async fn unsubscribe(self: Box<Self>) -> Result<(), BusError>;
}

/// Boot-time connection establishment, kept behind a trait so the concrete
/// bus client stays outside this crate.
#[async_trait]
pub trait BusConnector: Send + Sync {
    async fn connect(&self) -> Result<Arc<dyn BusConnection>, BusError>;
}

/// Publishes a JSON-encoded value.
pub(crate) async fn publish_json<T: Serialize>(
    bus: &dyn BusConnection,
    subject: &str,
    value: &T,
) -> Result<(), BusError> {
    let payload =
        serde_json::to_vec(value).map_err(|err| BusError::Publish(format!("encode: {err}")))?;
    bus.publish(subject, payload).await
}
