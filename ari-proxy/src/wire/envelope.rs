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

//! JSON envelopes exchanged over the bus.
//!
//! A [`Request`] arrives on one of the RPC subjects, names an operation
//! through its `kind` discriminator, and optionally addresses a concrete
//! engine resource through a [`ResourceKey`]. Exactly one [`Response`] goes
//! back on the caller-supplied reply subject. [`Announcement`]s are the
//! discovery records; [`Metadata`] rides inside replies that expose a
//! concrete resource so callers learn which proxy owns it.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An RPC request envelope. The payload is opaque at this layer; each
/// handler decodes the fields its operation needs.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Request {
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<ResourceKey>,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub payload: Value,
}

impl Request {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            key: None,
            payload: Value::Null,
        }
    }

    pub fn with_key(mut self, key: ResourceKey) -> Self {
        self.key = Some(key);
        self
    }

    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = payload;
        self
    }
}

/// Addresses a single engine resource.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ResourceKey {
    /// Resource type, e.g. `channel` or `bridge`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialog: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application: Option<String>,
}

impl ResourceKey {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn typed(kind: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_dialog(mut self, dialog_id: impl Into<String>) -> Self {
        self.dialog = Some(dialog_id.into());
        self
    }
}

/// Distinguished error classes a reply can carry.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    NotFound,
    NotImplemented,
    Error,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ErrorInfo {
    pub kind: ErrorKind,
    pub message: String,
}

/// An RPC reply envelope, discriminated by its `type` field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Response {
    Data {
        #[serde(default, skip_serializing_if = "Value::is_null")]
        data: Value,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        metadata: Option<Metadata>,
    },
    Error { error: ErrorInfo },
}

impl Response {
    /// An acknowledgement carrying no data.
    pub fn ok() -> Self {
        Response::Data {
            data: Value::Null,
            metadata: None,
        }
    }

    pub fn data(data: Value) -> Self {
        Response::Data {
            data,
            metadata: None,
        }
    }

    pub fn data_with_metadata(data: Value, metadata: Metadata) -> Self {
        Response::Data {
            data,
            metadata: Some(metadata),
        }
    }

    pub fn error(kind: ErrorKind, message: impl Into<String>) -> Self {
        Response::Error {
            error: ErrorInfo {
                kind,
                message: message.into(),
            },
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Response::Error { .. })
    }

    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            Response::Error { error } => Some(error.kind),
            Response::Data { .. } => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Response::Error { error } => Some(&error.message),
            Response::Data { .. } => None,
        }
    }
}

/// Periodic discovery record advertising one proxy to its peers.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Announcement {
    pub node: String,
    pub application: String,
}

/// Ownership coordinates embedded in replies that expose a concrete
/// resource.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub application: String,
    pub node: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialog: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::{ErrorKind, Metadata, Request, ResourceKey, Response};
    use serde_json::{json, Value};

    #[test]
    fn request_decodes_with_unknown_payload_fields() {
        let raw = json!({
            "kind": "ChannelPlay",
            "key": {"kind": "channel", "id": "ch-1"},
            "payload": {"playback_id": "pb-1", "media_uri": "sound:hello", "extra": true},
            "trailer": "ignored",
        });

        let request: Request = serde_json::from_value(raw).expect("request should decode");

        assert_eq!(request.kind, "ChannelPlay");
        assert_eq!(
            request.key,
            Some(ResourceKey::typed("channel", "ch-1")),
        );
        assert_eq!(request.payload["playback_id"], "pb-1");
    }

    #[test]
    fn response_tagging_round_trips() {
        let reply = Response::data_with_metadata(
            json!({"state": "Up"}),
            Metadata {
                application: "demo".to_string(),
                node: "node-A".to_string(),
                dialog: None,
            },
        );

        let encoded = serde_json::to_value(&reply).expect("response should encode");
        assert_eq!(encoded["type"], "data");
        assert_eq!(encoded["data"]["state"], "Up");
        assert_eq!(encoded["metadata"]["node"], "node-A");
        assert_eq!(encoded["metadata"].get("dialog"), None);

        let decoded: Response = serde_json::from_value(encoded).expect("response should decode");
        assert_eq!(decoded, reply);
    }

    #[test]
    fn plain_ack_omits_data_and_metadata() {
        let encoded = serde_json::to_value(Response::ok()).expect("ack should encode");

        assert_eq!(encoded, json!({"type": "data"}));
    }

    #[test]
    fn error_kinds_serialize_as_snake_case() {
        let encoded = serde_json::to_value(Response::error(ErrorKind::NotFound, "no such channel"))
            .expect("error should encode");

        assert_eq!(encoded["type"], "error");
        assert_eq!(encoded["error"]["kind"], "not_found");
        assert_eq!(encoded["error"]["message"], "no such channel");
    }

    #[test]
    fn error_accessors_distinguish_the_reserved_kind() {
        let not_found = Response::error(ErrorKind::NotFound, "gone");
        let failure = Response::error(ErrorKind::Error, "engine exploded");

        assert_eq!(not_found.error_kind(), Some(ErrorKind::NotFound));
        assert_eq!(failure.error_kind(), Some(ErrorKind::Error));
        assert_eq!(Response::ok().error_kind(), None);
        assert!(Response::ok().error_message().is_none());
    }

    #[test]
    fn resource_key_omits_absent_fields() {
        let encoded = serde_json::to_value(ResourceKey::new("ch-1")).expect("key should encode");

        assert_eq!(encoded, json!({"id": "ch-1"}));
        assert_eq!(
            serde_json::to_value(ResourceKey::new("ch-1").with_dialog("d1"))
                .expect("key should encode"),
            json!({"id": "ch-1", "dialog": "d1"})
        );
    }

    #[test]
    fn null_payload_is_skipped_on_encode() {
        let encoded =
            serde_json::to_value(Request::new("ChannelList")).expect("request should encode");

        assert_eq!(encoded, json!({"kind": "ChannelList"}));
        assert_eq!(Request::new("ChannelList").payload, Value::Null);
    }
}
