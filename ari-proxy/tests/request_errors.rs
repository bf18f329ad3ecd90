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

//! Reply contract: exactly one reply per request, with the distinguished
//! error kinds.

mod support;

use ari_proxy::bus::BusConnection;
use ari_proxy::wire::{ErrorKind, Request, ResourceKey, Response};
use serde_json::json;
use std::time::Duration;

#[tokio::test(flavor = "multi_thread")]
async fn unknown_kinds_answer_not_implemented_without_engine_calls() {
    let proxy = support::start_proxy("demo", "node-A").await;
    let boot_calls = proxy.engine.call_count();

    let reply: Response = proxy
        .bus
        .request_json("ari.get.demo.node-A", &Request::new("Nonsense"))
        .await
        .expect("unknown kinds still get a reply");

    assert_eq!(reply.error_kind(), Some(ErrorKind::NotImplemented));
    assert!(reply
        .error_message()
        .expect("error message should be present")
        .contains("Not implemented"));
    assert_eq!(
        proxy.engine.call_count(),
        boot_calls,
        "an unknown kind must not reach the engine"
    );

    proxy.cancel.cancel();
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_resources_answer_the_reserved_not_found_kind() {
    let proxy = support::start_proxy("demo", "node-A").await;

    let request = Request::new("ChannelData").with_key(ResourceKey::typed("channel", "missing"));
    let reply: Response = proxy
        .bus
        .request_json("ari.get.demo.node-A", &request)
        .await
        .expect("a reply should arrive");

    assert_eq!(reply.error_kind(), Some(ErrorKind::NotFound));

    proxy.cancel.cancel();
}

#[tokio::test(flavor = "multi_thread")]
async fn data_replies_embed_ownership_metadata() {
    let proxy = support::start_proxy("demo", "node-A").await;
    proxy
        .engine
        .insert_channel("ch-1", json!({"id": "ch-1", "state": "Up"}));

    let request = Request::new("ChannelData").with_key(ResourceKey::typed("channel", "ch-1"));
    let reply: Response = proxy
        .bus
        .request_json("ari.get.demo.node-A", &request)
        .await
        .expect("a reply should arrive");

    let encoded = serde_json::to_value(&reply).expect("reply should encode");
    assert_eq!(encoded["type"], "data");
    assert_eq!(encoded["data"]["state"], "Up");
    assert_eq!(encoded["metadata"]["application"], "demo");
    assert_eq!(encoded["metadata"]["node"], "node-A");

    proxy.cancel.cancel();
}

#[tokio::test(flavor = "multi_thread")]
async fn repeated_requests_get_independent_replies() {
    let proxy = support::start_proxy("demo", "node-A").await;

    let request = Request::new("ChannelAnswer").with_key(ResourceKey::typed("channel", "ch-1"));
    for _ in 0..2 {
        let reply: Response = proxy
            .bus
            .request_json("ari.command.demo.node-A", &request)
            .await
            .expect("every dispatch publishes its own reply");
        assert!(!reply.is_error());
    }

    assert_eq!(
        proxy
            .engine
            .calls()
            .iter()
            .filter(|call| call.as_str() == "channel.answer ch-1")
            .count(),
        2
    );

    proxy.cancel.cancel();
}

#[tokio::test(flavor = "multi_thread")]
async fn malformed_requests_are_answered_with_an_error() {
    let proxy = support::start_proxy("demo", "node-A").await;

    let mut replies = BusConnection::subscribe(proxy.bus.as_ref(), "_inbox.malformed")
        .await
        .expect("inbox subscription should establish");
    proxy
        .bus
        .publish_request(
            "ari.get.demo.node-A",
            "_inbox.malformed",
            b"not json".to_vec(),
        )
        .await
        .expect("publish should succeed");

    let message = tokio::time::timeout(Duration::from_secs(1), replies.next())
        .await
        .expect("an error reply should arrive")
        .expect("inbox subscription should stay open");
    let reply: Response =
        serde_json::from_slice(&message.payload).expect("error reply should decode");
    assert_eq!(reply.error_kind(), Some(ErrorKind::Error));

    proxy.cancel.cancel();
}

#[tokio::test(flavor = "multi_thread")]
async fn playback_stop_routes_through_the_control_translator() {
    let proxy = support::start_proxy("demo", "node-A").await;

    let request = Request::new("PlaybackStop")
        .with_key(ResourceKey::typed("playback", "pb-1"))
        .with_payload(json!({"operation": "stop"}));
    let reply: Response = proxy
        .bus
        .request_json("ari.command.demo.node-A", &request)
        .await
        .expect("a reply should arrive");

    assert!(!reply.is_error());
    assert!(proxy
        .engine
        .calls()
        .contains(&"playback.control pb-1 stop".to_string()));

    proxy.cancel.cancel();
}
