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

//! Broadcast versus queue-group delivery across two peers of the same
//! application running on different nodes.

mod support;

use ari_proxy::wire::{Request, ResourceKey, Response};
use ari_proxy::{Config, Server};
use proxy_test_utils::{MemoryBus, MockEngine};
use std::sync::Arc;
use std::time::Duration;

fn count_calls(engine: &MockEngine, prefix: &str) -> usize {
    engine
        .calls()
        .iter()
        .filter(|call| call.starts_with(prefix))
        .count()
}

async fn wait_until<F: Fn() -> bool>(deadline: Duration, condition: F) -> bool {
    let started = tokio::time::Instant::now();
    while started.elapsed() < deadline {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    condition()
}

#[tokio::test(flavor = "multi_thread")]
async fn create_requests_elect_exactly_one_peer() {
    let bus = Arc::new(MemoryBus::new());
    let peer_a =
        support::start_proxy_on(Server::new(Config::default()), bus.clone(), "demo", "node-A")
            .await;
    let peer_b =
        support::start_proxy_on(Server::new(Config::default()), bus.clone(), "demo", "node-B")
            .await;

    let request = Request::new("BridgeCreate").with_key(ResourceKey::typed("bridge", "br-1"));
    let reply: Response = bus
        .request_json("ari.create.demo.", &request)
        .await
        .expect("one peer should reply to the create request");
    assert!(!reply.is_error());

    let handled =
        count_calls(&peer_a.engine, "bridge.create") + count_calls(&peer_b.engine, "bridge.create");
    assert_eq!(handled, 1, "exactly one peer must service a create");

    peer_a.cancel.cancel();
    peer_b.cancel.cancel();
}

#[tokio::test(flavor = "multi_thread")]
async fn read_requests_reach_every_peer_in_scope() {
    let bus = Arc::new(MemoryBus::new());
    let peer_a =
        support::start_proxy_on(Server::new(Config::default()), bus.clone(), "demo", "node-A")
            .await;
    let peer_b =
        support::start_proxy_on(Server::new(Config::default()), bus.clone(), "demo", "node-B")
            .await;

    let reply: Response = bus
        .request_json("ari.get.demo.", &Request::new("ChannelList"))
        .await
        .expect("at least one peer should reply to the broadcast request");
    assert!(!reply.is_error());

    let both_handled = wait_until(Duration::from_secs(1), || {
        count_calls(&peer_a.engine, "channel.list") == 1
            && count_calls(&peer_b.engine, "channel.list") == 1
    })
    .await;
    assert!(both_handled, "both peers must service a broadcast read");

    peer_a.cancel.cancel();
    peer_b.cancel.cancel();
}

#[tokio::test(flavor = "multi_thread")]
async fn node_scoped_requests_stay_on_their_node() {
    let bus = Arc::new(MemoryBus::new());
    let peer_a =
        support::start_proxy_on(Server::new(Config::default()), bus.clone(), "demo", "node-A")
            .await;
    let peer_b =
        support::start_proxy_on(Server::new(Config::default()), bus.clone(), "demo", "node-B")
            .await;

    let reply: Response = bus
        .request_json("ari.get.demo.node-B", &Request::new("ChannelList"))
        .await
        .expect("the addressed peer should reply");
    assert!(!reply.is_error());

    let b_handled = wait_until(Duration::from_secs(1), || {
        count_calls(&peer_b.engine, "channel.list") == 1
    })
    .await;
    assert!(b_handled);
    assert_eq!(count_calls(&peer_a.engine, "channel.list"), 0);

    peer_a.cancel.cancel();
    peer_b.cancel.cancel();
}
