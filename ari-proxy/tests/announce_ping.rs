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

//! Discovery: periodic announcements plus ping-triggered refreshes.

mod support;

use ari_proxy::bus::BusConnection;
use ari_proxy::wire::Announcement;
use ari_proxy::{Config, Server};
use proxy_test_utils::MemoryBus;
use std::sync::Arc;
use std::time::Duration;

#[tokio::test(flavor = "multi_thread")]
async fn ping_triggers_an_immediate_announcement() {
    // Interval far beyond the test horizon: any announcement is
    // ping-driven.
    let config = Config {
        announce_interval_ms: 30_000,
        ..Config::default()
    };
    let bus = Arc::new(MemoryBus::new());
    let proxy = support::start_proxy_on(Server::new(config), bus.clone(), "demo", "node-A").await;

    let mut announcements = BusConnection::subscribe(bus.as_ref(), "ari.announce")
        .await
        .expect("announce subscription should establish");
    bus.publish("ari.ping", Vec::new())
        .await
        .expect("ping publish should succeed");

    let message = tokio::time::timeout(Duration::from_millis(100), announcements.next())
        .await
        .expect("an announcement should arrive promptly after a ping")
        .expect("announce subscription should stay open");
    let announcement: Announcement =
        serde_json::from_slice(&message.payload).expect("announcement should decode");
    assert_eq!(
        announcement,
        Announcement {
            node: "node-A".to_string(),
            application: "demo".to_string(),
        }
    );

    proxy.cancel.cancel();
}

#[tokio::test(flavor = "multi_thread")]
async fn the_ticker_announces_every_interval() {
    let config = Config {
        announce_interval_ms: 50,
        ..Config::default()
    };
    let bus = Arc::new(MemoryBus::new());
    let proxy = support::start_proxy_on(Server::new(config), bus.clone(), "demo", "node-A").await;

    let mut announcements = BusConnection::subscribe(bus.as_ref(), "ari.announce")
        .await
        .expect("announce subscription should establish");

    for _ in 0..2 {
        tokio::time::timeout(Duration::from_secs(1), announcements.next())
            .await
            .expect("a periodic announcement should arrive")
            .expect("announce subscription should stay open");
    }

    proxy.cancel.cancel();
}
