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

//! # ari-proxy
//!
//! `ari-proxy` bridges a single telephony engine's ARI control surface onto
//! a publish/subscribe message bus, so that many remote consumers can share
//! one engine instance and discover a cluster of such proxies.
//!
//! One [`Server`] serves one engine application. It exposes a request/reply
//! RPC façade on a hierarchical subject space (read, data, command, and
//! create verbs at cluster, application, and node scope), fans every engine
//! event out to its canonical subject and to every subscribed dialog, and
//! periodically announces itself for discovery.
//!
//! The engine SDK and the bus client stay behind the [`engine`] and [`bus`]
//! trait seams; this crate contains the routing and multiplexing core only.
//!
//! ## Quick start
//!
//! ```
//! use std::sync::Arc;
//! use ari_proxy::bus::BusConnection;
//! use ari_proxy::engine::EngineClient;
//! use ari_proxy::{Config, Server, ServerError};
//! use proxy_test_utils::{MemoryBus, MockEngine};
//! use tokio_util::sync::CancellationToken;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let server = Arc::new(Server::new(Config::default()));
//! let cancel = CancellationToken::new();
//! let engine: Arc<dyn EngineClient> = Arc::new(MockEngine::new("demo", "node-A"));
//! let bus: Arc<dyn BusConnection> = Arc::new(MemoryBus::new());
//!
//! let run = {
//!     let server = server.clone();
//!     let cancel = cancel.clone();
//!     tokio::spawn(async move { server.listen_on(cancel, engine, bus).await })
//! };
//!
//! // Requests published after this point are guaranteed to be received.
//! server.ready().await;
//!
//! cancel.cancel();
//! let result = run.await.expect("server task should not panic");
//! assert!(matches!(result, Err(ServerError::Canceled)));
//! # });
//! ```
//!
//! ## Internal architecture map
//!
//! - Wire: subject topology and JSON envelopes, pure data
//! - Control plane: discovery announcer and shutdown accounting
//! - Data plane: request dispatcher, per-family handlers, event pump
//! - Routing: dialog resolution for event fan-out
//!
//! ## Observability model
//!
//! The crate emits `tracing` events with stable `event` names and a
//! `component` field, and never installs a global subscriber. Binaries and
//! tests own one-time subscriber initialization at process boundaries.

pub mod bus;
pub mod engine;
pub mod wire;

mod config;
pub use config::Config;

mod server;
pub use server::{Server, ServerError};

mod context;
mod control_plane;
mod data_plane;
mod observability;
mod routing;
