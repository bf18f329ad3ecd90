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

//! Shared doubles for `ari-proxy` tests: an in-memory bus with queue-group
//! semantics and delivery accounting, and a scriptable engine client.

mod memory_bus;
pub use memory_bus::{ConnectableBus, FailingBusConnector, MemoryBus};

mod mock_engine;
pub use mock_engine::{ConnectableEngine, FailingEngineConnector, MockEngine};

/// One-time tracing initialization for test binaries. Safe to call from
/// every test; only the first call installs the subscriber.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt::try_init();
}
