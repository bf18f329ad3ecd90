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

//! Server supervisor.
//!
//! [`Server::listen`] owns the whole run: connect both transports, learn
//! the engine's identity, establish every bus subscription, start the
//! announcer and the event pump, signal readiness, then block until the
//! caller cancels. Teardown is accounted for by a close group: every
//! subscription listener holds a permit until its deregistration has run,
//! and the supervisor refuses to return before all permits are released.
//! When that takes longer than the configured budget, the process aborts.

use crate::bus::{BusConnection, BusConnector, BusError, BusMessage, BusSubscriber};
use crate::config::Config;
use crate::context::ProxyContext;
use crate::control_plane::announcer::{announce_on_ping, run_announcer};
use crate::control_plane::close_group::{CloseGroup, ClosePermit};
use crate::data_plane::dispatcher::spawn_dispatch;
use crate::data_plane::event_pump::run_event_pump;
use crate::engine::{EngineClient, EngineConnector, EngineError};
use crate::observability::events;
use crate::wire::subject::{self, Verb};
use dialog_registry::{DialogManager, MemoryDialogRegistry};
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tokio::sync::watch;
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

const COMPONENT: &str = "server";

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to connect to engine: {0}")]
    EngineConnect(#[source] EngineError),
    #[error("failed to connect to bus: {0}")]
    BusConnect(#[source] BusError),
    #[error("failed to query engine identity: {0}")]
    Identity(#[source] EngineError),
    #[error("engine reported an empty entity id")]
    EmptyEntityId,
    #[error("failed to subscribe on {subject}: {source}")]
    Subscribe {
        subject: String,
        #[source]
        source: BusError,
    },
    /// Clean shutdown: the run context was cancelled.
    #[error("listener context canceled")]
    Canceled,
}

/// The engine-facing proxy server. One instance serves one engine
/// application.
pub struct Server {
    config: Config,
    dialog: Arc<dyn DialogManager>,
    ready_tx: watch::Sender<bool>,
    ready_rx: watch::Receiver<bool>,
    cancel: Mutex<Option<CancellationToken>>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        let (ready_tx, ready_rx) = watch::channel(false);
        Self {
            config,
            dialog: Arc::new(MemoryDialogRegistry::new()),
            ready_tx,
            ready_rx,
            cancel: Mutex::new(None),
        }
    }

    /// Substitutes the dialog manager, e.g. for a shared store.
    pub fn with_dialog_manager(mut self, dialog: Arc<dyn DialogManager>) -> Self {
        self.dialog = dialog;
        self
    }

    /// Resolves once the server is operational: every subscription exists
    /// and requests published from this point on will be received. The
    /// signal fires exactly once per server and stays set.
    pub async fn ready(&self) {
        let mut ready = self.ready_rx.clone();
        loop {
            if *ready.borrow_and_update() {
                return;
            }
            if ready.changed().await.is_err() {
                return;
            }
        }
    }

    /// Cancels the current run, if one is active.
    pub fn close(&self) {
        if let Ok(slot) = self.cancel.lock() {
            if let Some(token) = slot.as_ref() {
                token.cancel();
            }
        }
    }

    /// Connects both transports, then runs the proxy until `cancel` fires.
    ///
    /// Returns [`ServerError::Canceled`] on clean shutdown, a wrapped
    /// connect error when either transport fails, or a wrapped subscribe
    /// error when boot cannot establish a subscription. Panics when
    /// shutdown exceeds the configured budget; leaked bus subscriptions
    /// are not an acceptable exit state.
    pub async fn listen(
        &self,
        cancel: CancellationToken,
        engine: &dyn EngineConnector,
        bus: &dyn BusConnector,
    ) -> Result<(), ServerError> {
        let engine = engine.connect().await.map_err(ServerError::EngineConnect)?;
        let bus = bus.connect().await.map_err(ServerError::BusConnect)?;
        self.listen_on(cancel, engine, bus).await
    }

    /// Runs the proxy over pre-established connections. Intended for tests.
    pub async fn listen_on(
        &self,
        cancel: CancellationToken,
        engine: Arc<dyn EngineClient>,
        bus: Arc<dyn BusConnection>,
    ) -> Result<(), ServerError> {
        let run_cancel = cancel.child_token();
        if let Ok(mut slot) = self.cancel.lock() {
            *slot = Some(run_cancel.clone());
        }

        let close_group = CloseGroup::new();
        let result = self.run(&run_cancel, engine, bus, &close_group).await;

        // Boot failure and clean shutdown drain the same way, so no
        // partial state survives either path.
        run_cancel.cancel();
        if timeout(self.config.shutdown_timeout(), close_group.done())
            .await
            .is_err()
        {
            panic!("timed out waiting for proxy subscriptions to shut down");
        }
        result
    }

    async fn run(
        &self,
        cancel: &CancellationToken,
        engine: Arc<dyn EngineClient>,
        bus: Arc<dyn BusConnection>,
        close_group: &CloseGroup,
    ) -> Result<(), ServerError> {
        let info = engine
            .asterisk()
            .info()
            .await
            .map_err(ServerError::Identity)?;
        let node = info.system_info.entity_id;
        if node.is_empty() {
            return Err(ServerError::EmptyEntityId);
        }
        let application = engine.application_name();

        let cx = Arc::new(ProxyContext {
            application,
            node,
            subject_prefix: self.config.subject_prefix.clone(),
            engine,
            bus: bus.clone(),
            dialog: self.dialog.clone(),
        });

        // Directed pings get an immediate announcement.
        let ping_subject = subject::ping(&cx.subject_prefix);
        let ping_sub = bus
            .subscribe(&ping_subject)
            .await
            .map_err(|source| subscribe_error(&ping_subject, source))?;
        spawn_subscription_listener(cancel.clone(), close_group.permit(), ping_sub, {
            let cx = cx.clone();
            move |_message| {
                let cx = cx.clone();
                tokio::spawn(async move { announce_on_ping(&cx).await });
            }
        });

        // Read and command verbs are broadcast at all three scopes.
        for verb in Verb::BROADCAST {
            for target in subject::scope_triple(&cx.subject_prefix, verb, &cx.application, &cx.node)
            {
                let sub = bus
                    .subscribe(&target)
                    .await
                    .map_err(|source| subscribe_error(&target, source))?;
                spawn_request_listener(cancel, close_group, &cx, sub);
            }
        }

        // Creates elect a single handler per application cluster.
        for target in
            subject::scope_triple(&cx.subject_prefix, Verb::Create, &cx.application, &cx.node)
        {
            let sub = bus
                .queue_subscribe(&target, &self.config.create_queue_group)
                .await
                .map_err(|source| subscribe_error(&target, source))?;
            spawn_request_listener(cancel, close_group, &cx, sub);
        }

        tokio::spawn(run_announcer(
            cx.clone(),
            cancel.clone(),
            self.config.announce_interval(),
        ));
        tokio::spawn(run_event_pump(cx.clone(), cancel.clone()));

        self.ready_tx.send_replace(true);
        info!(
            event = events::SERVER_READY,
            component = COMPONENT,
            application = cx.application.as_str(),
            node = cx.node.as_str(),
            "proxy is operational"
        );

        cancel.cancelled().await;
        Err(ServerError::Canceled)
    }
}

fn subscribe_error(subject: &str, source: BusError) -> ServerError {
    ServerError::Subscribe {
        subject: subject.to_string(),
        source,
    }
}

fn spawn_request_listener(
    cancel: &CancellationToken,
    close_group: &CloseGroup,
    cx: &Arc<ProxyContext>,
    subscription: Box<dyn BusSubscriber>,
) {
    let dispatch_cx = cx.clone();
    let dispatch_cancel = cancel.clone();
    spawn_subscription_listener(
        cancel.clone(),
        close_group.permit(),
        subscription,
        move |message| spawn_dispatch(&dispatch_cx, &dispatch_cancel, message),
    );
}

/// Drives one subscription until cancellation, then deregisters it. The
/// permit is released only after the unsubscribe attempt, which is what the
/// supervisor's bounded shutdown wait observes.
fn spawn_subscription_listener<F>(
    cancel: CancellationToken,
    permit: ClosePermit,
    mut subscription: Box<dyn BusSubscriber>,
    mut on_message: F,
) where
    F: FnMut(BusMessage) + Send + 'static,
{
    tokio::spawn(async move {
        debug!(
            event = events::SUBSCRIPTION_LISTEN_START,
            component = COMPONENT,
            subject = subscription.subject(),
            "listening"
        );

        loop {
            tokio::select! {
                _ = cancel.cancelled() => break,
                next = subscription.next() => {
                    match next {
                        Some(message) => on_message(message),
                        None => break,
                    }
                }
            }
        }

        let subject = subscription.subject().to_string();
        if let Err(err) = subscription.unsubscribe().await {
            warn!(
                event = events::UNSUBSCRIBE_FAILED,
                component = COMPONENT,
                subject = subject.as_str(),
                err = %err,
                "failed to deregister subscription"
            );
        }
        debug!(
            event = events::SUBSCRIPTION_CLOSED,
            component = COMPONENT,
            subject = subject.as_str(),
            "subscription closed"
        );
        drop(permit);
    });
}
