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

//! Request dispatch.
//!
//! Every message arriving on an RPC subject is handed to a fresh task, so a
//! slow engine call never blocks acceptance of further requests. The task
//! decodes the envelope, routes the `kind` discriminator through the closed
//! set below, and publishes exactly one reply on the caller's reply
//! subject.

use crate::bus::{publish_json, BusMessage};
use crate::context::ProxyContext;
use crate::data_plane::handlers::{self, HandlerError, HandlerResult};
use crate::observability::events;
use crate::wire::{ErrorKind, Request, Response};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, warn};

const COMPONENT: &str = "dispatcher";

/// Launches the dispatch of one bus message onto its own task.
pub(crate) fn spawn_dispatch(
    cx: &Arc<ProxyContext>,
    cancel: &CancellationToken,
    message: BusMessage,
) {
    let cx = cx.clone();
    let cancel = cancel.clone();
    tokio::spawn(dispatch(cx, cancel, message));
}

pub(crate) async fn dispatch(
    cx: Arc<ProxyContext>,
    cancel: CancellationToken,
    message: BusMessage,
) {
    let request: Request = match serde_json::from_slice(&message.payload) {
        Ok(request) => request,
        Err(err) => {
            warn!(
                event = events::REQUEST_DECODE_FAILED,
                component = COMPONENT,
                subject = message.subject.as_str(),
                err = %err,
                "dropping undecodable request"
            );
            if let Some(reply) = message.reply.as_deref() {
                send_reply(
                    &cx,
                    reply,
                    &Response::error(ErrorKind::Error, format!("malformed request: {err}")),
                )
                .await;
            }
            return;
        }
    };

    debug!(
        component = COMPONENT,
        subject = message.subject.as_str(),
        kind = request.kind.as_str(),
        "dispatching request"
    );

    // Shutdown aborts in-flight engine calls; the caller still gets a reply.
    let outcome = tokio::select! {
        _ = cancel.cancelled() => Err(HandlerError::Canceled),
        outcome = route(&cx, &request) => outcome,
    };

    if matches!(outcome, Err(HandlerError::NotImplemented(_))) {
        warn!(
            event = events::REQUEST_KIND_UNKNOWN,
            component = COMPONENT,
            kind = request.kind.as_str(),
            "request kind is not in the dispatch set"
        );
    }

    let response = match outcome {
        Ok(body) => body.into_response(),
        Err(err) => err.to_response(),
    };

    let Some(reply) = message.reply.as_deref() else {
        warn!(
            event = events::REPLY_SUBJECT_MISSING,
            component = COMPONENT,
            kind = request.kind.as_str(),
            "request carried no reply subject; reply discarded"
        );
        return;
    };
    send_reply(&cx, reply, &response).await;
}

async fn send_reply(cx: &ProxyContext, reply: &str, response: &Response) {
    if let Err(err) = publish_json(cx.bus.as_ref(), reply, response).await {
        error!(
            event = events::REPLY_PUBLISH_FAILED,
            component = COMPONENT,
            subject = reply,
            err = %err,
            "failed to publish reply"
        );
    }
}

/// The closed discriminator set, grouped by resource family. Anything else
/// answers `not_implemented` without touching the engine.
async fn route(cx: &ProxyContext, request: &Request) -> HandlerResult {
    match request.kind.as_str() {
        // application
        "ApplicationData" => handlers::application::data(cx, request).await,
        "ApplicationList" => handlers::application::list(cx, request).await,
        "ApplicationSubscribe" => handlers::application::subscribe(cx, request).await,
        "ApplicationUnsubscribe" => handlers::application::unsubscribe(cx, request).await,

        // asterisk
        "AsteriskInfo" => handlers::asterisk::info(cx, request).await,
        "AsteriskReloadModule" => handlers::asterisk::reload_module(cx, request).await,
        "AsteriskVariableGet" => handlers::asterisk::variable_get(cx, request).await,
        "AsteriskVariableSet" => handlers::asterisk::variable_set(cx, request).await,

        // asterisk config
        "AsteriskConfigData" => handlers::config::data(cx, request).await,
        "AsteriskConfigDelete" => handlers::config::delete(cx, request).await,
        "AsteriskConfigUpdate" => handlers::config::update(cx, request).await,

        // asterisk logging
        "AsteriskLoggingCreate" => handlers::logging::create(cx, request).await,
        "AsteriskLoggingData" => handlers::logging::data(cx, request).await,
        "AsteriskLoggingDelete" => handlers::logging::delete(cx, request).await,
        "AsteriskLoggingList" => handlers::logging::list(cx, request).await,
        "AsteriskLoggingRotate" => handlers::logging::rotate(cx, request).await,

        // asterisk modules
        "AsteriskModuleData" => handlers::modules::data(cx, request).await,
        "AsteriskModuleList" => handlers::modules::list(cx, request).await,
        "AsteriskModuleLoad" => handlers::modules::load(cx, request).await,
        "AsteriskModuleReload" => handlers::modules::reload(cx, request).await,
        "AsteriskModuleUnload" => handlers::modules::unload(cx, request).await,

        // bridge
        "BridgeAddChannel" => handlers::bridge::add_channel(cx, request).await,
        "BridgeCreate" => handlers::bridge::create(cx, request).await,
        "BridgeData" => handlers::bridge::data(cx, request).await,
        "BridgeDelete" => handlers::bridge::delete(cx, request).await,
        "BridgeList" => handlers::bridge::list(cx, request).await,
        "BridgePlay" => handlers::bridge::play(cx, request).await,
        "BridgeRecord" => handlers::bridge::record(cx, request).await,
        "BridgeRemoveChannel" => handlers::bridge::remove_channel(cx, request).await,
        "BridgeSubscribe" => handlers::bridge::subscribe(cx, request).await,
        "BridgeUnsubscribe" => handlers::bridge::unsubscribe(cx, request).await,

        // channel
        "ChannelAnswer" => handlers::channel::answer(cx, request).await,
        "ChannelBusy" => handlers::channel::busy(cx, request).await,
        "ChannelCongestion" => handlers::channel::congestion(cx, request).await,
        "ChannelCreate" => handlers::channel::create(cx, request).await,
        "ChannelContinue" => handlers::channel::continue_in_dialplan(cx, request).await,
        "ChannelData" => handlers::channel::data(cx, request).await,
        "ChannelDial" => handlers::channel::dial(cx, request).await,
        "ChannelHangup" => handlers::channel::hangup(cx, request).await,
        "ChannelHold" => handlers::channel::hold(cx, request).await,
        "ChannelList" => handlers::channel::list(cx, request).await,
        "ChannelMOH" => handlers::channel::music_on_hold(cx, request).await,
        "ChannelMute" => handlers::channel::mute(cx, request).await,
        "ChannelOriginate" => handlers::channel::originate(cx, request).await,
        "ChannelPlay" => handlers::channel::play(cx, request).await,
        "ChannelRecord" => handlers::channel::record(cx, request).await,
        "ChannelRing" => handlers::channel::ring(cx, request).await,
        "ChannelSendDTMF" => handlers::channel::send_dtmf(cx, request).await,
        "ChannelSilence" => handlers::channel::silence(cx, request).await,
        "ChannelSnoop" => handlers::channel::snoop(cx, request).await,
        "ChannelStopHold" => handlers::channel::stop_hold(cx, request).await,
        "ChannelStopMOH" => handlers::channel::stop_music_on_hold(cx, request).await,
        "ChannelStopRing" => handlers::channel::stop_ring(cx, request).await,
        "ChannelStopSilence" => handlers::channel::stop_silence(cx, request).await,
        "ChannelSubscribe" => handlers::channel::subscribe(cx, request).await,
        "ChannelUnmute" => handlers::channel::unmute(cx, request).await,
        "ChannelVariableGet" => handlers::channel::variable_get(cx, request).await,
        "ChannelVariableSet" => handlers::channel::variable_set(cx, request).await,

        // device state
        "DeviceStateData" => handlers::device_state::data(cx, request).await,
        "DeviceStateDelete" => handlers::device_state::delete(cx, request).await,
        "DeviceStateList" => handlers::device_state::list(cx, request).await,
        "DeviceStateUpdate" => handlers::device_state::update(cx, request).await,

        // endpoint
        "EndpointData" => handlers::endpoint::data(cx, request).await,
        "EndpointList" => handlers::endpoint::list(cx, request).await,
        "EndpointListByTech" => handlers::endpoint::list_by_tech(cx, request).await,

        // mailbox
        "MailboxData" => handlers::mailbox::data(cx, request).await,
        "MailboxDelete" => handlers::mailbox::delete(cx, request).await,
        "MailboxList" => handlers::mailbox::list(cx, request).await,
        "MailboxUpdate" => handlers::mailbox::update(cx, request).await,

        // playback; stop is expressed as a control operation
        "PlaybackControl" => handlers::playback::control(cx, request).await,
        "PlaybackData" => handlers::playback::data(cx, request).await,
        "PlaybackStop" => handlers::playback::control(cx, request).await,
        "PlaybackSubscribe" => handlers::playback::subscribe(cx, request).await,

        // live recording
        "RecordingLiveData" => handlers::recording::live_data(cx, request).await,
        "RecordingLiveDelete" => handlers::recording::live_delete(cx, request).await,
        "RecordingLiveMute" => handlers::recording::live_mute(cx, request).await,
        "RecordingLivePause" => handlers::recording::live_pause(cx, request).await,
        "RecordingLiveResume" => handlers::recording::live_resume(cx, request).await,
        "RecordingLiveScrap" => handlers::recording::live_scrap(cx, request).await,
        "RecordingLiveStop" => handlers::recording::live_stop(cx, request).await,
        "RecordingLiveUnmute" => handlers::recording::live_unmute(cx, request).await,

        // stored recording
        "RecordingStoredCopy" => handlers::recording::stored_copy(cx, request).await,
        "RecordingStoredData" => handlers::recording::stored_data(cx, request).await,
        "RecordingStoredDelete" => handlers::recording::stored_delete(cx, request).await,
        "RecordingStoredList" => handlers::recording::stored_list(cx, request).await,

        // sound
        "SoundData" => handlers::sound::data(cx, request).await,
        "SoundList" => handlers::sound::list(cx, request).await,

        _ => Err(HandlerError::NotImplemented(request.kind.clone())),
    }
}
