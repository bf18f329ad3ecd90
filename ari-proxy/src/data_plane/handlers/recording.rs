//! Recording translators, live and stored.

use super::{decode_payload, keys_value, require_key, HandlerResult, ReplyBody};
use crate::context::ProxyContext;
use crate::wire::payloads::RecordingCopyRequest;
use crate::wire::Request;

// Live recordings.

pub(crate) async fn live_data(cx: &ProxyContext, request: &Request) -> HandlerResult {
    let key = require_key(request)?;
    let data = cx.engine.recording_live().data(&key.id).await?;
    Ok(ReplyBody::with_metadata(
        data,
        cx.metadata(key.dialog.as_deref()),
    ))
}

pub(crate) async fn live_delete(cx: &ProxyContext, request: &Request) -> HandlerResult {
    let key = require_key(request)?;
    cx.engine.recording_live().delete(&key.id).await?;
    Ok(ReplyBody::ok())
}

pub(crate) async fn live_mute(cx: &ProxyContext, request: &Request) -> HandlerResult {
    let key = require_key(request)?;
    cx.engine.recording_live().mute(&key.id).await?;
    Ok(ReplyBody::ok())
}

pub(crate) async fn live_pause(cx: &ProxyContext, request: &Request) -> HandlerResult {
    let key = require_key(request)?;
    cx.engine.recording_live().pause(&key.id).await?;
    Ok(ReplyBody::ok())
}

pub(crate) async fn live_resume(cx: &ProxyContext, request: &Request) -> HandlerResult {
    let key = require_key(request)?;
    cx.engine.recording_live().resume(&key.id).await?;
    Ok(ReplyBody::ok())
}

pub(crate) async fn live_scrap(cx: &ProxyContext, request: &Request) -> HandlerResult {
    let key = require_key(request)?;
    cx.engine.recording_live().scrap(&key.id).await?;
    Ok(ReplyBody::ok())
}

pub(crate) async fn live_stop(cx: &ProxyContext, request: &Request) -> HandlerResult {
    let key = require_key(request)?;
    cx.engine.recording_live().stop(&key.id).await?;
    Ok(ReplyBody::ok())
}

pub(crate) async fn live_unmute(cx: &ProxyContext, request: &Request) -> HandlerResult {
    let key = require_key(request)?;
    cx.engine.recording_live().unmute(&key.id).await?;
    Ok(ReplyBody::ok())
}

// Stored recordings.

pub(crate) async fn stored_copy(cx: &ProxyContext, request: &Request) -> HandlerResult {
    let key = require_key(request)?;
    let body: RecordingCopyRequest = decode_payload(request)?;
    let data = cx
        .engine
        .recording_stored()
        .copy(&key.id, &body.destination)
        .await?;
    Ok(ReplyBody::with_metadata(
        data,
        cx.metadata(key.dialog.as_deref()),
    ))
}

pub(crate) async fn stored_data(cx: &ProxyContext, request: &Request) -> HandlerResult {
    let key = require_key(request)?;
    let data = cx.engine.recording_stored().data(&key.id).await?;
    Ok(ReplyBody::with_metadata(
        data,
        cx.metadata(key.dialog.as_deref()),
    ))
}

pub(crate) async fn stored_delete(cx: &ProxyContext, request: &Request) -> HandlerResult {
    let key = require_key(request)?;
    cx.engine.recording_stored().delete(&key.id).await?;
    Ok(ReplyBody::ok())
}

pub(crate) async fn stored_list(cx: &ProxyContext, _request: &Request) -> HandlerResult {
    let keys = cx.engine.recording_stored().list().await?;
    Ok(ReplyBody::data(keys_value(keys)?))
}
