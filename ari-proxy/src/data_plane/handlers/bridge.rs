//! Bridge translators.

use super::{
    decode_payload, decode_payload_or_default, keys_value, require_key, HandlerResult, ReplyBody,
};
use crate::context::ProxyContext;
use crate::wire::payloads::{BridgeChannelRequest, BridgeCreateRequest, PlayRequest, RecordRequest};
use crate::wire::Request;

pub(crate) async fn add_channel(cx: &ProxyContext, request: &Request) -> HandlerResult {
    let key = require_key(request)?;
    let body: BridgeChannelRequest = decode_payload(request)?;
    cx.engine
        .bridge()
        .add_channel(&key.id, &body.channel_id)
        .await?;
    Ok(ReplyBody::ok())
}

pub(crate) async fn create(cx: &ProxyContext, request: &Request) -> HandlerResult {
    let key = require_key(request)?;
    let body: BridgeCreateRequest = decode_payload_or_default(request)?;
    let data = cx
        .engine
        .bridge()
        .create(&key.id, &body.bridge_type, &body.name)
        .await?;
    Ok(ReplyBody::with_metadata(
        data,
        cx.metadata(key.dialog.as_deref()),
    ))
}

pub(crate) async fn data(cx: &ProxyContext, request: &Request) -> HandlerResult {
    let key = require_key(request)?;
    let data = cx.engine.bridge().data(&key.id).await?;
    Ok(ReplyBody::with_metadata(
        data,
        cx.metadata(key.dialog.as_deref()),
    ))
}

pub(crate) async fn delete(cx: &ProxyContext, request: &Request) -> HandlerResult {
    let key = require_key(request)?;
    cx.engine.bridge().delete(&key.id).await?;
    Ok(ReplyBody::ok())
}

pub(crate) async fn list(cx: &ProxyContext, _request: &Request) -> HandlerResult {
    let keys = cx.engine.bridge().list().await?;
    Ok(ReplyBody::data(keys_value(keys)?))
}

pub(crate) async fn play(cx: &ProxyContext, request: &Request) -> HandlerResult {
    let key = require_key(request)?;
    let body: PlayRequest = decode_payload(request)?;
    let data = cx
        .engine
        .bridge()
        .play(&key.id, &body.playback_id, &body.media_uri)
        .await?;
    Ok(ReplyBody::with_metadata(
        data,
        cx.metadata(key.dialog.as_deref()),
    ))
}

pub(crate) async fn record(cx: &ProxyContext, request: &Request) -> HandlerResult {
    let key = require_key(request)?;
    let body: RecordRequest = decode_payload(request)?;
    let data = cx
        .engine
        .bridge()
        .record(&key.id, &body.name, body.options)
        .await?;
    Ok(ReplyBody::with_metadata(
        data,
        cx.metadata(key.dialog.as_deref()),
    ))
}

pub(crate) async fn remove_channel(cx: &ProxyContext, request: &Request) -> HandlerResult {
    let key = require_key(request)?;
    let body: BridgeChannelRequest = decode_payload(request)?;
    cx.engine
        .bridge()
        .remove_channel(&key.id, &body.channel_id)
        .await?;
    Ok(ReplyBody::ok())
}

/// Registers a dialog's interest in this bridge; without a dialog the
/// subscription is already implicit in the event plane.
pub(crate) async fn subscribe(cx: &ProxyContext, request: &Request) -> HandlerResult {
    let key = require_key(request)?;
    if let Some(dialog_id) = &key.dialog {
        cx.dialog.bind(dialog_id, &key.id);
    }
    Ok(ReplyBody::ok())
}

pub(crate) async fn unsubscribe(cx: &ProxyContext, request: &Request) -> HandlerResult {
    let key = require_key(request)?;
    if let Some(dialog_id) = &key.dialog {
        cx.dialog.unbind(dialog_id, &key.id);
    }
    Ok(ReplyBody::ok())
}
