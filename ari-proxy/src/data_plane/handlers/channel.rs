//! Channel translators. The widest family: call control, media, and
//! variable access for individual channels.

use super::{
    decode_payload, decode_payload_or_default, keys_value, require_key, HandlerResult, ReplyBody,
};
use crate::context::ProxyContext;
use crate::wire::payloads::{
    ContinueRequest, DialRequest, HangupRequest, MusicOnHoldRequest, MuteRequest, PlayRequest,
    RecordRequest, SendDtmfRequest, SnoopRequest, VariableRequest,
};
use crate::wire::Request;

pub(crate) async fn answer(cx: &ProxyContext, request: &Request) -> HandlerResult {
    let key = require_key(request)?;
    cx.engine.channel().answer(&key.id).await?;
    Ok(ReplyBody::ok())
}

pub(crate) async fn busy(cx: &ProxyContext, request: &Request) -> HandlerResult {
    let key = require_key(request)?;
    cx.engine.channel().busy(&key.id).await?;
    Ok(ReplyBody::ok())
}

pub(crate) async fn congestion(cx: &ProxyContext, request: &Request) -> HandlerResult {
    let key = require_key(request)?;
    cx.engine.channel().congestion(&key.id).await?;
    Ok(ReplyBody::ok())
}

/// The SDK request body is passed through opaquely; the engine validates it.
pub(crate) async fn create(cx: &ProxyContext, request: &Request) -> HandlerResult {
    let data = cx.engine.channel().create(request.payload.clone()).await?;
    Ok(ReplyBody::with_metadata(data, cx.metadata(None)))
}

pub(crate) async fn continue_in_dialplan(cx: &ProxyContext, request: &Request) -> HandlerResult {
    let key = require_key(request)?;
    let body: ContinueRequest = decode_payload_or_default(request)?;
    cx.engine
        .channel()
        .continue_in_dialplan(&key.id, &body.context, &body.extension, body.priority)
        .await?;
    Ok(ReplyBody::ok())
}

pub(crate) async fn data(cx: &ProxyContext, request: &Request) -> HandlerResult {
    let key = require_key(request)?;
    let data = cx.engine.channel().data(&key.id).await?;
    Ok(ReplyBody::with_metadata(
        data,
        cx.metadata(key.dialog.as_deref()),
    ))
}

pub(crate) async fn dial(cx: &ProxyContext, request: &Request) -> HandlerResult {
    let key = require_key(request)?;
    let body: DialRequest = decode_payload_or_default(request)?;
    cx.engine
        .channel()
        .dial(&key.id, &body.caller, body.timeout_secs)
        .await?;
    Ok(ReplyBody::ok())
}

pub(crate) async fn hangup(cx: &ProxyContext, request: &Request) -> HandlerResult {
    let key = require_key(request)?;
    let body: HangupRequest = decode_payload_or_default(request)?;
    cx.engine.channel().hangup(&key.id, &body.reason).await?;
    Ok(ReplyBody::ok())
}

pub(crate) async fn hold(cx: &ProxyContext, request: &Request) -> HandlerResult {
    let key = require_key(request)?;
    cx.engine.channel().hold(&key.id).await?;
    Ok(ReplyBody::ok())
}

pub(crate) async fn list(cx: &ProxyContext, _request: &Request) -> HandlerResult {
    let keys = cx.engine.channel().list().await?;
    Ok(ReplyBody::data(keys_value(keys)?))
}

pub(crate) async fn music_on_hold(cx: &ProxyContext, request: &Request) -> HandlerResult {
    let key = require_key(request)?;
    let body: MusicOnHoldRequest = decode_payload_or_default(request)?;
    cx.engine
        .channel()
        .music_on_hold(&key.id, &body.class)
        .await?;
    Ok(ReplyBody::ok())
}

pub(crate) async fn mute(cx: &ProxyContext, request: &Request) -> HandlerResult {
    let key = require_key(request)?;
    let body: MuteRequest = decode_payload_or_default(request)?;
    cx.engine.channel().mute(&key.id, &body.direction).await?;
    Ok(ReplyBody::ok())
}

/// The SDK request body is passed through opaquely; the engine validates it.
pub(crate) async fn originate(cx: &ProxyContext, request: &Request) -> HandlerResult {
    let data = cx
        .engine
        .channel()
        .originate(request.payload.clone())
        .await?;
    Ok(ReplyBody::with_metadata(data, cx.metadata(None)))
}

pub(crate) async fn play(cx: &ProxyContext, request: &Request) -> HandlerResult {
    let key = require_key(request)?;
    let body: PlayRequest = decode_payload(request)?;
    let data = cx
        .engine
        .channel()
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
        .channel()
        .record(&key.id, &body.name, body.options)
        .await?;
    Ok(ReplyBody::with_metadata(
        data,
        cx.metadata(key.dialog.as_deref()),
    ))
}

pub(crate) async fn ring(cx: &ProxyContext, request: &Request) -> HandlerResult {
    let key = require_key(request)?;
    cx.engine.channel().ring(&key.id).await?;
    Ok(ReplyBody::ok())
}

pub(crate) async fn send_dtmf(cx: &ProxyContext, request: &Request) -> HandlerResult {
    let key = require_key(request)?;
    let body: SendDtmfRequest = decode_payload(request)?;
    cx.engine
        .channel()
        .send_dtmf(&key.id, &body.dtmf, body.options)
        .await?;
    Ok(ReplyBody::ok())
}

pub(crate) async fn silence(cx: &ProxyContext, request: &Request) -> HandlerResult {
    let key = require_key(request)?;
    cx.engine.channel().silence(&key.id).await?;
    Ok(ReplyBody::ok())
}

pub(crate) async fn snoop(cx: &ProxyContext, request: &Request) -> HandlerResult {
    let key = require_key(request)?;
    let body: SnoopRequest = decode_payload(request)?;
    let data = cx
        .engine
        .channel()
        .snoop(&key.id, &body.snoop_id, body.options)
        .await?;
    Ok(ReplyBody::with_metadata(
        data,
        cx.metadata(key.dialog.as_deref()),
    ))
}

pub(crate) async fn stop_hold(cx: &ProxyContext, request: &Request) -> HandlerResult {
    let key = require_key(request)?;
    cx.engine.channel().stop_hold(&key.id).await?;
    Ok(ReplyBody::ok())
}

pub(crate) async fn stop_music_on_hold(cx: &ProxyContext, request: &Request) -> HandlerResult {
    let key = require_key(request)?;
    cx.engine.channel().stop_music_on_hold(&key.id).await?;
    Ok(ReplyBody::ok())
}

pub(crate) async fn stop_ring(cx: &ProxyContext, request: &Request) -> HandlerResult {
    let key = require_key(request)?;
    cx.engine.channel().stop_ring(&key.id).await?;
    Ok(ReplyBody::ok())
}

pub(crate) async fn stop_silence(cx: &ProxyContext, request: &Request) -> HandlerResult {
    let key = require_key(request)?;
    cx.engine.channel().stop_silence(&key.id).await?;
    Ok(ReplyBody::ok())
}

/// Registers a dialog's interest in this channel; without a dialog the
/// subscription is already implicit in the event plane.
pub(crate) async fn subscribe(cx: &ProxyContext, request: &Request) -> HandlerResult {
    let key = require_key(request)?;
    if let Some(dialog_id) = &key.dialog {
        cx.dialog.bind(dialog_id, &key.id);
    }
    Ok(ReplyBody::ok())
}

pub(crate) async fn unmute(cx: &ProxyContext, request: &Request) -> HandlerResult {
    let key = require_key(request)?;
    let body: MuteRequest = decode_payload_or_default(request)?;
    cx.engine.channel().unmute(&key.id, &body.direction).await?;
    Ok(ReplyBody::ok())
}

pub(crate) async fn variable_get(cx: &ProxyContext, request: &Request) -> HandlerResult {
    let key = require_key(request)?;
    let body: VariableRequest = decode_payload(request)?;
    let value = cx.engine.channel().variable_get(&key.id, &body.name).await?;
    Ok(ReplyBody::data(value.into()))
}

pub(crate) async fn variable_set(cx: &ProxyContext, request: &Request) -> HandlerResult {
    let key = require_key(request)?;
    let body: VariableRequest = decode_payload(request)?;
    cx.engine
        .channel()
        .variable_set(&key.id, &body.name, &body.value)
        .await?;
    Ok(ReplyBody::ok())
}
