//! Playback translators.

use super::{decode_payload, require_key, HandlerResult, ReplyBody};
use crate::context::ProxyContext;
use crate::wire::payloads::PlaybackControlRequest;
use crate::wire::Request;

/// Drives a running playback. Stop requests route here too, carrying the
/// operation in their payload like any other control.
pub(crate) async fn control(cx: &ProxyContext, request: &Request) -> HandlerResult {
    let key = require_key(request)?;
    let body: PlaybackControlRequest = decode_payload(request)?;
    cx.engine.playback().control(&key.id, &body.operation).await?;
    Ok(ReplyBody::ok())
}

pub(crate) async fn data(cx: &ProxyContext, request: &Request) -> HandlerResult {
    let key = require_key(request)?;
    let data = cx.engine.playback().data(&key.id).await?;
    Ok(ReplyBody::with_metadata(
        data,
        cx.metadata(key.dialog.as_deref()),
    ))
}

/// Registers a dialog's interest in this playback; without a dialog the
/// subscription is already implicit in the event plane.
pub(crate) async fn subscribe(cx: &ProxyContext, request: &Request) -> HandlerResult {
    let key = require_key(request)?;
    if let Some(dialog_id) = &key.dialog {
        cx.dialog.bind(dialog_id, &key.id);
    }
    Ok(ReplyBody::ok())
}
