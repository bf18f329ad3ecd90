//! Application resource translators.

use super::{decode_payload, keys_value, require_key, HandlerResult, ReplyBody};
use crate::context::ProxyContext;
use crate::wire::payloads::SubscribeRequest;
use crate::wire::Request;

pub(crate) async fn data(cx: &ProxyContext, request: &Request) -> HandlerResult {
    let key = require_key(request)?;
    let data = cx.engine.application().data(&key.id).await?;
    Ok(ReplyBody::with_metadata(
        data,
        cx.metadata(key.dialog.as_deref()),
    ))
}

pub(crate) async fn list(cx: &ProxyContext, _request: &Request) -> HandlerResult {
    let keys = cx.engine.application().list().await?;
    Ok(ReplyBody::data(keys_value(keys)?))
}

pub(crate) async fn subscribe(cx: &ProxyContext, request: &Request) -> HandlerResult {
    let key = require_key(request)?;
    let body: SubscribeRequest = decode_payload(request)?;
    cx.engine
        .application()
        .subscribe(&key.id, &body.event_source)
        .await?;
    if let Some(dialog_id) = &key.dialog {
        cx.dialog.bind(dialog_id, &key.id);
    }
    Ok(ReplyBody::ok())
}

pub(crate) async fn unsubscribe(cx: &ProxyContext, request: &Request) -> HandlerResult {
    let key = require_key(request)?;
    let body: SubscribeRequest = decode_payload(request)?;
    cx.engine
        .application()
        .unsubscribe(&key.id, &body.event_source)
        .await?;
    if let Some(dialog_id) = &key.dialog {
        cx.dialog.unbind(dialog_id, &key.id);
    }
    Ok(ReplyBody::ok())
}
