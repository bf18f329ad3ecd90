//! Device-state translators.

use super::{decode_payload, keys_value, require_key, HandlerResult, ReplyBody};
use crate::context::ProxyContext;
use crate::wire::payloads::DeviceStateUpdateRequest;
use crate::wire::Request;

pub(crate) async fn data(cx: &ProxyContext, request: &Request) -> HandlerResult {
    let key = require_key(request)?;
    let data = cx.engine.device_state().data(&key.id).await?;
    Ok(ReplyBody::with_metadata(
        data,
        cx.metadata(key.dialog.as_deref()),
    ))
}

pub(crate) async fn delete(cx: &ProxyContext, request: &Request) -> HandlerResult {
    let key = require_key(request)?;
    cx.engine.device_state().delete(&key.id).await?;
    Ok(ReplyBody::ok())
}

pub(crate) async fn list(cx: &ProxyContext, _request: &Request) -> HandlerResult {
    let keys = cx.engine.device_state().list().await?;
    Ok(ReplyBody::data(keys_value(keys)?))
}

pub(crate) async fn update(cx: &ProxyContext, request: &Request) -> HandlerResult {
    let key = require_key(request)?;
    let body: DeviceStateUpdateRequest = decode_payload(request)?;
    cx.engine.device_state().update(&key.id, &body.state).await?;
    Ok(ReplyBody::ok())
}
