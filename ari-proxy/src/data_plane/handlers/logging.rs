//! Log-channel translators.

use super::{decode_payload, keys_value, require_key, HandlerResult, ReplyBody};
use crate::context::ProxyContext;
use crate::wire::payloads::LoggingCreateRequest;
use crate::wire::Request;

pub(crate) async fn create(cx: &ProxyContext, request: &Request) -> HandlerResult {
    let key = require_key(request)?;
    let body: LoggingCreateRequest = decode_payload(request)?;
    cx.engine
        .asterisk_logging()
        .create(&key.id, &body.levels)
        .await?;
    Ok(ReplyBody::ok())
}

pub(crate) async fn data(cx: &ProxyContext, request: &Request) -> HandlerResult {
    let key = require_key(request)?;
    let data = cx.engine.asterisk_logging().data(&key.id).await?;
    Ok(ReplyBody::with_metadata(
        data,
        cx.metadata(key.dialog.as_deref()),
    ))
}

pub(crate) async fn delete(cx: &ProxyContext, request: &Request) -> HandlerResult {
    let key = require_key(request)?;
    cx.engine.asterisk_logging().delete(&key.id).await?;
    Ok(ReplyBody::ok())
}

pub(crate) async fn list(cx: &ProxyContext, _request: &Request) -> HandlerResult {
    let keys = cx.engine.asterisk_logging().list().await?;
    Ok(ReplyBody::data(keys_value(keys)?))
}

pub(crate) async fn rotate(cx: &ProxyContext, request: &Request) -> HandlerResult {
    let key = require_key(request)?;
    cx.engine.asterisk_logging().rotate(&key.id).await?;
    Ok(ReplyBody::ok())
}
