//! Engine-level translators: identity and global variables.

use super::{decode_payload, require_key, HandlerError, HandlerResult, ReplyBody};
use crate::context::ProxyContext;
use crate::wire::payloads::VariableRequest;
use crate::wire::Request;

pub(crate) async fn info(cx: &ProxyContext, _request: &Request) -> HandlerResult {
    let info = cx.engine.asterisk().info().await?;
    let data = serde_json::to_value(info)
        .map_err(|err| HandlerError::Internal(format!("encode info: {err}")))?;
    Ok(ReplyBody::with_metadata(data, cx.metadata(None)))
}

/// Module reload addressed through the engine-level surface; delegates to
/// the module family.
pub(crate) async fn reload_module(cx: &ProxyContext, request: &Request) -> HandlerResult {
    let key = require_key(request)?;
    cx.engine.asterisk_modules().reload(&key.id).await?;
    Ok(ReplyBody::ok())
}

pub(crate) async fn variable_get(cx: &ProxyContext, request: &Request) -> HandlerResult {
    let body: VariableRequest = decode_payload(request)?;
    let value = cx.engine.asterisk().variable_get(&body.name).await?;
    Ok(ReplyBody::data(value.into()))
}

pub(crate) async fn variable_set(cx: &ProxyContext, request: &Request) -> HandlerResult {
    let body: VariableRequest = decode_payload(request)?;
    cx.engine
        .asterisk()
        .variable_set(&body.name, &body.value)
        .await?;
    Ok(ReplyBody::ok())
}
