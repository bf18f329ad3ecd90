//! Sound translators.

use super::{decode_payload_or_default, keys_value, require_key, HandlerResult, ReplyBody};
use crate::context::ProxyContext;
use crate::wire::payloads::SoundListRequest;
use crate::wire::Request;

pub(crate) async fn data(cx: &ProxyContext, request: &Request) -> HandlerResult {
    let key = require_key(request)?;
    let data = cx.engine.sound().data(&key.id).await?;
    Ok(ReplyBody::with_metadata(
        data,
        cx.metadata(key.dialog.as_deref()),
    ))
}

pub(crate) async fn list(cx: &ProxyContext, request: &Request) -> HandlerResult {
    let body: SoundListRequest = decode_payload_or_default(request)?;
    let keys = cx.engine.sound().list(body.filters).await?;
    Ok(ReplyBody::data(keys_value(keys)?))
}
