//! Dynamic-configuration translators.

use super::{decode_payload, HandlerResult, ReplyBody};
use crate::context::ProxyContext;
use crate::wire::payloads::ConfigRequest;
use crate::wire::Request;

pub(crate) async fn data(cx: &ProxyContext, request: &Request) -> HandlerResult {
    let body: ConfigRequest = decode_payload(request)?;
    let data = cx
        .engine
        .asterisk_config()
        .data(&body.class, &body.kind, &body.id)
        .await?;
    Ok(ReplyBody::with_metadata(data, cx.metadata(None)))
}

pub(crate) async fn delete(cx: &ProxyContext, request: &Request) -> HandlerResult {
    let body: ConfigRequest = decode_payload(request)?;
    cx.engine
        .asterisk_config()
        .delete(&body.class, &body.kind, &body.id)
        .await?;
    Ok(ReplyBody::ok())
}

pub(crate) async fn update(cx: &ProxyContext, request: &Request) -> HandlerResult {
    let body: ConfigRequest = decode_payload(request)?;
    cx.engine
        .asterisk_config()
        .update(&body.class, &body.kind, &body.id, body.fields)
        .await?;
    Ok(ReplyBody::ok())
}
