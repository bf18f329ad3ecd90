//! Loadable-module translators.

use super::{keys_value, require_key, HandlerResult, ReplyBody};
use crate::context::ProxyContext;
use crate::wire::Request;

pub(crate) async fn data(cx: &ProxyContext, request: &Request) -> HandlerResult {
    let key = require_key(request)?;
    let data = cx.engine.asterisk_modules().data(&key.id).await?;
    Ok(ReplyBody::with_metadata(
        data,
        cx.metadata(key.dialog.as_deref()),
    ))
}

pub(crate) async fn list(cx: &ProxyContext, _request: &Request) -> HandlerResult {
    let keys = cx.engine.asterisk_modules().list().await?;
    Ok(ReplyBody::data(keys_value(keys)?))
}

pub(crate) async fn load(cx: &ProxyContext, request: &Request) -> HandlerResult {
    let key = require_key(request)?;
    cx.engine.asterisk_modules().load(&key.id).await?;
    Ok(ReplyBody::ok())
}

pub(crate) async fn reload(cx: &ProxyContext, request: &Request) -> HandlerResult {
    let key = require_key(request)?;
    cx.engine.asterisk_modules().reload(&key.id).await?;
    Ok(ReplyBody::ok())
}

pub(crate) async fn unload(cx: &ProxyContext, request: &Request) -> HandlerResult {
    let key = require_key(request)?;
    cx.engine.asterisk_modules().unload(&key.id).await?;
    Ok(ReplyBody::ok())
}
