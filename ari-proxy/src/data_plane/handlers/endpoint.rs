//! Endpoint translators.
//!
//! Endpoint keys pack the technology and resource into the id as
//! `tech/resource`, the engine's own addressing convention.

use super::{decode_payload, keys_value, require_key, HandlerError, HandlerResult, ReplyBody};
use crate::context::ProxyContext;
use crate::wire::payloads::TechRequest;
use crate::wire::Request;

fn split_endpoint_id(id: &str) -> Result<(&str, &str), HandlerError> {
    id.split_once('/')
        .ok_or_else(|| HandlerError::BadRequest(format!("malformed endpoint id {id:?}")))
}

pub(crate) async fn data(cx: &ProxyContext, request: &Request) -> HandlerResult {
    let key = require_key(request)?;
    let (tech, resource) = split_endpoint_id(&key.id)?;
    let data = cx.engine.endpoint().data(tech, resource).await?;
    Ok(ReplyBody::with_metadata(
        data,
        cx.metadata(key.dialog.as_deref()),
    ))
}

pub(crate) async fn list(cx: &ProxyContext, _request: &Request) -> HandlerResult {
    let keys = cx.engine.endpoint().list().await?;
    Ok(ReplyBody::data(keys_value(keys)?))
}

pub(crate) async fn list_by_tech(cx: &ProxyContext, request: &Request) -> HandlerResult {
    let body: TechRequest = decode_payload(request)?;
    let keys = cx.engine.endpoint().list_by_tech(&body.tech).await?;
    Ok(ReplyBody::data(keys_value(keys)?))
}

#[cfg(test)]
mod tests {
    use super::split_endpoint_id;

    #[test]
    fn endpoint_ids_split_on_the_first_slash() {
        assert_eq!(
            split_endpoint_id("PJSIP/alice").expect("well-formed id"),
            ("PJSIP", "alice")
        );
        assert!(split_endpoint_id("alice").is_err());
    }
}
