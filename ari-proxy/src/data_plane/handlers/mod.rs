//! Per-family request translators.
//!
//! Every handler has the same shape: pull what it needs from the request
//! envelope, make one engine call, and describe the reply. Publishing the
//! reply, successful or not, is the dispatcher's job, which is what
//! guarantees exactly one reply per request.

pub(crate) mod application;
pub(crate) mod asterisk;
pub(crate) mod bridge;
pub(crate) mod channel;
pub(crate) mod config;
pub(crate) mod device_state;
pub(crate) mod endpoint;
pub(crate) mod logging;
pub(crate) mod mailbox;
pub(crate) mod modules;
pub(crate) mod playback;
pub(crate) mod recording;
pub(crate) mod sound;

use crate::engine::EngineError;
use crate::wire::{ErrorKind, Metadata, Request, ResourceKey, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

pub(crate) type HandlerResult = Result<ReplyBody, HandlerError>;

/// What a successful handler hands back to the dispatcher.
pub(crate) struct ReplyBody {
    data: Value,
    metadata: Option<Metadata>,
}

impl ReplyBody {
    /// A bare acknowledgement.
    pub fn ok() -> Self {
        Self {
            data: Value::Null,
            metadata: None,
        }
    }

    pub fn data(data: Value) -> Self {
        Self {
            data,
            metadata: None,
        }
    }

    pub fn with_metadata(data: Value, metadata: Metadata) -> Self {
        Self {
            data,
            metadata: Some(metadata),
        }
    }

    pub fn into_response(self) -> Response {
        match self.metadata {
            Some(metadata) => Response::data_with_metadata(self.data, metadata),
            None => Response::data(self.data),
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum HandlerError {
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Internal(String),
    #[error("Not implemented: {0}")]
    NotImplemented(String),
    #[error("proxy is shutting down")]
    Canceled,
}

impl HandlerError {
    pub fn to_response(&self) -> Response {
        match self {
            HandlerError::Engine(EngineError::NotFound) => {
                Response::error(ErrorKind::NotFound, self.to_string())
            }
            HandlerError::NotImplemented(_) => {
                Response::error(ErrorKind::NotImplemented, self.to_string())
            }
            other => Response::error(ErrorKind::Error, other.to_string()),
        }
    }
}

/// The resource key, required by every operation addressing a concrete
/// resource.
pub(crate) fn require_key(request: &Request) -> Result<&ResourceKey, HandlerError> {
    request
        .key
        .as_ref()
        .ok_or_else(|| HandlerError::BadRequest("missing resource key".to_string()))
}

/// Decodes the request payload into the operation's shape.
pub(crate) fn decode_payload<T: DeserializeOwned>(request: &Request) -> Result<T, HandlerError> {
    serde_json::from_value(request.payload.clone())
        .map_err(|err| HandlerError::BadRequest(format!("invalid payload: {err}")))
}

/// Like [`decode_payload`], but an absent payload decodes to the default;
/// for operations whose payload fields are all optional.
pub(crate) fn decode_payload_or_default<T: DeserializeOwned + Default>(
    request: &Request,
) -> Result<T, HandlerError> {
    if request.payload.is_null() {
        return Ok(T::default());
    }
    decode_payload(request)
}

pub(crate) fn keys_value(keys: Vec<ResourceKey>) -> Result<Value, HandlerError> {
    serde_json::to_value(keys).map_err(|err| HandlerError::Internal(format!("encode keys: {err}")))
}

#[cfg(test)]
mod tests {
    use super::{decode_payload_or_default, require_key, HandlerError, ReplyBody};
    use crate::engine::EngineError;
    use crate::wire::payloads::HangupRequest;
    use crate::wire::{ErrorKind, Request, ResourceKey};
    use serde_json::json;

    #[test]
    fn require_key_rejects_keyless_requests() {
        let keyless_request = Request::new("ChannelAnswer");
        let missing = require_key(&keyless_request);
        assert!(matches!(missing, Err(HandlerError::BadRequest(_))));

        let request = Request::new("ChannelAnswer").with_key(ResourceKey::new("ch-1"));
        assert_eq!(require_key(&request).expect("key should be present").id, "ch-1");
    }

    #[test]
    fn absent_payload_decodes_to_defaults() {
        let hangup: HangupRequest = decode_payload_or_default(&Request::new("ChannelHangup"))
            .expect("null payload should default");

        assert_eq!(hangup.reason, "");
    }

    #[test]
    fn error_translation_keeps_the_reserved_kinds() {
        let not_found = HandlerError::Engine(EngineError::NotFound).to_response();
        assert_eq!(not_found.error_kind(), Some(ErrorKind::NotFound));

        let unknown = HandlerError::NotImplemented("Nonsense".to_string()).to_response();
        assert_eq!(unknown.error_kind(), Some(ErrorKind::NotImplemented));
        assert!(unknown
            .error_message()
            .expect("message should be present")
            .contains("Not implemented"));

        let failure = HandlerError::Engine(EngineError::Failure("boom".to_string())).to_response();
        assert_eq!(failure.error_kind(), Some(ErrorKind::Error));
    }

    #[test]
    fn reply_body_shapes_map_onto_the_envelope() {
        let ack = serde_json::to_value(ReplyBody::ok().into_response()).expect("encode ack");
        assert_eq!(ack, json!({"type": "data"}));

        let data = ReplyBody::data(json!({"id": "br-1"})).into_response();
        assert_eq!(data.error_kind(), None);
    }
}
