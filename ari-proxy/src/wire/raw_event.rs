//! Bus-neutral representation of an engine event.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Multimap of event annotations. The proxy stamps `application` and
/// `asterisk` on every event, and `dialog` on dialog-scoped copies.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Header(HashMap<String, Vec<String>>);

impl Header {
    /// Replaces all values recorded under `name`.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), vec![value.into()]);
    }

    /// Appends a value under `name`, keeping earlier ones.
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.entry(name.into()).or_default().push(value.into());
    }

    /// First value recorded under `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The event envelope published on the canonical and dialog subjects: the
/// original event body flattened next to the event type and the proxy's
/// header annotations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawEvent {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Header::is_empty")]
    pub header: Header,
    #[serde(flatten)]
    pub data: serde_json::Map<String, Value>,
}

impl RawEvent {
    /// Builds a raw event from an engine event's type and body. Returns
    /// `None` when the body is not a JSON object or the type is empty;
    /// such events cannot carry the proxy's annotations and are dropped.
    pub fn from_parts(kind: &str, payload: &Value) -> Option<Self> {
        if kind.is_empty() {
            return None;
        }
        let Value::Object(body) = payload else {
            return None;
        };
        let mut data = body.clone();
        // The envelope owns these two keys.
        data.remove("type");
        data.remove("header");
        Some(Self {
            kind: kind.to_string(),
            header: Header::default(),
            data,
        })
    }
}
