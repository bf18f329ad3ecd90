//! Kind-specific request payload shapes.
//!
//! The request envelope carries its payload opaquely; each handler decodes
//! the one struct its operation needs. Unknown fields are ignored so that
//! newer callers can extend payloads without breaking older proxies.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SubscribeRequest {
    pub event_source: String,
}

/// Shared by variable get (value unused) and variable set.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct VariableRequest {
    pub name: String,
    #[serde(default)]
    pub value: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct BridgeCreateRequest {
    #[serde(default)]
    pub bridge_type: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct BridgeChannelRequest {
    pub channel_id: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PlayRequest {
    pub playback_id: String,
    pub media_uri: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RecordRequest {
    pub name: String,
    #[serde(default)]
    pub options: Value,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct HangupRequest {
    #[serde(default)]
    pub reason: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ContinueRequest {
    #[serde(default)]
    pub context: String,
    #[serde(default)]
    pub extension: String,
    #[serde(default)]
    pub priority: i32,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DialRequest {
    #[serde(default)]
    pub caller: String,
    #[serde(default)]
    pub timeout_secs: u32,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MusicOnHoldRequest {
    #[serde(default)]
    pub class: String,
}

/// Shared by mute and unmute.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MuteRequest {
    #[serde(default)]
    pub direction: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SendDtmfRequest {
    pub dtmf: String,
    #[serde(default)]
    pub options: Value,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SnoopRequest {
    pub snoop_id: String,
    #[serde(default)]
    pub options: Value,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DeviceStateUpdateRequest {
    pub state: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TechRequest {
    pub tech: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MailboxUpdateRequest {
    #[serde(default)]
    pub old_messages: u32,
    #[serde(default)]
    pub new_messages: u32,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PlaybackControlRequest {
    pub operation: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RecordingCopyRequest {
    pub destination: String,
}

/// Addresses one dynamic-configuration object.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ConfigRequest {
    pub class: String,
    pub kind: String,
    pub id: String,
    #[serde(default)]
    pub fields: Value,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct LoggingCreateRequest {
    pub levels: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SoundListRequest {
    #[serde(default)]
    pub filters: Value,
}

#[cfg(test)]
mod tests {
    use super::{MuteRequest, PlayRequest, VariableRequest};
    use serde_json::json;

    #[test]
    fn optional_fields_default_when_absent() {
        let variable: VariableRequest =
            serde_json::from_value(json!({"name": "CALLERID"})).expect("payload should decode");

        assert_eq!(variable.name, "CALLERID");
        assert_eq!(variable.value, "");

        let mute: MuteRequest = serde_json::from_value(json!({})).expect("payload should decode");
        assert_eq!(mute.direction, "");
    }

    #[test]
    fn required_fields_are_enforced() {
        let missing: Result<PlayRequest, _> =
            serde_json::from_value(json!({"playback_id": "pb-1"}));

        assert!(missing.is_err());
    }
}
