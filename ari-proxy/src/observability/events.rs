//! Canonical structured event names used across `ari-proxy`.

// Supervisor lifecycle events.
pub const SERVER_READY: &str = "server_ready";
pub const SUBSCRIPTION_LISTEN_START: &str = "subscription_listen_start";
pub const SUBSCRIPTION_CLOSED: &str = "subscription_closed";
pub const UNSUBSCRIBE_FAILED: &str = "unsubscribe_failed";

// Request-plane events.
pub const REQUEST_DECODE_FAILED: &str = "request_decode_failed";
pub const REQUEST_KIND_UNKNOWN: &str = "request_kind_unknown";
pub const REPLY_PUBLISH_FAILED: &str = "reply_publish_failed";
pub const REPLY_SUBJECT_MISSING: &str = "reply_subject_missing";

// Event-plane events.
pub const EVENT_CONVERT_FAILED: &str = "event_convert_failed";
pub const EVENT_PUBLISH_FAILED: &str = "event_publish_failed";
pub const DIALOG_EVENT_PUBLISH_FAILED: &str = "dialog_event_publish_failed";
pub const EVENT_STREAM_CLOSED: &str = "event_stream_closed";

// Discovery events.
pub const ANNOUNCE_PUBLISH_FAILED: &str = "announce_publish_failed";
pub const PING_REFRESH: &str = "ping_refresh";
