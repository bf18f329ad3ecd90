//! Proxy configuration.

use crate::wire::subject;
use serde::{Deserialize, Serialize};
use std::time::Duration;

fn default_subject_prefix() -> String {
    subject::DEFAULT_PREFIX.to_string()
}

fn default_announce_interval_ms() -> u64 {
    30_000
}

fn default_shutdown_timeout_ms() -> u64 {
    500
}

fn default_create_queue_group() -> String {
    subject::CREATE_QUEUE_GROUP.to_string()
}

/// Supervisor inputs. The application name and node identity are always
/// derived from the engine at boot and are deliberately not configurable.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Prepended to every subject the proxy computes.
    #[serde(default = "default_subject_prefix")]
    pub subject_prefix: String,
    /// Discovery announcement ticker period.
    #[serde(default = "default_announce_interval_ms")]
    pub announce_interval_ms: u64,
    /// Budget for releasing every bus subscription on shutdown. Exceeding
    /// it is treated as a stuck shutdown and aborts the process.
    #[serde(default = "default_shutdown_timeout_ms")]
    pub shutdown_timeout_ms: u64,
    /// Queue group electing a single create-request handler among peers.
    #[serde(default = "default_create_queue_group")]
    pub create_queue_group: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            subject_prefix: default_subject_prefix(),
            announce_interval_ms: default_announce_interval_ms(),
            shutdown_timeout_ms: default_shutdown_timeout_ms(),
            create_queue_group: default_create_queue_group(),
        }
    }
}

impl Config {
    pub fn announce_interval(&self) -> Duration {
        Duration::from_millis(self.announce_interval_ms)
    }

    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_millis(self.shutdown_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::Config;
    use std::time::Duration;

    #[test]
    fn defaults_match_the_documented_table() {
        let config = Config::default();

        assert_eq!(config.subject_prefix, "ari.");
        assert_eq!(config.announce_interval(), Duration::from_secs(30));
        assert_eq!(config.shutdown_timeout(), Duration::from_millis(500));
        assert_eq!(config.create_queue_group, "ariproxy");
    }

    #[test]
    fn partial_documents_fill_in_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"subject_prefix": "tele."}"#).expect("config should decode");

        assert_eq!(config.subject_prefix, "tele.");
        assert_eq!(config.shutdown_timeout(), Duration::from_millis(500));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result: Result<Config, _> = serde_json::from_str(r#"{"subject_prefx": "tele."}"#);

        assert!(result.is_err());
    }
}
