//! Per-run shared state.

use crate::bus::BusConnection;
use crate::engine::EngineClient;
use crate::wire::{subject, Announcement, Metadata};
use dialog_registry::DialogManager;
use std::sync::Arc;

/// Everything the announcer, event pump, and request handlers share for one
/// run of the server. Built once boot has succeeded; every field is
/// write-once and read-only thereafter, so it is shared via `Arc` without
/// locks.
pub(crate) struct ProxyContext {
    pub application: String,
    pub node: String,
    pub subject_prefix: String,
    pub engine: Arc<dyn EngineClient>,
    pub bus: Arc<dyn BusConnection>,
    pub dialog: Arc<dyn DialogManager>,
}

impl ProxyContext {
    /// Ownership coordinates for replies that expose a concrete resource.
    pub fn metadata(&self, dialog: Option<&str>) -> Metadata {
        Metadata {
            application: self.application.clone(),
            node: self.node.clone(),
            dialog: dialog.map(str::to_string),
        }
    }

    pub fn announcement(&self) -> Announcement {
        Announcement {
            node: self.node.clone(),
            application: self.application.clone(),
        }
    }

    /// Canonical event subject for this proxy's `(application, node)` pair.
    pub fn event_subject(&self) -> String {
        subject::event(&self.subject_prefix, &self.application, &self.node)
    }
}
