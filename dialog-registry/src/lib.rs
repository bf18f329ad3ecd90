/********************************************************************************
 * Copyright (c) 2026 Contributors to the Eclipse Foundation
 *
 * See the NOTICE file(s) distributed with this work for additional
 * information regarding copyright ownership.
 *
 * This program and the accompanying materials are made available under the
 * terms of the Apache License Version 2.0 which is available at
 * https://www.apache.org/licenses/LICENSE-2.0
 *
 * SPDX-License-Identifier: Apache-2.0
 ********************************************************************************/

//! # dialog-registry
//!
//! Tracks which dialogs are interested in which engine resources. A dialog is
//! an external correlation identifier: remote callers subscribe a dialog to a
//! set of channels, bridges, playbacks, and so on, and the proxy then mirrors
//! every event touching one of those resources onto the dialog's own event
//! subject.
//!
//! The relation is many-to-many in both directions and entirely
//! process-local; bindings do not survive a restart. [`MemoryDialogRegistry`]
//! is the default implementation. The [`DialogManager`] trait is the seam for
//! substituting a shared (for example distributed) store.

use parking_lot::RwLock;
use std::collections::{BTreeSet, HashMap, HashSet};

/// Binding store consulted on every event fan-out and mutated by the
/// subscribe/unsubscribe request paths.
///
/// All operations are idempotent. Lookups for unknown resources return the
/// empty set rather than an error.
pub trait DialogManager: Send + Sync {
    /// Associates a dialog with a resource. Binding the same pair twice is a
    /// no-op.
    fn bind(&self, dialog_id: &str, resource_id: &str);

    /// Removes one dialog-resource association, if present.
    fn unbind(&self, dialog_id: &str, resource_id: &str);

    /// Returns every dialog currently bound to the given resource, in stable
    /// order.
    fn list(&self, resource_id: &str) -> BTreeSet<String>;

    /// Drops a dialog and all of its resource associations.
    fn remove(&self, dialog_id: &str);
}

#[derive(Default)]
struct Bindings {
    // Forward and reverse indexes over the same relation; both are kept in
    // step under a single lock.
    by_resource: HashMap<String, HashSet<String>>,
    by_dialog: HashMap<String, HashSet<String>>,
}

/// In-memory [`DialogManager`].
#[derive(Default)]
pub struct MemoryDialogRegistry {
    bindings: RwLock<Bindings>,
}

impl MemoryDialogRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of dialogs with at least one binding.
    pub fn dialog_count(&self) -> usize {
        self.bindings.read().by_dialog.len()
    }
}

impl DialogManager for MemoryDialogRegistry {
    fn bind(&self, dialog_id: &str, resource_id: &str) {
        let mut bindings = self.bindings.write();
        bindings
            .by_resource
            .entry(resource_id.to_string())
            .or_default()
            .insert(dialog_id.to_string());
        bindings
            .by_dialog
            .entry(dialog_id.to_string())
            .or_default()
            .insert(resource_id.to_string());
    }

    fn unbind(&self, dialog_id: &str, resource_id: &str) {
        let mut bindings = self.bindings.write();
        if let Some(dialogs) = bindings.by_resource.get_mut(resource_id) {
            dialogs.remove(dialog_id);
            if dialogs.is_empty() {
                bindings.by_resource.remove(resource_id);
            }
        }
        if let Some(resources) = bindings.by_dialog.get_mut(dialog_id) {
            resources.remove(resource_id);
            if resources.is_empty() {
                bindings.by_dialog.remove(dialog_id);
            }
        }
    }

    fn list(&self, resource_id: &str) -> BTreeSet<String> {
        self.bindings
            .read()
            .by_resource
            .get(resource_id)
            .map(|dialogs| dialogs.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn remove(&self, dialog_id: &str) {
        let mut bindings = self.bindings.write();
        let Some(resources) = bindings.by_dialog.remove(dialog_id) else {
            return;
        };
        for resource_id in resources {
            if let Some(dialogs) = bindings.by_resource.get_mut(&resource_id) {
                dialogs.remove(dialog_id);
                if dialogs.is_empty() {
                    bindings.by_resource.remove(&resource_id);
                }
            }
        }
    }
}
