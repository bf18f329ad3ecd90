//! Dialog resolution for engine events.

use crate::engine::EngineEvent;
use dialog_registry::DialogManager;
use std::collections::BTreeSet;

/// Dialogs interested in an event: the union of the bindings of every
/// resource the event references. The set form guarantees each dialog
/// receives one copy even when several of its resources appear in the same
/// event, and iteration order is stable.
pub(crate) fn dialogs_for_event(
    dialogs: &dyn DialogManager,
    event: &EngineEvent,
) -> BTreeSet<String> {
    let mut interested = BTreeSet::new();
    for key in &event.keys {
        interested.extend(dialogs.list(&key.id));
    }
    interested
}
