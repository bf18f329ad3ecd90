//! Control-plane layer.
//!
//! Owns the run lifecycle around the data plane: discovery announcements
//! and the shutdown accounting that guarantees every bus subscription is
//! released before the supervisor returns.

pub(crate) mod announcer;
pub(crate) mod close_group;
