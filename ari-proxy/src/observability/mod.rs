//! Observability conventions.
//!
//! The crate emits `tracing` events with a stable `event` name drawn from
//! [`events`] and a `component` field naming the emitting module. A global
//! subscriber is never installed here; binaries and tests own that
//! decision.

pub(crate) mod events;
