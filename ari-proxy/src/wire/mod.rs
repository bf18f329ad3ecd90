//! Wire layer.
//!
//! Pure data: the subject topology, the JSON request/reply envelopes, the
//! kind-specific payload shapes, and the raw event published on the event
//! plane. Nothing in this layer performs I/O.

pub mod envelope;
pub mod payloads;
pub mod raw_event;
pub mod subject;

pub use envelope::{Announcement, ErrorInfo, ErrorKind, Metadata, Request, ResourceKey, Response};
pub use raw_event::{Header, RawEvent};
