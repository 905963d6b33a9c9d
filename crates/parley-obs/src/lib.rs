//! Observation routing and transcript logging for Parley episodes.
//!
//! Defines the per-player mailboxes, the broadcast/private message
//! router, and the permanent append-only transcript that records an
//! episode for post-hoc inspection.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod mailbox;
pub mod router;
pub mod transcript;

pub use mailbox::Mailboxes;
pub use router::Router;
pub use transcript::{LogEntry, Transcript};
