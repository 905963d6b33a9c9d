//! The permanent, append-only game log.

use std::fmt;

use parley_core::{Recipient, Sender, TurnId};

/// One permanent transcript record.
///
/// Unlike a mailbox [`Observation`](parley_core::Observation), a log
/// entry keeps its original addressing: a broadcast is recorded once,
/// not once per recipient.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogEntry {
    /// Who sent the message.
    pub from: Sender,
    /// Who the message was addressed to.
    pub to: Recipient,
    /// The message body.
    pub text: String,
    /// The turn on which the message was routed.
    pub turn: TurnId,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[turn {}] {} -> {}: {}",
            self.turn, self.from, self.to, self.text
        )
    }
}

/// Append-only log of every loggable message routed during an episode.
///
/// Entries are never removed during an episode; the transcript is the
/// post-hoc record a display collaborator renders after play ends.
#[derive(Clone, Debug, Default)]
pub struct Transcript {
    entries: Vec<LogEntry>,
}

impl Transcript {
    /// Create an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one record.
    pub fn append(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }

    /// All records, in append order.
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// The number of records.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the transcript holds no records.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Discard all records. Called only between episodes.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a LogEntry;
    type IntoIter = std::slice::Iter<'a, LogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
