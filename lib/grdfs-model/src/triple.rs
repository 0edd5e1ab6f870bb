use crate::KeyId;
use bitflags::bitflags;

bitflags! {
    /// Per-triple bitset. Currently a single bit, kept as a bitset rather
    /// than a bool so a future flag (e.g. "axiomatic") has somewhere to go
    /// without changing every call site.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TripleFlags: u8 {
        /// The triple was produced by rule firing, not read from input.
        const ENTAILED = 0b0000_0001;
    }
}

/// A fully-resolved `(subject, predicate, object)` statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triple {
    pub subject: KeyId,
    pub predicate: KeyId,
    pub object: KeyId,
}

impl Triple {
    #[must_use]
    pub const fn new(subject: KeyId, predicate: KeyId, object: KeyId) -> Self {
        Self {
            subject,
            predicate,
            object,
        }
    }
}
