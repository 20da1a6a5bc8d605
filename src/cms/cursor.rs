//! Last-seen-document cursor
//!
//! A cursor marks the highest document id a client has already observed.
//! Absent or malformed external tokens collapse to the sentinel, which sits
//! below every valid id.

use std::fmt;

use super::types::DocumentId;

/// Opaque marker of the highest document id a client has seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Cursor(i64);

impl Cursor {
    /// Sentinel meaning "no prior visit".
    pub const NONE: Cursor = Cursor(-1);

    /// Cursor positioned at a concrete document id.
    pub fn from_id(id: DocumentId) -> Self {
        Cursor(id as i64)
    }

    /// Parse an external token such as a cookie value.
    ///
    /// Anything that is not an integer means "no prior visit".
    pub fn parse(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.trim().parse::<i64>().ok())
            .map(Cursor)
            .unwrap_or(Cursor::NONE)
    }

    /// Whether a document id lies beyond this cursor.
    pub fn admits(&self, id: DocumentId) -> bool {
        self.0 < 0 || id > self.0 as u64
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
