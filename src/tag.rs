//! Causality tags.
//!
//! A [`Tag`] identifies the external cause behind a chain of pushes. The
//! substrate threads tags through unchanged — it never inspects or rewrites
//! them — so producers are free to use any correlation scheme they like.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque causality token attached to a push.
///
/// Tags travel alongside values so a consumer can correlate an effect with
/// the push that caused it. Every push carries `Option<Tag>`; an absent tag
/// means the producer did not care to correlate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tag {
    /// Textual correlation token (request IDs, trace IDs).
    Text(String),
    /// Numeric correlation token (sequence numbers, timestamps).
    Num(u64),
}

impl From<&str> for Tag {
    fn from(s: &str) -> Self {
        Tag::Text(s.to_owned())
    }
}

impl From<String> for Tag {
    fn from(s: String) -> Self {
        Tag::Text(s)
    }
}

impl From<u64> for Tag {
    fn from(n: u64) -> Self {
        Tag::Num(n)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tag::Text(s) => f.write_str(s),
            Tag::Num(n) => write!(f, "{}", n),
        }
    }
}
