//! Error types for diwan-core

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DiwanError>;

/// Failures surfaced to route handlers. Unclassifiable rhyme patterns are
/// deliberately not represented here: they are dropped, not raised.
#[derive(Error, Debug)]
pub enum DiwanError {
    #[error("Insufficient content: {0}")]
    InsufficientContent(String),

    #[error("Excerpt is {len} characters, limit is {limit}")]
    ExcerptTooLong { len: usize, limit: usize },

    #[error("Rhyme group for letter '{0}' has no rows")]
    EmptyRhymeGroup(String),
}

impl serde::Serialize for DiwanError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
