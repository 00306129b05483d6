//! Diwan - classical Arabic poetry corpus core
//!
//! Pure domain logic behind the poetry content API: input sanitization,
//! full-text query construction, rhyme-letter classification, and poem
//! content processing. Route handlers, storage, and the full-text engine
//! live in the consuming service.

pub mod error;
pub mod poem;
pub mod query;
pub mod rhyme;
pub mod sanitize;

pub use error::{DiwanError, Result};
pub use poem::{
    excerpt, format_read_time, process, strip_tashkeel, ProcessedPoem, Verse, MAX_EXCERPT_CHARS,
};
pub use query::{build_ts_query, MatchType};
pub use rhyme::{classify, collation_key, RhymeGroup, RhymeStatRow, LETTER_TABLE};
pub use sanitize::{is_arabic_letter, sanitize};
