//! Poem content processing
//!
//! A poem is stored as a single string of hemistichs delimited by `*`. This
//! module turns that into verse pairs plus the derived presentation fields
//! (reading time, diacritic-free sample and keyword bag), and picks bounded
//! random excerpts for syndication.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{DiwanError, Result};

/// Longest excerpt the syndication targets accept, in characters.
pub const MAX_EXCERPT_CHARS: usize = 280;

/// Reading speed used to derive `read_time`, in hemistichs per minute.
const LINES_PER_MINUTE: usize = 15;

/// Cap on the rendered reading time, in minutes.
const MAX_READ_MINUTES: usize = 17;

/// One verse: first and second hemistich. `ajuz` is empty when the stored
/// content ends on an unpaired line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    pub sadr: String,
    pub ajuz: String,
}

/// Read-only view of a poem's content, built fresh per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessedPoem {
    pub verses: Vec<Verse>,
    pub verse_count: usize,
    pub sample: String,
    pub keywords: String,
    pub read_time: String,
}

/// Strip Arabic diacritical marks (tashkeel) from a string.
pub fn strip_tashkeel(s: &str) -> String {
    s.chars()
        .filter(|&c| {
            !matches!(c,
                '\u{0610}'..='\u{061A}' | '\u{064B}'..='\u{065F}' | '\u{06D6}'..='\u{06ED}')
        })
        .collect()
}

/// Render a minute count with Arabic numeral-noun agreement: singular for 1,
/// dual for 2, counted plural for 3-10, singular-suffixed count above that.
pub fn format_read_time(minutes: usize) -> String {
    match minutes {
        1 => "دقيقة واحدة".to_string(),
        2 => "دقيقتان".to_string(),
        3..=10 => format!("{minutes} دقائق"),
        _ => format!("{minutes} دقيقة"),
    }
}

fn read_minutes(line_count: usize) -> usize {
    line_count.div_ceil(LINES_PER_MINUTE).min(MAX_READ_MINUTES)
}

/// Split stored poem content into verses and derive the presentation fields.
///
/// Stray `"` characters in the source data never reach output. An odd
/// trailing hemistich is kept, paired with an empty `ajuz`, rather than
/// dropped.
pub fn process(raw: &str) -> ProcessedPoem {
    let content = raw.replace('"', "");
    let lines: Vec<&str> = content.split('*').collect();

    let verses: Vec<Verse> = lines
        .chunks(2)
        .map(|pair| Verse {
            sadr: pair[0].to_string(),
            ajuz: pair.get(1).copied().unwrap_or("").to_string(),
        })
        .collect();

    let sample = strip_tashkeel(
        &lines.iter().take(3).copied().collect::<Vec<_>>().join(" * "),
    );

    // Naive keyword bag: every word of every line, comma-joined, no dedup.
    let keywords = strip_tashkeel(&lines.join(" ").replace(' ', ","));

    ProcessedPoem {
        verse_count: verses.len(),
        read_time: format_read_time(read_minutes(lines.len())),
        verses,
        sample,
        keywords,
    }
}

/// Pick a random verse pair from stored poem content and render it with the
/// poet's name for syndication.
///
/// Blank lines are dropped before pairing, and the start index is always
/// even, so the two lines shown are a matched sadr/ajuz pair. Fewer than two
/// usable lines is a hard precondition failure, and a result longer than
/// `max_chars` characters is rejected outright: truncating would cut
/// mid-word in Arabic script.
pub fn excerpt(
    raw: &str,
    poet_name: &str,
    max_chars: usize,
    rng: &mut impl Rng,
) -> Result<String> {
    let content = raw.replace('"', "");
    let lines: Vec<&str> = content
        .split('*')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.len() < 2 {
        return Err(DiwanError::InsufficientContent(format!(
            "excerpt needs at least 2 lines, found {}",
            lines.len()
        )));
    }

    let pair_count = lines.len() / 2;
    let start = rng.random_range(0..pair_count) * 2;

    let text = format!("{}\n{}\n{}", lines[start], lines[start + 1], poet_name);
    let text = text.replace('"', "");
    let text = text.trim().to_string();

    let len = text.chars().count();
    if len > max_chars {
        return Err(DiwanError::ExcerptTooLong {
            len,
            limit: max_chars,
        });
    }

    Ok(text)
}
