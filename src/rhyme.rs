//! Rhyme pattern classification
//!
//! Stored rhyme patterns are orthographically messy: wrapped in parentheses,
//! prefixed with the definite article, or spelled with a different hamza
//! seat. Classification normalizes each pattern and folds it into one of 29
//! canonical letter buckets for the public rhyme browse list.

use serde::{Deserialize, Serialize};

use crate::error::{DiwanError, Result};

/// One row of the rhyme statistics view, as fetched by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RhymeStatRow {
    pub id: i64,
    pub slug: String,
    pub pattern: String,
    pub poems_count: u64,
    pub poets_count: u64,
}

/// A canonical letter bucket with counts folded over every row classified
/// into it. `id` and `slug` identify the first such row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RhymeGroup {
    pub id: i64,
    pub slug: String,
    pub letter_name: String,
    pub poems_count: u64,
    pub poets_count: u64,
    pub total_usage: u64,
}

/// Canonical letter buckets in Arabic dictionary order, each owning the
/// spelling variants observed in stored patterns (with and without the
/// definite article, alternate hamza seats, clipped final hamza).
///
/// Variant sets are disjoint, so the first-match linear scan is unambiguous;
/// lookup stays a scan rather than a map because the table is defined once
/// and the lists are short.
pub const LETTER_TABLE: &[(&str, &[&str])] = &[
    ("ألف", &["ألف", "الف", "آلف", "الألف", "الالف"]),
    ("باء", &["باء", "با", "الباء"]),
    ("تاء", &["تاء", "تا", "التاء"]),
    ("ثاء", &["ثاء", "ثا", "الثاء"]),
    ("جيم", &["جيم", "الجيم"]),
    ("حاء", &["حاء", "حا", "الحاء"]),
    ("خاء", &["خاء", "خا", "الخاء"]),
    ("دال", &["دال", "الدال"]),
    ("ذال", &["ذال", "الذال"]),
    ("راء", &["راء", "را", "الراء"]),
    ("زاي", &["زاي", "زاى", "زين", "الزاي"]),
    ("سين", &["سين", "السين"]),
    ("شين", &["شين", "الشين"]),
    ("صاد", &["صاد", "الصاد"]),
    ("ضاد", &["ضاد", "الضاد"]),
    ("طاء", &["طاء", "طا", "الطاء"]),
    ("ظاء", &["ظاء", "ظا", "الظاء"]),
    ("عين", &["عين", "العين"]),
    ("غين", &["غين", "الغين"]),
    ("فاء", &["فاء", "فا", "الفاء"]),
    ("قاف", &["قاف", "القاف"]),
    ("كاف", &["كاف", "الكاف"]),
    ("لام", &["لام", "اللام"]),
    ("ميم", &["ميم", "الميم"]),
    ("نون", &["نون", "النون"]),
    ("هاء", &["هاء", "ها", "الهاء"]),
    ("همزة", &["همزة", "همزه", "الهمزة", "الهمزه"]),
    ("واو", &["واو", "الواو"]),
    ("ياء", &["ياء", "يا", "الياء"]),
];

/// Strip parentheses and a single leading definite article from a stored
/// rhyme pattern.
fn normalize_pattern(pattern: &str) -> String {
    let stripped: String = pattern.chars().filter(|c| *c != '(' && *c != ')').collect();
    let trimmed = stripped.trim();
    let trimmed = trimmed.strip_prefix("ال").unwrap_or(trimmed);
    trimmed.trim().to_string()
}

/// Position of a character in the Arabic alphabet for dictionary collation.
/// Hamza seats and alef variants collate as alef, alef maqsura as ya, ta
/// marbuta as ha; anything else sorts after the alphabet by codepoint.
fn letter_rank(c: char) -> u32 {
    match c {
        'ء' | 'أ' | 'إ' | 'آ' | 'ٱ' | 'ا' => 1,
        'ب' => 2,
        'ت' => 3,
        'ث' => 4,
        'ج' => 5,
        'ح' => 6,
        'خ' => 7,
        'د' => 8,
        'ذ' => 9,
        'ر' => 10,
        'ز' => 11,
        'س' => 12,
        'ش' => 13,
        'ص' => 14,
        'ض' => 15,
        'ط' => 16,
        'ظ' => 17,
        'ع' => 18,
        'غ' => 19,
        'ف' => 20,
        'ق' => 21,
        'ك' => 22,
        'ل' => 23,
        'م' => 24,
        'ن' => 25,
        'ة' | 'ه' => 26,
        'ؤ' | 'و' => 27,
        'ئ' | 'ى' | 'ي' => 28,
        other => 29 + other as u32,
    }
}

/// Arabic dictionary sort key, so that e.g. "ألف" sorts at the head of the
/// letter list instead of wherever its hamza seat lands in codepoint order.
pub fn collation_key(s: &str) -> Vec<u32> {
    s.chars().map(letter_rank).collect()
}

#[derive(Debug, Clone)]
struct BucketAcc {
    id: i64,
    slug: String,
    poems_count: u64,
    poets_count: u64,
    rows: usize,
}

/// Fold rhyme statistics rows into canonical letter groups.
///
/// Rows whose normalized pattern matches no bucket are dropped: malformed
/// spellings must not surface as a phantom bucket in the public list. A
/// bucket that exists with zero rows cannot arise from this fold; seeing one
/// is a programming defect and aborts loudly rather than emitting a
/// zero-count entry.
pub fn classify(rows: &[RhymeStatRow]) -> Result<Vec<RhymeGroup>> {
    let mut buckets: Vec<Option<BucketAcc>> = vec![None; LETTER_TABLE.len()];

    for row in rows {
        let normalized = normalize_pattern(&row.pattern);
        let Some(idx) = LETTER_TABLE
            .iter()
            .position(|(_, variants)| variants.contains(&normalized.as_str()))
        else {
            tracing::debug!(pattern = %row.pattern, "rhyme pattern matched no letter bucket");
            continue;
        };

        match &mut buckets[idx] {
            Some(acc) => {
                acc.poems_count += row.poems_count;
                acc.poets_count += row.poets_count;
                acc.rows += 1;
            }
            slot => {
                *slot = Some(BucketAcc {
                    id: row.id,
                    slug: row.slug.clone(),
                    poems_count: row.poems_count,
                    poets_count: row.poets_count,
                    rows: 1,
                });
            }
        }
    }

    let mut groups = Vec::new();
    for (i, acc) in buckets.into_iter().enumerate() {
        let Some(acc) = acc else { continue };
        let letter_name = LETTER_TABLE[i].0;

        if acc.rows == 0 {
            return Err(DiwanError::EmptyRhymeGroup(letter_name.to_string()));
        }

        groups.push(RhymeGroup {
            id: acc.id,
            slug: acc.slug,
            letter_name: letter_name.to_string(),
            poems_count: acc.poems_count,
            poets_count: acc.poets_count,
            total_usage: acc.poems_count + acc.poets_count,
        });
    }

    groups.sort_by(|a, b| collation_key(&a.letter_name).cmp(&collation_key(&b.letter_name)));
    Ok(groups)
}
