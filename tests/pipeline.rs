//! End-to-end passes over the request pipeline: raw input through
//! sanitization and query construction, a full rhyme classification run over
//! storage-shaped rows, and seeded excerpt selection.

use diwan_core::{
    build_ts_query, classify, excerpt, process, sanitize, MatchType, RhymeStatRow,
    MAX_EXCERPT_CHARS,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn search_input_to_ts_query() {
    let raw = "  البحث عن: الحب! 123 ";
    let sanitized = sanitize(raw);
    assert_eq!(sanitized, "البحث عن الحب");

    let ts_query = build_ts_query(&sanitized, MatchType::All);
    assert_eq!(ts_query, "البحث & عن & الحب");
}

#[test]
fn garbage_input_short_circuits_to_no_search() {
    let sanitized = sanitize("SELECT * FROM poems; -- 42");
    assert_eq!(sanitized, "");
    assert_eq!(build_ts_query(&sanitized, MatchType::All), "");
}

#[test]
fn classification_pass_over_storage_rows() {
    // Rows as the storage layer hands them over, spelling inconsistencies
    // and all. The last row is unrecognizable and must vanish silently.
    let rows: Vec<RhymeStatRow> = serde_json::from_str(
        r#"[
            {"id": 1, "slug": "kaf-1", "pattern": "(الكاف)", "poems_count": 5, "poets_count": 2},
            {"id": 2, "slug": "lam-1", "pattern": "اللام", "poems_count": 9, "poets_count": 4},
            {"id": 3, "slug": "kaf-2", "pattern": "كاف", "poems_count": 3, "poets_count": 1},
            {"id": 4, "slug": "alif-1", "pattern": "الألف", "poems_count": 7, "poets_count": 3},
            {"id": 5, "slug": "junk-1", "pattern": "قافية مجهولة", "poems_count": 2, "poets_count": 1}
        ]"#,
    )
    .unwrap();

    let groups = classify(&rows).unwrap();

    let names: Vec<&str> = groups.iter().map(|g| g.letter_name.as_str()).collect();
    assert_eq!(names, ["ألف", "كاف", "لام"]);

    let kaf = groups.iter().find(|g| g.letter_name == "كاف").unwrap();
    assert_eq!(kaf.id, 1);
    assert_eq!(kaf.slug, "kaf-1");
    assert_eq!(kaf.poems_count, 8);
    assert_eq!(kaf.poets_count, 3);
    assert_eq!(kaf.total_usage, 11);

    let total: u64 = groups.iter().map(|g| g.total_usage).sum();
    assert_eq!(total, 11 + 13 + 10);
}

#[test]
fn poem_detail_view() {
    let raw = "قِفا نَبكِ مِن ذِكرى حَبيبٍ وَمَنزِلِ*بِسِقطِ اللِوى بَينَ الدَخولِ فَحَومَلِ\
               *فَتوضِحَ فَالمِقراةِ لَم يَعفُ رَسمُها*لِما نَسَجَتها مِن جَنوبٍ وَشَمأَلِ";
    let poem = process(raw);

    assert_eq!(poem.verse_count, 2);
    assert_eq!(poem.read_time, "دقيقة واحدة");
    assert!(!poem.sample.contains('\u{064E}'), "sample kept tashkeel");
    assert!(!poem.keywords.contains(' '), "keywords kept raw spaces");
    assert!(poem.keywords.contains("حبيب"));
}

#[test]
fn seeded_excerpt_is_deterministic() {
    let raw = "س1*ع1*س2*ع2*س3*ع3";

    let mut a = StdRng::seed_from_u64(42);
    let mut b = StdRng::seed_from_u64(42);
    let first = excerpt(raw, "امرؤ القيس", MAX_EXCERPT_CHARS, &mut a).unwrap();
    let second = excerpt(raw, "امرؤ القيس", MAX_EXCERPT_CHARS, &mut b).unwrap();

    assert_eq!(first, second);
    assert!(first.ends_with("امرؤ القيس"));
}
