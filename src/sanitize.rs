//! Search input sanitization
//!
//! User-supplied search text is untrusted and frequently mixes Arabic with
//! Latin letters, digits, and punctuation. Everything outside the Arabic
//! blocks is dropped before the query ever reaches the full-text engine.

/// Check if a character belongs to the Arabic Unicode blocks used by the
/// corpus (Arabic, Arabic Supplement, Arabic Extended-A).
#[inline]
pub fn is_arabic_letter(c: char) -> bool {
    let code = c as u32;
    (0x0600..=0x06FF).contains(&code)
        || (0x0750..=0x077F).contains(&code)
        || (0x08A0..=0x08FF).contains(&code)
}

/// Strip everything but Arabic letters and whitespace, collapse whitespace
/// runs to a single space, and trim the ends.
///
/// Total over all inputs: fully non-Arabic text yields `""`. Idempotent.
pub fn sanitize(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut last_was_space = true; // start true to skip leading whitespace

    for c in input.chars() {
        if c.is_whitespace() {
            if !last_was_space {
                result.push(' ');
                last_was_space = true;
            }
            continue;
        }

        if is_arabic_letter(c) {
            result.push(c);
            last_was_space = false;
        }
    }

    if result.ends_with(' ') {
        result.pop();
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_arabic_only() {
        assert_eq!(sanitize("hello علي! 123"), "علي");
        assert_eq!(sanitize("علي حسن"), "علي حسن");
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(sanitize("  علي \t\n  حسن  "), "علي حسن");
    }

    #[test]
    fn test_empty_and_non_arabic() {
        assert_eq!(sanitize(""), "");
        assert_eq!(sanitize("only latin, 42 %$"), "");
        assert_eq!(sanitize("   \n\t "), "");
    }

    #[test]
    fn test_keeps_diacritics() {
        // Tashkeel sits inside the Arabic block and survives sanitization;
        // stripping it is the content processor's job, not the sanitizer's.
        assert_eq!(sanitize("الحُبُّ"), "الحُبُّ");
    }

    #[test]
    fn test_idempotent() {
        for s in ["", "علي  حسن", "abc علي def", "قفا نبكِ من ذكرى"] {
            let once = sanitize(s);
            assert_eq!(sanitize(&once), once);
        }
    }
}
