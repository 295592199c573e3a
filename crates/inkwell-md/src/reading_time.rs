//! Reading time estimation.

use serde::Serialize;

/// Estimated reading time for a piece of text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadingTime {
    /// Human-readable estimate, e.g. `3 min read`
    pub text: String,

    /// Exact reading time in minutes
    pub minutes: f64,

    /// Reading time in milliseconds, rounded
    pub time_ms: u64,

    /// Number of words counted
    pub words: usize,
}

/// Estimate how long `text` takes to read at `words_per_minute`.
///
/// The displayed minutes are rounded to two decimals and then up, so 151
/// words at 150 wpm read as `2 min read`.
pub fn reading_time(text: &str, words_per_minute: u32) -> ReadingTime {
    let words = count_words(text);
    let minutes = words as f64 / f64::from(words_per_minute.max(1));
    let displayed = ((minutes * 100.0).round() / 100.0).ceil() as u64;

    ReadingTime {
        text: format!("{displayed} min read"),
        minutes,
        time_ms: (minutes * 60_000.0).round() as u64,
        words,
    }
}

/// Count words in `text`.
///
/// A word is any run of non-whitespace, so a lone `-` or `#` counts. CJK
/// characters count as one word each.
pub fn count_words(text: &str) -> usize {
    let mut words = 0;
    let mut in_word = false;

    for c in text.chars() {
        if is_cjk(c) {
            words += usize::from(in_word) + 1;
            in_word = false;
        } else if c.is_whitespace() {
            words += usize::from(in_word);
            in_word = false;
        } else {
            in_word = true;
        }
    }

    words + usize::from(in_word)
}

fn is_cjk(c: char) -> bool {
    matches!(
        c,
        '\u{3040}'..='\u{30ff}'     // hiragana, katakana
            | '\u{3400}'..='\u{4dbf}' // CJK extension A
            | '\u{4e00}'..='\u{9fff}' // CJK unified ideographs
            | '\u{ac00}'..='\u{d7af}' // hangul syllables
            | '\u{f900}'..='\u{faff}' // CJK compatibility ideographs
    )
}
