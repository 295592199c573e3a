//! Emoji shortcode substitution.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

// Greedy: spans from the first to the last colon on a line.
static SPAN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":.*:").expect("Invalid emoji span regex"));

static SHORTCODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r":([a-zA-Z0-9_\-+]+):").expect("Invalid emoji shortcode regex")
});

/// Replace `:shortcode:` tokens with emoji glyphs.
///
/// Each line's colon span is scanned left to right. Unknown shortcodes are
/// left as written but still consume both colons, so `:foo:smile:` is not
/// rewritten.
pub fn emojify(text: &str) -> Cow<'_, str> {
    SPAN_RE.replace_all(text, |caps: &Captures| replace_shortcodes(&caps[0]).into_owned())
}

fn replace_shortcodes(span: &str) -> Cow<'_, str> {
    SHORTCODE_RE.replace_all(span, |caps: &Captures| {
        match emojis::get_by_shortcode(&caps[1]) {
            Some(emoji) => emoji.as_str().to_string(),
            None => caps[0].to_string(),
        }
    })
}
