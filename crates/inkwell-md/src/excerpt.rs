//! Excerpt splitting.

/// Split `body` into excerpt and content at the first `separator`.
///
/// The separator itself is dropped. Any later separators stay in the content.
/// Without a separator the excerpt is empty and the content is the whole body.
pub fn split_excerpt<'a>(body: &'a str, separator: &str) -> (&'a str, &'a str) {
    if separator.is_empty() {
        return ("", body);
    }

    body.split_once(separator).unwrap_or(("", body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EXCERPT_SEPARATOR;

    #[test]
    fn no_separator_keeps_whole_body() {
        let body = "Intro.\n\nMore text.";

        assert_eq!(split_excerpt(body, EXCERPT_SEPARATOR), ("", body));
    }

    #[test]
    fn splits_on_separator() {
        let body = "Intro paragraph.\n<!-- more -->\nRest of post.";

        let (excerpt, content) = split_excerpt(body, EXCERPT_SEPARATOR);

        assert_eq!(excerpt, "Intro paragraph.\n");
        assert_eq!(content, "\nRest of post.");
    }

    #[test]
    fn only_first_separator_splits() {
        let body = "one<!-- more -->two<!-- more -->three";

        let (excerpt, content) = split_excerpt(body, EXCERPT_SEPARATOR);

        assert_eq!(excerpt, "one");
        assert_eq!(content, "two<!-- more -->three");
    }

    #[test]
    fn separator_match_is_exact() {
        let body = "one<!--more-->two<!--  more -->three";

        assert_eq!(split_excerpt(body, EXCERPT_SEPARATOR), ("", body));
    }
}
