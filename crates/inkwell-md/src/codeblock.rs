//! Fenced code block highlighting.

use pulldown_cmark::CodeBlockKind;
use pulldown_cmark_escape::escape_html;
use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

use crate::render::RenderError;

/// Fence tokens that name a grammar under a different token.
const LANGUAGE_ALIASES: &[(&str, &str)] = &[
    ("jsx", "js"),
    ("markup", "html"),
    ("svg", "xml"),
    ("shell", "sh"),
    ("console", "sh"),
];

/// A code block collected from the Markdown event stream.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CodeBlock {
    /// Language token declared on the fence, if any
    pub language: Option<String>,

    /// Source code content
    pub source: String,
}

impl CodeBlock {
    /// Create an empty code block for the given language.
    pub fn new(language: Option<String>) -> Self {
        Self {
            language,
            source: String::new(),
        }
    }

    /// Create an empty code block from a parser code block kind.
    pub fn from_kind(kind: &CodeBlockKind<'_>) -> Self {
        match kind {
            CodeBlockKind::Fenced(info) => Self::new(language_from_info(info).map(str::to_string)),
            CodeBlockKind::Indented => Self::new(None),
        }
    }

    /// Append text to the block source.
    pub fn push_str(&mut self, text: &str) {
        self.source.push_str(text);
    }

    /// Highlight the block and wrap it in `<pre>`/`<code>`.
    ///
    /// Both elements get a `language-<lang>` class naming the declared language,
    /// even when the fallback grammar did the highlighting.
    pub fn render(&self, syntaxes: &SyntaxSet, fallback: &str) -> Result<String, RenderError> {
        let language = self.language.as_deref();
        let syntax = resolve_syntax(syntaxes, language, fallback);

        let highlighted =
            highlight(syntaxes, syntax, &self.source).map_err(|e| RenderError::Highlight {
                language: language.unwrap_or(fallback).to_string(),
                message: e.to_string(),
            })?;

        Ok(match language {
            Some(lang) => {
                let mut class = String::new();
                let _ = escape_html(&mut class, lang);
                format!(
                    "<pre class=\"language-{class}\"><code class=\"language-{class}\">{highlighted}</code></pre>\n"
                )
            }
            None => format!("<pre><code>{highlighted}</code></pre>\n"),
        })
    }
}

/// First word of a fence info string, if any.
pub fn language_from_info(info: &str) -> Option<&str> {
    info.split_whitespace().next()
}

/// Look up the grammar for a language token.
pub fn find_syntax<'s>(syntaxes: &'s SyntaxSet, language: &str) -> Option<&'s SyntaxReference> {
    let token = LANGUAGE_ALIASES
        .iter()
        .find(|(alias, _)| alias.eq_ignore_ascii_case(language))
        .map(|(_, target)| *target)
        .unwrap_or(language);

    syntaxes.find_syntax_by_token(token)
}

/// Grammar for a block: the declared language, else the fallback, else plain text.
pub fn resolve_syntax<'s>(
    syntaxes: &'s SyntaxSet,
    language: Option<&str>,
    fallback: &str,
) -> &'s SyntaxReference {
    if let Some(syntax) = language.and_then(|lang| find_syntax(syntaxes, lang)) {
        return syntax;
    }

    tracing::trace!(?language, fallback, "Using fallback grammar for code block");

    find_syntax(syntaxes, fallback).unwrap_or_else(|| syntaxes.find_syntax_plain_text())
}

fn highlight(
    syntaxes: &SyntaxSet,
    syntax: &SyntaxReference,
    source: &str,
) -> Result<String, syntect::Error> {
    let mut generator =
        ClassedHTMLGenerator::new_with_class_style(syntax, syntaxes, ClassStyle::Spaced);

    for line in LinesWithEndings::from(source) {
        generator.parse_html_for_line_which_includes_newline(line)?;
    }

    Ok(generator.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::LazyLock;

    static SYNTAXES: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);

    #[test]
    fn parses_language_token() {
        assert_eq!(language_from_info("rust"), Some("rust"));
        assert_eq!(language_from_info("js title=app.js"), Some("js"));
        assert_eq!(language_from_info(""), None);
        assert_eq!(language_from_info("   "), None);
    }

    #[test]
    fn finds_grammar_by_token_and_alias() {
        assert_eq!(find_syntax(&SYNTAXES, "rust").unwrap().name, "Rust");
        assert_eq!(find_syntax(&SYNTAXES, "js").unwrap().name, "JavaScript");
        assert_eq!(find_syntax(&SYNTAXES, "jsx").unwrap().name, "JavaScript");
        assert!(find_syntax(&SYNTAXES, "made-up-lang").is_none());
    }

    #[test]
    fn unknown_language_falls_back() {
        let syntax = resolve_syntax(&SYNTAXES, Some("made-up-lang"), "html");

        assert_eq!(syntax.name, "HTML");
    }

    #[test]
    fn missing_fallback_uses_plain_text() {
        let syntax = resolve_syntax(&SYNTAXES, Some("made-up-lang"), "also-made-up");

        assert_eq!(syntax.name, "Plain Text");
    }

    #[test]
    fn renders_declared_language_class() {
        let mut block = CodeBlock::new(Some("rust".to_string()));
        block.push_str("fn main() {}\n");

        let html = block.render(&SYNTAXES, "html").unwrap();

        assert!(html.starts_with(r#"<pre class="language-rust"><code class="language-rust">"#));
        assert!(html.ends_with("</code></pre>\n"));
        assert!(html.contains("<span class="));
    }

    #[test]
    fn keeps_declared_class_for_unknown_language() {
        let mut block = CodeBlock::new(Some("made-up-lang".to_string()));
        block.push_str("<b>bold</b>\n");

        let html = block.render(&SYNTAXES, "html").unwrap();

        assert!(html.starts_with(
            r#"<pre class="language-made-up-lang"><code class="language-made-up-lang">"#
        ));
        assert!(!html.contains("<b>bold</b>"));
    }

    #[test]
    fn escapes_declared_language_in_class() {
        let block = CodeBlock::new(Some("a\"b".to_string()));

        let html = block.render(&SYNTAXES, "html").unwrap();

        assert!(html.starts_with(r#"<pre class="language-a&quot;b">"#));
    }

    #[test]
    fn block_without_language_has_no_class() {
        let mut block = CodeBlock::from_kind(&CodeBlockKind::Indented);
        block.push_str("plain\n");

        let html = block.render(&SYNTAXES, "html").unwrap();

        assert!(html.starts_with("<pre><code>"));
    }
}
