//! Renderer configuration.

use serde::Deserialize;

/// Marker separating the excerpt from the rest of a post.
pub const EXCERPT_SEPARATOR: &str = "<!-- more -->";

/// Reading speed used for the reading time estimate.
pub const DEFAULT_WORDS_PER_MINUTE: u32 = 150;

/// Grammar used when a code block's language has no grammar of its own.
pub const DEFAULT_FALLBACK_LANGUAGE: &str = "html";

/// Settings shared by every transform call.
///
/// Loaded from the `[render]` table of `inkwell.toml`; every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Reading speed for the reading time estimate
    pub words_per_minute: u32,

    /// Marker splitting excerpt and content (matched exactly)
    pub excerpt_separator: String,

    /// Language whose grammar highlights code in unknown languages
    pub fallback_language: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
            excerpt_separator: EXCERPT_SEPARATOR.to_string(),
            fallback_language: DEFAULT_FALLBACK_LANGUAGE.to_string(),
        }
    }
}
