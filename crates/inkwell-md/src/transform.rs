//! Markdown file transform.

use crate::date::{self, DateError};
use crate::document::{is_markdown, slug_from_id, Document, TransformOutput};
use crate::emoji::emojify;
use crate::excerpt::split_excerpt;
use crate::frontmatter::{extract_frontmatter, FrontmatterError};
use crate::reading_time::reading_time;
use crate::render::{RenderError, Renderer};

/// Errors that can occur when transforming a Markdown file.
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    #[error("Frontmatter error: {0}")]
    Frontmatter(#[from] FrontmatterError),

    #[error("Date error: {0}")]
    Date(#[from] DateError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Failed to serialize module: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Build the document record for a Markdown file.
///
/// Returns `Ok(None)` when `id` does not end in `.md`.
pub fn render_document(
    source: &str,
    id: &str,
    renderer: &Renderer,
) -> Result<Option<Document>, TransformError> {
    if !is_markdown(id) {
        tracing::trace!(id, "Skipping non-Markdown file");
        return Ok(None);
    }

    let config = renderer.config();
    let (frontmatter, body) = extract_frontmatter(source)?;
    let (excerpt, content) = split_excerpt(body, &config.excerpt_separator);

    let content = emojify(content);
    let html = renderer.render(&content)?;
    let estimate = reading_time(&content, config.words_per_minute);

    let date = frontmatter
        .date
        .as_deref()
        .map(date::long_date)
        .transpose()?;

    tracing::debug!(id, words = estimate.words, "Rendered Markdown document");

    Ok(Some(Document {
        tags: frontmatter.tag_list(),
        title: frontmatter.title,
        description: frontmatter.description,
        slug: slug_from_id(id).to_string(),
        html,
        date,
        excerpt: excerpt.to_string(),
        print_reading_time: estimate.text,
    }))
}

/// Transform a Markdown file into a module whose default export is its
/// [`Document`].
///
/// Returns `Ok(None)` when `id` does not end in `.md`.
pub fn transform(
    source: &str,
    id: &str,
    renderer: &Renderer,
) -> Result<Option<TransformOutput>, TransformError> {
    let Some(document) = render_document(source, id, renderer)? else {
        return Ok(None);
    };

    Ok(Some(document.to_module()?))
}
