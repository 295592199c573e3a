//! Markdown to data module transform.
//!
//! This crate turns a Markdown file with YAML frontmatter into the source of a
//! generated module whose default export describes the rendered document:
//! HTML, excerpt, tags, a formatted date and an estimated reading time.

pub mod codeblock;
pub mod config;
pub mod date;
pub mod document;
pub mod emoji;
pub mod excerpt;
pub mod frontmatter;
pub mod links;
pub mod reading_time;
pub mod render;
pub mod transform;

pub use config::RenderConfig;
pub use date::DateError;
pub use document::{is_markdown, slug_from_id, Document, SourceMap, TransformOutput};
pub use frontmatter::{Frontmatter, FrontmatterError, Tags};
pub use reading_time::{reading_time, ReadingTime};
pub use render::{RenderError, Renderer};
pub use transform::{render_document, transform, TransformError};
