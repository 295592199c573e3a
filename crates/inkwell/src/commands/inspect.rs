//! Print a document record as JSON.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use inkwell_md::{Document, Renderer};

use crate::commands::config::load_config;

/// Run the inspect command.
pub fn run(config_path: &Path, file: &Path) -> Result<()> {
    let file_config = load_config(config_path)?;
    let renderer = Renderer::new(file_config.render);

    let document = inspect_file(&renderer, file)?;
    let json = serde_json::to_string_pretty(&document).context("Failed to serialize document")?;
    println!("{json}");

    Ok(())
}

/// Build the document record for `file`.
fn inspect_file(renderer: &Renderer, file: &Path) -> Result<Document> {
    let id = file.to_string_lossy();
    let source =
        fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))?;

    inkwell_md::render_document(&source, &id, renderer)
        .with_context(|| format!("Failed to transform {}", file.display()))?
        .with_context(|| format!("{} is not a Markdown file", file.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn inspects_markdown_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("post.md");
        fs::write(&path, "---\ndate: 2021-01-01\n---\n[top](#top)\n").unwrap();

        let doc = inspect_file(&Renderer::default(), &path).unwrap();

        assert_eq!(doc.slug, "post");
        assert_eq!(doc.date.as_deref(), Some("Friday, January 1, 2021"));
        assert!(doc.html.contains("document.location.hash='top'"));
    }

    #[test]
    fn rejects_other_files() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("post.txt");
        fs::write(&path, "text").unwrap();

        let err = inspect_file(&Renderer::default(), &path).unwrap_err();

        assert!(err.to_string().contains("is not a Markdown file"));
    }
}
