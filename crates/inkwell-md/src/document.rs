//! The rendered document record and the generated module around it.

use serde::Serialize;

/// Extension a file identifier needs to be transformed.
pub const MARKDOWN_EXTENSION: &str = ".md";

/// The record a generated module exports by default.
///
/// Serialized in field order; `title` and `description` are left out when
/// absent while `date` is written as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// File name up to its first `.`
    pub slug: String,

    /// Rendered HTML of the content after the excerpt separator
    pub html: String,

    /// Long-form date, e.g. `Friday, January 1, 2021`
    pub date: Option<String>,

    /// Raw Markdown before the excerpt separator
    pub excerpt: String,

    pub tags: Vec<String>,

    /// Reading time estimate, e.g. `3 min read`
    pub print_reading_time: String,
}

/// Source map returned with every module. Always empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SourceMap {
    pub mappings: String,
}

/// A generated module and its source map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransformOutput {
    /// Module source with the document as its default export
    pub code: String,

    pub map: SourceMap,
}

impl Document {
    /// Serialize the record as a module with a default export.
    pub fn to_module(&self) -> Result<TransformOutput, serde_json::Error> {
        let literal = serde_json::to_string(self)?;

        Ok(TransformOutput {
            code: format!("export default {literal}"),
            map: SourceMap::default(),
        })
    }
}

/// Whether a file identifier names a Markdown file.
pub fn is_markdown(id: &str) -> bool {
    id.ends_with(MARKDOWN_EXTENSION)
}

/// Slug for a file identifier: the base file name up to its first `.`.
///
/// `posts/notes.v2.md` has slug `notes`.
pub fn slug_from_id(id: &str) -> &str {
    let file_name = id.rsplit(['/', '\\']).next().unwrap_or(id);
    file_name.split('.').next().unwrap_or(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn checks_extension() {
        assert!(is_markdown("posts/hello.md"));
        assert!(is_markdown(".md"));
        assert!(!is_markdown("posts/hello.MD"));
        assert!(!is_markdown("posts/hello.mdx"));
        assert!(!is_markdown("posts/hello.md.js"));
        assert!(!is_markdown("posts/hello.md?raw"));
    }

    #[test]
    fn derives_slug() {
        assert_eq!(slug_from_id("2021-01-01-hello-world.md"), "2021-01-01-hello-world");
        assert_eq!(slug_from_id("notes.v2.md"), "notes");
        assert_eq!(slug_from_id("/site/posts/notes.v2.md"), "notes");
        assert_eq!(slug_from_id("C:\\site\\posts\\hello.md"), "hello");
        assert_eq!(slug_from_id("v1.2/readme.md"), "readme");
    }

    #[test]
    fn serializes_in_record_order() {
        let doc = Document {
            title: Some("Hello".to_string()),
            description: None,
            slug: "hello".to_string(),
            html: "<p>Hi</p>\n".to_string(),
            date: None,
            excerpt: String::new(),
            tags: vec!["a".to_string()],
            print_reading_time: "1 min read".to_string(),
        };

        let output = doc.to_module().unwrap();

        assert_eq!(
            output.code,
            r#"export default {"title":"Hello","slug":"hello","html":"<p>Hi</p>\n","date":null,"excerpt":"","tags":["a"],"printReadingTime":"1 min read"}"#
        );
        assert_eq!(output.map, SourceMap::default());
        assert_eq!(output.map.mappings, "");
    }
}
