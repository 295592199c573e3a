//! Frontmatter extraction and parsing.

use serde::{Deserialize, Deserializer};
use serde_yaml::Value;

/// Parsed frontmatter from a Markdown file.
///
/// Only the keys the output record uses are kept; anything else in the block
/// is ignored.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Frontmatter {
    /// Post title
    #[serde(default, deserialize_with = "scalar_string")]
    pub title: Option<String>,

    /// Publication date, parsed later by [`crate::date`]
    #[serde(default, deserialize_with = "scalar_string")]
    pub date: Option<String>,

    /// Short description for listings and SEO
    #[serde(default, deserialize_with = "scalar_string")]
    pub description: Option<String>,

    /// Tags, either `"a, b"` or a YAML list
    #[serde(default)]
    pub tags: Option<Tags>,
}

/// The `tags` field as written in the frontmatter.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Tags {
    /// Comma-separated string
    Csv(String),
    /// YAML sequence of strings
    List(Vec<String>),
}

impl Tags {
    /// Trimmed tags in declaration order.
    ///
    /// A comma-separated string keeps empty entries between commas (`"a,,b"`
    /// has three tags) but an empty string has none.
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            Self::Csv(csv) if csv.is_empty() => Vec::new(),
            Self::Csv(csv) => csv.split(',').map(|tag| tag.trim().to_string()).collect(),
            Self::List(list) => list.iter().map(|tag| tag.trim().to_string()).collect(),
        }
    }
}

impl Frontmatter {
    /// Tags as an ordered list, empty when absent.
    pub fn tag_list(&self) -> Vec<String> {
        self.tags.as_ref().map(Tags::to_vec).unwrap_or_default()
    }
}

/// Accept strings, numbers and booleans as text; `title: 2021` is a title.
fn scalar_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected a scalar value, found {}",
            describe(&other)
        ))),
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
        _ => "a scalar",
    }
}

/// Extract frontmatter from Markdown content.
///
/// A block opens when the first line is exactly `---` and closes at the next
/// `---` line. Returns the parsed frontmatter and the text after the closing
/// line, untouched. Content without a block comes back as-is with empty
/// frontmatter.
pub fn extract_frontmatter(source: &str) -> Result<(Frontmatter, &str), FrontmatterError> {
    let (opener, rest) = source.split_once('\n').unwrap_or((source, ""));

    if opener.trim_end() != "---" {
        return Ok((Frontmatter::default(), source));
    }

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            let yaml = &rest[..offset];
            let remaining = &rest[offset + line.len()..];
            return Ok((parse_yaml(yaml)?, remaining));
        }
        offset += line.len();
    }

    Err(FrontmatterError::Unclosed)
}

fn parse_yaml(yaml: &str) -> Result<Frontmatter, FrontmatterError> {
    if yaml.trim().is_empty() {
        return Ok(Frontmatter::default());
    }

    let value: Value =
        serde_yaml::from_str(yaml).map_err(|e| FrontmatterError::InvalidYaml(e.to_string()))?;

    match value {
        Value::Null => Ok(Frontmatter::default()),
        Value::Mapping(_) => serde_yaml::from_value(value)
            .map_err(|e| FrontmatterError::InvalidYaml(e.to_string())),
        other => Err(FrontmatterError::NotAMapping(describe(&other))),
    }
}

/// Errors that can occur when parsing frontmatter.
#[derive(Debug, thiserror::Error)]
pub enum FrontmatterError {
    #[error("Unclosed frontmatter block - missing closing ---")]
    Unclosed,

    #[error("Invalid YAML in frontmatter: {0}")]
    InvalidYaml(String),

    #[error("Frontmatter must be a mapping, found {0}")]
    NotAMapping(&'static str),
}
