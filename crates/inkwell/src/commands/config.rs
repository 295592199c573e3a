//! Configuration file loading (inkwell.toml).

use std::fs;
use std::path::Path;

use anyhow::Result;
use inkwell_md::RenderConfig;
use serde::Deserialize;

/// Configuration file structure (inkwell.toml).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output")]
    pub dir: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output(),
        }
    }
}

fn default_output() -> String {
    "dist".to_string()
}

/// Load configuration from `path` if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        let config: ConfigFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
        tracing::debug!("Loaded config from {}", path.display());
        return Ok(config);
    }
    Ok(ConfigFile::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_uses_defaults() {
        let temp = tempdir().unwrap();

        let config = load_config(&temp.path().join("inkwell.toml")).unwrap();

        assert_eq!(config.render, RenderConfig::default());
        assert_eq!(config.output.dir, "dist");
    }

    #[test]
    fn reads_render_and_output_sections() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("inkwell.toml");
        fs::write(
            &path,
            "[render]\nwords_per_minute = 200\n\n[output]\ndir = \"generated\"\n",
        )
        .unwrap();

        let config = load_config(&path).unwrap();

        assert_eq!(config.render.words_per_minute, 200);
        assert_eq!(config.render.excerpt_separator, "<!-- more -->");
        assert_eq!(config.output.dir, "generated");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("inkwell.toml");
        fs::write(&path, "[render\nwords_per_minute = ").unwrap();

        assert!(load_config(&path).is_err());
    }
}
