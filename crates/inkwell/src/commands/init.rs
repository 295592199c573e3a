//! Write a default configuration file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub fn run(config_path: &Path, yes: bool) -> Result<()> {
    if config_path.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
        return Ok(());
    }

    if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    tracing::info!("Created {}", config_path.display());
    tracing::info!("Run 'inkwell transform posts/*.md' to generate modules.");

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# Inkwell Configuration

[render]
# Reading speed for the reading time estimate
words_per_minute = 150

# Marker between the excerpt and the rest of a post
excerpt_separator = "<!-- more -->"

# Grammar for code blocks in languages without one
fallback_language = "html"

[output]
# Directory for generated modules
dir = "dist"
"#;
