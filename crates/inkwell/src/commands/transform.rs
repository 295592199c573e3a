//! Transform Markdown files into JavaScript modules.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use inkwell_md::{Renderer, TransformOutput};
use rayon::prelude::*;

use crate::commands::config::load_config;

/// Where generated modules go.
#[derive(Debug, Clone)]
pub enum Target {
    /// Write `<file name>.js` into a directory (config default when `None`)
    Dir(Option<PathBuf>),
    /// Print modules to stdout
    Stdout,
}

/// Result of a transform run.
#[derive(Debug, Default, PartialEq)]
pub struct TransformSummary {
    /// Number of modules generated
    pub transformed: usize,

    /// Files skipped for not being Markdown
    pub skipped: usize,

    /// Files that failed to transform
    pub failed: usize,

    /// Total time in milliseconds
    pub duration_ms: u64,
}

/// Run the transform command.
pub fn run(config_path: &Path, files: &[PathBuf], target: Target) -> Result<()> {
    let file_config = load_config(config_path)?;
    let renderer = Renderer::new(file_config.render);

    let output_dir = match target {
        Target::Dir(dir) => Some(dir.unwrap_or_else(|| PathBuf::from(&file_config.output.dir))),
        Target::Stdout => None,
    };

    let summary = transform_files(&renderer, files, output_dir.as_deref())?;

    tracing::info!(
        "Transformed {} files ({} skipped) in {}ms",
        summary.transformed,
        summary.skipped,
        summary.duration_ms
    );

    if summary.failed > 0 {
        anyhow::bail!(
            "{} of {} files failed to transform",
            summary.failed,
            files.len()
        );
    }

    if let Some(dir) = output_dir {
        tracing::info!("Output: {}", dir.display());
    }

    Ok(())
}

/// Transform `files` in parallel, writing modules into `output_dir` or
/// printing them to stdout when it is `None`.
///
/// Every file is attempted; failures are logged and counted.
pub fn transform_files(
    renderer: &Renderer,
    files: &[PathBuf],
    output_dir: Option<&Path>,
) -> Result<TransformSummary> {
    let start = Instant::now();

    if let Some(dir) = output_dir {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
    }

    let results: Vec<(&PathBuf, Result<Option<TransformOutput>>)> = files
        .par_iter()
        .map(|path| (path, transform_file(renderer, path)))
        .collect();

    let mut summary = TransformSummary::default();
    let mut written: HashMap<PathBuf, &Path> = HashMap::new();

    for (path, result) in results {
        let outcome = result.and_then(|output| match output {
            Some(output) => emit(path, &output, output_dir, &mut written).map(|_| true),
            None => Ok(false),
        });

        match outcome {
            Ok(true) => summary.transformed += 1,
            Ok(false) => {
                tracing::warn!("Skipping {}: not a Markdown file", path.display());
                summary.skipped += 1;
            }
            Err(e) => {
                tracing::error!("{:#}", e);
                summary.failed += 1;
            }
        }
    }

    summary.duration_ms = start.elapsed().as_millis() as u64;

    Ok(summary)
}

/// Read and transform a single file, using its path as the identifier.
fn transform_file(renderer: &Renderer, path: &Path) -> Result<Option<TransformOutput>> {
    let id = path.to_string_lossy();
    if !inkwell_md::is_markdown(&id) {
        return Ok(None);
    }

    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    inkwell_md::transform(&source, &id, renderer)
        .with_context(|| format!("Failed to transform {}", path.display()))
}

/// Print or write one module. Two sources mapping to the same module file
/// is an error for the later one; the earlier module is kept.
fn emit<'a>(
    path: &'a Path,
    output: &TransformOutput,
    output_dir: Option<&Path>,
    written: &mut HashMap<PathBuf, &'a Path>,
) -> Result<()> {
    let Some(dir) = output_dir else {
        println!("// {}\n{}", path.display(), output.code);
        return Ok(());
    };

    let file_name = path
        .file_name()
        .and_then(|f| f.to_str())
        .unwrap_or("module.md");
    let module_path = dir.join(format!("{file_name}.js"));

    if let Some(previous) = written.get(&module_path) {
        anyhow::bail!(
            "{} and {} both map to {}",
            previous.display(),
            path.display(),
            module_path.display()
        );
    }

    fs::write(&module_path, &output.code)
        .with_context(|| format!("Failed to write {}", module_path.display()))?;
    tracing::debug!("Wrote {}", module_path.display());
    written.insert(module_path, path);

    Ok(())
}
