//! Bake command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from resource generation.
#[derive(Debug)]
pub struct BakeReport {
    /// Project name from the book.
    pub project: String,

    /// Package of the generated resources.
    pub package: String,

    pub version: String,

    /// Warning messages from the pipeline.
    pub warnings: Vec<String>,

    /// Number of definitions, nested ones included.
    pub definition_count: usize,

    /// Definition tree display string.
    pub definition_tree: String,

    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    pub output_dir: PathBuf,
    /// Paths of the written resources.
    pub files: Vec<PathBuf>,
    /// File extension with dot.
    pub extension: String,
    /// Path to debug snapshots, if visualization was enabled.
    pub debug_dir: Option<PathBuf>,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// Path relative to the output directory.
    pub path: String,
    pub content: String,
}

impl Report for BakeReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl BakeReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        if let Some(debug_dir) = &written.debug_dir {
            out.key_value(
                "Pipeline snapshots written to",
                &debug_dir.display().to_string(),
            );
            out.newline();
        }

        for warning in &self.warnings {
            out.warning(warning);
        }

        out.preformatted(&format!("{} v{}", self.project, self.version));
        out.key_value("Package", &self.package);
        out.newline();

        out.section(&format!("Definitions ({})", self.definition_count));
        out.preformatted(&self.definition_tree);
        out.newline();

        out.key_value(
            "Generated",
            &format!(
                "{} {} file{} in {}",
                written.files.len(),
                written.extension,
                if written.files.len() == 1 { "" } else { "s" },
                written.output_dir.display()
            ),
        );
        for file in &written.files {
            let shown = file.strip_prefix(&written.output_dir).unwrap_or(file);
            out.added_item(&shown.display().to_string());
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", preview.files.len()));
    }
}
