//! Language-agnostic generator traits.

use std::path::{Path, PathBuf};

use eyre::Result;

/// Trait for language-specific resource generators.
///
/// Implement this trait to add support for generating DTOs in a new language.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "java", "typescript")
    fn language(&self) -> &'static str;

    /// File extension for generated resources (e.g., "java", "ts")
    fn file_extension(&self) -> &'static str;

    /// Render every resource without writing to disk
    fn preview(&self) -> Result<Vec<PreviewFile>>;

    /// Render and write every resource into the output directory
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;
}

/// Result of writing generated files
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files that were written
    pub written: Vec<PathBuf>,
    /// Files left untouched because their rules forbid overwriting
    pub skipped: Vec<PathBuf>,
}

/// A generated file for preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}
