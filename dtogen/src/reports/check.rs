//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from matrix validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the definition book.
    pub config_path: PathBuf,
    pub definition_count: usize,
    /// Number of lints that ran.
    pub lint_count: usize,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub infos: Vec<String>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }

        for warning in &self.warnings {
            out.warning(warning);
        }

        for info in &self.infos {
            out.list_item(&format!("info: {}", info));
        }

        if !self.warnings.is_empty() || !self.errors.is_empty() || !self.infos.is_empty() {
            out.newline();
        }

        if self.is_valid() {
            out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        } else {
            out.preformatted(&format!(
                "✗ {} has {} error{}",
                self.config_path.display(),
                self.errors.len(),
                if self.errors.len() == 1 { "" } else { "s" }
            ));
        }
        out.preformatted(&format!(
            "  {} definition{}, {} lints",
            self.definition_count,
            if self.definition_count == 1 { "" } else { "s" },
            self.lint_count
        ));
    }
}
