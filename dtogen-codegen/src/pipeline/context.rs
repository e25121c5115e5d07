//! Compilation context passed through pipeline phases.

use dtogen_ir::{Definition, RenderContext};
use dtogen_matrix::Matrix;
use eyre::{Result, eyre};

use super::diagnostic::{Diagnostic, Severity};
use crate::render::{self, CodeFactory, Resources};

/// Context passed through all pipeline phases.
///
/// This struct carries the state of compilation through each phase,
/// accumulating results and diagnostics along the way.
#[derive(Debug)]
pub struct CompilationContext {
    /// The matrix being compiled.
    pub matrix: Matrix,
    /// The reconstructed forest (populated by OutlinePhase).
    pub forest: Option<Vec<Definition>>,
    /// Diagnostics collected during compilation.
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    pub fn new(matrix: Matrix) -> Self {
        Self {
            matrix,
            forest: None,
            diagnostics: Vec::new(),
        }
    }

    /// Rendering context of the matrix (package, author, version).
    pub fn render_context(&self) -> &RenderContext {
        &self.matrix.context
    }

    /// The reconstructed forest.
    ///
    /// # Errors
    ///
    /// Fails if OutlinePhase has not run.
    pub fn forest(&self) -> Result<&[Definition]> {
        self.forest
            .as_deref()
            .ok_or_else(|| eyre!("definition forest not built - did the outline phase run?"))
    }

    /// Render the forest through a code factory.
    pub fn render_with(&self, factory: &dyn CodeFactory) -> Result<Resources> {
        let resources = render::render(self.forest()?, &self.matrix.context, factory)?;
        Ok(resources)
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Error))
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{PlainFactory, Rows, sample_context};

    fn context() -> CompilationContext {
        let rows = Rows::new()
            .definition(0, "User", "")
            .field(1, "id", "long")
            .build();
        CompilationContext::new(Matrix::new(sample_context(), rows))
    }

    #[test]
    fn test_context_creation() {
        let ctx = context();
        assert!(ctx.forest.is_none());
        assert!(ctx.diagnostics.is_empty());
        assert_eq!(ctx.render_context().package_name, "org.example.dto");
    }

    #[test]
    fn test_context_diagnostics() {
        let mut ctx = context();
        ctx.diagnostics.extend([
            Diagnostic::error("test", "test error"),
            Diagnostic::warning("test", "test warning"),
            Diagnostic::info("test", "just info"),
        ]);

        assert!(ctx.has_errors());
        assert!(ctx.has_warnings());
        assert_eq!(ctx.error_count(), 1);
        assert_eq!(ctx.warning_count(), 1);
    }

    #[test]
    fn test_forest_before_outline_is_error() {
        let ctx = context();
        assert!(ctx.forest().is_err());
        assert!(ctx.render_with(&PlainFactory).is_err());
    }
}
