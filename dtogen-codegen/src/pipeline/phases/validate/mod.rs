//! Validate phase - runs lints on the definition forest.

mod lint;
pub mod lints;

use eyre::{Result, bail};
pub use lint::Lint;
pub use lints::{DuplicateFieldLint, EmptyDescriptionLint, FieldNamingLint, UnusedInitialValueLint};

use dtogen_ir::Definition;

use crate::pipeline::{CompilationContext, Diagnostic, Phase};

/// Phase that validates the forest using configurable lints.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    /// Create a new validate phase with the built-in lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(DuplicateFieldLint),
                Box::new(EmptyDescriptionLint),
                Box::new(FieldNamingLint),
                Box::new(UnusedInitialValueLint),
            ],
        }
    }

    /// Create a validate phase with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    /// Add a custom lint to the validation phase.
    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    /// Get the names of all lints that will be run.
    pub fn lint_names(&self) -> Vec<&'static str> {
        self.lints.iter().map(|l| l.name()).collect()
    }

    /// Run every lint over a forest without touching a context.
    pub fn check(&self, forest: &[Definition]) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for lint in &self.lints {
            tracing::trace!(lint = lint.name(), "{}", lint.description());
            lint.check(forest, &mut diagnostics);
        }
        diagnostics
    }
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn description(&self) -> &'static str {
        "Check the definition tree and collect diagnostics"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let diagnostics = self.check(ctx.forest()?);

        for diag in &diagnostics {
            tracing::debug!(severity = %diag.severity, location = ?diag.location, "{}", diag.message);
        }
        ctx.diagnostics.extend(diagnostics);

        // Warnings and infos are allowed
        if ctx.has_errors() {
            bail!("validation failed with {} error(s)", ctx.error_count());
        }

        Ok(())
    }
}
