//! Pipeline orchestrator.

use dtogen_matrix::Matrix;
use eyre::Result;

use super::{
    CompilationContext, Phase, Plugin,
    phases::{OutlinePhase, ValidatePhase},
};

/// The compilation pipeline orchestrator.
///
/// The pipeline runs the built-in phases (outline, validate) followed by any
/// user phases, handing the context to every plugin after each phase.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new()
///     .plugin(SnapshotPlugin::with_output_dir(".dtogen/debug"))
///     .phase(MyCustomPhase);
///
/// let ctx = pipeline.run(matrix)?;
/// ```
pub struct Pipeline {
    outline: OutlinePhase,
    validate: ValidatePhase,
    phases: Vec<Box<dyn Phase>>,
    plugins: Vec<Box<dyn Plugin>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self {
            outline: OutlinePhase::default(),
            validate: ValidatePhase::new(),
            phases: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// Replace the built-in outline phase, e.g. to change the depth limit.
    pub fn outline(mut self, outline: OutlinePhase) -> Self {
        self.outline = outline;
        self
    }

    /// Replace the built-in validate phase, e.g. to run a custom lint set.
    pub fn validate(mut self, validate: ValidatePhase) -> Self {
        self.validate = validate;
        self
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Add a plugin to observe the context after each phase.
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Run the pipeline on a matrix.
    ///
    /// Executes all phases in order:
    /// 1. OutlinePhase - rebuilds the definition forest
    /// 2. ValidatePhase - runs lints, collects diagnostics
    /// 3. User phases (if any)
    ///
    /// # Errors
    ///
    /// Returns an error if any phase fails fatally.
    pub fn run(&self, matrix: Matrix) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(matrix);

        self.run_phase(&self.outline, &mut ctx)?;
        self.run_phase(&self.validate, &mut ctx)?;
        for phase in &self.phases {
            self.run_phase(phase.as_ref(), &mut ctx)?;
        }

        tracing::info!(
            diagnostics = ctx.diagnostics.len(),
            warnings = ctx.warning_count(),
            "pipeline finished"
        );
        Ok(ctx)
    }

    fn run_phase(&self, phase: &dyn Phase, ctx: &mut CompilationContext) -> Result<()> {
        let phase_name = phase.name();

        tracing::debug!(phase = phase_name, "{}", phase.description());
        phase.run(ctx)?;

        for plugin in &self.plugins {
            tracing::trace!(phase = phase_name, plugin = plugin.name(), "plugin hook");
            plugin.on_after_phase(phase_name, ctx)?;
        }

        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
