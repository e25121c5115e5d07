//! A single step of the pipeline.

use eyre::Result;

use super::CompilationContext;

/// One step run over the [`CompilationContext`].
///
/// [`OutlinePhase`](super::phases::OutlinePhase) always runs first and fills
/// in the forest; every later phase may assume `ctx.forest()` succeeds.
/// Recoverable findings go into `ctx.diagnostics`; an `Err` stops the run.
pub trait Phase: Send + Sync {
    /// Short identifier, also the snapshot file stem.
    fn name(&self) -> &'static str;

    /// One-line summary logged when the phase starts.
    fn description(&self) -> &'static str;

    fn run(&self, ctx: &mut CompilationContext) -> Result<()>;
}
