//! Observers of a pipeline run.

use eyre::Result;

use super::CompilationContext;

/// Hook called once each phase has finished.
///
/// [`SnapshotPlugin`](super::SnapshotPlugin) uses it to dump the forest and
/// diagnostics for `dtogen bake --visualize`. Returning an error aborts the run.
pub trait Plugin: Send + Sync {
    fn name(&self) -> &'static str;

    fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()>;
}
