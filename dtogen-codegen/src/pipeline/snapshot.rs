//! Pipeline snapshot plugin for visualization and debugging.
//!
//! This module provides a plugin that captures the pipeline state after each
//! phase, so the reconstructed forest can be inspected as JSON.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::{PoisonError, RwLock},
};

use dtogen_ir::Definition;
use eyre::Result;
use serde::Serialize;

use super::{CompilationContext, Diagnostic, Plugin};

/// A snapshot of the pipeline state at a specific phase.
#[derive(Debug, Clone, Serialize)]
pub struct PhaseSnapshot {
    /// The phase that just completed.
    pub phase: String,

    /// The definition forest (available after the "outline" phase).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forest: Option<Vec<Definition>>,

    /// Diagnostics collected so far.
    pub diagnostics: Vec<Diagnostic>,
}

impl PhaseSnapshot {
    fn write(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = dir.join(format!("{}.json", self.phase));
        fs::write(&path, serde_json::to_string_pretty(self)?)?;
        Ok(path)
    }
}

/// A plugin that captures pipeline state after each phase.
///
/// Backs the `--visualize` flag of `dtogen bake`.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new().plugin(SnapshotPlugin::with_output_dir(".dtogen/debug"));
/// let ctx = pipeline.run(matrix)?;
/// ```
pub struct SnapshotPlugin {
    snapshots: RwLock<Vec<PhaseSnapshot>>,
    /// Written to immediately after each phase when set.
    output_dir: Option<PathBuf>,
}

impl SnapshotPlugin {
    pub fn new() -> Self {
        Self {
            snapshots: RwLock::new(Vec::new()),
            output_dir: None,
        }
    }

    /// Create a snapshot plugin that writes `<phase>.json` files to a directory.
    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            snapshots: RwLock::new(Vec::new()),
            output_dir: Some(output_dir.into()),
        }
    }

    /// Get all collected snapshots.
    pub fn snapshots(&self) -> Vec<PhaseSnapshot> {
        self.snapshots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for SnapshotPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for SnapshotPlugin {
    fn name(&self) -> &'static str {
        "snapshot"
    }

    fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        let snapshot = PhaseSnapshot {
            phase: phase.to_string(),
            forest: ctx.forest.clone(),
            diagnostics: ctx.diagnostics.clone(),
        };

        if let Some(dir) = &self.output_dir {
            let path = snapshot.write(dir)?;
            tracing::debug!(path = %path.display(), "snapshot written");
        }

        self.snapshots
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(snapshot);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use dtogen_matrix::Matrix;
    use tempfile::TempDir;

    use super::*;
    use crate::{
        pipeline::Pipeline,
        testing::{Rows, sample_context},
    };

    struct Shared(Arc<SnapshotPlugin>);

    impl Plugin for Shared {
        fn name(&self) -> &'static str {
            self.0.name()
        }

        fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
            self.0.on_after_phase(phase, ctx)
        }
    }

    fn matrix() -> Matrix {
        let rows = Rows::new()
            .definition(0, "User", "Users")
            .field(1, "id", "long")
            .described("Identifier")
            .build();
        Matrix::new(sample_context(), rows)
    }

    #[test]
    fn test_snapshot_plugin_creation() {
        assert!(SnapshotPlugin::new().snapshots().is_empty());
    }

    #[test]
    fn test_captures_each_phase() {
        let plugin = Arc::new(SnapshotPlugin::new());
        Pipeline::new()
            .plugin(Shared(plugin.clone()))
            .run(matrix())
            .unwrap();

        let snapshots = plugin.snapshots();
        let phases: Vec<_> = snapshots.iter().map(|s| s.phase.as_str()).collect();
        assert_eq!(phases, vec!["outline", "validate"]);
        assert!(snapshots[0].forest.is_some());
    }

    #[test]
    fn test_writes_json_per_phase() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("debug");

        Pipeline::new()
            .plugin(SnapshotPlugin::with_output_dir(&dir))
            .run(matrix())
            .unwrap();

        let outline = fs::read_to_string(dir.join("outline.json")).unwrap();
        let json: serde_json::Value = serde_json::from_str(&outline).unwrap();
        assert_eq!(json["phase"], "outline");
        assert_eq!(json["forest"][0]["name"], "User");
        assert!(dir.join("validate.json").exists());
    }
}
