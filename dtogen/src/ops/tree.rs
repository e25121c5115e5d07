//! Tree operation - outline reconstruction without lints or rendering.

use dtogen_codegen::{
    outline::{DisplayStyle, OutlineDisplay},
    pipeline::{Pipeline, phases::ValidatePhase},
};
use dtogen_ir::count_definitions;
use dtogen_matrix::Matrix;
use eyre::{Context, Result};

use crate::reports::TreeReport;

/// Execute the tree operation.
pub fn tree(matrix: Matrix, style: DisplayStyle) -> Result<TreeReport> {
    let project = matrix.project.clone();
    let ctx = Pipeline::new()
        .validate(ValidatePhase::empty())
        .run(matrix)
        .wrap_err("Failed to reconstruct definitions")?;
    let forest = ctx.forest()?;

    Ok(TreeReport {
        project,
        definition_count: count_definitions(forest),
        tree: OutlineDisplay::new(forest).style(style).to_string(),
    })
}
