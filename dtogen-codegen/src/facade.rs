//! One-call entry points from rows to rendered resources.

use dtogen_ir::{RenderContext, RowRecord};
use dtogen_matrix::Matrix;

use crate::{
    outline::build_outline,
    pipeline::Pipeline,
    render::{self, CodeFactory, Resources},
};

/// Run the default pipeline over a matrix and render every definition.
///
/// Lint errors abort before rendering; warnings are logged and dropped.
pub fn create_resource(matrix: Matrix, factory: &dyn CodeFactory) -> eyre::Result<Resources> {
    let ctx = Pipeline::new().run(matrix)?;
    for warning in ctx.warnings() {
        tracing::warn!("{warning}");
    }
    ctx.render_with(factory)
}

/// Build the outline of `rows` and render it, without lints.
pub fn resources_from_rows(
    rows: &[RowRecord],
    context: &RenderContext,
    factory: &dyn CodeFactory,
) -> crate::Result<Resources> {
    let forest = build_outline(rows)?;
    render::render(&forest, context, factory)
}
