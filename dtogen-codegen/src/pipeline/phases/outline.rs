//! Outline phase - rebuilds the definition forest from the matrix rows.

use dtogen_ir::count_definitions;
use eyre::Result;

use crate::{
    outline::TreeBuilder,
    pipeline::{CompilationContext, Phase},
};

/// Phase that runs the [`TreeBuilder`] over the matrix rows.
#[derive(Debug, Clone, Default)]
pub struct OutlinePhase {
    builder: TreeBuilder,
}

impl OutlinePhase {
    pub fn new(builder: TreeBuilder) -> Self {
        Self { builder }
    }
}

impl Phase for OutlinePhase {
    fn name(&self) -> &'static str {
        "outline"
    }

    fn description(&self) -> &'static str {
        "Rebuild the definition tree from matrix rows"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let forest = self.builder.build_outline(&ctx.matrix.rows)?;
        tracing::info!(
            rows = ctx.matrix.rows.len(),
            definitions = count_definitions(&forest),
            "outline built"
        );
        ctx.forest = Some(forest);
        Ok(())
    }
}
