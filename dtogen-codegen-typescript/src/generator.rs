use std::path::Path;

use dtogen_codegen::{
    generation::{layout_resources, write_resources},
    language::{GenerateResult, LanguageCodegen, PreviewFile},
    pipeline::CompilationContext,
};
use eyre::Result;

use crate::TypeScriptFactory;

/// TypeScript generator writing one `.ts` file per definition
pub struct Generator {
    ctx: CompilationContext,
}

impl Generator {
    /// Create a generator from a completed pipeline run.
    pub fn from_context(ctx: CompilationContext) -> Self {
        Self { ctx }
    }
}

impl LanguageCodegen for Generator {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn file_extension(&self) -> &'static str {
        "ts"
    }

    fn preview(&self) -> Result<Vec<PreviewFile>> {
        let resources = self.ctx.render_with(&TypeScriptFactory)?;
        Ok(layout_resources(
            &resources,
            &self.ctx.render_context().package_name,
            self.file_extension(),
        ))
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        write_resources(&self.preview()?, output_dir)
    }
}
