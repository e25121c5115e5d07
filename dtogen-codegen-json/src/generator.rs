use std::path::Path;

use dtogen_codegen::{
    generation::{layout_resources, write_resources},
    language::{GenerateResult, LanguageCodegen, PreviewFile},
    pipeline::CompilationContext,
};
use eyre::Result;

use crate::JsonFactory;

/// JSON generator writing one `.json` document per definition
pub struct Generator {
    ctx: CompilationContext,
}

impl Generator {
    pub fn from_context(ctx: CompilationContext) -> Self {
        Self { ctx }
    }
}

impl LanguageCodegen for Generator {
    fn language(&self) -> &'static str {
        "json"
    }

    fn file_extension(&self) -> &'static str {
        "json"
    }

    fn preview(&self) -> Result<Vec<PreviewFile>> {
        let resources = self.ctx.render_with(&JsonFactory)?;
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
