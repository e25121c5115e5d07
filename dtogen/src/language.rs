//! Unified language dispatch.
//!
//! Centralizes language-specific generator creation and metadata.

use dtogen_codegen::{language::LanguageCodegen, pipeline::CompilationContext};
use dtogen_codegen_java::Generator as JavaGenerator;
use dtogen_codegen_json::Generator as JsonGenerator;
use dtogen_codegen_typescript::Generator as TypeScriptGenerator;
use dtogen_matrix::Language;

/// Language-specific support for code generation.
pub struct LanguageSupport {
    language: Language,
    /// File extension with dot (e.g., ".java").
    pub extension: &'static str,
}

impl LanguageSupport {
    /// Get language support for the given language.
    pub fn get(language: Language) -> Self {
        match language {
            Language::Java => Self {
                language,
                extension: ".java",
            },
            Language::TypeScript => Self {
                language,
                extension: ".ts",
            },
            Language::Json => Self {
                language,
                extension: ".json",
            },
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Create a generator for this language.
    pub fn generator(&self, ctx: CompilationContext) -> Box<dyn LanguageCodegen> {
        match self.language {
            Language::Java => Box::new(JavaGenerator::from_context(ctx)),
            Language::TypeScript => Box::new(TypeScriptGenerator::from_context(ctx)),
            Language::Json => Box::new(JsonGenerator::from_context(ctx)),
        }
    }
}
