mod factory;
mod generator;

pub use dtogen_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
pub use factory::JsonFactory;
pub use generator::Generator;
