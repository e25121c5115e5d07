mod factory;
mod generator;
mod naming;

pub use dtogen_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
pub use factory::JavaFactory;
pub use generator::Generator;
pub use naming::JAVA_NAMING;
