mod factory;
mod generator;
mod naming;
mod type_mapper;

pub use dtogen_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
pub use factory::TypeScriptFactory;
pub use generator::Generator;
pub use naming::TS_NAMING;
pub use type_mapper::map_type;
