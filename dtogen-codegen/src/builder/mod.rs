//! Indented text building for the language factories.

mod code_builder;

pub use code_builder::CodeBuilder;
