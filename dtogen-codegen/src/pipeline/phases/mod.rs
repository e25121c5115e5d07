//! Built-in pipeline phases.
//!
//! - [`OutlinePhase`] - rebuilds the definition forest from matrix rows
//! - [`ValidatePhase`] - runs lints over the forest and collects diagnostics

mod outline;
mod validate;

pub use outline::OutlinePhase;
pub use validate::{
    DuplicateFieldLint, EmptyDescriptionLint, FieldNamingLint, Lint,
    UnusedInitialValueLint, ValidatePhase,
};
