//! Built-in lints for forest validation.

mod duplicate_field;
mod empty_description;
mod field_naming;
mod unused_initial_value;

pub use duplicate_field::DuplicateFieldLint;
pub use empty_description::EmptyDescriptionLint;
pub use field_naming::FieldNamingLint;
pub use unused_initial_value::UnusedInitialValueLint;
