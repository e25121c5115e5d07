//! Core utilities and types for the dtogen generator.
//!
//! This crate provides the file writing, path layout and string helpers
//! shared by the codegen crates and the CLI.

mod file;
mod paths;
mod utils;

// File operations
pub use file::{File, FileRules, GeneratedFile, Overwrite, WriteResult};
// Output layout
pub use paths::{is_package_name, package_dir, resource_path};
// String utilities
pub use utils::{is_flagged, to_camel_case, to_pascal_case, to_snake_case};
