//! Intermediate representation types for the dtogen generator.
//!
//! These types are shared by every stage of the generator:
//!
//! ```text
//! grid (CSV / inline) → dtogen-matrix (RowRecord) → outline (Definition tree) → render
//! ```
//!
//! The IR types are designed to be:
//! - Language-agnostic (no Java/TypeScript-specific concerns)
//! - Plain data, serializable for pipeline snapshots

mod context;
mod definition;
mod row;

pub use context::RenderContext;
pub use definition::{Definition, Field, count_definitions};
pub use row::{Attribute, RowRecord};
