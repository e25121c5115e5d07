//! Language-specific abstractions.
//!
//! - [`LanguageCodegen`] - Main trait for language generators
//! - [`NamingConvention`] - Identifier rules and reserved words
//! - [`GenerateResult`] - Result of writing generated files
//! - [`PreviewFile`] - Generated file preview

mod naming;
mod traits;

pub use naming::{NamingConvention, c_like_part, c_like_start};
pub use traits::{GenerateResult, LanguageCodegen, PreviewFile};
