//! Definition book types and parsing for dtogen.toml files.

mod file;
mod language;
mod parse;

use std::path::PathBuf;

use dtogen_ir::{Attribute, RenderContext};
pub use file::DtogenToml;
pub use language::Language;
pub use parse::parse_book;
use serde::Deserialize;

/// Root of a dtogen.toml definition book
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Book {
    /// Project and package metadata
    pub meta: MetaConfig,

    /// Who wrote the book
    pub creator: CreatorConfig,

    /// Attribute to column label overrides
    #[serde(default)]
    pub columns: ColumnsConfig,

    /// Where the grid lives
    pub matrix: MatrixConfig,
}

/// `[meta]` table
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetaConfig {
    /// Project name, shown in reports
    pub project: String,

    /// Dotted package of the generated resources
    pub package: String,

    #[serde(default = "default_version")]
    pub version: String,

    #[serde(default)]
    pub description: String,

    /// Target language for code generation
    #[serde(default)]
    pub language: Language,
}

fn default_version() -> String {
    "1.0".to_string()
}

/// `[creator]` table
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreatorConfig {
    pub name: String,
    pub created: Option<String>,
    pub updated: Option<String>,
}

/// `[columns]` table; unset attributes use [`Attribute::default_label`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColumnsConfig {
    pub layer: Option<String>,
    pub logical_delete: Option<String>,
    pub name: Option<String>,
    pub data_type: Option<String>,
    pub initial_value: Option<String>,
    pub invariant: Option<String>,
    pub description: Option<String>,
}

impl ColumnsConfig {
    /// Configured label for an attribute, if any.
    pub fn label(&self, attribute: Attribute) -> Option<&str> {
        match attribute {
            Attribute::Layer => self.layer.as_deref(),
            Attribute::LogicalDelete => self.logical_delete.as_deref(),
            Attribute::Name => self.name.as_deref(),
            Attribute::DataType => self.data_type.as_deref(),
            Attribute::InitialValue => self.initial_value.as_deref(),
            Attribute::Invariant => self.invariant.as_deref(),
            Attribute::Description => self.description.as_deref(),
        }
    }
}

/// `[matrix]` table: either a CSV `path` or an inline `header` + `rows`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MatrixConfig {
    /// CSV file, relative to the book
    pub path: Option<PathBuf>,

    /// Inline header row
    pub header: Option<Vec<String>>,

    /// Inline data rows; cells may be strings, numbers or booleans
    #[serde(default)]
    pub rows: Vec<Vec<toml::Value>>,

    /// CSV field delimiter (default `,`)
    pub delimiter: Option<char>,
}

impl Book {
    /// Metadata handed to every rendered resource.
    pub fn render_context(&self) -> RenderContext {
        RenderContext {
            package_name: self.meta.package.clone(),
            author: self.creator.name.clone(),
            version: self.meta.version.clone(),
            description: self.meta.description.clone(),
        }
    }
}
