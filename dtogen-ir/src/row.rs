//! Row records produced by a row source.

use dtogen_core::is_flagged;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Logical attribute of a matrix row.
///
/// Row sources map their own column labels onto these attributes before the
/// outline is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    /// Nesting depth marker.
    Layer,
    /// Soft-delete marker; non-blank means deleted.
    LogicalDelete,
    /// Definition or field name.
    Name,
    /// Declared type of a field.
    DataType,
    /// Initializer expression for a field.
    InitialValue,
    /// Non-blank means the field is a constructor parameter.
    Invariant,
    /// Free text description.
    Description,
}

impl Attribute {
    /// Every attribute, in canonical column order.
    pub const ALL: [Attribute; 7] = [
        Attribute::Layer,
        Attribute::LogicalDelete,
        Attribute::Name,
        Attribute::DataType,
        Attribute::InitialValue,
        Attribute::Invariant,
        Attribute::Description,
    ];

    /// Key used in configuration tables (e.g. `[columns]`).
    pub fn key(&self) -> &'static str {
        match self {
            Attribute::Layer => "layer",
            Attribute::LogicalDelete => "logical_delete",
            Attribute::Name => "name",
            Attribute::DataType => "data_type",
            Attribute::InitialValue => "initial_value",
            Attribute::Invariant => "invariant",
            Attribute::Description => "description",
        }
    }

    /// Column label used when no mapping is configured.
    pub fn default_label(&self) -> &'static str {
        match self {
            Attribute::Layer => "Layer",
            Attribute::LogicalDelete => "Logical Delete",
            Attribute::Name => "Variable Name",
            Attribute::DataType => "Data Type",
            Attribute::InitialValue => "Initial Value",
            Attribute::Invariant => "Invariant",
            Attribute::Description => "Description",
        }
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// One physical row of the matrix, resolved to logical attributes.
///
/// Attributes the source did not supply read as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RowRecord {
    /// 1-based line number in the source grid (0 when unknown).
    pub line: usize,
    values: IndexMap<Attribute, String>,
}

impl RowRecord {
    /// Create an empty record for the given source line.
    pub fn new(line: usize) -> Self {
        Self {
            line,
            values: IndexMap::new(),
        }
    }

    /// Set an attribute value.
    pub fn with(mut self, attribute: Attribute, value: impl Into<String>) -> Self {
        self.values.insert(attribute, value.into());
        self
    }

    /// Set an attribute value in place.
    pub fn set(&mut self, attribute: Attribute, value: impl Into<String>) {
        self.values.insert(attribute, value.into());
    }

    /// Get an attribute value, or `""` if absent.
    pub fn get(&self, attribute: Attribute) -> &str {
        self.values
            .get(&attribute)
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Raw layer cell.
    pub fn layer(&self) -> &str {
        self.get(Attribute::Layer)
    }

    pub fn name(&self) -> &str {
        self.get(Attribute::Name)
    }

    pub fn data_type(&self) -> &str {
        self.get(Attribute::DataType)
    }

    pub fn initial_value(&self) -> &str {
        self.get(Attribute::InitialValue)
    }

    pub fn description(&self) -> &str {
        self.get(Attribute::Description)
    }

    /// Whether the row is soft-deleted.
    pub fn is_logically_deleted(&self) -> bool {
        is_flagged(self.get(Attribute::LogicalDelete))
    }

    /// Whether the field must be supplied at construction time.
    pub fn is_invariant(&self) -> bool {
        is_flagged(self.get(Attribute::Invariant))
    }
}
