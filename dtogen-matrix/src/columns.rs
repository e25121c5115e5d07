//! Attribute to column label mapping.

use dtogen_ir::{Attribute, RowRecord};
use indexmap::IndexMap;

use crate::{ColumnsConfig, Error, Result, grid::GridRow};

/// Which grid column holds each logical attribute.
#[derive(Debug, Clone)]
pub struct ColumnMapping {
    labels: IndexMap<Attribute, String>,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self::from_config(&ColumnsConfig::default())
    }
}

impl ColumnMapping {
    /// Build a mapping from the `[columns]` table, falling back to default labels.
    pub fn from_config(config: &ColumnsConfig) -> Self {
        let labels = Attribute::ALL
            .into_iter()
            .map(|attr| {
                let label = config.label(attr).unwrap_or(attr.default_label());
                (attr, label.to_string())
            })
            .collect();
        Self { labels }
    }

    /// Column label for an attribute.
    pub fn label(&self, attribute: Attribute) -> &str {
        self.labels
            .get(&attribute)
            .map(String::as_str)
            .unwrap_or(attribute.default_label())
    }

    /// Locate every attribute in a header row.
    ///
    /// Labels match after trimming, ignoring ASCII case.
    pub fn resolve(&self, header: &[String]) -> Result<ResolvedColumns> {
        let mut indices = IndexMap::new();

        for (attribute, label) in &self.labels {
            let index = header
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(label.trim()))
                .ok_or_else(|| {
                    Box::new(Error::MissingColumn {
                        label: label.clone(),
                        attribute: attribute.to_string(),
                        available: header.join(", "),
                    })
                })?;
            indices.insert(*attribute, index);
        }

        Ok(ResolvedColumns { indices })
    }
}

/// A mapping bound to the column positions of one grid.
#[derive(Debug, Clone)]
pub struct ResolvedColumns {
    indices: IndexMap<Attribute, usize>,
}

impl ResolvedColumns {
    /// Turn a grid row into a [`RowRecord`].
    pub fn record(&self, row: &GridRow) -> RowRecord {
        let mut record = RowRecord::new(row.line);
        for (attribute, index) in &self.indices {
            record.set(*attribute, row.cell(*index));
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|l| l.to_string()).collect()
    }

    fn default_header() -> Vec<String> {
        Attribute::ALL
            .iter()
            .map(|a| a.default_label().to_string())
            .collect()
    }

    #[test]
    fn test_resolve_default_labels_in_any_order() {
        let mut labels = default_header();
        labels.reverse();

        let resolved = ColumnMapping::default().resolve(&labels).unwrap();
        let row = GridRow {
            line: 7,
            cells: vec![
                "desc".into(),
                "o".into(),
                "0".into(),
                "int".into(),
                "count".into(),
                "".into(),
                "1".into(),
            ],
        };
        let record = resolved.record(&row);

        assert_eq!(record.layer(), "1");
        assert_eq!(record.name(), "count");
        assert_eq!(record.initial_value(), "0");
        assert!(record.is_invariant());
        assert!(!record.is_logically_deleted());
        assert_eq!(record.line, 7);
    }

    #[test]
    fn test_custom_label_overrides_default() {
        let config = ColumnsConfig {
            name: Some("Field".into()),
            ..Default::default()
        };
        let mapping = ColumnMapping::from_config(&config);
        assert_eq!(mapping.label(Attribute::Name), "Field");
        assert_eq!(mapping.label(Attribute::Layer), "Layer");
    }

    #[test]
    fn test_labels_match_case_insensitively() {
        let mut labels = default_header();
        labels[0] = " layer ".into();
        assert!(ColumnMapping::default().resolve(&labels).is_ok());
    }

    #[test]
    fn test_missing_column_names_label() {
        let err = ColumnMapping::default()
            .resolve(&header(&["Layer", "Variable Name"]))
            .unwrap_err();

        match *err {
            Error::MissingColumn {
                ref label,
                ref attribute,
                ..
            } => {
                assert_eq!(label, "Logical Delete");
                assert_eq!(attribute, "logical_delete");
            }
            ref other => panic!("unexpected error: {other}"),
        }
    }
}
