//! Lint for duplicate field detection.

use std::collections::HashSet;

use dtogen_ir::Definition;

use super::super::{Lint, lint::for_each_definition};
use crate::pipeline::Diagnostic;

/// Lint that errors on a field name repeated within one definition.
pub struct DuplicateFieldLint;

impl Lint for DuplicateFieldLint {
    fn name(&self) -> &'static str {
        "duplicate-field"
    }

    fn description(&self) -> &'static str {
        "Detect field names declared twice in one definition"
    }

    fn check(&self, forest: &[Definition], diagnostics: &mut Vec<Diagnostic>) {
        for_each_definition(forest, &mut |def| {
            let mut seen = HashSet::new();
            for field in &def.fields {
                if !seen.insert(field.name.as_str()) {
                    diagnostics.push(
                        Diagnostic::error(
                            "validate",
                            format!(
                                "field '{}' is declared more than once in '{}'",
                                field.name, def.name
                            ),
                        )
                        .at(format!("{}.{}", def.name, field.name)),
                    );
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{outline::build_outline, testing::Rows};

    #[test]
    fn test_no_duplicates() {
        let forest = build_outline(
            &Rows::new()
                .definition(0, "User", "")
                .field(1, "id", "long")
                .field(1, "name", "String")
                .build(),
        )
        .unwrap();

        let mut diagnostics = Vec::new();
        DuplicateFieldLint.check(&forest, &mut diagnostics);

        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_duplicate_in_nested_definition() {
        let forest = build_outline(
            &Rows::new()
                .definition(0, "User", "")
                .field(1, "address", "Address")
                .definition(2, "Address", "")
                .field(3, "zip", "String")
                .field(3, "zip", "String")
                .build(),
        )
        .unwrap();

        let mut diagnostics = Vec::new();
        DuplicateFieldLint.check(&forest, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_error());
        assert_eq!(diagnostics[0].location.as_deref(), Some("Address.zip"));
    }

    #[test]
    fn test_same_name_in_different_definitions() {
        let forest = build_outline(
            &Rows::new()
                .definition(0, "User", "")
                .field(1, "id", "long")
                .definition(0, "Group", "")
                .field(1, "id", "long")
                .build(),
        )
        .unwrap();

        let mut diagnostics = Vec::new();
        DuplicateFieldLint.check(&forest, &mut diagnostics);

        assert!(diagnostics.is_empty());
    }
}
