//! Lint for initial values that the constructor always overwrites.

use dtogen_ir::Definition;

use super::super::{Lint, lint::for_each_definition};
use crate::pipeline::Diagnostic;

/// Lint that notes invariant fields carrying an initial value.
pub struct UnusedInitialValueLint;

impl Lint for UnusedInitialValueLint {
    fn name(&self) -> &'static str {
        "unused-initial-value"
    }

    fn description(&self) -> &'static str {
        "Note initial values of invariant fields, which the constructor overwrites"
    }

    fn check(&self, forest: &[Definition], diagnostics: &mut Vec<Diagnostic>) {
        for_each_definition(forest, &mut |def| {
            for field in def.invariant_fields() {
                if !field.initial_value.is_empty() {
                    diagnostics.push(
                        Diagnostic::info(
                            "validate",
                            format!(
                                "initial value of invariant field '{}' is always overwritten",
                                field.name
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
    fn test_invariant_with_initial_value() {
        let forest = build_outline(
            &Rows::new()
                .definition(0, "User", "")
                .invariant(1, "id", "long")
                .initial("0L")
                .field(1, "name", "String")
                .initial("\"\"")
                .build(),
        )
        .unwrap();

        let mut diagnostics = Vec::new();
        UnusedInitialValueLint.check(&forest, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_info());
        assert_eq!(diagnostics[0].location.as_deref(), Some("User.id"));
    }
}
