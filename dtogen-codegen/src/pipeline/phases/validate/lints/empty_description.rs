//! Lint for missing descriptions.

use dtogen_ir::Definition;

use super::super::{Lint, lint::for_each_definition};
use crate::pipeline::Diagnostic;

/// Lint that warns about definitions and fields without a description.
///
/// Descriptions become the documentation comments of generated resources.
pub struct EmptyDescriptionLint;

impl Lint for EmptyDescriptionLint {
    fn name(&self) -> &'static str {
        "empty-description"
    }

    fn description(&self) -> &'static str {
        "Warn about definitions and fields without a description"
    }

    fn check(&self, forest: &[Definition], diagnostics: &mut Vec<Diagnostic>) {
        for_each_definition(forest, &mut |def| {
            if def.description.trim().is_empty() {
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!("definition '{}' has no description", def.name),
                    )
                    .at(&def.name),
                );
            }
            for field in &def.fields {
                if field.description.trim().is_empty() {
                    diagnostics.push(
                        Diagnostic::warning(
                            "validate",
                            format!("field '{}' has no description", field.name),
                        )
                        .at(format!("{}.{}", def.name, field.name)),
                    );
                }
            }
        });
    }
}
