//! Lint for definition and field naming conventions.

use dtogen_core::{to_camel_case, to_pascal_case};
use dtogen_ir::Definition;

use super::super::{Lint, lint::for_each_definition};
use crate::pipeline::Diagnostic;

/// Lint that warns about definition names that are not PascalCase and
/// field names that are not lowerCamelCase.
pub struct FieldNamingLint;

impl Lint for FieldNamingLint {
    fn name(&self) -> &'static str {
        "field-naming"
    }

    fn description(&self) -> &'static str {
        "Check PascalCase definition names and camelCase field names"
    }

    fn check(&self, forest: &[Definition], diagnostics: &mut Vec<Diagnostic>) {
        for_each_definition(forest, &mut |def| {
            if !is_pascal_case(&def.name) {
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!(
                            "definition '{}' should be PascalCase (e.g. '{}')",
                            def.name,
                            to_pascal_case(&def.name)
                        ),
                    )
                    .at(&def.name),
                );
            }
            for field in &def.fields {
                if !is_camel_case(&field.name) {
                    diagnostics.push(
                        Diagnostic::warning(
                            "validate",
                            format!(
                                "field '{}' should be camelCase (e.g. '{}')",
                                field.name,
                                to_camel_case(&field.name)
                            ),
                        )
                        .at(format!("{}.{}", def.name, field.name)),
                    );
                }
            }
        });
    }
}

fn is_pascal_case(name: &str) -> bool {
    name.starts_with(|c: char| c.is_ascii_uppercase())
        && name.chars().all(|c| c.is_ascii_alphanumeric())
}

fn is_camel_case(name: &str) -> bool {
    name.starts_with(|c: char| c.is_ascii_lowercase())
        && name.chars().all(|c| c.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{outline::build_outline, testing::Rows};

    #[test]
    fn test_case_checks() {
        assert!(is_pascal_case("UserAccount"));
        assert!(!is_pascal_case("userAccount"));
        assert!(!is_pascal_case("User_Account"));
        assert!(is_camel_case("zipCode"));
        assert!(!is_camel_case("ZipCode"));
        assert!(!is_camel_case("zip_code"));
        assert!(!is_camel_case(""));
    }

    #[test]
    fn test_reports_both_kinds() {
        let forest = build_outline(
            &Rows::new()
                .definition(0, "user", "")
                .field(1, "zip_code", "String")
                .field(1, "city", "String")
                .build(),
        )
        .unwrap();

        let mut diagnostics = Vec::new();
        FieldNamingLint.check(&forest, &mut diagnostics);

        let locations: Vec<_> = diagnostics
            .iter()
            .map(|d| d.location.as_deref().unwrap_or_default())
            .collect();
        assert_eq!(locations, vec!["user", "user.zip_code"]);
        assert!(diagnostics[1].message.ends_with("(e.g. 'zipCode')"));
        assert!(diagnostics.iter().all(|d| d.severity.is_warning()));
    }
}
