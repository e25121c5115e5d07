//! Lint trait for forest validation.

use dtogen_ir::Definition;

use crate::pipeline::Diagnostic;

/// A lint that checks the definition forest for issues.
pub trait Lint: Send + Sync {
    /// The name of this lint (kebab-case).
    fn name(&self) -> &'static str;

    /// A human-readable description of what this lint checks.
    fn description(&self) -> &'static str;

    /// Check the forest and add any diagnostics.
    fn check(&self, forest: &[Definition], diagnostics: &mut Vec<Diagnostic>);
}

/// Visit every definition of a forest, nested ones included, parents first.
pub(crate) fn for_each_definition<'a>(forest: &'a [Definition], visit: &mut impl FnMut(&'a Definition)) {
    for def in forest {
        visit(def);
        for field in &def.fields {
            for_each_definition(&field.children, visit);
        }
    }
}
