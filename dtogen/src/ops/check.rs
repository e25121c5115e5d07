//! Check operation - matrix validation.

use std::path::Path;

use dtogen_codegen::pipeline::{Pipeline, Severity, phases::ValidatePhase};
use dtogen_ir::count_definitions;
use dtogen_matrix::Matrix;
use eyre::{Context, Result};

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Runs every lint and collects diagnostics. Lint errors end up in the
/// report instead of failing the operation; outline errors still fail.
pub fn check(matrix: Matrix, config_path: &Path) -> Result<CheckReport> {
    let validate = ValidatePhase::new();
    let lints = validate.lint_names().len();

    // Lints run here so errors can be reported next to warnings
    let ctx = Pipeline::new()
        .validate(ValidatePhase::empty())
        .run(matrix)
        .wrap_err("Validation failed")?;
    let forest = ctx.forest()?;
    let diagnostics = validate.check(forest);

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut infos = Vec::new();

    for diag in &diagnostics {
        let msg = if let Some(loc) = &diag.location {
            format!("{}\n  --> {}", diag.message, loc)
        } else {
            diag.message.clone()
        };

        match diag.severity {
            Severity::Error => errors.push(msg),
            Severity::Warning => warnings.push(msg),
            Severity::Info => infos.push(msg),
        }
    }

    Ok(CheckReport {
        config_path: config_path.to_path_buf(),
        definition_count: count_definitions(forest),
        lint_count: lints,
        errors,
        warnings,
        infos,
    })
}
