//! Bake operation - resource generation from a definition matrix.

use std::path::Path;

use dtogen_codegen::{
    outline::{DisplayStyle, OutlineDisplay},
    pipeline::{Pipeline, SnapshotPlugin},
};
use dtogen_ir::count_definitions;
use dtogen_matrix::Matrix;
use eyre::{Context, Result};

use crate::{
    language::LanguageSupport,
    reports::{BakeReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult},
};

/// Options for the bake operation.
pub struct BakeOptions<'a> {
    /// Output directory for generated resources.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
    /// Whether to output debug snapshots.
    pub visualize: bool,
}

/// Execute the bake operation.
///
/// Runs the pipeline on the matrix and renders resources for the target language.
pub fn bake(matrix: Matrix, lang: LanguageSupport, opts: BakeOptions) -> Result<BakeReport> {
    let project = matrix.project.clone();
    let package = matrix.context.package_name.clone();
    let version = matrix.context.version.clone();

    let debug_dir = opts.output_dir.join(".dtogen/debug");
    let mut pipeline = Pipeline::new();
    if opts.visualize {
        pipeline = pipeline.plugin(SnapshotPlugin::with_output_dir(&debug_dir));
    }
    let ctx = pipeline.run(matrix).wrap_err("Pipeline failed")?;

    let warnings: Vec<String> = ctx
        .warnings()
        .map(|d| match &d.location {
            Some(loc) => format!("{} ({})", d.message, loc),
            None => d.message.clone(),
        })
        .collect();

    let forest = ctx.forest()?;
    let definition_count = count_definitions(forest);
    let definition_tree = OutlineDisplay::new(forest)
        .style(DisplayStyle::TreeBox)
        .to_string();

    tracing::info!(
        language = %lang.language(),
        definitions = definition_count,
        dry_run = opts.dry_run,
        "baking"
    );

    let generator = lang.generator(ctx);
    let result = if opts.dry_run {
        let files = generator
            .preview()
            .wrap_err("Failed to render resources")?
            .into_iter()
            .map(|f| PreviewFile {
                path: f.path,
                content: f.content,
            })
            .collect();
        GenerationResult::Preview(PreviewResult { files })
    } else {
        let gen_result = generator
            .generate(opts.output_dir)
            .wrap_err("Failed to generate code")?;

        GenerationResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            files: gen_result.written,
            extension: lang.extension.to_string(),
            debug_dir: opts.visualize.then_some(debug_dir),
        })
    };

    Ok(BakeReport {
        project,
        package,
        version,
        warnings,
        definition_count,
        definition_tree,
        result,
    })
}

#[cfg(test)]
mod tests {
    use dtogen_ir::{Attribute, RenderContext, RowRecord};
    use dtogen_matrix::Language;
    use tempfile::TempDir;

    use super::*;

    fn row(line: usize, cells: [&str; 4]) -> RowRecord {
        RowRecord::new(line)
            .with(Attribute::Layer, cells[0])
            .with(Attribute::Name, cells[1])
            .with(Attribute::DataType, cells[2])
            .with(Attribute::Invariant, cells[3])
            .with(Attribute::Description, "documented")
    }

    fn matrix() -> Matrix {
        let rows = vec![
            row(1, ["0", "User", "", ""]),
            row(2, ["1", "id", "long", "o"]),
            row(3, ["1", "address", "Address", ""]),
            row(4, ["2", "Address", "", ""]),
            row(5, ["3", "city", "String", ""]),
        ];
        let context = RenderContext {
            package_name: "org.example".to_string(),
            author: "Jane Doe".to_string(),
            version: "2.1".to_string(),
            description: String::new(),
        };
        Matrix::new(context, rows)
    }

    #[test]
    fn test_bake_writes_java_resources() {
        let temp = TempDir::new().unwrap();
        let report = bake(
            matrix(),
            LanguageSupport::get(Language::Java),
            BakeOptions {
                output_dir: temp.path(),
                dry_run: false,
                visualize: true,
            },
        )
        .unwrap();

        assert_eq!(report.definition_count, 2);
        assert!(report.warnings.is_empty());
        assert!(temp.path().join("org/example/User.java").exists());
        assert!(temp.path().join("org/example/Address.java").exists());
        assert!(temp.path().join(".dtogen/debug/outline.json").exists());
        assert!(temp.path().join(".dtogen/debug/validate.json").exists());

        match report.result {
            GenerationResult::Written(written) => {
                assert_eq!(written.files.len(), 2);
                assert_eq!(written.extension, ".java");
            }
            GenerationResult::Preview(_) => panic!("expected written result"),
        }
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let report = bake(
            matrix(),
            LanguageSupport::get(Language::TypeScript),
            BakeOptions {
                output_dir: temp.path(),
                dry_run: true,
                visualize: false,
            },
        )
        .unwrap();

        match report.result {
            GenerationResult::Preview(preview) => {
                let paths: Vec<_> = preview.files.iter().map(|f| f.path.as_str()).collect();
                assert_eq!(
                    paths,
                    vec![
                        std::path::Path::new("org/example/Address.ts").to_str().unwrap(),
                        std::path::Path::new("org/example/User.ts").to_str().unwrap(),
                    ]
                );
            }
            GenerationResult::Written(_) => panic!("expected preview"),
        }
        assert!(!temp.path().join("org").exists());
    }

    #[test]
    fn test_bake_writes_json_documents() {
        let temp = TempDir::new().unwrap();
        let report = bake(
            matrix(),
            LanguageSupport::get(Language::Json),
            BakeOptions {
                output_dir: temp.path(),
                dry_run: false,
                visualize: false,
            },
        )
        .unwrap();

        match report.result {
            GenerationResult::Written(written) => assert_eq!(written.extension, ".json"),
            GenerationResult::Preview(_) => panic!("expected written result"),
        }
        let user = std::fs::read_to_string(temp.path().join("org/example/User.json")).unwrap();
        assert!(user.contains("\"name\": \"User\""));
        assert!(user.contains("\"nested\": [\n    \"Address\"\n  ]"));
    }
}
