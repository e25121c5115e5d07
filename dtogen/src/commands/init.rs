use std::path::{Path, PathBuf};

use clap::Args;
use dtogen_core::{
    FileRules, GeneratedFile, Overwrite, WriteResult, is_package_name, to_pascal_case,
    to_snake_case,
};
use dtogen_matrix::Language;
use eyre::{Context, Result};

#[derive(Args)]
pub struct InitCommand {
    /// Directory to initialize (defaults to the current directory)
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Target language written to the book
    #[arg(short, long, default_value = "java")]
    pub language: Language,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let name = Self::project_name(&self.dir)?;
        let book = StarterBook::new(&name, self.language);

        let mut created = Vec::new();
        let mut skipped = Vec::new();
        let files: [&dyn GeneratedFile; 2] = [&book, &StarterMatrix];
        for file in files {
            let path = file.path(&self.dir);
            match file
                .write(&self.dir)
                .wrap_err_with(|| format!("Failed to write {}", path.display()))?
            {
                WriteResult::Written => created.push(path),
                WriteResult::Skipped => skipped.push(path),
            }
        }

        println!("Initialized {} in {}", book.project, self.dir.display());
        for path in &created {
            println!("  + {}", path.display());
        }
        for path in &skipped {
            println!("  = {} (exists, kept)", path.display());
        }
        println!();
        println!("Next steps:");
        if self.dir != Path::new(".") {
            println!("  cd {}", self.dir.display());
        }
        println!("  dtogen bake --dry-run");

        Ok(())
    }

    fn project_name(dir: &Path) -> Result<String> {
        let dir = if dir == Path::new(".") {
            std::env::current_dir().wrap_err("Failed to get current directory")?
        } else {
            dir.to_path_buf()
        };
        dir.file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .ok_or_else(|| eyre::eyre!("Directory {} has no valid name", dir.display()))
    }
}

/// Starter `dtogen.toml` pointing at `definitions.csv`.
struct StarterBook {
    project: String,
    package: String,
    language: Language,
}

impl StarterBook {
    fn new(dir_name: &str, language: Language) -> Self {
        let package = format!("org.example.{}", to_snake_case(dir_name));
        Self {
            project: to_pascal_case(dir_name),
            package: if is_package_name(&package) {
                package
            } else {
                "org.example.dto".to_string()
            },
            language,
        }
    }
}

impl GeneratedFile for StarterBook {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("dtogen.toml")
    }

    fn rules(&self) -> FileRules {
        FileRules {
            overwrite: Overwrite::IfMissing,
            header: None,
        }
    }

    fn render(&self) -> String {
        format!(
            r#"[meta]
project = "{project}"
package = "{package}"
version = "1.0"
description = "Data transfer objects for {project}"
language = "{language}"

[creator]
name = "Your Name"

# Column labels of the matrix; omit a key to use its default label.
[columns]
layer = "Layer"
logical_delete = "Logical Delete"
name = "Variable Name"
data_type = "Data Type"
initial_value = "Initial Value"
invariant = "Invariant"
description = "Description"

[matrix]
path = "definitions.csv"
"#,
            project = self.project,
            package = self.package,
            language = self.language,
        )
    }
}

/// Starter matrix with one nested definition.
struct StarterMatrix;

impl GeneratedFile for StarterMatrix {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("definitions.csv")
    }

    fn rules(&self) -> FileRules {
        FileRules {
            overwrite: Overwrite::IfMissing,
            header: None,
        }
    }

    fn render(&self) -> String {
        "Layer,Logical Delete,Variable Name,Data Type,Initial Value,Invariant,Description
0,,User,,,,A registered user
1,,id,long,,o,Identifier
1,,name,String,\"\"\"guest\"\"\",,Display name
1,,address,Address,,,Home address
2,,Address,,,,Postal address
3,,zipCode,String,,o,Postal code
3,,city,String,,,City
1,x,legacyCode,String,,,Replaced by id
"
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use dtogen_codegen::pipeline::Pipeline;
    use dtogen_matrix::DtogenToml;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_starter_book_names() {
        let book = StarterBook::new("order-service", Language::Java);
        assert_eq!(book.project, "OrderService");
        assert_eq!(book.package, "org.example.order_service");

        let fallback = StarterBook::new("1st try", Language::Java);
        assert_eq!(fallback.package, "org.example.dto");
    }

    #[test]
    fn test_starter_files_load_and_compile() {
        let temp = TempDir::new().unwrap();
        let book = StarterBook::new("shop", Language::TypeScript);
        book.write(temp.path()).unwrap();
        StarterMatrix.write(temp.path()).unwrap();

        let file = DtogenToml::open(temp.path().join("dtogen.toml")).unwrap();
        assert_eq!(file.book().meta.language, Language::TypeScript);

        let matrix = file.load_matrix().unwrap();
        assert_eq!(matrix.rows.len(), 8);
        assert_eq!(matrix.rows[2].initial_value(), "\"guest\"");

        let ctx = Pipeline::new().run(matrix).unwrap();
        let forest = ctx.forest().unwrap();
        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].fields.len(), 3);
        assert_eq!(forest[0].fields[2].children[0].name, "Address");
    }

    #[test]
    fn test_existing_files_are_kept() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("definitions.csv"), "custom").unwrap();

        let result = StarterMatrix.write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Skipped);
        assert_eq!(
            std::fs::read_to_string(temp.path().join("definitions.csv")).unwrap(),
            "custom"
        );
    }
}
