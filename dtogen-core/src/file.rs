use std::path::{Path, PathBuf};

use eyre::Result;

/// Trait for files that dtogen renders from a fixed template
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk
    fn write(&self, base: &Path) -> Result<WriteResult> {
        write_with_rules(&self.path(base), &self.render(), &self.rules())
    }
}

fn write_with_rules(path: &Path, content: &str, rules: &FileRules) -> Result<WriteResult> {
    if rules.overwrite == Overwrite::IfMissing && path.exists() {
        tracing::debug!(path = %path.display(), "file exists, skipping");
        return Ok(WriteResult::Skipped);
    }

    match rules.header {
        Some(header) => write_file(path, &format!("{header}\n{content}"))?,
        None => write_file(path, content)?,
    }
    tracing::debug!(path = %path.display(), "file written");
    Ok(WriteResult::Written)
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was skipped (already exists)
    Skipped,
}

/// A rendered resource waiting to be written
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
    rules: FileRules,
}

impl File {
    /// Create a new file with the given path and content (default rules: always overwrite)
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            rules: FileRules::default(),
        }
    }

    /// Replace the write rules.
    pub fn with_rules(mut self, rules: FileRules) -> Self {
        self.rules = rules;
        self
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the file according to its rules
    pub fn write(&self) -> Result<WriteResult> {
        write_with_rules(&self.path, &self.content, &self.rules)
    }
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone)]
pub struct FileRules {
    pub overwrite: Overwrite,
    /// Line prepended to the content, e.g. a "generated by" banner
    pub header: Option<&'static str>,
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite (generated resources)
    Always,
    /// Only create if file doesn't exist (starter files)
    IfMissing,
}

impl Default for FileRules {
    fn default() -> Self {
        Self {
            overwrite: Overwrite::Always,
            header: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("org").join("example").join("User.java");

        write_file(&path, "class User {}").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "class User {}");
    }

    #[test]
    fn test_file_write_always_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("User.java");
        fs::write(&path, "original").unwrap();

        let result = File::new(&path, "updated").write().unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "updated");
    }

    #[test]
    fn test_file_write_if_missing_skips_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("dtogen.toml");
        fs::write(&path, "original").unwrap();

        let file = File::new(&path, "should not write").with_rules(FileRules {
            overwrite: Overwrite::IfMissing,
            header: None,
        });

        assert_eq!(file.write().unwrap(), WriteResult::Skipped);
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
    }

    #[test]
    fn test_file_write_if_missing_creates_new() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("definitions.csv");

        let file = File::new(&path, "Layer").with_rules(FileRules {
            overwrite: Overwrite::IfMissing,
            header: None,
        });

        assert_eq!(file.write().unwrap(), WriteResult::Written);
        assert!(file.exists());
    }

    #[test]
    fn test_file_header_is_prepended() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("User.ts");

        File::new(&path, "export class User {}\n")
            .with_rules(FileRules {
                overwrite: Overwrite::Always,
                header: Some("// Generated by dtogen. Do not edit."),
            })
            .write()
            .unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "// Generated by dtogen. Do not edit.\nexport class User {}\n"
        );
    }

    #[test]
    fn test_generated_file_trait_writes_under_base() {
        struct Readme;

        impl GeneratedFile for Readme {
            fn path(&self, base: &Path) -> PathBuf {
                base.join("docs").join("README.md")
            }

            fn rules(&self) -> FileRules {
                FileRules::default()
            }

            fn render(&self) -> String {
                "# DTOs\n".to_string()
            }
        }

        let temp = TempDir::new().unwrap();
        let result = Readme.write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(
            fs::read_to_string(temp.path().join("docs/README.md")).unwrap(),
            "# DTOs\n"
        );
    }
}
