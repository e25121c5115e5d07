use std::path::{Path, PathBuf};

use super::Book;
use crate::{Matrix, Result, grid::Grid};

/// Represents a dtogen.toml file with both raw content and parsed book.
pub struct DtogenToml {
    path: PathBuf,
    content: String,
    book: Book,
}

impl DtogenToml {
    /// Open and parse a dtogen.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let book = Book::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            book,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed book.
    pub fn book(&self) -> &Book {
        &self.book
    }

    /// Directory relative matrix paths are resolved against.
    pub fn base_dir(&self) -> &Path {
        self.path.parent().unwrap_or(Path::new("."))
    }

    /// Read the grid and resolve it into a [`Matrix`].
    pub fn load_matrix(&self) -> Result<Matrix> {
        let grid = Grid::load(&self.book.matrix, self.base_dir())?;
        Matrix::from_grid(&self.book, grid)
    }
}
