//! Definition book parsing and matrix loading for dtogen.
//!
//! A definition book (`dtogen.toml`) names the project, the creator, the
//! target package and the grid that holds the definition matrix. This crate
//! reads the book, extracts the grid (CSV file or inline table) and resolves
//! its columns into [`RowRecord`]s for the outline builder.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod book;
mod columns;
mod error;
mod grid;

use dtogen_ir::{RenderContext, RowRecord};

pub use book::{
    Book, ColumnsConfig, CreatorConfig, DtogenToml, Language, MatrixConfig, MetaConfig, parse_book,
};
pub use columns::{ColumnMapping, ResolvedColumns};
pub use error::{Error, Result, SourceContext};
pub use grid::{Grid, GridRow};

/// Everything the generator needs from a definition book.
#[derive(Debug, Clone)]
pub struct Matrix {
    /// Project name from `[meta]`.
    pub project: String,
    pub language: Language,
    pub context: RenderContext,
    /// Data rows in source order.
    pub rows: Vec<RowRecord>,
}

impl Matrix {
    /// Build a matrix directly from rows, e.g. for rows produced in memory.
    pub fn new(context: RenderContext, rows: Vec<RowRecord>) -> Self {
        Self {
            project: String::new(),
            language: Language::default(),
            context,
            rows,
        }
    }

    /// Resolve a grid's columns using the book's column mapping.
    pub fn from_grid(book: &Book, grid: Grid) -> Result<Self> {
        let columns = ColumnMapping::from_config(&book.columns).resolve(&grid.header)?;
        let rows: Vec<RowRecord> = grid.rows.iter().map(|row| columns.record(row)).collect();

        tracing::debug!(rows = rows.len(), "matrix resolved");

        Ok(Self {
            project: book.meta.project.clone(),
            language: book.meta.language,
            context: book.render_context(),
            rows,
        })
    }
}
