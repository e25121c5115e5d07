//! Definition book parsing from files and strings.

use std::{collections::HashMap, path::Path, str::FromStr};

use dtogen_core::is_package_name;
use dtogen_ir::Attribute;

use super::Book;
use crate::{Error, Result, error::SourceContext};

impl FromStr for Book {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_book(s, "dtogen.toml")
    }
}

impl Book {
    /// Parse a dtogen.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_book(&content, &path.display().to_string())
    }

    /// Parse a dtogen.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_book(content, filename)
    }
}

/// Parse a book from content with the given filename for error reporting.
pub fn parse_book(content: &str, filename: &str) -> Result<Book> {
    let source_ctx = SourceContext::new(content, filename);
    let book: Book = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_book(&book, &source_ctx)?;
    Ok(book)
}

/// Validate the book after parsing.
fn validate_book(book: &Book, ctx: &SourceContext) -> Result<()> {
    if book.meta.project.trim().is_empty() {
        return Err(ctx.validation_error("project name cannot be blank", ctx.find_key_span("project")));
    }

    if book.creator.name.trim().is_empty() {
        return Err(ctx.validation_error("creator name cannot be blank", ctx.find_key_span("name")));
    }

    if !is_package_name(&book.meta.package) {
        return Err(ctx.validation_error(
            format!(
                "invalid package '{}': expected dotted identifiers such as 'org.example.dto'",
                book.meta.package
            ),
            ctx.find_value_span(&book.meta.package)
                .or_else(|| ctx.find_key_span("package")),
        ));
    }

    validate_matrix(book, ctx)?;
    validate_columns(book, ctx)
}

fn validate_matrix(book: &Book, ctx: &SourceContext) -> Result<()> {
    let matrix = &book.matrix;

    match (&matrix.path, &matrix.header) {
        (Some(_), Some(_)) => {
            return Err(ctx.validation_error(
                "matrix must set either 'path' or 'header', not both",
                ctx.find_key_span("header"),
            ));
        }
        (None, None) => {
            return Err(ctx.validation_error(
                "matrix must set 'path' to a CSV file or an inline 'header'",
                None,
            ));
        }
        (Some(_), None) if !matrix.rows.is_empty() => {
            return Err(ctx.validation_error(
                "inline 'rows' require an inline 'header'",
                ctx.find_key_span("rows"),
            ));
        }
        _ => {}
    }

    if let Some(delimiter) = matrix.delimiter
        && !delimiter.is_ascii()
    {
        return Err(ctx.validation_error(
            format!("delimiter '{}' must be a single ASCII character", delimiter),
            ctx.find_key_span("delimiter"),
        ));
    }

    Ok(())
}

fn validate_columns(book: &Book, ctx: &SourceContext) -> Result<()> {
    let mut seen: HashMap<&str, Attribute> = HashMap::new();

    for attribute in Attribute::ALL {
        let label = book
            .columns
            .label(attribute)
            .unwrap_or(attribute.default_label());

        if label.trim().is_empty() {
            return Err(ctx.validation_error(
                format!("column label for '{}' cannot be blank", attribute),
                ctx.find_key_span(attribute.key()),
            ));
        }

        if let Some(first) = seen.insert(label, attribute) {
            return Err(ctx.validation_error(
                format!(
                    "column '{}' is mapped to both '{}' and '{}'",
                    label, first, attribute
                ),
                ctx.find_value_span(label),
            ));
        }
    }

    Ok(())
}
