use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for definition book operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Carries the book content and filename so validation code does not have
/// to thread both through every error constructor.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error, labelled at `span` when one is known.
    pub fn validation_error(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }

    /// Find the span of a quoted string value in the source.
    pub fn find_value_span(&self, value: &str) -> Option<SourceSpan> {
        [format!("\"{value}\""), format!("'{value}'")]
            .iter()
            .find_map(|pattern| self.src.find(pattern.as_str()))
            .map(|pos| SourceSpan::from((pos + 1, value.len())))
    }

    /// Find the span of a `key =` assignment in the source.
    pub fn find_key_span(&self, key: &str) -> Option<SourceSpan> {
        self.src.lines().scan(0usize, |offset, line| {
            let start = *offset;
            *offset += line.len() + 1;
            Some((start, line))
        })
        .find_map(|(start, line)| {
            let trimmed = line.trim_start();
            let rest = trimmed.strip_prefix(key)?;
            rest.trim_start().starts_with('=').then(|| {
                let indent = line.len() - trimmed.len();
                SourceSpan::from((start + indent, key.len()))
            })
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("run 'dtogen init' to create a starter definition book"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse definition book")]
    #[diagnostic(code(dtogen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(dtogen::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("failed to read matrix '{path}'")]
    #[diagnostic(code(dtogen::csv_error))]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("column '{label}' for attribute '{attribute}' not found in matrix header")]
    #[diagnostic(
        code(dtogen::missing_column),
        help("available columns: {available}. Map the attribute in the [columns] table")
    )]
    MissingColumn {
        label: String,
        attribute: String,
        available: String,
    },

    #[error("matrix has no header row")]
    #[diagnostic(code(dtogen::empty_matrix))]
    EmptyMatrix,

    #[error("delimiter '{delimiter}' must be a single ASCII character")]
    #[diagnostic(code(dtogen::invalid_delimiter))]
    InvalidDelimiter { delimiter: char },
}
