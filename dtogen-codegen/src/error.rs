use miette::Diagnostic;
use thiserror::Error;

/// Result type for outline and render operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building the outline or rendering resources.
///
/// Every variant is terminal for the call that produced it; no partial
/// result is returned alongside.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("invalid layer value '{value}' at row {line}")]
    #[diagnostic(
        code(dtogen::format),
        help("the layer column must hold a non-negative integer")
    )]
    Format { line: usize, value: String },

    #[error("{message}{}", at_row(.line))]
    #[diagnostic(code(dtogen::structural))]
    Structural { message: String, line: Option<usize> },

    #[error("matrix contains no definitions")]
    #[diagnostic(
        code(dtogen::empty_definition),
        help("start a definition with a row whose layer is 0")
    )]
    EmptyDefinition,

    #[error("nesting deeper than {max_depth} levels{}", at_row(.line))]
    #[diagnostic(code(dtogen::depth_exceeded))]
    DepthExceeded {
        max_depth: usize,
        line: Option<usize>,
    },

    #[error("definition '{name}' is declared more than once")]
    #[diagnostic(
        code(dtogen::name_collision),
        help("every definition becomes its own resource, so names must be unique")
    )]
    NameCollision { name: String },

    #[error("cannot render {subject} of '{definition}': {reason}")]
    #[diagnostic(code(dtogen::render))]
    Render {
        definition: String,
        subject: String,
        reason: String,
    },
}

fn at_row(line: &Option<usize>) -> String {
    match line {
        Some(line) => format!(" at row {line}"),
        None => String::new(),
    }
}

impl Error {
    pub(crate) fn structural(message: impl Into<String>, line: Option<usize>) -> Self {
        Self::Structural {
            message: message.into(),
            line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_display_with_row() {
        let err = Error::structural("orphan nested block", Some(4));
        assert_eq!(err.to_string(), "orphan nested block at row 4");
    }

    #[test]
    fn test_structural_display_without_row() {
        let err = Error::structural("definition 'User' has no fields", None);
        assert_eq!(err.to_string(), "definition 'User' has no fields");
    }

    #[test]
    fn test_depth_display() {
        let err = Error::DepthExceeded {
            max_depth: 2,
            line: Some(9),
        };
        assert_eq!(err.to_string(), "nesting deeper than 2 levels at row 9");
    }
}
