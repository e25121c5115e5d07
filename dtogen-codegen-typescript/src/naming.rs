//! TypeScript identifier rules.

use dtogen_codegen::language::{NamingConvention, c_like_part, c_like_start};

/// TypeScript naming conventions.
pub const TS_NAMING: NamingConvention = NamingConvention {
    identifier_start: c_like_start,
    identifier_part: c_like_part,
    reserved_words: &[
        "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete",
        "do", "else", "enum", "export", "extends", "false", "finally", "for", "function", "if",
        "import", "in", "instanceof", "new", "null", "return", "super", "switch", "this",
        "throw", "true", "try", "typeof", "var", "void", "while", "with", "implements",
        "interface", "let", "package", "private", "protected", "public", "static", "yield",
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typescript_reserved_words() {
        assert!(TS_NAMING.is_reserved("function"));
        assert!(TS_NAMING.is_reserved("typeof"));
        assert!(!TS_NAMING.is_reserved("type"));
        assert!(!TS_NAMING.is_reserved("long"));
    }
}
