//! Java identifier rules.

use dtogen_codegen::language::{NamingConvention, c_like_part, c_like_start};

/// Java naming conventions.
pub const JAVA_NAMING: NamingConvention = NamingConvention {
    identifier_start: c_like_start,
    identifier_part: c_like_part,
    reserved_words: &[
        "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class",
        "const", "continue", "default", "do", "double", "else", "enum", "extends", "final",
        "finally", "float", "for", "goto", "if", "implements", "import", "instanceof", "int",
        "interface", "long", "native", "new", "package", "private", "protected", "public",
        "return", "short", "static", "strictfp", "super", "switch", "synchronized", "this",
        "throw", "throws", "transient", "try", "void", "volatile", "while", "true", "false",
        "null", "var", "record", "yield", "_",
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_java_reserved_words() {
        assert!(JAVA_NAMING.is_reserved("class"));
        assert!(JAVA_NAMING.is_reserved("record"));
        assert!(!JAVA_NAMING.is_reserved("Class"));
        assert!(!JAVA_NAMING.is_reserved("name"));
    }

    #[test]
    fn test_java_identifiers() {
        assert!(JAVA_NAMING.check("serialNumber", "field").is_ok());
        assert!(JAVA_NAMING.check("$cache", "field").is_ok());
        assert!(JAVA_NAMING.check("2fa", "field").is_err());
        assert!(JAVA_NAMING.check("_", "field").is_err());
    }
}
