//! Identifier rules for target languages.

use crate::render::Rejection;

/// Language-specific identifier rules.
///
/// Factories check every class and field name against these rules and
/// reject the ones the target language cannot compile.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Characters allowed as the first character of an identifier
    pub identifier_start: fn(char) -> bool,
    /// Characters allowed after the first character
    pub identifier_part: fn(char) -> bool,
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Check if a name is a syntactically valid identifier.
    pub fn is_identifier(&self, name: &str) -> bool {
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => (self.identifier_start)(first) && chars.all(self.identifier_part),
            None => false,
        }
    }

    /// Accept a name usable as an identifier, or reject it naming `subject`.
    pub fn check(&self, name: &str, subject: &str) -> Result<(), Rejection> {
        if !self.is_identifier(name) {
            return Err(Rejection::new(subject, "not a valid identifier"));
        }
        if self.is_reserved(name) {
            return Err(Rejection::new(subject, "reserved word"));
        }
        Ok(())
    }
}

/// Letters, `_` and `$`, the start rule shared by Java and TypeScript.
pub fn c_like_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

/// Letters, digits, `_` and `$`.
pub fn c_like_part(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAMING: NamingConvention = NamingConvention {
        identifier_start: c_like_start,
        identifier_part: c_like_part,
        reserved_words: &["class", "new"],
    };

    #[test]
    fn test_identifiers() {
        assert!(NAMING.is_identifier("zipCode"));
        assert!(NAMING.is_identifier("_id"));
        assert!(NAMING.is_identifier("$ref"));
        assert!(!NAMING.is_identifier("1st"));
        assert!(!NAMING.is_identifier("zip code"));
        assert!(!NAMING.is_identifier(""));
    }

    #[test]
    fn test_check() {
        assert!(NAMING.check("name", "field 'name'").is_ok());

        let reserved = NAMING.check("class", "field 'class'").unwrap_err();
        assert_eq!(reserved.subject, "field 'class'");
        assert_eq!(reserved.reason, "reserved word");

        let invalid = NAMING.check("zip-code", "field 'zip-code'").unwrap_err();
        assert_eq!(invalid.reason, "not a valid identifier");
    }
}
