//! Target languages for generated resources.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Supported target languages for code generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Java classes (the default)
    #[default]
    Java,
    /// TypeScript classes
    TypeScript,
    /// JSON documents describing each definition
    Json,
}

impl Language {
    /// Returns the language identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Java => "java",
            Language::TypeScript => "typescript",
            Language::Json => "json",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "java" => Ok(Language::Java),
            "typescript" | "ts" => Ok(Language::TypeScript),
            "json" => Ok(Language::Json),
            _ => Err(format!(
                "unknown language '{}', expected 'java', 'typescript' or 'json'",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(Language::from_str("java").unwrap(), Language::Java);
        assert_eq!(Language::from_str("Java").unwrap(), Language::Java);
        assert_eq!(Language::from_str("ts").unwrap(), Language::TypeScript);
        assert_eq!(
            Language::from_str("TypeScript").unwrap(),
            Language::TypeScript
        );
        assert_eq!(Language::from_str("JSON").unwrap(), Language::Json);
        assert!(Language::from_str("cobol").is_err());
    }

    #[test]
    fn test_deserialize() {
        let java: Language = serde_json::from_str(r#""java""#).unwrap();
        assert_eq!(java, Language::Java);

        let ts: Language = serde_json::from_str(r#""typescript""#).unwrap();
        assert_eq!(ts, Language::TypeScript);

        let json: Language = serde_json::from_str(r#""json""#).unwrap();
        assert_eq!(json, Language::Json);
        assert_eq!(Language::Json.to_string(), "json");
    }

    #[test]
    fn test_default_is_java() {
        assert_eq!(Language::default(), Language::Java);
    }
}
