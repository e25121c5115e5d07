//! Output layout for generated resources.

use std::path::{Path, PathBuf};

/// Convert a dotted package name into a relative directory.
///
/// `org.example.dto` becomes `org/example/dto`. An empty package maps to
/// the empty path so resources land directly in the output directory.
pub fn package_dir(package: &str) -> PathBuf {
    package
        .split('.')
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Full path of a resource file: `<base>/<package dir>/<name>.<extension>`.
pub fn resource_path(base: &Path, package: &str, name: &str, extension: &str) -> PathBuf {
    base.join(package_dir(package))
        .join(format!("{name}.{extension}"))
}

/// Check that a package name is a dotted path of identifiers.
pub fn is_package_name(package: &str) -> bool {
    !package.is_empty()
        && package.split('.').all(|segment| {
            let mut chars = segment.chars();
            matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_dir() {
        assert_eq!(package_dir("org.example.dto"), PathBuf::from("org/example/dto"));
        assert_eq!(package_dir("dto"), PathBuf::from("dto"));
        assert_eq!(package_dir(""), PathBuf::new());
    }

    #[test]
    fn test_resource_path() {
        let path = resource_path(Path::new("out"), "org.example", "User", "java");
        assert_eq!(path, PathBuf::from("out/org/example/User.java"));
    }

    #[test]
    fn test_is_package_name() {
        assert!(is_package_name("org.example.dto"));
        assert!(is_package_name("_internal.v2"));
        assert!(!is_package_name(""));
        assert!(!is_package_name("org..dto"));
        assert!(!is_package_name("org.1dto"));
        assert!(!is_package_name("org.example-dto"));
    }
}
