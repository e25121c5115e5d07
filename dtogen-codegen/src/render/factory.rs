//! The code factory seam between the renderer and a target language.

/// Result of a single factory call.
pub type FactoryResult = std::result::Result<String, Rejection>;

/// A factory's refusal to render an input, e.g. a reserved identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    /// What was rejected, e.g. `field 'class'`.
    pub subject: String,
    pub reason: String,
}

impl Rejection {
    pub fn new(subject: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            reason: reason.into(),
        }
    }
}

/// One field of a definition, rendered.
#[derive(Debug, Clone, Default)]
pub struct RenderedField {
    /// Documentation text; empty when the factory emits none.
    pub description: String,
    pub declaration: String,
}

/// Constructor pieces, one entry per invariant field.
#[derive(Debug, Clone, Default)]
pub struct Constructor {
    pub parameters: Vec<String>,
    pub assignments: Vec<String>,
}

/// Everything a factory needs to assemble one resource.
#[derive(Debug, Clone)]
pub struct ResourceParts<'a> {
    pub package_name: &'a str,
    pub class_name: &'a str,
    pub header: String,
    pub fields: Vec<RenderedField>,
    pub constructor: Constructor,
    /// Names of definitions nested directly under this one's fields.
    pub nested: Vec<&'a str>,
}

/// Produces target-language text from semantic pieces.
///
/// The renderer never writes target syntax itself; every piece of text in a
/// resource comes from one of these calls.
pub trait CodeFactory: Send + Sync {
    /// Language identifier (e.g., "java", "typescript")
    fn language(&self) -> &'static str;

    /// Class-level documentation block.
    fn class_header(&self, description: &str, author: &str, version: &str) -> FactoryResult;

    /// Field-level documentation; none by default.
    fn field_description(&self, description: &str) -> FactoryResult {
        let _ = description;
        Ok(String::new())
    }

    /// A field declaration, with its initializer when `initial_value` is non-empty.
    fn field_declaration(&self, data_type: &str, name: &str, initial_value: &str)
    -> FactoryResult;

    /// One constructor parameter.
    fn constructor_parameter(&self, data_type: &str, name: &str) -> FactoryResult;

    /// One constructor statement storing a parameter.
    fn constructor_assignment(&self, name: &str) -> FactoryResult;

    /// Assemble the complete resource text.
    fn assemble_resource(&self, parts: &ResourceParts<'_>) -> FactoryResult;
}
