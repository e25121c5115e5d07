use serde::Serialize;

/// Book-level metadata handed to every rendered resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderContext {
    /// Dotted package the resources belong to.
    pub package_name: String,
    /// Creator of the definition book.
    pub author: String,
    pub version: String,
    /// Description of the book itself, used when a definition has none.
    pub description: String,
}
