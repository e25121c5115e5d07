//! Reconstructed definition tree.

use serde::Serialize;

/// One schema class reconstructed from the matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Definition {
    pub name: String,
    pub description: String,
    /// Ordered fields; non-empty once the outline is built.
    pub fields: Vec<Field>,
}

impl Definition {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            fields: Vec::new(),
        }
    }

    /// Fields that must be supplied at construction time.
    pub fn invariant_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| f.invariant)
    }

    /// Whether any field owns nested definitions.
    pub fn has_nested(&self) -> bool {
        self.fields.iter().any(|f| !f.children.is_empty())
    }
}

/// One attribute of a [`Definition`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub name: String,
    pub data_type: String,
    pub initial_value: String,
    pub invariant: bool,
    pub description: String,
    /// Nested definitions owned by this field.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Definition>,
}

/// Count every definition in a forest, nested ones included.
pub fn count_definitions(forest: &[Definition]) -> usize {
    forest
        .iter()
        .map(|def| {
            1 + def
                .fields
                .iter()
                .map(|f| count_definitions(&f.children))
                .sum::<usize>()
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str, invariant: bool, children: Vec<Definition>) -> Field {
        Field {
            name: name.into(),
            data_type: "String".into(),
            initial_value: String::new(),
            invariant,
            description: String::new(),
            children,
        }
    }

    #[test]
    fn test_count_definitions_includes_nested() {
        let mut inner = Definition::new("Address", "");
        inner.fields.push(field("zip", false, vec![]));

        let mut outer = Definition::new("User", "");
        outer.fields.push(field("address", false, vec![inner]));
        outer.fields.push(field("id", true, vec![]));

        assert_eq!(count_definitions(std::slice::from_ref(&outer)), 2);
        assert!(outer.has_nested());
        assert_eq!(outer.invariant_fields().count(), 1);
    }

    #[test]
    fn test_serialize_skips_empty_children() {
        let json = serde_json::to_value(field("id", false, vec![])).unwrap();
        assert!(json.get("children").is_none());
    }
}
