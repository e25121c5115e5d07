//! Outline display formatting.
//!
//! ```ignore
//! use dtogen_codegen::outline::{OutlineDisplay, DisplayStyle};
//!
//! let display = OutlineDisplay::new(&forest)
//!     .style(DisplayStyle::TreeBox);
//!
//! println!("{}", display);
//! ```

use std::fmt;

use dtogen_ir::{Definition, Field};

/// Display style for outlines.
#[derive(Debug, Clone, Copy, Default)]
pub enum DisplayStyle {
    /// Definition names only, indented by nesting.
    ///
    /// ```text
    /// User
    ///   Address
    /// ```
    #[default]
    Simple,

    /// Definitions with their typed fields.
    ///
    /// ```text
    /// User
    ///   id: long (invariant)
    ///   address: Address
    ///     Address
    ///       zipCode: String
    /// ```
    WithFields,

    /// Tree structure with box-drawing characters and field counts.
    ///
    /// ```text
    /// └─ User (2 fields)
    ///    └─ Address (1 field)
    /// ```
    TreeBox,
}

const INDENT: &str = "  ";

/// Declarative outline display formatter.
#[derive(Debug, Clone)]
pub struct OutlineDisplay<'a> {
    forest: &'a [Definition],
    style: DisplayStyle,
}

impl<'a> OutlineDisplay<'a> {
    pub fn new(forest: &'a [Definition]) -> Self {
        Self {
            forest,
            style: DisplayStyle::default(),
        }
    }

    /// Set the display style.
    pub fn style(mut self, style: DisplayStyle) -> Self {
        self.style = style;
        self
    }

    /// Render the outline to a string.
    pub fn render(&self) -> String {
        let mut output = String::new();
        match self.style {
            DisplayStyle::Simple => self.render_simple(&mut output, self.forest, 0),
            DisplayStyle::WithFields => self.render_with_fields(&mut output, self.forest, 0),
            DisplayStyle::TreeBox => self.render_tree_box(&mut output, self.forest, ""),
        }
        output
    }

    fn render_simple(&self, output: &mut String, forest: &[Definition], depth: usize) {
        for def in forest {
            output.push_str(&INDENT.repeat(depth));
            output.push_str(&def.name);
            output.push('\n');
            for field in &def.fields {
                self.render_simple(output, &field.children, depth + 1);
            }
        }
    }

    fn render_with_fields(&self, output: &mut String, forest: &[Definition], depth: usize) {
        for def in forest {
            output.push_str(&INDENT.repeat(depth));
            output.push_str(&def.name);
            output.push('\n');
            for field in &def.fields {
                output.push_str(&INDENT.repeat(depth + 1));
                output.push_str(&format_field(field));
                output.push('\n');
                self.render_with_fields(output, &field.children, depth + 2);
            }
        }
    }

    fn render_tree_box(&self, output: &mut String, forest: &[Definition], prefix: &str) {
        let total = forest.len();
        for (i, def) in forest.iter().enumerate() {
            let is_last = i == total - 1;
            let connector = if is_last { "└─" } else { "├─" };
            let child_prefix = if is_last { "   " } else { "│  " };

            output.push_str(prefix);
            output.push_str(connector);
            output.push(' ');
            output.push_str(&def.name);

            let count = def.fields.len();
            output.push_str(&format!(
                " ({} field{})",
                count,
                if count == 1 { "" } else { "s" }
            ));
            output.push('\n');

            let nested: Vec<Definition> = def
                .fields
                .iter()
                .flat_map(|f| f.children.iter().cloned())
                .collect();
            if !nested.is_empty() {
                let new_prefix = format!("{}{}", prefix, child_prefix);
                self.render_tree_box(output, &nested, &new_prefix);
            }
        }
    }
}

fn format_field(field: &Field) -> String {
    let mut text = format!("{}: {}", field.name, field.data_type);
    if !field.initial_value.is_empty() {
        text.push_str(&format!(" = {}", field.initial_value));
    }
    if field.invariant {
        text.push_str(" (invariant)");
    }
    text
}

impl fmt::Display for OutlineDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Trim the trailing newline; callers add their own
        write!(f, "{}", self.render().trim_end_matches('\n'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{outline::build_outline, testing::Rows};

    fn sample() -> Vec<Definition> {
        let rows = Rows::new()
            .definition(0, "User", "")
            .invariant(1, "id", "long")
            .field(1, "address", "Address")
            .definition(2, "Address", "")
            .field(3, "zipCode", "String")
            .initial("\"000\"")
            .definition(0, "Group", "")
            .field(1, "title", "String")
            .build();
        build_outline(&rows).unwrap()
    }

    #[test]
    fn test_simple_style() {
        let forest = sample();
        let text = OutlineDisplay::new(&forest).to_string();
        assert_eq!(text, "User\n  Address\nGroup");
    }

    #[test]
    fn test_with_fields_style() {
        let forest = sample();
        let text = OutlineDisplay::new(&forest)
            .style(DisplayStyle::WithFields)
            .to_string();
        assert_eq!(
            text,
            "User\n  id: long (invariant)\n  address: Address\n    Address\n      zipCode: String = \"000\"\nGroup\n  title: String"
        );
    }

    #[test]
    fn test_tree_box_style() {
        let forest = sample();
        let text = OutlineDisplay::new(&forest)
            .style(DisplayStyle::TreeBox)
            .to_string();
        assert_eq!(
            text,
            "├─ User (2 fields)\n│  └─ Address (1 field)\n└─ Group (1 field)"
        );
    }
}
