//! Test utilities for the outline builder, renderer and generators.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use dtogen_ir::{Attribute, RenderContext, RowRecord};

use crate::render::{CodeFactory, FactoryResult, Rejection, ResourceParts};

/// Fluent builder for matrix rows. Lines are numbered from 1.
#[derive(Debug, Default)]
pub struct Rows {
    rows: Vec<RowRecord>,
}

impl Rows {
    pub fn new() -> Self {
        Self::default()
    }

    /// A definition header row.
    pub fn definition(self, layer: usize, name: &str, description: &str) -> Self {
        self.push(layer, name, "", description, false, false)
    }

    /// A plain field row.
    pub fn field(self, layer: usize, name: &str, data_type: &str) -> Self {
        self.push(layer, name, data_type, "", false, false)
    }

    /// A field row marked invariant.
    pub fn invariant(self, layer: usize, name: &str, data_type: &str) -> Self {
        self.push(layer, name, data_type, "", true, false)
    }

    /// A logically deleted row.
    pub fn deleted(self, layer: usize, name: &str, data_type: &str) -> Self {
        self.push(layer, name, data_type, "", false, true)
    }

    /// Set the description of the last row.
    pub fn described(self, description: &str) -> Self {
        self.update_last(Attribute::Description, description)
    }

    /// Set the initial value of the last row.
    pub fn initial(self, value: &str) -> Self {
        self.update_last(Attribute::InitialValue, value)
    }

    pub fn build(self) -> Vec<RowRecord> {
        self.rows
    }

    fn push(
        mut self,
        layer: usize,
        name: &str,
        data_type: &str,
        description: &str,
        invariant: bool,
        deleted: bool,
    ) -> Self {
        let line = self.rows.len() + 1;
        self.rows.push(
            RowRecord::new(line)
                .with(Attribute::Layer, layer.to_string())
                .with(Attribute::LogicalDelete, if deleted { "x" } else { "" })
                .with(Attribute::Name, name)
                .with(Attribute::DataType, data_type)
                .with(Attribute::InitialValue, "")
                .with(Attribute::Invariant, if invariant { "o" } else { "" })
                .with(Attribute::Description, description),
        );
        self
    }

    fn update_last(mut self, attribute: Attribute, value: &str) -> Self {
        if let Some(row) = self.rows.last_mut() {
            row.set(attribute, value);
        }
        self
    }
}

/// Render context used across tests.
pub fn sample_context() -> RenderContext {
    RenderContext {
        package_name: "org.example.dto".to_string(),
        author: "Jane Doe".to_string(),
        version: "1.0".to_string(),
        description: "Sample DTOs".to_string(),
    }
}

/// A line-per-piece factory that rejects names containing whitespace.
pub struct PlainFactory;

impl CodeFactory for PlainFactory {
    fn language(&self) -> &'static str {
        "plain"
    }

    fn class_header(&self, description: &str, author: &str, version: &str) -> FactoryResult {
        Ok(format!("header: {description} by {author} v{version}"))
    }

    fn field_declaration(
        &self,
        data_type: &str,
        name: &str,
        initial_value: &str,
    ) -> FactoryResult {
        if name.chars().any(char::is_whitespace) {
            return Err(Rejection::new(
                format!("field '{name}'"),
                "names cannot contain whitespace",
            ));
        }
        if initial_value.is_empty() {
            Ok(format!("field {data_type} {name}"))
        } else {
            Ok(format!("field {data_type} {name} = {initial_value}"))
        }
    }

    fn constructor_parameter(&self, data_type: &str, name: &str) -> FactoryResult {
        Ok(format!("{data_type} {name}"))
    }

    fn constructor_assignment(&self, name: &str) -> FactoryResult {
        Ok(format!("set {name}"))
    }

    fn assemble_resource(&self, parts: &ResourceParts<'_>) -> FactoryResult {
        let mut text = format!(
            "package {}\n{}\nclass {}\n",
            parts.package_name, parts.header, parts.class_name
        );
        for field in &parts.fields {
            if !field.description.is_empty() {
                text.push_str(&field.description);
                text.push('\n');
            }
            text.push_str(&field.declaration);
            text.push('\n');
        }
        text.push_str(&format!("new({})\n", parts.constructor.parameters.join(", ")));
        for assignment in &parts.constructor.assignments {
            text.push_str(assignment);
            text.push('\n');
        }
        Ok(text)
    }
}
