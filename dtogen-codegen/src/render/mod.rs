//! Tree to resource rendering.
//!
//! The renderer walks a definition forest depth-first and hands the semantic
//! pieces of every definition (header, fields, constructor) to a
//! [`CodeFactory`], which owns all target-language syntax. Nested
//! definitions become resources of their own.

mod factory;

use dtogen_ir::{Definition, RenderContext};
pub use factory::{CodeFactory, Constructor, FactoryResult, Rejection, RenderedField, ResourceParts};
use indexmap::{IndexMap, map::Entry};

use crate::{Error, Result};

/// Rendered resources keyed by definition name, children before parents.
pub type Resources = IndexMap<String, String>;

/// Renders definition forests through a code factory.
pub struct ResourceRenderer<'a> {
    factory: &'a dyn CodeFactory,
}

impl<'a> ResourceRenderer<'a> {
    pub fn new(factory: &'a dyn CodeFactory) -> Self {
        Self { factory }
    }

    /// Render every definition of the forest, nested ones included.
    pub fn render(&self, forest: &[Definition], ctx: &RenderContext) -> Result<Resources> {
        let mut resources = Resources::new();
        self.render_into(forest, ctx, &mut resources)?;
        tracing::debug!(
            language = self.factory.language(),
            resources = resources.len(),
            "rendered"
        );
        Ok(resources)
    }

    fn render_into(
        &self,
        forest: &[Definition],
        ctx: &RenderContext,
        resources: &mut Resources,
    ) -> Result<()> {
        for def in forest {
            let text = self.render_definition(def, ctx, resources)?;
            match resources.entry(def.name.clone()) {
                Entry::Occupied(_) => {
                    return Err(Error::NameCollision {
                        name: def.name.clone(),
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(text);
                }
            }
        }
        Ok(())
    }

    fn render_definition(
        &self,
        def: &Definition,
        ctx: &RenderContext,
        resources: &mut Resources,
    ) -> Result<String> {
        if def.fields.is_empty() {
            return Err(Error::structural(
                format!("definition '{}' is empty", def.name),
                None,
            ));
        }

        let reject = |rejection: Rejection| Error::Render {
            definition: def.name.clone(),
            subject: rejection.subject,
            reason: rejection.reason,
        };
        let factory = self.factory;

        let mut fields = Vec::with_capacity(def.fields.len());
        let mut constructor = Constructor::default();

        for field in &def.fields {
            fields.push(RenderedField {
                description: factory
                    .field_description(&field.description)
                    .map_err(reject)?,
                declaration: factory
                    .field_declaration(&field.data_type, &field.name, &field.initial_value)
                    .map_err(reject)?,
            });

            if field.invariant {
                constructor.parameters.push(
                    factory
                        .constructor_parameter(&field.data_type, &field.name)
                        .map_err(reject)?,
                );
                constructor
                    .assignments
                    .push(factory.constructor_assignment(&field.name).map_err(reject)?);
            }

            if !field.children.is_empty() {
                self.render_into(&field.children, ctx, resources)?;
            }
        }

        let description = if def.description.is_empty() {
            &ctx.description
        } else {
            &def.description
        };
        let header = factory
            .class_header(description, &ctx.author, &ctx.version)
            .map_err(reject)?;

        factory
            .assemble_resource(&ResourceParts {
                package_name: &ctx.package_name,
                class_name: &def.name,
                header,
                fields,
                constructor,
                nested: def
                    .fields
                    .iter()
                    .flat_map(|field| &field.children)
                    .map(|child| child.name.as_str())
                    .collect(),
            })
            .map_err(reject)
    }
}

/// Render a forest with the given factory.
pub fn render(
    forest: &[Definition],
    ctx: &RenderContext,
    factory: &dyn CodeFactory,
) -> Result<Resources> {
    ResourceRenderer::new(factory).render(forest, ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        outline::build_outline,
        testing::{PlainFactory, Rows, sample_context},
    };

    fn forest(rows: Rows) -> Vec<Definition> {
        build_outline(&rows.build()).unwrap()
    }

    #[test]
    fn test_one_resource_per_definition_children_first() {
        let forest = forest(
            Rows::new()
                .definition(0, "A", "")
                .field(1, "f1", "B")
                .definition(2, "B", "")
                .field(3, "g1", "int")
                .field(1, "f2", "int"),
        );

        let resources = render(&forest, &sample_context(), &PlainFactory).unwrap();

        let names: Vec<_> = resources.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["B", "A"]);
    }

    #[test]
    fn test_constructor_takes_only_invariant_fields() {
        let forest = forest(
            Rows::new()
                .definition(0, "User", "")
                .invariant(1, "id", "long")
                .field(1, "name", "String")
                .invariant(1, "email", "String"),
        );

        let resources = render(&forest, &sample_context(), &PlainFactory).unwrap();

        assert_eq!(
            resources["User"],
            "package org.example.dto\n\
             header: Sample DTOs by Jane Doe v1.0\n\
             class User\n\
             field long id\n\
             field String name\n\
             field String email\n\
             new(long id, String email)\n\
             set id\n\
             set email\n"
        );
    }

    #[test]
    fn test_no_invariants_gives_empty_constructor() {
        let forest = forest(Rows::new().definition(0, "User", "Users").field(1, "id", "long"));

        let resources = render(&forest, &sample_context(), &PlainFactory).unwrap();

        assert!(resources["User"].contains("header: Users by Jane Doe v1.0\n"));
        assert!(resources["User"].contains("new()\n"));
        assert!(!resources["User"].contains("set "));
    }

    #[test]
    fn test_name_collision() {
        let forest = forest(
            Rows::new()
                .definition(0, "User", "")
                .field(1, "friend", "User")
                .definition(2, "User", "")
                .field(3, "id", "long"),
        );

        let err = render(&forest, &sample_context(), &PlainFactory).unwrap_err();
        assert!(matches!(err, Error::NameCollision { ref name } if name == "User"));
    }

    #[test]
    fn test_sibling_collision() {
        let forest = forest(
            Rows::new()
                .definition(0, "User", "")
                .field(1, "id", "long")
                .definition(0, "User", "")
                .field(1, "name", "String"),
        );

        assert!(matches!(
            render(&forest, &sample_context(), &PlainFactory),
            Err(Error::NameCollision { .. })
        ));
    }

    #[test]
    fn test_empty_definition_is_structural() {
        let forest = vec![Definition::new("Empty", "")];
        let err = render(&forest, &sample_context(), &PlainFactory).unwrap_err();
        assert!(matches!(err, Error::Structural { line: None, .. }));
    }

    #[test]
    fn test_factory_rejection_names_definition_and_field() {
        let forest = forest(
            Rows::new()
                .definition(0, "User", "")
                .field(1, "bad name", "String"),
        );

        match render(&forest, &sample_context(), &PlainFactory).unwrap_err() {
            Error::Render {
                definition,
                subject,
                ..
            } => {
                assert_eq!(definition, "User");
                assert_eq!(subject, "field 'bad name'");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let forest = forest(
            Rows::new()
                .definition(0, "Order", "")
                .field(1, "lines", "List<Line>")
                .definition(2, "Line", "")
                .invariant(3, "sku", "String")
                .definition(2, "Price", "")
                .field(3, "amount", "int")
                .field(1, "note", "String"),
        );

        let first = render(&forest, &sample_context(), &PlainFactory).unwrap();
        let second = render(&forest, &sample_context(), &PlainFactory).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
    }
}
