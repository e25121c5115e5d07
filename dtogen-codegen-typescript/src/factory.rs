//! TypeScript source text for rendered definitions.

use dtogen_codegen::{
    builder::CodeBuilder,
    render::{CodeFactory, FactoryResult, Rejection, ResourceParts},
};

use crate::{TS_NAMING, map_type};

/// Code factory producing exported TypeScript classes.
///
/// Fields without an initial value are optional, since only invariant fields
/// are assigned by the constructor.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScriptFactory;

impl CodeFactory for TypeScriptFactory {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn class_header(&self, description: &str, author: &str, version: &str) -> FactoryResult {
        let author = format!("@author {author}");
        let version = format!("@version {version}");
        Ok(CodeBuilder::typescript()
            .doc_block([description, "", author.as_str(), version.as_str()])
            .build())
    }

    fn field_description(&self, description: &str) -> FactoryResult {
        if description.trim().is_empty() {
            return Ok(String::new());
        }
        Ok(CodeBuilder::typescript()
            .doc_block(description.lines())
            .build())
    }

    fn field_declaration(
        &self,
        data_type: &str,
        name: &str,
        initial_value: &str,
    ) -> FactoryResult {
        let subject = format!("field '{name}'");
        TS_NAMING.check(name, &subject)?;
        if data_type.trim().is_empty() {
            return Err(Rejection::new(subject, "missing data type"));
        }

        let ts_type = map_type(data_type);
        if initial_value.is_empty() {
            Ok(format!("public {name}?: {ts_type};"))
        } else {
            Ok(format!("public {name}: {ts_type} = {initial_value};"))
        }
    }

    fn constructor_parameter(&self, data_type: &str, name: &str) -> FactoryResult {
        Ok(format!("{name}: {}", map_type(data_type)))
    }

    fn constructor_assignment(&self, name: &str) -> FactoryResult {
        Ok(format!("this.{name} = {name};"))
    }

    fn assemble_resource(&self, parts: &ResourceParts<'_>) -> FactoryResult {
        let class_name = parts.class_name;
        TS_NAMING.check(class_name, &format!("class '{class_name}'"))?;

        let constructor = &parts.constructor;
        let signature = format!("constructor({}) {{", constructor.parameters.join(", "));

        let code = CodeBuilder::typescript()
            .each(&parts.nested, |b, nested| {
                b.line(&format!("import {{ {nested} }} from \"./{nested}\";"))
            })
            .when(!parts.nested.is_empty(), |b| b.blank())
            .lines(&parts.header)
            .line(&format!("export class {class_name} {{"))
            .indent()
            .each(parts.fields.iter().enumerate(), |b, (index, field)| {
                b.when(index > 0, |b| b.blank())
                    .lines(&field.description)
                    .line(&field.declaration)
            })
            .when(!constructor.parameters.is_empty(), |b| {
                b.blank().block_with_close(&signature, "}", |b| {
                    b.each(&constructor.assignments, |b, assignment| b.line(assignment))
                })
            })
            .dedent()
            .line("}")
            .build();

        Ok(code)
    }
}
