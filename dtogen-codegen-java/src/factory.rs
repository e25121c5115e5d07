//! Java source text for rendered definitions.
//!
//! Every definition becomes a serializable, immutable-by-convention class
//! with Lombok accessors:
//!
//! ```java
//! @Getter
//! @ToString
//! @EqualsAndHashCode
//! public final class User implements Serializable {
//!     private long id;
//!
//!     public User(long id) {
//!         this.id = id;
//!     }
//! }
//! ```

use dtogen_codegen::{
    builder::CodeBuilder,
    render::{CodeFactory, FactoryResult, Rejection, ResourceParts},
};

use crate::JAVA_NAMING;

const IMPORTS: &[&str] = &[
    "import java.io.Serializable;",
    "",
    "import lombok.EqualsAndHashCode;",
    "import lombok.Getter;",
    "import lombok.ToString;",
];

const ANNOTATIONS: &[&str] = &["@Getter", "@ToString", "@EqualsAndHashCode"];

/// Code factory producing Java DTO classes.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaFactory;

impl CodeFactory for JavaFactory {
    fn language(&self) -> &'static str {
        "java"
    }

    fn class_header(&self, description: &str, author: &str, version: &str) -> FactoryResult {
        let author = format!("@author {author}");
        let since = format!("@since {version}");
        let version = format!("@version {version}");
        Ok(CodeBuilder::java()
            .doc_block([description, "", author.as_str(), since.as_str(), version.as_str()])
            .build())
    }

    fn field_description(&self, description: &str) -> FactoryResult {
        if description.trim().is_empty() {
            return Ok(String::new());
        }
        Ok(CodeBuilder::java().doc_block(description.lines()).build())
    }

    fn field_declaration(
        &self,
        data_type: &str,
        name: &str,
        initial_value: &str,
    ) -> FactoryResult {
        let subject = format!("field '{name}'");
        JAVA_NAMING.check(name, &subject)?;
        if data_type.trim().is_empty() {
            return Err(Rejection::new(subject, "missing data type"));
        }

        if initial_value.is_empty() {
            Ok(format!("private {data_type} {name};"))
        } else {
            Ok(format!("private {data_type} {name} = {initial_value};"))
        }
    }

    fn constructor_parameter(&self, data_type: &str, name: &str) -> FactoryResult {
        Ok(format!("{data_type} {name}"))
    }

    fn constructor_assignment(&self, name: &str) -> FactoryResult {
        Ok(format!("this.{name} = {name};"))
    }

    fn assemble_resource(&self, parts: &ResourceParts<'_>) -> FactoryResult {
        let class_name = parts.class_name;
        JAVA_NAMING.check(class_name, &format!("class '{class_name}'"))?;

        let signature = format!(
            "public {class_name}({}) {{",
            parts.constructor.parameters.join(", ")
        );

        let code = CodeBuilder::java()
            .when(!parts.package_name.is_empty(), |b| {
                b.line(&format!("package {};", parts.package_name)).blank()
            })
            .lines(&IMPORTS.join("\n"))
            .blank()
            .lines(&parts.header)
            .each(ANNOTATIONS, |b, annotation| b.line(annotation))
            .line(&format!(
                "public final class {class_name} implements Serializable {{"
            ))
            .indent()
            .blank()
            .line("private static final long serialVersionUID = 1L;")
            .each(&parts.fields, |b, field| {
                b.blank().lines(&field.description).line(&field.declaration)
            })
            .blank()
            .block_with_close(&signature, "}", |b| {
                b.each(&parts.constructor.assignments, |b, assignment| {
                    b.line(assignment)
                })
            })
            .dedent()
            .line("}")
            .build();

        Ok(code)
    }
}
