//! JSON documents describing rendered definitions.
//!
//! Every factory piece is itself a JSON fragment. `assemble_resource` reads
//! the fragments back and writes one pretty-printed document per definition.

use std::collections::HashSet;

use dtogen_codegen::render::{CodeFactory, FactoryResult, Rejection, ResourceParts};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// Code factory producing one JSON object per definition.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFactory;

#[derive(Debug, Serialize, Deserialize)]
struct Header {
    description: String,
    author: String,
    version: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FieldEntry {
    name: String,
    #[serde(rename = "type")]
    data_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    initial_value: Option<String>,
    #[serde(default)]
    invariant: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Parameter {
    name: String,
    #[serde(rename = "type")]
    data_type: String,
}

#[derive(Serialize)]
struct Document<'p> {
    name: &'p str,
    package: &'p str,
    #[serde(flatten)]
    header: Header,
    fields: Vec<FieldEntry>,
    constructor: Vec<Parameter>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    nested: Vec<&'p str>,
}

fn to_fragment<T: Serialize>(value: &T, subject: &str) -> FactoryResult {
    serde_json::to_string(value).map_err(|e| Rejection::new(subject, e.to_string()))
}

fn from_fragment<T: DeserializeOwned>(fragment: &str, subject: &str) -> Result<T, Rejection> {
    serde_json::from_str(fragment).map_err(|e| Rejection::new(subject, e.to_string()))
}

impl CodeFactory for JsonFactory {
    fn language(&self) -> &'static str {
        "json"
    }

    fn class_header(&self, description: &str, author: &str, version: &str) -> FactoryResult {
        let header = Header {
            description: description.to_string(),
            author: author.to_string(),
            version: version.to_string(),
        };
        to_fragment(&header, "header")
    }

    fn field_description(&self, description: &str) -> FactoryResult {
        if description.trim().is_empty() {
            return Ok(String::new());
        }
        to_fragment(&description, "description")
    }

    fn field_declaration(
        &self,
        data_type: &str,
        name: &str,
        initial_value: &str,
    ) -> FactoryResult {
        let subject = format!("field '{name}'");
        if name.trim().is_empty() {
            return Err(Rejection::new(subject, "missing name"));
        }
        if data_type.trim().is_empty() {
            return Err(Rejection::new(subject, "missing data type"));
        }

        let entry = FieldEntry {
            name: name.to_string(),
            data_type: data_type.to_string(),
            initial_value: (!initial_value.is_empty()).then(|| initial_value.to_string()),
            invariant: false,
            description: None,
        };
        to_fragment(&entry, &subject)
    }

    fn constructor_parameter(&self, data_type: &str, name: &str) -> FactoryResult {
        let parameter = Parameter {
            name: name.to_string(),
            data_type: data_type.to_string(),
        };
        to_fragment(&parameter, &format!("parameter '{name}'"))
    }

    fn constructor_assignment(&self, name: &str) -> FactoryResult {
        to_fragment(&name, &format!("parameter '{name}'"))
    }

    fn assemble_resource(&self, parts: &ResourceParts<'_>) -> FactoryResult {
        let subject = format!("class '{}'", parts.class_name);

        let constructor = parts
            .constructor
            .parameters
            .iter()
            .map(|fragment| from_fragment::<Parameter>(fragment, &subject))
            .collect::<Result<Vec<_>, _>>()?;
        let invariants: HashSet<&str> = constructor.iter().map(|p| p.name.as_str()).collect();

        let mut fields = Vec::with_capacity(parts.fields.len());
        for field in &parts.fields {
            let mut entry: FieldEntry = from_fragment(&field.declaration, &subject)?;
            entry.invariant = invariants.contains(entry.name.as_str());
            if !field.description.is_empty() {
                entry.description = Some(from_fragment(&field.description, &subject)?);
            }
            fields.push(entry);
        }

        let document = Document {
            name: parts.class_name,
            package: parts.package_name,
            header: from_fragment(&parts.header, &subject)?,
            fields,
            constructor,
            nested: parts.nested.clone(),
        };

        let mut json = serde_json::to_string_pretty(&document)
            .map_err(|e| Rejection::new(&subject, e.to_string()))?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use dtogen_codegen::render::{Constructor, RenderedField};

    use super::*;

    #[test]
    fn test_field_declaration_fragment() {
        assert_eq!(
            JsonFactory.field_declaration("int", "count", "0").unwrap(),
            r#"{"name":"count","type":"int","initialValue":"0","invariant":false}"#
        );
        assert_eq!(
            JsonFactory.field_declaration("String", "label", "").unwrap(),
            r#"{"name":"label","type":"String","invariant":false}"#
        );
    }

    #[test]
    fn test_description_is_escaped() {
        assert_eq!(
            JsonFactory.field_description("say \"hi\"").unwrap(),
            r#""say \"hi\"""#
        );
        assert_eq!(JsonFactory.field_description("  ").unwrap(), "");
    }

    #[test]
    fn test_missing_type_is_rejected() {
        let rejection = JsonFactory.field_declaration(" ", "id", "").unwrap_err();
        assert_eq!(rejection.subject, "field 'id'");
        assert_eq!(rejection.reason, "missing data type");
    }

    #[test]
    fn test_assemble_marks_constructor_fields_invariant() {
        let factory = JsonFactory;
        let parts = ResourceParts {
            package_name: "",
            class_name: "Point",
            header: factory.class_header("A point", "Ann", "2").unwrap(),
            fields: vec![
                RenderedField {
                    description: String::new(),
                    declaration: factory.field_declaration("int", "x", "").unwrap(),
                },
                RenderedField {
                    description: String::new(),
                    declaration: factory.field_declaration("int", "y", "").unwrap(),
                },
            ],
            constructor: Constructor {
                parameters: vec![factory.constructor_parameter("int", "y").unwrap()],
                assignments: vec![factory.constructor_assignment("y").unwrap()],
            },
            nested: Vec::new(),
        };

        let json = factory.assemble_resource(&parts).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["name"], "Point");
        assert_eq!(value["author"], "Ann");
        assert_eq!(value["fields"][0]["invariant"], false);
        assert_eq!(value["fields"][1]["invariant"], true);
        assert_eq!(value["constructor"][0]["name"], "y");
        assert!(value.get("nested").is_none());
        assert!(json.ends_with("}\n"));
    }
}
