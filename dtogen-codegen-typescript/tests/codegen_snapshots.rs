//! Snapshot tests for TypeScript code generation.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use std::{path::Path, str::FromStr};

use dtogen_codegen::pipeline::Pipeline;
use dtogen_codegen_typescript::{Generator, LanguageCodegen};
use dtogen_matrix::{Book, Grid, Matrix};

const USERS: &str = r#"
[meta]
project = "Users"
package = "org.example.dto"
version = "1.0"
language = "typescript"

[creator]
name = "Jane Doe"

[matrix]
header = ["Layer", "Logical Delete", "Variable Name", "Data Type", "Initial Value", "Invariant", "Description"]
rows = [
    [0, "", "User", "", "", "", "Users"],
    [1, "", "id", "long", "", "o", "Identifier"],
    [1, "", "name", "String", "\"guest\"", "", ""],
    [1, "", "address", "Address", "", "", "Home address"],
    [2, "", "Address", "", "", "", "A postal address"],
    [3, "", "lines", "List<String>", "", "", "Street lines"],
]
"#;

fn generate_files(book_toml: &str) -> Vec<(String, String)> {
    let book = Book::from_str(book_toml).expect("Failed to parse book");
    let grid = Grid::load(&book.matrix, Path::new(".")).expect("Failed to load grid");
    let matrix = Matrix::from_grid(&book, grid).expect("Failed to resolve columns");

    let ctx = Pipeline::new().run(matrix).expect("Pipeline failed");
    let files = Generator::from_context(ctx).preview().expect("Preview failed");

    let mut result: Vec<(String, String)> = files
        .into_iter()
        .map(|f| (f.path.replace('\\', "/"), f.content))
        .collect();
    result.sort_by(|a, b| a.0.cmp(&b.0));
    result
}

fn get_file<'a>(files: &'a [(String, String)], path: &str) -> Option<&'a str> {
    files
        .iter()
        .find(|(p, _)| p == path)
        .map(|(_, c)| c.as_str())
}

#[test]
fn test_user_class() {
    let files = generate_files(USERS);
    let user = get_file(&files, "org/example/dto/User.ts").expect("User.ts not found");
    insta::assert_snapshot!("user_class", user);
}

#[test]
fn test_nested_class_without_constructor() {
    let files = generate_files(USERS);
    let address = get_file(&files, "org/example/dto/Address.ts").expect("Address.ts not found");

    assert_eq!(
        address,
        "/**\n * A postal address\n *\n * @author Jane Doe\n * @version 1.0\n */\n\
         export class Address {\n  \
           /**\n   * Street lines\n   */\n  \
           public lines?: string[];\n\
         }\n"
    );
}
