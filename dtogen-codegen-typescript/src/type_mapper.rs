//! Matrix data types to TypeScript types.

/// Map a matrix data type (written Java-style) to a TypeScript type.
///
/// `List<T>` and `Set<T>` become arrays, `Map<K, V>` becomes a `Record`.
/// Unknown names, such as nested definitions, pass through unchanged.
pub fn map_type(data_type: &str) -> String {
    let data_type = data_type.trim();

    if let Some((outer, inner)) = split_generic(data_type) {
        return match outer {
            "List" | "Set" | "Collection" => format!("{}[]", map_type(inner)),
            "Map" => match split_top_level(inner) {
                Some((key, value)) => format!("Record<{}, {}>", map_type(key), map_type(value)),
                None => data_type.to_string(),
            },
            "Optional" => format!("{} | undefined", map_type(inner)),
            _ => data_type.to_string(),
        };
    }

    if let Some(element) = data_type.strip_suffix("[]") {
        return format!("{}[]", map_type(element));
    }

    match data_type {
        "String" | "char" | "Character" => "string",
        "byte" | "Byte" | "short" | "Short" | "int" | "Integer" | "long" | "Long" | "float"
        | "Float" | "double" | "Double" | "BigDecimal" | "BigInteger" => "number",
        "boolean" | "Boolean" => "boolean",
        "Object" => "unknown",
        other => other,
    }
    .to_string()
}

/// `List<Foo>` -> `("List", "Foo")`
fn split_generic(data_type: &str) -> Option<(&str, &str)> {
    let open = data_type.find('<')?;
    let inner = data_type.strip_suffix('>')?;
    Some((data_type[..open].trim(), inner[open + 1..].trim()))
}

/// Split `K, V` at the comma that is not nested inside angle brackets.
fn split_top_level(args: &str) -> Option<(&str, &str)> {
    let mut depth = 0usize;
    for (index, c) in args.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => return Some((args[..index].trim(), args[index + 1..].trim())),
            _ => {}
        }
    }
    None
}
