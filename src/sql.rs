//! SQL type resolution and `JSON_TABLE` rendering.

use crate::convert::ConvertError;
use crate::flags::TypeFlags;
use crate::shape::ShapeNode;

/// Configures SQL generation.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// When non-empty, appended as a COLLATE clause to every string column.
    pub string_collation: String,
}

/// Assemble the full `JSON_TABLE` expression around the compact JSON literal.
pub(crate) fn render_table(
    json: &str,
    root: &ShapeNode,
    opts: &Options,
) -> Result<String, ConvertError> {
    let cols = render_node(root, "$", "", opts, 2)?;

    let row_path = if root.flags.has(TypeFlags::ARRAY) {
        "$[*]"
    } else {
        "$"
    };

    Ok(format!(
        "JSON_TABLE(\n  '{}',\n  '{}' COLUMNS (\n{}\n  )\n) AS jt",
        escape(json),
        row_path,
        cols
    ))
}

/// Render one shape node into column lines, depth-first over sorted keys.
fn render_node(
    node: &ShapeNode,
    path: &str,
    name: &str,
    opts: &Options,
    depth: usize,
) -> Result<String, ConvertError> {
    let is_root = path == "$" && name.is_empty();

    // A NESTED PATH block restarts path resolution at the row level, so
    // children of an array node address their fields relative to '$'.
    let curr_path = if node.flags.has(TypeFlags::ARRAY) {
        "$"
    } else {
        path
    };

    let mut lines = Vec::new();
    for (key, child) in &node.children {
        let child_path = format!("{curr_path}.{key}");
        let child_name = if name.is_empty() {
            key.clone()
        } else {
            format!("{name}_{key}")
        };
        let line = render_node(child, &child_path, &child_name, opts, depth)?;
        if !line.is_empty() {
            lines.push(line);
        }
    }

    // Leaf node: primitive value
    if node.children.is_empty() {
        let col_name = if name.is_empty() && is_root {
            "value" // for arrays of primitives
        } else {
            name
        };
        let sql_type = resolve(node.flags, &opts.string_collation)?;
        lines.push(format!(
            "{}{} {} PATH '{}'",
            indent(depth),
            col_name,
            sql_type,
            curr_path
        ));
    }

    let inner = lines.join(",\n");

    // A nested array wraps its columns in a NESTED PATH block keyed by the
    // inherited path; an empty block is dropped entirely.
    if node.flags.has(TypeFlags::ARRAY) && !is_root {
        if inner.is_empty() {
            return Ok(String::new());
        }
        let inner = add_indent(&inner, "  ");
        return Ok(format!(
            "{ind}NESTED PATH '{path}[*]' COLUMNS (\n{inner}\n{ind})",
            ind = indent(depth)
        ));
    }

    Ok(inner)
}

/// Resolve accumulated flags to a MySQL column type.
///
/// Nulls and plurality never conflict with a value type, so ARRAY and NULL
/// are masked out first. Mixing numbers, strings, or booleans at one path is
/// irreconcilable and aborts the conversion.
pub(crate) fn resolve(flags: TypeFlags, collation: &str) -> Result<String, ConvertError> {
    let t = flags.without(TypeFlags::ARRAY | TypeFlags::NULL);

    let base = if t.is_empty() {
        "VARCHAR(255)"
    } else if t.only(TypeFlags::NUMERIC) {
        if t.has(TypeFlags::DECIMAL | TypeFlags::BIG_INT) {
            "DOUBLE"
        } else {
            "INT"
        }
    } else if t.only(TypeFlags::TEXTUAL) {
        if t.has(TypeFlags::LONG_TEXT) {
            "TEXT"
        } else {
            "VARCHAR(255)"
        }
    } else if t == TypeFlags::BOOLEAN {
        "BOOLEAN"
    } else {
        return Err(ConvertError::MixedTypes);
    };

    if !collation.is_empty() && (base == "VARCHAR(255)" || base == "TEXT") {
        return Ok(format!("{base} COLLATE {collation}"));
    }

    Ok(base.to_owned())
}

fn indent(n: usize) -> String {
    "  ".repeat(n)
}

fn add_indent(s: &str, prefix: &str) -> String {
    s.lines()
        .map(|line| format!("{prefix}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Double single quotes for embedding in a SQL string literal.
fn escape(s: &str) -> String {
    s.replace('\'', "''")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resolve_defaults_to_varchar() {
        assert_eq!(resolve(TypeFlags::empty(), "").unwrap(), "VARCHAR(255)");
        assert_eq!(
            resolve(TypeFlags::ARRAY | TypeFlags::NULL, "").unwrap(),
            "VARCHAR(255)"
        );
    }

    #[test]
    fn resolve_widens_numbers_to_double() {
        assert_eq!(resolve(TypeFlags::INTEGER, "").unwrap(), "INT");
        assert_eq!(
            resolve(TypeFlags::INTEGER | TypeFlags::DECIMAL, "").unwrap(),
            "DOUBLE"
        );
        assert_eq!(
            resolve(TypeFlags::INTEGER | TypeFlags::BIG_INT, "").unwrap(),
            "DOUBLE"
        );
    }

    #[test]
    fn resolve_widens_strings_to_text() {
        assert_eq!(resolve(TypeFlags::SHORT_TEXT, "").unwrap(), "VARCHAR(255)");
        assert_eq!(
            resolve(TypeFlags::SHORT_TEXT | TypeFlags::LONG_TEXT, "").unwrap(),
            "TEXT"
        );
    }

    #[test]
    fn resolve_boolean() {
        assert_eq!(resolve(TypeFlags::BOOLEAN, "").unwrap(), "BOOLEAN");
        assert_eq!(
            resolve(TypeFlags::BOOLEAN | TypeFlags::NULL, "").unwrap(),
            "BOOLEAN"
        );
    }

    #[test]
    fn resolve_rejects_mixed_types() {
        let cases = [
            TypeFlags::INTEGER | TypeFlags::SHORT_TEXT,
            TypeFlags::DECIMAL | TypeFlags::BOOLEAN,
            TypeFlags::LONG_TEXT | TypeFlags::BOOLEAN,
        ];
        for flags in cases {
            assert!(matches!(
                resolve(flags, ""),
                Err(ConvertError::MixedTypes)
            ));
        }
    }

    #[test]
    fn resolve_appends_collation_to_string_types_only() {
        assert_eq!(
            resolve(TypeFlags::SHORT_TEXT, "utf8mb4_bin").unwrap(),
            "VARCHAR(255) COLLATE utf8mb4_bin"
        );
        assert_eq!(
            resolve(TypeFlags::LONG_TEXT, "utf8mb4_bin").unwrap(),
            "TEXT COLLATE utf8mb4_bin"
        );
        assert_eq!(resolve(TypeFlags::INTEGER, "utf8mb4_bin").unwrap(), "INT");
    }

    #[test]
    fn render_nested_array_block() {
        let mut root = ShapeNode::new();
        root.walk(&json!({"id": 1, "tags": [{"name": "go"}]}));

        let cols = render_node(&root, "$", "", &Options::default(), 2).unwrap();
        assert_eq!(
            cols,
            "    id INT PATH '$.id',\n\
             \x20   NESTED PATH '$.tags[*]' COLUMNS (\n\
             \x20     tags_name VARCHAR(255) PATH '$.name'\n\
             \x20   )"
        );
    }

    #[test]
    fn render_flattens_nested_objects() {
        let mut root = ShapeNode::new();
        root.walk(&json!({"user": {"profile": {"age": 25}}}));

        let cols = render_node(&root, "$", "", &Options::default(), 2).unwrap();
        assert_eq!(cols, "    user_profile_age INT PATH '$.user.profile.age'");
    }

    #[test]
    fn render_names_primitive_root_value() {
        let mut root = ShapeNode::new();
        root.walk(&json!([1, 2, 3]));

        let cols = render_node(&root, "$", "", &Options::default(), 2).unwrap();
        assert_eq!(cols, "    value INT PATH '$'");
    }

    #[test]
    fn escape_doubles_single_quotes() {
        assert_eq!(escape("it's"), "it''s");
        assert_eq!(escape("''"), "''''");
        assert_eq!(escape("none"), "none");
    }
}
