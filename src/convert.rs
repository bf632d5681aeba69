//! Pipeline entry: decode, build the shape tree, render the expression.

use serde_json::Value;
use thiserror::Error;

use crate::shape::ShapeNode;
use crate::sql::{render_table, Options};

/// Errors reported by [`convert`].
///
/// Every failure is terminal for the call; partial SQL is never returned and
/// conflicting types are never silently coerced.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input bytes were not well-formed JSON.
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The top-level value was an empty array; zero rows carry no type
    /// information to build a column list from.
    #[error("empty input")]
    EmptyInput,

    /// Some path mixed irreconcilable value kinds (numbers with strings,
    /// strings with booleans, ...).
    #[error("mixed types in values")]
    MixedTypes,
}

/// Transform raw JSON bytes into a MySQL `JSON_TABLE` expression.
///
/// The decoded document is embedded back into the expression as a compact,
/// quote-escaped literal; the row path is `$[*]` for a top-level array and
/// `$` otherwise.
pub fn convert(input: &[u8], opts: &Options) -> Result<String, ConvertError> {
    let data: Value = serde_json::from_slice(input)?;

    if matches!(&data, Value::Array(items) if items.is_empty()) {
        return Err(ConvertError::EmptyInput);
    }

    let mut root = ShapeNode::new();
    root.walk(&data);

    let literal = serde_json::to_string(&data)?;
    render_table(&literal, &root, opts)
}
