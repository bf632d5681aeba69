//! Convert JSON documents to MySQL `JSON_TABLE` expressions.
//!
//! Walks a sample JSON document, infers a SQL column type for every field
//! path, and emits a `JSON_TABLE(...)` expression that selects the document
//! relationally:
//!
//! - integers → `INT`; fractional or oversized numbers → `DOUBLE`
//! - strings → `VARCHAR(255)`, or `TEXT` past 255 bytes
//! - booleans → `BOOLEAN`
//!
//! Nested objects flatten into underscore-separated column names; arrays
//! become `NESTED PATH` column groups. Paths that mix incompatible value
//! kinds abort the conversion instead of picking an arbitrary type.
//!
//! # Quick start
//!
//! ```rust
//! use jt::{convert, Options};
//!
//! let sql = convert(br#"[{"id": 1, "name": "Alice"}]"#, &Options::default()).unwrap();
//! assert!(sql.contains("'$[*]' COLUMNS"));
//! assert!(sql.contains("id INT PATH '$.id'"));
//! assert!(sql.contains("name VARCHAR(255) PATH '$.name'"));
//! ```

pub mod convert;
pub mod flags;
pub mod shape;
pub mod sql;

// Re-export the public surface for convenience
pub use convert::{convert, ConvertError};
pub use sql::Options;
