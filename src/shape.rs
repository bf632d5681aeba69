use std::collections::BTreeMap;

use serde_json::{Number, Value};

use crate::flags::TypeFlags;

/// Strings longer than this many bytes resolve to TEXT instead of VARCHAR.
const LONG_TEXT_LEN: usize = 255;

/// A node in the shape tree: the type flags observed at one field path plus
/// the object keys ever seen beneath it.
///
/// Array multiplicity is recorded as a flag on the node itself; elements walk
/// into the same node, so arrays-of-arrays collapse onto one path.
#[derive(Debug, Default)]
pub struct ShapeNode {
    pub flags: TypeFlags,
    pub children: BTreeMap<String, ShapeNode>,
}

impl ShapeNode {
    pub fn new() -> ShapeNode {
        ShapeNode::default()
    }

    fn child_mut(&mut self, key: &str) -> &mut ShapeNode {
        self.children.entry(key.to_owned()).or_default()
    }

    /// Traverse `value` and accumulate type information onto the tree.
    pub fn walk(&mut self, value: &Value) {
        match value {
            Value::Array(items) => {
                self.flags |= TypeFlags::ARRAY;
                for item in items {
                    self.walk(item);
                }
            }
            Value::Object(fields) => {
                for (key, item) in fields {
                    self.child_mut(key).walk(item);
                }
            }
            Value::Number(n) => self.flags |= classify_number(n),
            Value::String(s) => {
                self.flags |= if s.len() > LONG_TEXT_LEN {
                    TypeFlags::LONG_TEXT
                } else {
                    TypeFlags::SHORT_TEXT
                };
            }
            Value::Bool(_) => self.flags |= TypeFlags::BOOLEAN,
            Value::Null => self.flags |= TypeFlags::NULL,
        }
    }
}

/// Numbers split three ways: fractional values are DECIMAL, integral values
/// outside the signed 32-bit range are BIG_INT, the rest are INTEGER.
fn classify_number(n: &Number) -> TypeFlags {
    if let Some(i) = n.as_i64() {
        if i >= i64::from(i32::MIN) && i <= i64::from(i32::MAX) {
            TypeFlags::INTEGER
        } else {
            TypeFlags::BIG_INT
        }
    } else if n.as_u64().is_some() {
        // Only reached above i64::MAX.
        TypeFlags::BIG_INT
    } else if let Some(f) = n.as_f64() {
        if f != f.trunc() {
            TypeFlags::DECIMAL
        } else if f < f64::from(i32::MIN) || f > f64::from(i32::MAX) {
            TypeFlags::BIG_INT
        } else {
            TypeFlags::INTEGER
        }
    } else {
        TypeFlags::empty()
    }
}
