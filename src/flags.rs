use std::ops::{BitOr, BitOrAssign};

/// Tracks value type information observed during JSON traversal.
///
/// A path can carry multiple flags if the JSON data is heterogeneous; flags
/// accumulate as the document is walked and are never cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TypeFlags(u16);

impl TypeFlags {
    pub const ARRAY: TypeFlags = TypeFlags(1 << 0);
    pub const INTEGER: TypeFlags = TypeFlags(1 << 1);
    pub const DECIMAL: TypeFlags = TypeFlags(1 << 2);
    pub const BIG_INT: TypeFlags = TypeFlags(1 << 3);
    pub const SHORT_TEXT: TypeFlags = TypeFlags(1 << 4);
    pub const LONG_TEXT: TypeFlags = TypeFlags(1 << 5);
    pub const BOOLEAN: TypeFlags = TypeFlags(1 << 6);
    pub const NULL: TypeFlags = TypeFlags(1 << 7);

    /// Union of all number classifications.
    pub const NUMERIC: TypeFlags =
        TypeFlags(Self::INTEGER.0 | Self::DECIMAL.0 | Self::BIG_INT.0);

    /// Union of all string classifications.
    pub const TEXTUAL: TypeFlags = TypeFlags(Self::SHORT_TEXT.0 | Self::LONG_TEXT.0);

    pub const fn empty() -> TypeFlags {
        TypeFlags(0)
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True when at least one flag of `flags` is set.
    pub fn has(self, flags: TypeFlags) -> bool {
        self.0 & flags.0 != 0
    }

    /// True when every set flag belongs to `flags`.
    pub fn only(self, flags: TypeFlags) -> bool {
        self.0 & !flags.0 == 0
    }

    /// Copy of `self` with the flags of `flags` removed.
    pub fn without(self, flags: TypeFlags) -> TypeFlags {
        TypeFlags(self.0 & !flags.0)
    }
}

impl BitOr for TypeFlags {
    type Output = TypeFlags;

    fn bitor(self, rhs: TypeFlags) -> TypeFlags {
        TypeFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for TypeFlags {
    fn bitor_assign(&mut self, rhs: TypeFlags) {
        self.0 |= rhs.0;
    }
}
