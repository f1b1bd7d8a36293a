//! Type index handle.
//!
//! All types are stored in the [`Pool`](crate::Pool) and referenced by a
//! 32-bit index. Type identity is index equality.

use std::fmt;

/// A 32-bit index into the type pool.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct Idx(u32);

impl Idx {
    // === Pre-interned Types (indices 0-6) ===

    /// The `bool` type.
    pub const BOOL: Self = Self(0);
    /// The `int` type.
    pub const INT: Self = Self(1);
    /// The `float64` type.
    pub const FLOAT: Self = Self(2);
    /// The `string` type.
    pub const STRING: Self = Self(3);
    /// The type of the `nil` literal.
    pub const UNTYPED_NIL: Self = Self(4);
    /// Placeholder for expressions the front end could not type.
    pub const INVALID: Self = Self(5);
    /// The universal interface `interface{}`.
    pub const ANY: Self = Self(6);

    /// First index for dynamically allocated types.
    pub const FIRST_DYNAMIC: u32 = 16;

    /// Create an index from a raw u32 value.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for Idx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::BOOL => write!(f, "Idx::BOOL"),
            Self::INT => write!(f, "Idx::INT"),
            Self::FLOAT => write!(f, "Idx::FLOAT"),
            Self::STRING => write!(f, "Idx::STRING"),
            Self::UNTYPED_NIL => write!(f, "Idx::UNTYPED_NIL"),
            Self::INVALID => write!(f, "Idx::INVALID"),
            Self::ANY => write!(f, "Idx::ANY"),
            _ => write!(f, "Idx({})", self.0),
        }
    }
}

const _: () = assert!(std::mem::size_of::<Idx>() == 4);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_format() {
        assert_eq!(format!("{:?}", Idx::UNTYPED_NIL), "Idx::UNTYPED_NIL");
        assert_eq!(format!("{:?}", Idx::from_raw(40)), "Idx(40)");
    }
}
