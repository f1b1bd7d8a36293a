//! Pre-computed type metadata flags.
//!
//! Computed once when a type enters the pool so the checker can ask
//! "is this an interface" or "is this the universal interface" without
//! walking the type.

use bitflags::bitflags;

bitflags! {
    /// Pre-computed type properties for O(1) queries.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct TypeFlags: u32 {
        /// Pre-interned primitive type.
        const IS_PRIMITIVE = 1 << 0;
        /// Declared (named) type.
        const IS_NAMED = 1 << 1;
        /// Underlying type is an interface.
        const IS_INTERFACE = 1 << 2;
        /// Underlying type is an interface with no methods.
        const IS_UNIVERSAL = 1 << 3;
        /// Pointer type.
        const IS_POINTER = 1 << 4;
        /// The type of the `nil` literal.
        const IS_NIL = 1 << 5;
        /// Contains the invalid placeholder.
        const HAS_ERROR = 1 << 6;
    }
}

impl TypeFlags {
    /// Check if the type behaves as an interface.
    #[inline]
    pub fn is_interface(self) -> bool {
        self.contains(Self::IS_INTERFACE)
    }

    /// Check if the type is the universal (method-less) interface.
    #[inline]
    pub fn is_universal(self) -> bool {
        self.contains(Self::IS_UNIVERSAL)
    }

    /// Check if the type contains the invalid placeholder.
    #[inline]
    pub fn has_errors(self) -> bool {
        self.contains(Self::HAS_ERROR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn universal_implies_nothing_else() {
        let flags = TypeFlags::IS_INTERFACE | TypeFlags::IS_UNIVERSAL;
        assert!(flags.is_interface());
        assert!(flags.is_universal());
        assert!(!flags.has_errors());
        assert!(!TypeFlags::IS_NAMED.is_interface());
    }
}
