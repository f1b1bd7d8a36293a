//! Type kind tag for tag-driven dispatch.
//!
//! Each type in the pool has a `Tag` that identifies its kind and determines
//! how to interpret the item's `data` field:
//!
//! - Primitives: data unused
//! - `Pointer`: data = element `Idx`
//! - `Interface`, `Struct`, `Function`: data = index into `extra`
//! - `Named`: data = index into the named-type table

/// Type kind discriminant.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum Tag {
    // === Primitives ===
    Bool = 0,
    Int = 1,
    Float = 2,
    String = 3,
    /// The type of the `nil` literal.
    UntypedNil = 4,
    /// Error placeholder.
    Invalid = 5,

    // === Unnamed composites ===
    /// Method set. Empty means the universal interface.
    Interface = 16,
    Struct = 17,
    Pointer = 18,
    Function = 19,

    // === Named ===
    /// A declared type with its own identity and method set.
    Named = 32,
}
