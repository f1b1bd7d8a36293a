//! Flat expression storage.
//!
//! Expressions live in an [`ExprArena`] and refer to each other through
//! [`ExprId`] indices. Only the expression forms that can appear in a type
//! switch header or a case pattern have dedicated variants; everything else
//! the front end lowers to [`ExprKind::Other`].

use std::fmt;

use crate::{Name, Span};

/// Index into an [`ExprArena`].
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct ExprId(u32);

impl ExprId {
    /// Invalid expression ID (sentinel value).
    pub const INVALID: ExprId = ExprId(u32::MAX);

    /// Create a new `ExprId`.
    #[inline]
    pub const fn new(index: u32) -> Self {
        ExprId(index)
    }

    /// Get the index into the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Check if this is a valid ID.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 != u32::MAX
    }
}

impl fmt::Debug for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "ExprId({})", self.0)
        } else {
            write!(f, "ExprId::INVALID")
        }
    }
}

/// Expression kinds relevant to type switches.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ExprKind {
    /// A plain identifier: a variable in the header, a type name in a case.
    Ident(Name),
    /// Qualified identifier `base.name`, e.g. `io.Reader` in a case pattern.
    Selector { base: ExprId, name: Name },
    /// Pointer type pattern `*T`.
    Pointer(ExprId),
    /// Dynamic type query `target.(type)`.
    TypeQuery { target: ExprId },
    /// The `nil` literal, usable as a case pattern.
    Nil,
    /// A call, e.g. `next().(type)`.
    Call { func: ExprId, args: Vec<ExprId> },
    /// Any expression the checker does not inspect.
    Other,
}

/// An expression node with its source location.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

/// Arena holding every expression of a module.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExprArena {
    exprs: Vec<Expr>,
}

impl ExprArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate an expression and return its ID.
    ///
    /// # Panics
    /// Panics if the arena grows past `u32::MAX - 1` expressions.
    pub fn alloc(&mut self, kind: ExprKind, span: Span) -> ExprId {
        let index = u32::try_from(self.exprs.len())
            .ok()
            .filter(|&i| i != u32::MAX)
            .unwrap_or_else(|| panic!("expression arena overflow"));
        self.exprs.push(Expr { kind, span });
        ExprId::new(index)
    }

    /// Get an expression by ID. Returns `None` for dangling IDs.
    #[inline]
    pub fn get(&self, id: ExprId) -> Option<&Expr> {
        self.exprs.get(id.index())
    }

    /// Get the kind of an expression by ID.
    #[inline]
    pub fn kind(&self, id: ExprId) -> Option<&ExprKind> {
        self.get(id).map(|e| &e.kind)
    }

    /// Number of expressions.
    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    /// Check if the arena is empty.
    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_returns_sequential_ids() {
        let mut arena = ExprArena::new();
        let a = arena.alloc(ExprKind::Nil, Span::new(0, 3));
        let b = arena.alloc(ExprKind::TypeQuery { target: a }, Span::new(0, 10));

        assert_eq!(a, ExprId::new(0));
        assert_eq!(b, ExprId::new(1));
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.kind(b), Some(&ExprKind::TypeQuery { target: a }));
        assert_eq!(arena.get(a).map(|e| e.span), Some(Span::new(0, 3)));
    }

    #[test]
    fn dangling_id_is_none() {
        let arena = ExprArena::new();
        assert!(arena.is_empty());
        assert!(arena.get(ExprId::new(4)).is_none());
        assert!(arena.get(ExprId::INVALID).is_none());
        assert!(!ExprId::INVALID.is_valid());
    }
}
