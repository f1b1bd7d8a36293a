//! Static types recorded for expressions.

use exhaust_ir::ExprId;
use rustc_hash::FxHashMap;

use crate::Idx;

/// Side table from expression to its static type.
///
/// For a value expression this is the value's type; for an expression that
/// denotes a type (a case pattern such as `Circle` or `*Circle`) it is the
/// denoted type. The `nil` literal records [`Idx::UNTYPED_NIL`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExprTypes {
    types: FxHashMap<ExprId, Idx>,
}

impl ExprTypes {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the type of an expression, replacing any earlier record.
    pub fn record(&mut self, expr: ExprId, ty: Idx) {
        self.types.insert(expr, ty);
    }

    /// The recorded type, if any.
    #[inline]
    pub fn type_of(&self, expr: ExprId) -> Option<Idx> {
        self.types.get(&expr).copied()
    }

    /// Number of recorded expressions.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Check if nothing is recorded.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_and_lookup() {
        let mut types = ExprTypes::new();
        assert!(types.is_empty());

        types.record(ExprId::new(3), Idx::INT);
        types.record(ExprId::new(3), Idx::STRING);

        assert_eq!(types.type_of(ExprId::new(3)), Some(Idx::STRING));
        assert_eq!(types.type_of(ExprId::new(4)), None);
        assert_eq!(types.len(), 1);
    }
}
