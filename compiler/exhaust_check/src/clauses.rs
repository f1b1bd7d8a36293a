//! Case clause classification.

use exhaust_ir::{ExprArena, ExprKind, TypeSwitch};
use exhaust_types::{ExprTypes, Idx, Pool, Tag};

use crate::SkipReason;

/// What one case pattern (or a whole `default` clause) matches.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ClausePattern {
    /// A type pattern. Matches exactly this type.
    Named(Idx),
    /// `case nil:`
    Nil,
    /// The `default` clause.
    CatchAll,
}

impl ClausePattern {
    /// `default` or `nil`: clauses that make a switch total without naming
    /// every implementor.
    pub fn is_catch_all_like(self) -> bool {
        matches!(self, ClausePattern::Nil | ClausePattern::CatchAll)
    }
}

/// Classify every pattern of every clause, in source order.
///
/// A clause listing several types (`case A, B:`) yields one entry per type.
pub fn classify(
    arena: &ExprArena,
    types: &ExprTypes,
    pool: &Pool,
    switch: &TypeSwitch,
) -> Result<Vec<ClausePattern>, SkipReason> {
    let mut patterns = Vec::with_capacity(switch.clauses.len());
    for clause in &switch.clauses {
        if clause.is_default() {
            patterns.push(ClausePattern::CatchAll);
            continue;
        }
        for &pattern in &clause.patterns {
            let expr = arena.get(pattern).ok_or(SkipReason::DanglingExpr(pattern))?;
            let classified = match types.type_of(pattern) {
                Some(ty) if pool.tag(ty) == Tag::UntypedNil => ClausePattern::Nil,
                Some(ty) if pool.flags(ty).has_errors() => {
                    return Err(SkipReason::InvalidPattern(expr.span));
                }
                Some(ty) => ClausePattern::Named(ty),
                None if matches!(expr.kind, ExprKind::Nil) => ClausePattern::Nil,
                None => return Err(SkipReason::UnresolvedPattern(expr.span)),
            };
            patterns.push(classified);
        }
    }
    Ok(patterns)
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
