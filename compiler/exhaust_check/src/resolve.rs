//! Scrutinee resolution.
//!
//! A type switch header binds its type query in one of two shapes:
//!
//! ```text
//! switch v := x.(type) { ... }   // Stmt::Assign, first rhs is the query
//! switch x.(type) { ... }        // Stmt::Expr
//! ```
//!
//! Both reduce to the same thing: find the `TypeQuery` and look up the static
//! type of its target. Any other shape is not a switch this check handles.

use exhaust_ir::{ExprArena, ExprId, ExprKind, Stmt};
use exhaust_types::{ExprTypes, Idx};

use crate::SkipReason;

/// The expression whose dynamic type the switch dispatches on.
///
/// Returns `Ok(None)` when the statement is not a type query binding.
pub fn query_target(arena: &ExprArena, stmt: &Stmt) -> Result<Option<ExprId>, SkipReason> {
    let query = match stmt {
        Stmt::Assign { rhs, .. } => match rhs.first() {
            Some(&first) => first,
            None => return Ok(None),
        },
        Stmt::Expr(expr) => *expr,
        Stmt::Other => return Ok(None),
    };

    match arena.kind(query) {
        Some(ExprKind::TypeQuery { target }) => Ok(Some(*target)),
        Some(_) => Ok(None),
        None => Err(SkipReason::DanglingExpr(query)),
    }
}

/// Static type of the switch's scrutinee.
///
/// `Ok(None)` means the switch is not applicable: either the header has
/// another shape or the scrutinee has no recorded type.
pub fn scrutinee_type(
    arena: &ExprArena,
    types: &ExprTypes,
    stmt: &Stmt,
) -> Result<Option<Idx>, SkipReason> {
    Ok(query_target(arena, stmt)?.and_then(|target| types.type_of(target)))
}
