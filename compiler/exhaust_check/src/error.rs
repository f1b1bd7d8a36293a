//! Reasons a switch is skipped instead of checked.

use exhaust_ir::{ExprId, Span};
use exhaust_types::Idx;
use thiserror::Error;

/// Why a type switch could not be checked.
///
/// These never abort a run: the switch is skipped, the reason is logged at
/// `debug`, and sibling switches are checked as usual.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SkipReason {
    #[error("expression {0:?} is not in the arena")]
    DanglingExpr(ExprId),

    #[error("case pattern at {0:?} has no recorded type")]
    UnresolvedPattern(Span),

    #[error("case pattern at {0:?} has an invalid type")]
    InvalidPattern(Span),

    #[error("scrutinee type {0:?} is not an interface")]
    NotAnInterface(Idx),
}
