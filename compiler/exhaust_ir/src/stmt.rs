//! Statements and the type-switch construct.

use crate::{ExprId, Span};

/// A statement, reduced to the shapes a type-switch header can take.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Stmt {
    /// `lhs := rhs` or `lhs = rhs`, e.g. `v := x.(type)`.
    Assign { lhs: Vec<ExprId>, rhs: Vec<ExprId> },
    /// A bare expression statement, e.g. `x.(type)`.
    Expr(ExprId),
    /// Anything else.
    Other,
}

/// One `case` (or `default`) arm of a type switch.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CaseClause {
    pub span: Span,
    /// Type patterns listed by the clause. Empty for `default`.
    pub patterns: Vec<ExprId>,
}

impl CaseClause {
    /// A `case` clause listing one or more type patterns.
    pub fn case(span: Span, patterns: Vec<ExprId>) -> Self {
        CaseClause { span, patterns }
    }

    /// The `default` clause.
    pub fn default_clause(span: Span) -> Self {
        CaseClause {
            span,
            patterns: Vec::new(),
        }
    }

    /// Check if this is the `default` clause.
    #[inline]
    pub fn is_default(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// A dispatch on the dynamic type of a value.
///
/// ```text
/// switch assign {
/// case A, B: ...
/// default: ...
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeSwitch {
    /// Span of the whole `switch` statement.
    pub span: Span,
    /// The binding statement holding the type query.
    pub assign: Stmt,
    /// Clauses in source order.
    pub clauses: Vec<CaseClause>,
}

impl TypeSwitch {
    pub fn new(span: Span, assign: Stmt, clauses: Vec<CaseClause>) -> Self {
        TypeSwitch {
            span,
            assign,
            clauses,
        }
    }
}
