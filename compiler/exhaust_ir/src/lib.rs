//! Program representation for the exhaust checker.
//!
//! The checker never parses source. A front end lowers each package into the
//! flat structures defined here and hands them over together with the type
//! information from `exhaust_types`:
//!
//! - [`Span`]: byte-offset source locations for anchoring diagnostics
//! - [`Name`] / [`StringInterner`]: interned identifiers
//! - [`ExprArena`] / [`ExprId`]: flat expression storage
//! - [`Stmt`], [`TypeSwitch`], [`CaseClause`]: the dispatch-on-dynamic-type
//!   construct and its binding statement
//! - [`Module`]: all type switches of one package, in source order

/// Compile-time size assertion.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod expr;
mod interner;
mod module;
mod name;
mod span;
mod stmt;

pub use expr::{Expr, ExprArena, ExprId, ExprKind};
pub use interner::{InternError, SharedInterner, StringInterner};
pub use module::Module;
pub use name::Name;
pub use span::Span;
pub use stmt::{CaseClause, Stmt, TypeSwitch};
