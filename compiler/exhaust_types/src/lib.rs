//! Type information consumed by the exhaust checker.
//!
//! The checker is handed an already type-checked package. This crate holds
//! the read-only view of that result:
//!
//! - [`Pool`]: every type, referenced by a 32-bit [`Idx`]. Named types are
//!   distinct by construction; unnamed types are interned structurally, so
//!   `Idx` equality is type identity.
//! - Interface satisfaction ([`Pool::implements`]) over method sets.
//! - [`Scope`]: the package's top-level declarations, in name order.
//! - [`ExprTypes`]: the static type recorded for each expression.
//!
//! Everything here is `Sync` and is only read during checking, so switches
//! can be analyzed on several threads against the same pool and scope.

mod error;
mod expr_types;
mod flags;
mod idx;
mod pool;
mod scope;
mod tag;

pub use error::PoolError;
pub use expr_types::ExprTypes;
pub use flags::TypeFlags;
pub use idx::Idx;
pub use pool::{Method, NamedType, Pool, Receiver};
pub use scope::{ObjectKind, PackageScope, Scope, ScopeEntry};
pub use tag::Tag;
