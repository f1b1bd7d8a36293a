//! Errors raised while a front end populates the pool.

use thiserror::Error;

use exhaust_ir::Name;

use crate::Idx;

/// Misuse of the pool construction API.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PoolError {
    /// Methods can only be attached to declared types.
    #[error("cannot attach methods to {0:?}: not a named type")]
    NotNamed(Idx),
    /// Interfaces carry their methods in their type, not as attached methods.
    #[error("cannot attach methods to interface type {0:?}")]
    InterfaceReceiver(Idx),
    /// The method name is already declared on the type.
    #[error("method {method:?} already declared on {ty:?}")]
    DuplicateMethod { ty: Idx, method: Name },
    /// Signatures must be function types.
    #[error("method signature {0:?} is not a function type")]
    NotAFunction(Idx),
}
