//! Per-package container handed to the checker.

use crate::{ExprArena, Name, TypeSwitch};

/// All type switches of one package, with the arena their expressions live in.
///
/// Switches nested inside other switches' clause bodies are flattened into
/// the same list by the front end; the checker treats each one independently.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Module {
    /// Package name.
    pub name: Name,
    pub arena: ExprArena,
    switches: Vec<TypeSwitch>,
}

impl Module {
    /// Create an empty module for a package.
    pub fn new(name: Name) -> Self {
        Module {
            name,
            arena: ExprArena::new(),
            switches: Vec::new(),
        }
    }

    /// Record a type switch. Switches are kept in insertion (source) order.
    pub fn push_switch(&mut self, switch: TypeSwitch) {
        self.switches.push(switch);
    }

    /// Type switches in source order.
    pub fn switches(&self) -> &[TypeSwitch] {
        &self.switches
    }
}
