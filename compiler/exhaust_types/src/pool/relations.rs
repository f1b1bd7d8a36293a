//! Method sets and interface satisfaction.
//!
//! Method set rules:
//! - an interface type (named or not) has the methods it declares
//! - a named non-interface type `T` has its value-receiver methods
//! - `*T` has every method declared on `T`
//! - every other type has an empty method set
//!
//! Methods promoted through embedded struct fields are not modelled.

use exhaust_ir::Name;

use super::{Pool, Receiver};
use crate::{Idx, Tag};

impl Pool {
    /// The method set of a type as `(name, signature)` pairs, sorted by name.
    pub fn method_set(&self, idx: Idx) -> Vec<(Name, Idx)> {
        if self.is_interface(idx) {
            return self.interface_methods(idx);
        }

        let (named, with_pointer_methods) = match self.tag(idx) {
            Tag::Named => (idx, false),
            Tag::Pointer => match self.pointer_elem(idx) {
                Some(elem) if self.tag(elem) == Tag::Named && !self.is_interface(elem) => {
                    (elem, true)
                }
                _ => return Vec::new(),
            },
            _ => return Vec::new(),
        };

        let Some(decl) = self.named_type(named) else {
            return Vec::new();
        };
        let mut methods: Vec<(Name, Idx)> = decl
            .methods
            .iter()
            .filter(|m| with_pointer_methods || m.receiver == Receiver::Value)
            .map(|m| (m.name, m.signature))
            .collect();
        methods.sort_by_key(|&(name, _)| name);
        methods
    }

    /// Check whether `ty` satisfies the interface `iface`.
    ///
    /// Every method required by `iface` must be in the method set of `ty`
    /// with an identical signature. Returns `false` when `iface` is not an
    /// interface. Every type satisfies the universal interface.
    pub fn implements(&self, ty: Idx, iface: Idx) -> bool {
        if !self.is_interface(iface) {
            return false;
        }
        let required = self.interface_methods(iface);
        if required.is_empty() {
            return true;
        }
        if self.flags(ty).has_errors() {
            return false;
        }

        let available = self.method_set(ty);
        required.iter().all(|&(name, signature)| {
            available
                .binary_search_by_key(&name, |&(n, _)| n)
                .is_ok_and(|at| available[at].1 == signature)
        })
    }
}
