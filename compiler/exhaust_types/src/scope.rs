//! Package scopes.
//!
//! A [`Scope`] is the set of top-level declarations of one package. It is
//! handed to the checker as a trait object so front ends can back it with
//! whatever symbol table they already have; [`PackageScope`] is the plain
//! in-memory implementation.
//!
//! A scope never includes declarations of imported packages.

use std::collections::BTreeMap;

use exhaust_ir::{Name, Span, StringInterner};
use rustc_hash::FxHashMap;

use crate::Idx;

/// Kind of a top-level declaration.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ObjectKind {
    /// `type T ...`
    TypeName,
    /// `var v T`
    Var,
    /// `const c = ...`
    Const,
    /// `func f(...)`
    Func,
}

/// A top-level declaration and its resolved type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ScopeEntry {
    pub name: Name,
    pub kind: ObjectKind,
    /// For a type name, the declared type itself; otherwise the object's type.
    pub ty: Idx,
    pub span: Span,
}

/// Read-only view of a package's top-level declarations.
pub trait Scope: Sync {
    /// The package this scope belongs to.
    fn package(&self) -> Name;

    /// Declared names, sorted lexicographically by their text.
    fn names(&self) -> Vec<Name>;

    /// Look up a declaration by name.
    fn lookup(&self, name: Name) -> Option<&ScopeEntry>;

    /// Number of declarations.
    fn len(&self) -> usize {
        self.names().len()
    }

    /// Check if the scope has no declarations.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory package scope.
#[derive(Clone, Debug, Default)]
pub struct PackageScope {
    package: Name,
    entries: FxHashMap<Name, ScopeEntry>,
    /// Name text -> name, for sorted iteration.
    order: BTreeMap<&'static str, Name>,
}

impl PackageScope {
    /// Create an empty scope for a package.
    pub fn new(package: Name) -> Self {
        PackageScope {
            package,
            entries: FxHashMap::default(),
            order: BTreeMap::new(),
        }
    }

    /// Declare an object, returning the entry it replaces, if any.
    ///
    /// `interner` must be the interner that produced `entry.name`.
    pub fn insert(&mut self, entry: ScopeEntry, interner: &StringInterner) -> Option<ScopeEntry> {
        self.order.insert(interner.lookup(entry.name), entry.name);
        self.entries.insert(entry.name, entry)
    }

    /// Iterate entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = &ScopeEntry> {
        self.order.values().filter_map(|name| self.entries.get(name))
    }
}

impl Scope for PackageScope {
    fn package(&self) -> Name {
        self.package
    }

    fn names(&self) -> Vec<Name> {
        self.order.values().copied().collect()
    }

    fn lookup(&self, name: Name) -> Option<&ScopeEntry> {
        self.entries.get(&name)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entry(name: Name, kind: ObjectKind, ty: Idx) -> ScopeEntry {
        ScopeEntry {
            name,
            kind,
            ty,
            span: Span::DUMMY,
        }
    }

    #[test]
    fn names_are_sorted_by_text_not_insertion() {
        let interner = StringInterner::new();
        let pkg = interner.intern("shapes");
        let mut scope = PackageScope::new(pkg);

        for text in ["Triangle", "Circle", "Square"] {
            let name = interner.intern(text);
            scope.insert(entry(name, ObjectKind::TypeName, Idx::INT), &interner);
        }

        let names: Vec<&str> = scope.names().into_iter().map(|n| interner.lookup(n)).collect();
        assert_eq!(names, vec!["Circle", "Square", "Triangle"]);
        assert_eq!(scope.len(), 3);
        assert!(!scope.is_empty());
        assert_eq!(scope.package(), pkg);
    }

    #[test]
    fn redeclaration_replaces_entry() {
        let interner = StringInterner::new();
        let mut scope = PackageScope::new(Name::EMPTY);
        let name = interner.intern("x");

        assert!(scope
            .insert(entry(name, ObjectKind::Var, Idx::INT), &interner)
            .is_none());
        let previous = scope.insert(entry(name, ObjectKind::Const, Idx::STRING), &interner);

        assert_eq!(previous.map(|e| e.kind), Some(ObjectKind::Var));
        assert_eq!(scope.lookup(name).map(|e| e.ty), Some(Idx::STRING));
        assert_eq!(scope.names(), vec![name]);
        assert_eq!(scope.iter().count(), 1);
    }

    #[test]
    fn empty_scope() {
        let scope = PackageScope::new(Name::EMPTY);
        assert!(scope.is_empty());
        assert!(scope.lookup(Name::EMPTY).is_none());
    }
}
