//! Candidate enumeration.
//!
//! The candidates for a switch over interface `I` are the types of the
//! package's top-level declarations that implement `I` and are not
//! interfaces themselves. Imported packages are never searched.

use exhaust_types::{Idx, Pool, Scope};
use rustc_hash::FxHashSet;

/// Concrete implementors of `iface` declared in `scope`.
///
/// Declarations are visited in lexicographic name order. Several
/// declarations can share a type (a type name and a variable of that type);
/// only the first occurrence is kept, so the result holds each type once, in
/// a stable order.
pub fn implementors(pool: &Pool, scope: &dyn Scope, iface: Idx) -> Vec<Idx> {
    let mut seen = FxHashSet::default();
    let mut found = Vec::new();
    for name in scope.names() {
        let Some(entry) = scope.lookup(name) else {
            continue;
        };
        let ty = entry.ty;
        if pool.is_interface(ty) || !pool.implements(ty, iface) {
            continue;
        }
        if seen.insert(ty) {
            found.push(ty);
        }
    }
    found
}

/// Candidates not named by any clause, in candidate order.
pub fn unmatched(candidates: &[Idx], matched: &FxHashSet<Idx>) -> Vec<Idx> {
    candidates
        .iter()
        .copied()
        .filter(|ty| !matched.contains(ty))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use exhaust_ir::{Name, Span, StringInterner};
    use exhaust_types::{ObjectKind, PackageScope, Receiver, ScopeEntry};
    use pretty_assertions::assert_eq;

    struct Fixture {
        pool: Pool,
        interner: StringInterner,
        scope: PackageScope,
        pkg: Name,
        area_fn: Idx,
    }

    impl Fixture {
        fn new() -> Self {
            let mut pool = Pool::new();
            let interner = StringInterner::new();
            let pkg = interner.intern("shapes");
            let area_fn = pool.function(&[], &[Idx::FLOAT]);
            Fixture {
                pool,
                scope: PackageScope::new(pkg),
                interner,
                pkg,
                area_fn,
            }
        }

        fn declare(&mut self, name: &str, kind: ObjectKind, ty: Idx) {
            let name = self.interner.intern(name);
            self.scope.insert(
                ScopeEntry {
                    name,
                    kind,
                    ty,
                    span: Span::DUMMY,
                },
                &self.interner,
            );
        }

        fn shape(&mut self) -> Idx {
            let area = self.interner.intern("area");
            let underlying = self.pool.interface(&[(area, self.area_fn)]);
            let name = self.interner.intern("Shape");
            let ty = self.pool.named(name, self.pkg, underlying);
            self.declare("Shape", ObjectKind::TypeName, ty);
            ty
        }

        fn concrete(&mut self, name: &str, receiver: Option<Receiver>) -> Idx {
            let empty = self.pool.struct_type(&[]);
            let interned = self.interner.intern(name);
            let ty = self.pool.named(interned, self.pkg, empty);
            if let Some(receiver) = receiver {
                let area = self.interner.intern("area");
                let area_fn = self.area_fn;
                assert!(self.pool.add_method(ty, area, area_fn, receiver).is_ok());
            }
            self.declare(name, ObjectKind::TypeName, ty);
            ty
        }
    }

    #[test]
    fn lexicographic_order_and_interfaces_excluded() {
        let mut fx = Fixture::new();
        let shape = fx.shape();
        let triangle = fx.concrete("Triangle", Some(Receiver::Value));
        let circle = fx.concrete("Circle", Some(Receiver::Value));
        fx.concrete("Point", None);

        assert_eq!(implementors(&fx.pool, &fx.scope, shape), vec![circle, triangle]);
    }

    #[test]
    fn pointer_receivers_need_a_declared_pointer() {
        let mut fx = Fixture::new();
        let shape = fx.shape();
        let square = fx.concrete("Square", Some(Receiver::Pointer));
        assert!(implementors(&fx.pool, &fx.scope, shape).is_empty());

        let square_ptr = fx.pool.pointer(square);
        fx.declare("unit", ObjectKind::Var, square_ptr);
        assert_eq!(implementors(&fx.pool, &fx.scope, shape), vec![square_ptr]);
    }

    #[test]
    fn shared_types_are_listed_once() {
        let mut fx = Fixture::new();
        let shape = fx.shape();
        let circle = fx.concrete("Circle", Some(Receiver::Value));
        fx.declare("aCircle", ObjectKind::Var, circle);
        fx.declare("zCircle", ObjectKind::Var, circle);

        assert_eq!(implementors(&fx.pool, &fx.scope, shape), vec![circle]);
    }

    #[test]
    fn unmatched_keeps_candidate_order() {
        let candidates = [Idx::INT, Idx::STRING, Idx::BOOL];
        let matched: FxHashSet<Idx> = [Idx::STRING].into_iter().collect();
        assert_eq!(unmatched(&candidates, &matched), vec![Idx::INT, Idx::BOOL]);
        assert!(unmatched(&[], &matched).is_empty());
    }
}
