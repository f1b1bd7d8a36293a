//! Builders for checker inputs.
//!
//! [`PackageBuilder`] assembles a module, type pool, scope and expression
//! type table the way a front end would after type checking, so tests and
//! embedders can describe a package in a few lines:
//!
//! ```text
//! let mut pkg = PackageBuilder::new("shapes");
//! let shape = pkg.interface("Shape", &["area"]);
//! let circle = pkg.concrete("Circle", &["area"]);
//! pkg.type_switch(shape, vec![Case::of(circle)]);
//! let diagnostics = pkg.check(ExhaustConfig::default());
//! ```

use exhaust_diagnostic::Diagnostic;
use exhaust_ir::{
    CaseClause, ExprId, ExprKind, Module, Name, Span, Stmt, StringInterner, TypeSwitch,
};
use exhaust_types::{ExprTypes, Idx, ObjectKind, PackageScope, Pool, Receiver, ScopeEntry, Tag};

use crate::{Checker, ExhaustConfig, Package};

/// One clause of a switch built by [`PackageBuilder::type_switch`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Case {
    /// `case T1, T2:`
    Types(Vec<Idx>),
    /// `case nil:`
    Nil,
    /// `default:`
    Default,
}

impl Case {
    /// `case T:`
    pub fn of(ty: Idx) -> Self {
        Case::Types(vec![ty])
    }
}

/// Builds a type-checked package.
pub struct PackageBuilder {
    pub interner: StringInterner,
    pub pool: Pool,
    pub scope: PackageScope,
    pub module: Module,
    pub types: ExprTypes,
    package: Name,
    /// Signature shared by every method the builder declares: `func()`.
    method_sig: Idx,
    cursor: u32,
}

impl PackageBuilder {
    pub fn new(package: &str) -> Self {
        let interner = StringInterner::new();
        let package = interner.intern(package);
        let mut pool = Pool::new();
        let method_sig = pool.function(&[], &[]);
        PackageBuilder {
            interner,
            pool,
            scope: PackageScope::new(package),
            module: Module::new(package),
            types: ExprTypes::new(),
            package,
            method_sig,
            cursor: 0,
        }
    }

    pub fn name(&self, s: &str) -> Name {
        self.interner.intern(s)
    }

    /// `type <name> interface { <methods>() }`, declared in the package.
    pub fn interface(&mut self, name: &str, methods: &[&str]) -> Idx {
        let methods: Vec<(Name, Idx)> = methods
            .iter()
            .map(|m| (self.name(m), self.method_sig))
            .collect();
        let underlying = self.pool.interface(&methods);
        let interned = self.name(name);
        let ty = self.pool.named(interned, self.package, underlying);
        self.declare(name, ObjectKind::TypeName, ty);
        ty
    }

    /// `type <name> struct{}` with value-receiver methods, declared in the
    /// package.
    pub fn concrete(&mut self, name: &str, methods: &[&str]) -> Idx {
        let ty = self.struct_named(self.package, name, methods, Receiver::Value);
        self.declare(name, ObjectKind::TypeName, ty);
        ty
    }

    /// Like [`concrete`](Self::concrete) but every method has a pointer
    /// receiver, so only `*T` implements interfaces requiring them.
    pub fn concrete_with_pointer_methods(&mut self, name: &str, methods: &[&str]) -> Idx {
        let ty = self.struct_named(self.package, name, methods, Receiver::Pointer);
        self.declare(name, ObjectKind::TypeName, ty);
        ty
    }

    /// A concrete type declared in another package. It exists in the pool
    /// but not in this package's scope.
    pub fn foreign_concrete(&mut self, package: &str, name: &str, methods: &[&str]) -> Idx {
        let package = self.name(package);
        self.struct_named(package, name, methods, Receiver::Value)
    }

    /// `var <name> <ty>` at package level.
    pub fn declare_var(&mut self, name: &str, ty: Idx) {
        self.declare(name, ObjectKind::Var, ty);
    }

    pub fn pointer(&mut self, elem: Idx) -> Idx {
        self.pool.pointer(elem)
    }

    /// `switch v := x.(type) { <cases> }` where `x` has type `scrutinee`.
    pub fn type_switch(&mut self, scrutinee: Idx, cases: Vec<Case>) -> Span {
        let query = self.type_query(scrutinee);
        let v = self.name("v");
        let v = self.expr(ExprKind::Ident(v), None);
        self.switch_with(
            Stmt::Assign {
                lhs: vec![v],
                rhs: vec![query],
            },
            cases,
        )
    }

    /// `switch x.(type) { <cases> }` where `x` has type `scrutinee`.
    pub fn bare_type_switch(&mut self, scrutinee: Idx, cases: Vec<Case>) -> Span {
        let query = self.type_query(scrutinee);
        self.switch_with(Stmt::Expr(query), cases)
    }

    /// A switch with an arbitrary header, for shapes the checker does not
    /// recognize.
    pub fn switch_with(&mut self, assign: Stmt, cases: Vec<Case>) -> Span {
        let start = self.cursor;
        let clauses = cases
            .into_iter()
            .map(|case| {
                let span = self.next_span(4);
                match case {
                    Case::Types(types) => {
                        let patterns = types.into_iter().map(|ty| self.type_expr(ty)).collect();
                        CaseClause::case(span, patterns)
                    }
                    Case::Nil => {
                        let nil = self.expr(ExprKind::Nil, Some(Idx::UNTYPED_NIL));
                        CaseClause::case(span, vec![nil])
                    }
                    Case::Default => CaseClause::default_clause(span),
                }
            })
            .collect();
        let span = Span::new(start, self.next_span(1).end);
        self.module.push_switch(TypeSwitch::new(span, assign, clauses));
        span
    }

    /// Push a fully built switch.
    pub fn push_switch(&mut self, switch: TypeSwitch) {
        self.module.push_switch(switch);
    }

    /// Allocate an expression, recording its type when given.
    pub fn expr(&mut self, kind: ExprKind, ty: Option<Idx>) -> ExprId {
        let span = self.next_span(1);
        let id = self.module.arena.alloc(kind, span);
        if let Some(ty) = ty {
            self.types.record(id, ty);
        }
        id
    }

    /// `x.(type)` with `x` of type `scrutinee`.
    pub fn type_query(&mut self, scrutinee: Idx) -> ExprId {
        let x = self.name("x");
        let x = self.expr(ExprKind::Ident(x), Some(scrutinee));
        self.expr(ExprKind::TypeQuery { target: x }, None)
    }

    /// An expression denoting `ty`, as written in a case pattern.
    pub fn type_expr(&mut self, ty: Idx) -> ExprId {
        let kind = match self.pool.tag(ty) {
            Tag::Pointer => match self.pool.pointer_elem(ty) {
                Some(elem) => ExprKind::Pointer(self.type_expr(elem)),
                None => ExprKind::Other,
            },
            Tag::Named => match self.pool.named_type(ty).map(|n| (n.package, n.name)) {
                Some((package, name)) if package == self.package => ExprKind::Ident(name),
                Some((package, name)) => ExprKind::Selector {
                    base: self.expr(ExprKind::Ident(package), None),
                    name,
                },
                None => ExprKind::Other,
            },
            Tag::UntypedNil => ExprKind::Nil,
            _ => ExprKind::Other,
        };
        self.expr(kind, Some(ty))
    }

    /// View of the package for the checker.
    pub fn package(&self) -> Package<'_> {
        Package {
            module: &self.module,
            pool: &self.pool,
            scope: &self.scope,
            types: &self.types,
            interner: &self.interner,
        }
    }

    /// Run the check over every switch built so far.
    pub fn check(&self, config: ExhaustConfig) -> Vec<Diagnostic> {
        Checker::new(config).check(&self.package())
    }

    fn declare(&mut self, name: &str, kind: ObjectKind, ty: Idx) {
        let entry = ScopeEntry {
            name: self.name(name),
            kind,
            ty,
            span: self.next_span(1),
        };
        self.scope.insert(entry, &self.interner);
    }

    fn struct_named(&mut self, package: Name, name: &str, methods: &[&str], receiver: Receiver) -> Idx {
        let empty = self.pool.struct_type(&[]);
        let interned = self.name(name);
        let ty = self.pool.named(interned, package, empty);

        let mut names: Vec<Name> = methods.iter().map(|m| self.name(m)).collect();
        names.sort_unstable();
        names.dedup();
        for method in names {
            // Fresh named struct, function signature, distinct names.
            let added = self.pool.add_method(ty, method, self.method_sig, receiver);
            debug_assert!(added.is_ok());
        }
        ty
    }

    fn next_span(&mut self, len: u32) -> Span {
        let span = Span::new(self.cursor, self.cursor + len);
        self.cursor += len + 1;
        span
    }
}
