use super::*;
use exhaust_ir::{CaseClause, ExprId, Name, Span, Stmt};
use pretty_assertions::assert_eq;

struct Fixture {
    arena: ExprArena,
    types: ExprTypes,
    pool: Pool,
    query: ExprId,
    next: u32,
}

impl Fixture {
    fn new() -> Self {
        let mut arena = ExprArena::new();
        let x = arena.alloc(ExprKind::Ident(Name::from_raw(1)), Span::new(0, 1));
        let query = arena.alloc(ExprKind::TypeQuery { target: x }, Span::new(0, 8));
        Fixture {
            arena,
            types: ExprTypes::new(),
            pool: Pool::new(),
            query,
            next: 10,
        }
    }

    fn expr(&mut self, kind: ExprKind, ty: Option<Idx>) -> ExprId {
        let span = Span::new(self.next, self.next + 4);
        self.next += 5;
        let id = self.arena.alloc(kind, span);
        if let Some(ty) = ty {
            self.types.record(id, ty);
        }
        id
    }

    fn type_pattern(&mut self, ty: Idx) -> ExprId {
        self.expr(ExprKind::Ident(Name::from_raw(7)), Some(ty))
    }

    fn switch(&self, clauses: Vec<CaseClause>) -> TypeSwitch {
        TypeSwitch::new(Span::new(0, 100), Stmt::Expr(self.query), clauses)
    }

    fn classify(&self, switch: &TypeSwitch) -> Result<Vec<ClausePattern>, SkipReason> {
        classify(&self.arena, &self.types, &self.pool, switch)
    }
}

#[test]
fn every_pattern_of_a_multi_type_clause_counts() {
    let mut fx = Fixture::new();
    let a = fx.type_pattern(Idx::INT);
    let b = fx.type_pattern(Idx::STRING);
    let c = fx.type_pattern(Idx::BOOL);
    let switch = fx.switch(vec![
        CaseClause::case(Span::DUMMY, vec![a, b]),
        CaseClause::case(Span::DUMMY, vec![c]),
    ]);

    assert_eq!(
        fx.classify(&switch),
        Ok(vec![
            ClausePattern::Named(Idx::INT),
            ClausePattern::Named(Idx::STRING),
            ClausePattern::Named(Idx::BOOL),
        ])
    );
}

#[test]
fn default_and_nil() {
    let mut fx = Fixture::new();
    let typed_nil = fx.expr(ExprKind::Nil, Some(Idx::UNTYPED_NIL));
    let bare_nil = fx.expr(ExprKind::Nil, None);
    let int = fx.type_pattern(Idx::INT);
    let switch = fx.switch(vec![
        CaseClause::case(Span::DUMMY, vec![int, typed_nil]),
        CaseClause::default_clause(Span::DUMMY),
        CaseClause::case(Span::DUMMY, vec![bare_nil]),
    ]);

    let patterns = fx.classify(&switch);
    assert_eq!(
        patterns,
        Ok(vec![
            ClausePattern::Named(Idx::INT),
            ClausePattern::Nil,
            ClausePattern::CatchAll,
            ClausePattern::Nil,
        ])
    );
    assert!(ClausePattern::Nil.is_catch_all_like());
    assert!(ClausePattern::CatchAll.is_catch_all_like());
    assert!(!ClausePattern::Named(Idx::INT).is_catch_all_like());
}

#[test]
fn nil_is_detected_by_type_not_by_spelling() {
    let mut fx = Fixture::new();
    // An identifier that the front end resolved to the untyped nil.
    let aliased = fx.expr(ExprKind::Ident(Name::from_raw(3)), Some(Idx::UNTYPED_NIL));
    let switch = fx.switch(vec![CaseClause::case(Span::DUMMY, vec![aliased])]);
    assert_eq!(fx.classify(&switch), Ok(vec![ClausePattern::Nil]));
}

#[test]
fn untyped_pattern_is_malformed() {
    let mut fx = Fixture::new();
    let good = fx.type_pattern(Idx::INT);
    let bad = fx.expr(ExprKind::Ident(Name::from_raw(9)), None);
    let bad_span = fx.arena.get(bad).unwrap().span;
    let switch = fx.switch(vec![CaseClause::case(Span::DUMMY, vec![good, bad])]);

    assert_eq!(
        fx.classify(&switch),
        Err(SkipReason::UnresolvedPattern(bad_span))
    );
}

#[test]
fn invalid_pattern_type_is_malformed() {
    let mut fx = Fixture::new();
    let bad = fx.type_pattern(Idx::INVALID);
    let switch = fx.switch(vec![CaseClause::case(Span::DUMMY, vec![bad])]);
    assert!(matches!(
        fx.classify(&switch),
        Err(SkipReason::InvalidPattern(_))
    ));
}

#[test]
fn dangling_pattern_is_malformed() {
    let fx = Fixture::new();
    let bogus = ExprId::new(500);
    let switch = fx.switch(vec![CaseClause::case(Span::DUMMY, vec![bogus])]);
    assert_eq!(fx.classify(&switch), Err(SkipReason::DanglingExpr(bogus)));
}

#[test]
fn no_clauses() {
    let fx = Fixture::new();
    assert_eq!(fx.classify(&fx.switch(vec![])), Ok(vec![]));
}
