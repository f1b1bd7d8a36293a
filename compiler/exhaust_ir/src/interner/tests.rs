use super::*;

#[test]
fn intern_is_idempotent() {
    let interner = StringInterner::new();
    let a = interner.intern("Circle");
    let b = interner.intern("Circle");
    let c = interner.intern("Square");

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(interner.lookup(a), "Circle");
    assert_eq!(interner.lookup(c), "Square");
}

#[test]
fn empty_string_is_pre_interned() {
    let interner = StringInterner::new();
    assert!(interner.is_empty());
    assert_eq!(interner.intern(""), Name::EMPTY);
    assert_eq!(interner.lookup(Name::EMPTY), "");
}

#[test]
fn get_does_not_insert() {
    let interner = StringInterner::new();
    assert_eq!(interner.get("Shape"), None);
    assert_eq!(interner.len(), 1);

    let shape = interner.intern("Shape");
    assert_eq!(interner.get("Shape"), Some(shape));
    assert_eq!(interner.len(), 2);
}

#[test]
fn foreign_name_resolves_to_empty() {
    let interner = StringInterner::new();
    assert_eq!(interner.lookup(Name::from_raw(999)), "");
}

#[test]
fn shared_interner_clones_share_storage() {
    let shared = SharedInterner::new();
    let other = shared.clone();
    let name = shared.intern("Triangle");
    assert_eq!(other.lookup(name), "Triangle");
    assert_eq!(other.get("Triangle"), Some(name));
}

#[test]
fn concurrent_interning_agrees() {
    let shared = SharedInterner::new();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let interner = shared.clone();
            std::thread::spawn(move || interner.intern("Shape"))
        })
        .collect();

    let names: Vec<Name> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(names.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(shared.len(), 2);
}
