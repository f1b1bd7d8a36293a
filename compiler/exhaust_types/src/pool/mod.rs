//! Unified type storage.
//!
//! Every type is an `Item { tag, data }` addressed by an [`Idx`]. Unnamed
//! composites (interfaces, pointers, structs, functions) are interned, so two
//! structurally identical unnamed types share one index. Named types are
//! never interned: each declaration gets a fresh index, which is what makes
//! `Idx` equality the exact type identity the checker relies on.

mod construct;
mod format;
mod relations;

use exhaust_ir::Name;
use rustc_hash::FxHashMap;

use crate::{Idx, Tag, TypeFlags};

/// Receiver kind of a declared method.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Receiver {
    /// `func (T) m()`: in the method set of both `T` and `*T`.
    Value,
    /// `func (*T) m()`: only in the method set of `*T`.
    Pointer,
}

/// A method declared on a named type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Method {
    pub name: Name,
    /// Function type of the method, without the receiver.
    pub signature: Idx,
    pub receiver: Receiver,
}

/// A declared type.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct NamedType {
    pub name: Name,
    /// Declaring package. `Name::EMPTY` for predeclared types.
    pub package: Name,
    /// Underlying type. Never itself a named type.
    pub underlying: Idx,
    /// Methods declared on the type, in declaration order.
    pub methods: Vec<Method>,
}

/// A single type item.
#[derive(Copy, Clone, Debug)]
struct Item {
    tag: Tag,
    data: u32,
}

/// The type pool.
#[derive(Clone, Debug)]
pub struct Pool {
    items: Vec<Item>,
    flags: Vec<TypeFlags>,
    /// Variable-length payloads for complex types.
    extra: Vec<u32>,
    /// Declared types, indexed by a `Named` item's data.
    named: Vec<NamedType>,
    /// Dedup map for `(tag, data)` items.
    simple: FxHashMap<(Tag, u32), Idx>,
    /// Dedup map for items with an `extra` payload.
    complex: FxHashMap<(Tag, Vec<u32>), Idx>,
}

impl Pool {
    /// Create a pool with the pre-interned types at their fixed indices.
    pub fn new() -> Self {
        let mut pool = Pool {
            items: Vec::with_capacity(256),
            flags: Vec::with_capacity(256),
            extra: Vec::with_capacity(1024),
            named: Vec::new(),
            simple: FxHashMap::default(),
            complex: FxHashMap::default(),
        };

        for tag in [
            Tag::Bool,
            Tag::Int,
            Tag::Float,
            Tag::String,
            Tag::UntypedNil,
            Tag::Invalid,
        ] {
            let mut flags = TypeFlags::IS_PRIMITIVE;
            match tag {
                Tag::UntypedNil => flags |= TypeFlags::IS_NIL,
                Tag::Invalid => flags |= TypeFlags::HAS_ERROR,
                _ => {}
            }
            pool.push(Item { tag, data: 0 }, flags);
        }

        let any = pool.intern_complex(Tag::Interface, &[0]);
        debug_assert_eq!(any, Idx::ANY);
        pool.flags[any.raw() as usize] |= TypeFlags::IS_PRIMITIVE;

        // Reserved range up to the first dynamic index.
        while pool.items.len() < Idx::FIRST_DYNAMIC as usize {
            pool.push(
                Item {
                    tag: Tag::Invalid,
                    data: 0,
                },
                TypeFlags::IS_PRIMITIVE | TypeFlags::HAS_ERROR,
            );
        }

        pool
    }

    /// Number of items, including the reserved range.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the pool holds only pre-interned types.
    pub fn is_empty(&self) -> bool {
        self.items.len() <= Idx::FIRST_DYNAMIC as usize
    }

    /// Check if an index refers to an item in this pool.
    #[inline]
    pub fn contains(&self, idx: Idx) -> bool {
        (idx.raw() as usize) < self.items.len()
    }

    /// Tag of a type. Unknown indices read as [`Tag::Invalid`].
    #[inline]
    pub fn tag(&self, idx: Idx) -> Tag {
        self.item(idx).map_or(Tag::Invalid, |item| item.tag)
    }

    /// Flags of a type. Unknown indices read as [`TypeFlags::HAS_ERROR`].
    #[inline]
    pub fn flags(&self, idx: Idx) -> TypeFlags {
        self.flags
            .get(idx.raw() as usize)
            .copied()
            .unwrap_or(TypeFlags::HAS_ERROR)
    }

    /// Declared-type data for a named type.
    pub fn named_type(&self, idx: Idx) -> Option<&NamedType> {
        let item = self.item(idx)?;
        if item.tag != Tag::Named {
            return None;
        }
        self.named.get(item.data as usize)
    }

    /// Underlying type: the type itself unless it is named.
    pub fn underlying(&self, idx: Idx) -> Idx {
        self.named_type(idx).map_or(idx, |n| n.underlying)
    }

    /// Check if the type's underlying type is an interface.
    #[inline]
    pub fn is_interface(&self, idx: Idx) -> bool {
        self.flags(idx).is_interface()
    }

    /// Check if the type's underlying type is an interface with no methods.
    #[inline]
    pub fn is_universal_interface(&self, idx: Idx) -> bool {
        self.flags(idx).is_universal()
    }

    /// Element of a pointer type.
    pub fn pointer_elem(&self, idx: Idx) -> Option<Idx> {
        let item = self.item(idx)?;
        (item.tag == Tag::Pointer).then(|| Idx::from_raw(item.data))
    }

    /// Methods required by an interface (through its underlying type), in
    /// canonical order. Empty for non-interfaces.
    pub fn interface_methods(&self, idx: Idx) -> Vec<(Name, Idx)> {
        let underlying = self.underlying(idx);
        match self.item(underlying) {
            Some(item) if item.tag == Tag::Interface => self.pairs(item.data),
            _ => Vec::new(),
        }
    }

    /// Fields of a struct type (through its underlying type).
    pub fn struct_fields(&self, idx: Idx) -> Vec<(Name, Idx)> {
        let underlying = self.underlying(idx);
        match self.item(underlying) {
            Some(item) if item.tag == Tag::Struct => self.pairs(item.data),
            _ => Vec::new(),
        }
    }

    /// Parameter types of a function type.
    pub fn function_params(&self, idx: Idx) -> Vec<Idx> {
        match self.item(idx) {
            Some(item) if item.tag == Tag::Function => {
                let start = item.data as usize;
                let count = self.extra_at(start);
                self.idx_run(start + 1, count)
            }
            _ => Vec::new(),
        }
    }

    /// Result types of a function type.
    pub fn function_results(&self, idx: Idx) -> Vec<Idx> {
        match self.item(idx) {
            Some(item) if item.tag == Tag::Function => {
                let start = item.data as usize;
                let params = self.extra_at(start);
                let results_at = start + 1 + params;
                let count = self.extra_at(results_at);
                self.idx_run(results_at + 1, count)
            }
            _ => Vec::new(),
        }
    }

    // === Internal storage ===

    #[inline]
    fn item(&self, idx: Idx) -> Option<Item> {
        self.items.get(idx.raw() as usize).copied()
    }

    #[inline]
    fn extra_at(&self, at: usize) -> usize {
        self.extra.get(at).copied().unwrap_or(0) as usize
    }

    fn idx_run(&self, start: usize, count: usize) -> Vec<Idx> {
        self.extra
            .get(start..start + count)
            .map(|run| run.iter().copied().map(Idx::from_raw).collect())
            .unwrap_or_default()
    }

    /// Decode a `[n, name0, ty0, name1, ty1, ...]` payload.
    fn pairs(&self, start: u32) -> Vec<(Name, Idx)> {
        let start = start as usize;
        let count = self.extra_at(start);
        self.extra
            .get(start + 1..start + 1 + count * 2)
            .map(|run| {
                run.chunks_exact(2)
                    .map(|pair| (Name::from_raw(pair[0]), Idx::from_raw(pair[1])))
                    .collect()
            })
            .unwrap_or_default()
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "pool size is bounded well below u32::MAX"
    )]
    fn push(&mut self, item: Item, flags: TypeFlags) -> Idx {
        let idx = Idx::from_raw(self.items.len() as u32);
        self.items.push(item);
        self.flags.push(flags);
        idx
    }

    /// Intern a `(tag, data)` item.
    fn intern(&mut self, tag: Tag, data: u32) -> Idx {
        if let Some(&idx) = self.simple.get(&(tag, data)) {
            return idx;
        }
        let flags = self.compute_flags(tag, &[data]);
        let idx = self.push(Item { tag, data }, flags);
        self.simple.insert((tag, data), idx);
        idx
    }

    /// Intern an item whose payload lives in `extra`.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "extra size is bounded well below u32::MAX"
    )]
    fn intern_complex(&mut self, tag: Tag, payload: &[u32]) -> Idx {
        let key = (tag, payload.to_vec());
        if let Some(&idx) = self.complex.get(&key) {
            return idx;
        }
        let start = self.extra.len() as u32;
        self.extra.extend_from_slice(payload);
        let flags = self.compute_flags(tag, payload);
        let idx = self.push(Item { tag, data: start }, flags);
        self.complex.insert(key, idx);
        idx
    }

    /// Flags for an unnamed composite from its tag and payload.
    fn compute_flags(&self, tag: Tag, payload: &[u32]) -> TypeFlags {
        let mut flags = TypeFlags::empty();
        let has_error = match tag {
            Tag::Pointer => {
                flags |= TypeFlags::IS_POINTER;
                self.any_child_error(payload.iter().copied())
            }
            Tag::Interface => {
                flags |= TypeFlags::IS_INTERFACE;
                if payload.first().copied() == Some(0) {
                    flags |= TypeFlags::IS_UNIVERSAL;
                }
                self.any_child_error(payload.iter().skip(2).step_by(2).copied())
            }
            Tag::Struct => self.any_child_error(payload.iter().skip(2).step_by(2).copied()),
            Tag::Function => {
                let params = payload.first().copied().unwrap_or(0) as usize;
                self.any_child_error(
                    payload
                        .iter()
                        .enumerate()
                        .filter(|&(i, _)| i != 0 && i != params + 1)
                        .map(|(_, &raw)| raw),
                )
            }
            _ => false,
        };
        if has_error {
            flags |= TypeFlags::HAS_ERROR;
        }
        flags
    }

    /// Named children are skipped: their flags change once the underlying
    /// type is set, and interned flags are never recomputed.
    fn any_child_error(&self, mut children: impl Iterator<Item = u32>) -> bool {
        children.any(|raw| {
            let flags = self.flags(Idx::from_raw(raw));
            !flags.contains(TypeFlags::IS_NAMED) && flags.has_errors()
        })
    }
}

impl Default for Pool {
    fn default() -> Self {
        Self::new()
    }
}
