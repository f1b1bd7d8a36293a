//! Type construction for front ends populating the pool.

use exhaust_ir::Name;

use super::{Item, Method, NamedType, Pool, Receiver};
use crate::{Idx, PoolError, Tag, TypeFlags};

impl Pool {
    /// Create a pointer type `*elem`.
    pub fn pointer(&mut self, elem: Idx) -> Idx {
        self.intern(Tag::Pointer, elem.raw())
    }

    /// Create a function type `func(params) results`.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "parameter lists are far below u32::MAX"
    )]
    pub fn function(&mut self, params: &[Idx], results: &[Idx]) -> Idx {
        // Layout: [param_count, params..., result_count, results...]
        let mut payload = Vec::with_capacity(params.len() + results.len() + 2);
        payload.push(params.len() as u32);
        payload.extend(params.iter().map(|p| p.raw()));
        payload.push(results.len() as u32);
        payload.extend(results.iter().map(|r| r.raw()));
        self.intern_complex(Tag::Function, &payload)
    }

    /// Create an interface type from its method list.
    ///
    /// Methods are canonicalized (sorted, first declaration of a name wins)
    /// so that interfaces with the same method set share one index.
    pub fn interface(&mut self, methods: &[(Name, Idx)]) -> Idx {
        self.interface_with_embeds(methods, &[])
    }

    /// Create an interface type that embeds other interfaces.
    ///
    /// Embedded interfaces are flattened into the method list. Embedding a
    /// non-interface contributes nothing.
    pub fn interface_with_embeds(&mut self, methods: &[(Name, Idx)], embeds: &[Idx]) -> Idx {
        let mut all: Vec<(Name, Idx)> = methods.to_vec();
        for &embed in embeds {
            all.extend(self.interface_methods(embed));
        }
        Self::canonical_pairs(&mut all);
        self.intern_complex(Tag::Interface, &Self::pair_payload(&all))
    }

    /// Create a struct type from its fields, in declaration order.
    pub fn struct_type(&mut self, fields: &[(Name, Idx)]) -> Idx {
        self.intern_complex(Tag::Struct, &Self::pair_payload(fields))
    }

    /// Declare a named type whose underlying type is not known yet.
    ///
    /// The underlying type reads as invalid until [`Pool::set_underlying`]
    /// is called, which allows self-referential declarations.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "declared type count is far below u32::MAX"
    )]
    pub fn declare_named(&mut self, name: Name, package: Name) -> Idx {
        let data = self.named.len() as u32;
        self.named.push(NamedType {
            name,
            package,
            underlying: Idx::INVALID,
            methods: Vec::new(),
        });
        self.push(
            Item {
                tag: Tag::Named,
                data,
            },
            TypeFlags::IS_NAMED | TypeFlags::HAS_ERROR,
        )
    }

    /// Set the underlying type of a declared type and refresh its flags.
    ///
    /// If `underlying` is itself named, its underlying type is used.
    pub fn set_underlying(&mut self, named: Idx, underlying: Idx) -> Result<(), PoolError> {
        let slot = self
            .named_slot(named)
            .ok_or(PoolError::NotNamed(named))?;
        self.fill_underlying(named, slot, underlying);
        Ok(())
    }

    /// Declare a named type with a known underlying type.
    pub fn named(&mut self, name: Name, package: Name, underlying: Idx) -> Idx {
        let idx = self.declare_named(name, package);
        let slot = self.named.len() - 1;
        self.fill_underlying(idx, slot, underlying);
        idx
    }

    /// Attach a method to a declared, non-interface type.
    pub fn add_method(
        &mut self,
        ty: Idx,
        name: Name,
        signature: Idx,
        receiver: Receiver,
    ) -> Result<(), PoolError> {
        let slot = self.named_slot(ty).ok_or(PoolError::NotNamed(ty))?;
        if self.is_interface(ty) {
            return Err(PoolError::InterfaceReceiver(ty));
        }
        if self.tag(signature) != Tag::Function {
            return Err(PoolError::NotAFunction(signature));
        }
        let methods = &mut self.named[slot].methods;
        if methods.iter().any(|m| m.name == name) {
            return Err(PoolError::DuplicateMethod { ty, method: name });
        }
        methods.push(Method {
            name,
            signature,
            receiver,
        });
        Ok(())
    }

    fn fill_underlying(&mut self, named: Idx, slot: usize, underlying: Idx) {
        let resolved = self.underlying(underlying);
        let inherited = self.flags(resolved)
            & (TypeFlags::IS_INTERFACE | TypeFlags::IS_UNIVERSAL | TypeFlags::HAS_ERROR);
        self.named[slot].underlying = resolved;
        self.flags[named.raw() as usize] = TypeFlags::IS_NAMED | inherited;
    }

    fn named_slot(&self, idx: Idx) -> Option<usize> {
        let item = self.item(idx)?;
        (item.tag == Tag::Named).then_some(item.data as usize)
    }

    /// Sort by name and drop later duplicates.
    fn canonical_pairs(pairs: &mut Vec<(Name, Idx)>) {
        // Stable sort keeps the first declaration of each name in front.
        pairs.sort_by_key(|&(name, _)| name);
        pairs.dedup_by_key(|&mut (name, _)| name);
    }

    /// Encode pairs as `[n, name0, ty0, name1, ty1, ...]`.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "method and field lists are far below u32::MAX"
    )]
    fn pair_payload(pairs: &[(Name, Idx)]) -> Vec<u32> {
        let mut payload = Vec::with_capacity(pairs.len() * 2 + 1);
        payload.push(pairs.len() as u32);
        for &(name, ty) in pairs {
            payload.push(name.raw());
            payload.push(ty.raw());
        }
        payload
    }
}
