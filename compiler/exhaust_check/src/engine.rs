//! Per-switch exhaustiveness decision.

use exhaust_ir::TypeSwitch;
use exhaust_types::Idx;
use rustc_hash::FxHashSet;

use crate::candidates::{implementors, unmatched};
use crate::clauses::{classify, ClausePattern};
use crate::resolve::scrutinee_type;
use crate::{ExhaustConfig, Package, SkipReason};

/// Outcome of checking one type switch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Not a switch this check handles: unrecognized header, untyped
    /// scrutinee, or a scrutinee whose interface has no methods.
    NotApplicable,
    /// Every implementor is named.
    Exhaustive,
    /// A `default` or `nil` clause covers the rest, and `ignore-nil` is off.
    ExhaustiveByPolicy,
    /// Some implementors are not named.
    Inexhaustive {
        scrutinee: Idx,
        /// In candidate (lexicographic declaration) order.
        missing: Vec<Idx>,
    },
}

impl Verdict {
    pub fn is_inexhaustive(&self) -> bool {
        matches!(self, Verdict::Inexhaustive { .. })
    }
}

/// Decide whether `switch` handles every implementor of its scrutinee's
/// interface.
///
/// resolve, gate, classify, then either short-circuit or enumerate and
/// reconcile. Depends only on its arguments.
pub fn check_switch(
    pkg: &Package<'_>,
    config: ExhaustConfig,
    switch: &TypeSwitch,
) -> Result<Verdict, SkipReason> {
    let arena = &pkg.module.arena;

    let Some(scrutinee) = scrutinee_type(arena, pkg.types, &switch.assign)? else {
        return Ok(Verdict::NotApplicable);
    };

    if !pkg.pool.is_interface(scrutinee) {
        return Err(SkipReason::NotAnInterface(scrutinee));
    }
    if pkg.pool.is_universal_interface(scrutinee) {
        return Ok(Verdict::NotApplicable);
    }

    let patterns = classify(arena, pkg.types, pkg.pool, switch)?;
    if !config.ignore_nil && patterns.iter().any(|p| p.is_catch_all_like()) {
        return Ok(Verdict::ExhaustiveByPolicy);
    }

    let matched: FxHashSet<Idx> = patterns
        .iter()
        .filter_map(|pattern| match pattern {
            ClausePattern::Named(ty) => Some(*ty),
            ClausePattern::Nil | ClausePattern::CatchAll => None,
        })
        .collect();

    let candidates = implementors(pkg.pool, pkg.scope, scrutinee);
    let missing = unmatched(&candidates, &matched);
    if missing.is_empty() {
        Ok(Verdict::Exhaustive)
    } else {
        Ok(Verdict::Inexhaustive { scrutinee, missing })
    }
}
