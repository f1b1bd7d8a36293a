//! Per-package driver.

use exhaust_diagnostic::{Diagnostic, DiagnosticQueue};
use exhaust_ir::{Module, StringInterner, TypeSwitch};
use exhaust_types::{ExprTypes, Pool, Scope};
use rayon::prelude::*;

use crate::{check_switch, report, ExhaustConfig, Verdict};

/// Everything the check reads about one type-checked package.
///
/// All of it is shared read-only across worker threads.
#[derive(Copy, Clone)]
pub struct Package<'a> {
    pub module: &'a Module,
    pub pool: &'a Pool,
    /// Top-level declarations of this package only.
    pub scope: &'a dyn Scope,
    pub types: &'a ExprTypes,
    pub interner: &'a StringInterner,
}

/// Runs the exhaustiveness check with a fixed configuration.
#[derive(Copy, Clone, Debug, Default)]
pub struct Checker {
    config: ExhaustConfig,
}

impl Checker {
    pub fn new(config: ExhaustConfig) -> Self {
        Checker { config }
    }

    pub fn config(&self) -> ExhaustConfig {
        self.config
    }

    /// Check every type switch of a package.
    ///
    /// Switches are checked in parallel. The result is sorted by source
    /// position, so it does not depend on scheduling. Each inexhaustive
    /// switch yields exactly one diagnostic.
    #[tracing::instrument(level = "debug", skip_all, fields(
        package = pkg.interner.lookup(pkg.scope.package()),
        switches = pkg.module.switches().len(),
    ))]
    pub fn check(&self, pkg: &Package<'_>) -> Vec<Diagnostic> {
        let found: Vec<Diagnostic> = pkg
            .module
            .switches()
            .par_iter()
            .filter_map(|switch| self.check_one(pkg, switch))
            .collect();

        let mut queue = DiagnosticQueue::new();
        queue.extend(found);
        let diagnostics = queue.flush();
        tracing::debug!(count = diagnostics.len(), "exhaustiveness check finished");
        diagnostics
    }

    /// Check several packages, each against its own scope.
    ///
    /// Diagnostics are returned grouped by package, in input order.
    pub fn check_all(&self, packages: &[Package<'_>]) -> Vec<Diagnostic> {
        packages.iter().flat_map(|pkg| self.check(pkg)).collect()
    }

    /// Check a single switch. Malformed switches are logged and skipped.
    pub fn check_one(&self, pkg: &Package<'_>, switch: &TypeSwitch) -> Option<Diagnostic> {
        match check_switch(pkg, self.config, switch) {
            Ok(Verdict::Inexhaustive { scrutinee, missing }) => {
                tracing::debug!(
                    span = ?switch.span,
                    missing = missing.len(),
                    "inexhaustive type switch"
                );
                Some(report::inexhaustive(pkg, switch.span, scrutinee, &missing))
            }
            Ok(verdict) => {
                tracing::trace!(span = ?switch.span, ?verdict, "no diagnostic");
                None
            }
            Err(reason) => {
                tracing::debug!(span = ?switch.span, %reason, "skipping malformed type switch");
                None
            }
        }
    }
}
