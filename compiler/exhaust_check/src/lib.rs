//! Exhaustiveness check for type switches.
//!
//! A type switch over a value whose static type is an interface is
//! *exhaustive* when every concrete type declared in the enclosing package
//! that implements the interface is named by some `case`. For each switch
//! that is not, the check emits one [`ErrorCode::W3001`] warning listing the
//! missing types.
//!
//! ```text
//! type Shape interface { area() float64 }
//! // Circle, Square and Triangle implement Shape
//!
//! switch s.(type) {   // warning[W3001]: Inexhaustive pattern match for Shape, missing cases:
//! case Circle:        // - Triangle
//! case Square:
//! }
//! ```
//!
//! # Pipeline
//!
//! Each switch goes through the same steps, independently of its siblings:
//!
//! 1. [`resolve`]: find the queried expression and its static type
//! 2. gate: only interfaces with at least one method are checked
//! 3. [`clauses`]: classify every case pattern
//! 4. short-circuit on `default` / `nil` unless `ignore-nil` is set
//! 5. [`candidates`]: enumerate implementors declared in the package
//! 6. reconcile and [`report`]
//!
//! Switches of a package are checked in parallel; see [`Checker::check`].
//!
//! [`ErrorCode::W3001`]: exhaust_diagnostic::ErrorCode::W3001

pub mod candidates;
pub mod clauses;
mod config;
mod engine;
mod error;
mod pass;
pub mod report;
pub mod resolve;
pub mod testing;

pub use config::{parse_bool, Analyzer, ConfigError, ExhaustConfig, FlagSpec, ANALYZER};
pub use engine::{check_switch, Verdict};
pub use error::SkipReason;
pub use pass::{Checker, Package};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing from `RUST_LOG`.
///
/// Does nothing unless `RUST_LOG` is set. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
