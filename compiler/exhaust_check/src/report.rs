//! Diagnostic construction for inexhaustive switches.

use exhaust_diagnostic::{Diagnostic, ErrorCode};
use exhaust_ir::Span;
use exhaust_types::Idx;

use crate::Package;

/// Build the W3001 warning for a switch at `span`.
///
/// Type names are rendered relative to the package being checked, so local
/// types print bare and imported ones print qualified.
pub fn inexhaustive(pkg: &Package<'_>, span: Span, scrutinee: Idx, missing: &[Idx]) -> Diagnostic {
    let package = pkg.scope.package();
    let render = |ty: Idx| pkg.pool.format_type_relative(ty, package, pkg.interner);

    let missing: Vec<String> = missing.iter().map(|&ty| render(ty)).collect();
    Diagnostic::warning(ErrorCode::W3001)
        .with_message(message(&render(scrutinee), &missing))
        .with_label(span, missing_label(missing.len()))
}

/// `Inexhaustive pattern match for <I>, missing cases:` followed by one
/// `- <T>` line per missing type.
pub fn message(scrutinee: &str, missing: &[String]) -> String {
    let mut message = format!("Inexhaustive pattern match for {scrutinee}, missing cases:");
    for ty in missing {
        message.push_str("\n- ");
        message.push_str(ty);
    }
    message
}

fn missing_label(count: usize) -> String {
    if count == 1 {
        "missing 1 case".to_string()
    } else {
        format!("missing {count} cases")
    }
}
