use super::*;
use crate::ErrorCode;
use pretty_assertions::assert_eq;

fn warning_at(start: u32, message: &str) -> Diagnostic {
    Diagnostic::warning(ErrorCode::W3001)
        .with_message(message)
        .with_label(Span::new(start, start + 10), "here")
}

fn messages(diags: &[Diagnostic]) -> Vec<&str> {
    diags.iter().map(|d| d.message.as_str()).collect()
}

#[test]
fn flush_sorts_by_position() {
    let mut queue = DiagnosticQueue::new();
    queue.push(warning_at(40, "third"));
    queue.push(warning_at(0, "first"));
    queue.push(warning_at(20, "second"));

    assert_eq!(messages(&queue.flush()), vec!["first", "second", "third"]);
    assert!(queue.flush().is_empty());
}

#[test]
fn ties_keep_insertion_order() {
    let mut queue = DiagnosticQueue::new();
    queue.extend([warning_at(5, "b"), warning_at(5, "a"), warning_at(1, "c")]);

    assert_eq!(messages(&queue.flush()), vec!["c", "b", "a"]);
}

#[test]
fn identical_diagnostics_are_all_kept() {
    let mut queue = DiagnosticQueue::new();
    queue.extend([warning_at(5, "a"), warning_at(5, "a")]);

    let flushed = queue.flush();
    assert_eq!(flushed.len(), 2);
    assert_eq!(flushed[0], flushed[1]);
}

#[test]
fn unlabeled_diagnostics_sort_last() {
    let mut queue = DiagnosticQueue::new();
    queue.push(Diagnostic::warning(ErrorCode::W3001).with_message("floating"));
    queue.push(warning_at(100, "anchored"));

    assert_eq!(messages(&queue.flush()), vec!["anchored", "floating"]);
}
