use super::*;
use pretty_assertions::assert_eq;

#[test]
fn point_is_empty() {
    let span = Span::point(4);
    assert!(span.is_empty());
    assert_eq!(span.len(), 0);
}

#[test]
fn len_counts_positions() {
    let span = Span::new(2, 7);
    assert_eq!(span.len(), 5);
    assert!(!span.is_empty());
}

#[test]
fn display_uses_range_syntax() {
    assert_eq!(Span::new(1, 3).to_string(), "1..3");
}

#[test]
#[should_panic(expected = "span start 4 exceeds end 2")]
#[cfg(debug_assertions)]
fn inverted_span_is_a_precondition_violation() {
    let _ = Span::new(4, 2);
}
