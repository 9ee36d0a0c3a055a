use super::*;
use crate::{Any, Literal};
use pretty_assertions::assert_eq;
use strand_diagnostic::ErrorCode;
use strand_input::Cursor;

fn run(rule: &Choice<u8, u32>, text: &str) -> (RuleOutcome<Success<u32>>, usize) {
    let mut cursor = Cursor::bytes(text);
    let outcome = rule.attempt(&mut cursor);
    (outcome, cursor.position())
}

fn abc_def() -> Choice<u8, u32> {
    Choice::new()
        .or(Branch::new(Literal::str("abc")).with_tag(0))
        .or(Branch::new(Literal::str("def")).with_tag(1))
}

// === Ordering ===

#[test]
fn first_alternative_matches() {
    let (outcome, pos) = run(&abc_def(), "abc");
    assert_eq!(outcome.into_result().unwrap().tag, Some(0));
    assert_eq!(pos, 3);
}

#[test]
fn second_alternative_after_first_declines() {
    let (outcome, pos) = run(&abc_def(), "def");
    assert_eq!(outcome.into_result().unwrap().tag, Some(1));
    assert_eq!(pos, 3);
}

#[test]
fn first_match_wins_over_longer_match() {
    let rule = Choice::new()
        .or(Branch::new(Literal::str("a")).with_tag(0))
        .or(Branch::new(Literal::str("abc")).with_tag(1));
    let (outcome, pos) = run(&rule, "abc");
    let success = outcome.into_result().unwrap();
    assert_eq!(success.tag, Some(0));
    assert_eq!(success.position, 1);
    assert_eq!(pos, 1);
}

#[test]
fn later_alternatives_are_not_attempted() {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct Counting(Arc<AtomicUsize>);

    impl Rule<u8, u32> for Counting {
        fn attempt(&self, input: &mut dyn Input<Symbol = u8>) -> RuleOutcome<Success<u32>> {
            self.0.fetch_add(1, Ordering::Relaxed);
            RuleOutcome::empty_ok(Success::at(input.position()))
        }
    }

    let calls = Arc::new(AtomicUsize::new(0));
    let rule = Choice::new()
        .or(Branch::new(Literal::str("x")).with_tag(0))
        .or_rule(Counting(Arc::clone(&calls)));

    assert!(run(&rule, "x").0.is_ok());
    assert_eq!(calls.load(Ordering::Relaxed), 0);

    assert!(run(&rule, "y").0.is_ok());
    assert_eq!(calls.load(Ordering::Relaxed), 1);
}

// === Exhaustion ===

#[test]
fn exhausted_on_empty_input() {
    let (outcome, pos) = run(&abc_def(), "");
    assert_eq!(outcome, RuleOutcome::empty_err(Diagnostic::exhausted_choice(0)));
    assert_eq!(pos, 0);
}

#[test]
fn exhausted_after_partial_matches_restores_entry() {
    // Both alternatives consume a prefix before failing.
    let rule = Choice::new()
        .or(Branch::new(Literal::str("abx")).with_tag(0))
        .or(Branch::new(Literal::str("aby")).with_tag(1));
    let (outcome, pos) = run(&rule, "abz");
    let diag = outcome.into_result().unwrap_err();
    assert!(diag.is_exhausted_choice());
    assert_eq!(diag.position, 0);
    assert_eq!(pos, 0);
}

#[test]
fn exhausted_reports_entry_not_zero() {
    let rule = abc_def();
    let mut cursor = Cursor::bytes("..xyz");
    cursor.advance();
    cursor.advance();
    let diag = rule.attempt(&mut cursor).into_result().unwrap_err();
    assert_eq!(diag.position, 2);
    assert_eq!(cursor.position(), 2);
}

#[test]
fn empty_choice_exhausts() {
    let rule: Choice<u8, u32> = Choice::new();
    assert!(rule.is_empty());
    let (outcome, _) = run(&rule, "abc");
    assert_eq!(outcome.diagnostic().map(Diagnostic::code), Some(ErrorCode::E1001));
}

// === Fallback ===

#[test]
fn fallback_when_all_decline() {
    let rule = Choice::new()
        .or(Branch::new(Literal::str("abc")).with_tag(0))
        .or_else(Fallback::new().with_tag(1));
    let (outcome, pos) = run(&rule, "");
    assert_eq!(
        outcome,
        RuleOutcome::empty_ok(Success::at(0).with_tag(1))
    );
    assert_eq!(pos, 0);
}

#[test]
fn fallback_consumes_nothing_after_partial_attempt() {
    let rule = Choice::new()
        .or(Branch::new(Literal::str("abc")).with_tag(0))
        .or_else(Fallback::new().with_tag(1));
    let (outcome, pos) = run(&rule, "abX");
    let success = outcome.into_result().unwrap();
    assert_eq!(success.tag, Some(1));
    assert_eq!(success.position, 0);
    assert!(success.captures.is_empty());
    assert_eq!(pos, 0);
}

#[test]
fn fallback_not_taken_when_branch_matches() {
    let rule = Choice::new()
        .or(Branch::new(Literal::str("abc")).with_tag(0))
        .or_else(Fallback::new().with_tag(1));
    let (outcome, _) = run(&rule, "abc");
    assert_eq!(outcome.into_result().unwrap().tag, Some(0));
}

#[test]
fn fallback_set_first_is_still_tried_last() {
    let rule = Choice::new()
        .or_else(Fallback::new().with_tag(1))
        .or(Branch::new(Literal::str("abc")).with_tag(0));
    assert!(rule.has_fallback());
    assert_eq!(run(&rule, "abc").0.into_result().unwrap().tag, Some(0));
}

#[test]
fn untagged_fallback() {
    let rule: Choice<u8, u32> = Choice::new().or_else(Fallback::new());
    let success = run(&rule, "zzz").0.into_result().unwrap();
    assert_eq!(success, Success::at(0));
}

// === Committed failure ===

#[test]
fn committed_body_failure_stops_the_choice() {
    // "a" commits the first branch; its body then fails on "b". The second
    // branch would match "ab" but is never tried.
    let rule = Choice::new()
        .or(Branch::new(Literal::str("a")).then(Literal::str("x")).with_tag(0))
        .or(Branch::new(Literal::str("ab")).with_tag(1))
        .or_else(Fallback::new().with_tag(2));
    let (outcome, pos) = run(&rule, "ab");
    assert_eq!(
        outcome,
        RuleOutcome::consumed_err(Diagnostic::expected_literal(1, "x"))
    );
    assert_eq!(pos, 0);
}

// === Nesting ===

#[test]
fn nested_choice_as_alternative() {
    let inner = Choice::new()
        .or(Branch::new(Literal::str("1")).with_tag(1))
        .or(Branch::new(Literal::str("2")).with_tag(2));
    let rule = Choice::new()
        .or(Branch::new(Literal::str("a")).with_tag(0))
        .or_rule(inner);
    assert_eq!(rule.len(), 2);

    assert_eq!(run(&rule, "2").0.into_result().unwrap().tag, Some(2));
    assert!(run(&rule, "3").0.into_result().unwrap_err().is_exhausted_choice());
}

#[test]
fn boxed_rule_as_alternative() {
    let boxed: Box<dyn Rule<u8, u32>> = Box::new(abc_def());
    let rule = Choice::new().or_rule(boxed);
    assert_eq!(run(&rule, "def").0.into_result().unwrap().tag, Some(1));
}

#[test]
fn deeply_nested_choices() {
    let mut rule: Choice<u8, u32> = Choice::new().or(Branch::total(Any).with_tag(0));
    for depth in 1..=2_000 {
        rule = Choice::new()
            .or(Branch::new(Literal::str("(")).then_rule(rule).with_tag(depth));
    }
    let text = "(".repeat(2_000);
    let success = run(&rule, &text).0.into_result().unwrap();
    assert_eq!(success.position, 2_000);
    assert_eq!(success.tag, Some(2_000));
}

#[test]
fn very_deep_grammar_drops() {
    let mut rule: Choice<u8, u32> = Choice::new().or(Branch::new(Literal::str(")")).with_tag(0));
    for depth in 1..=100_000 {
        rule = Choice::new().or(Branch::new(Literal::str("(")).then_rule(rule).with_tag(depth));
    }
    let (outcome, pos) = run(&rule, "x");
    assert!(outcome.into_result().unwrap_err().is_exhausted_choice());
    assert_eq!(pos, 0);
    drop(rule);
}

#[test]
fn leaking_rule_is_rolled_back() {
    // A user rule that violates the contract by consuming before declining.
    struct Leaky;

    impl Rule<u8, u32> for Leaky {
        fn attempt(&self, input: &mut dyn Input<Symbol = u8>) -> RuleOutcome<Success<u32>> {
            if !input.is_eof() {
                input.advance();
            }
            RuleOutcome::empty_err(Diagnostic::expected_eof(input.position()))
        }
    }

    let rule = Choice::new()
        .or_rule(Leaky)
        .or(Branch::new(Literal::str("ab")).with_tag(7));
    let (outcome, pos) = run(&rule, "ab");
    assert_eq!(outcome.into_result().unwrap().tag, Some(7));
    assert_eq!(pos, 2);
}
