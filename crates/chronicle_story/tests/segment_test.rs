//! Tests for parsing raw model output into narrative and choices.

use chronicle_story::{MAX_CHOICES, parse_segment};

#[test]
fn test_narrative_and_choices_split() {
    let segment = parse_segment("Para one.\n1. Go left\n2. Go right\nPara two.");
    assert_eq!(segment.narrative(), "Para one.\nPara two.");
    assert_eq!(segment.choices(), &["Go left", "Go right"]);
}

#[test]
fn test_single_choice_is_not_playable() {
    let segment = parse_segment("The dust storm settles.\n1. Wait it out");
    assert_eq!(segment.choices().len(), 1);
    assert!(!segment.is_playable());
}

#[test]
fn test_no_choices_is_not_playable() {
    let segment = parse_segment("Just prose, nothing to pick.");
    assert!(segment.choices().is_empty());
    assert!(!segment.is_playable());
}

#[test]
fn test_choices_capped_at_four() {
    let raw = "Intro\n1. a\n2. b\n3. c\n4. d\n1. e\n2. f";
    let segment = parse_segment(raw);
    assert_eq!(segment.choices().len(), MAX_CHOICES);
    assert_eq!(segment.choices(), &["a", "b", "c", "d"]);
}

#[test]
fn test_choice_order_preserved() {
    let raw = "2. second\n1. first\n3. third";
    let segment = parse_segment(raw);
    assert_eq!(segment.choices(), &["second", "first", "third"]);
}

#[test]
fn test_empty_narrative_is_not_an_error() {
    let segment = parse_segment("1. only\n2. choices");
    assert_eq!(segment.narrative(), "");
    assert!(segment.is_playable());
}

#[test]
fn test_prefix_requires_digit_then_dot() {
    // "5." is outside the 1-4 range; "1x" lacks the dot.
    let segment = parse_segment("5. not a choice\n1x also not\n1. real\n2. also real");
    assert_eq!(segment.choices(), &["real", "also real"]);
    assert_eq!(segment.narrative(), "5. not a choice\n1x also not");
}

#[test]
fn test_bare_prefix_yields_empty_choice_text() {
    // A line of exactly "1." keeps its slot with empty text, mirroring the
    // fixed 3-character strip.
    let segment = parse_segment("1.\n2. go");
    assert_eq!(segment.choices(), &["", "go"]);
}

#[test]
fn test_blank_lines_kept_in_narrative() {
    let segment = parse_segment("Para one.\n\nPara two.\n1. a\n2. b");
    assert_eq!(segment.narrative(), "Para one.\n\nPara two.");
}
