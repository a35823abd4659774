//! Raw model output parsing into narrative and choices.

use serde::{Deserialize, Serialize};

/// Minimum number of choices for a segment to be playable.
pub const MIN_CHOICES: usize = 2;

/// Maximum number of choices kept from a response.
pub const MAX_CHOICES: usize = 4;

/// One narrative block plus its associated choice set, corresponding to one
/// chapter.
#[derive(
    Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters, derive_new::new,
)]
pub struct Segment {
    /// The narrative text, possibly empty
    narrative: String,
    /// The parsed choices, original order, at most [`MAX_CHOICES`]
    choices: Vec<String>,
}

impl Segment {
    /// Whether the segment carries enough choices to be played.
    ///
    /// A segment with fewer than [`MIN_CHOICES`] choices is malformed; the
    /// caller surfaces it as an error and prompts the user to retry.
    #[must_use]
    pub fn is_playable(&self) -> bool {
        self.choices.len() >= MIN_CHOICES
    }
}

/// Returns true iff the line is a choice line: it starts with one of the
/// literal prefixes `"1."` through `"4."`.
fn is_choice_line(line: &str) -> bool {
    let mut chars = line.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some('1'..='4'), Some('.'))
    )
}

/// Splits a raw model response into narrative text and an enumerated choice
/// list.
///
/// Non-choice lines, concatenated in original order, form the narrative.
/// Choice lines are stripped of their 3-character prefix (digit, dot, space)
/// and truncated to at most [`MAX_CHOICES`] entries, preserving order. An
/// empty narrative is returned as an empty string, not an error.
///
/// # Examples
///
/// ```
/// use chronicle_story::parse_segment;
///
/// let segment = parse_segment("Para one.\n1. Go left\n2. Go right\nPara two.");
/// assert_eq!(segment.narrative(), "Para one.\nPara two.");
/// assert_eq!(segment.choices(), &["Go left", "Go right"]);
/// ```
pub fn parse_segment(raw: &str) -> Segment {
    let mut narrative_lines = Vec::new();
    let mut choices = Vec::new();

    for line in raw.lines() {
        if is_choice_line(line) {
            if choices.len() < MAX_CHOICES {
                choices.push(line.get(3..).unwrap_or("").to_string());
            }
        } else {
            narrative_lines.push(line);
        }
    }

    Segment::new(narrative_lines.join("\n"), choices)
}
