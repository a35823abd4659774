//! Prompt assembly for segment generation.

use crate::{ChoiceHistory, Profile};

/// Context string used for a brand-new story.
pub const NEW_STORY_CONTEXT: &str = "New story";

/// Returns the generation context: [`NEW_STORY_CONTEXT`] when no choice has
/// been accepted yet, otherwise the space-joined recent choice window.
pub fn context_string(profile: &Profile, history: &ChoiceHistory) -> String {
    if *profile.progress() == 0 {
        NEW_STORY_CONTEXT.to_string()
    } else {
        history.recent().join(" ")
    }
}

/// Builds the deterministic system prompt for the next segment.
///
/// The prompt embeds the protagonist attributes, genre, current location,
/// and the recent-choice context, followed by the format rules the segment
/// parser relies on.
pub fn build_prompt(profile: &Profile, history: &ChoiceHistory) -> String {
    let context = context_string(profile, history);

    format!(
        "Generate a branching narrative segment for a Mars colony story with:\n\
         - Protagonist: {} ({}, age {}, {})\n\
         - Genre: {}\n\
         - Current location: {}\n\
         - Previous context: {}\n\
         \n\
         Format rules:\n\
         1. Write 2-3 paragraph story segment\n\
         2. End with 2-4 numbered choices\n\
         3. Keep choices impactful and distinct",
        profile.name(),
        profile.gender(),
        profile.age(),
        profile.origin(),
        profile.genre(),
        profile.location(),
        context,
    )
}
