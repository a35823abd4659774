//! The single-session state: profile, history, and the segment on display.

use crate::save::{deserialize_patch, save_file_name, serialize_profile};
use crate::{ChoiceHistory, Gender, Genre, Profile, Segment};
use chronicle_error::{ChronicleResult, StoryError, StoryErrorKind};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// The full mutable state of one play session.
///
/// The session is the only shared mutable resource; it is passed explicitly
/// into each handler rather than living in process-wide state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Session {
    /// The evolving character/game profile
    profile: Profile,
    /// Previously selected choice texts, append-only
    history: ChoiceHistory,
    /// The segment currently on display, if any
    segment: Option<Segment>,
}

impl Session {
    /// Creates a fresh session with a default profile and empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Chapter number presented to the user.
    pub fn chapter(&self) -> u32 {
        self.profile.progress() + 1
    }

    /// Applies the character-creation form to the profile.
    pub fn apply_character_creation(
        &mut self,
        name: impl Into<String>,
        gender: Gender,
        age: u8,
        origin: impl Into<String>,
        genre: Genre,
    ) {
        self.profile
            .apply_character_creation(name, gender, age, origin, genre);
    }

    /// Stores a freshly generated segment for display.
    pub fn set_segment(&mut self, segment: Segment) {
        self.segment = Some(segment);
    }

    /// Records the user's selection from the displayed segment.
    ///
    /// Progress, location, and history update together; a failed selection
    /// mutates nothing. Returns the selected choice text.
    ///
    /// # Errors
    ///
    /// Fails with `ChoiceOutOfRange` when no segment is on display or the
    /// index does not name one of its choices.
    #[instrument(skip(self), fields(progress = self.profile.progress()))]
    pub fn record_choice(&mut self, index: usize) -> ChronicleResult<String> {
        let available = self.segment.as_ref().map_or(0, |s| s.choices().len());
        let choice = self
            .segment
            .as_ref()
            .and_then(|s| s.choices().get(index))
            .cloned()
            .ok_or_else(|| {
                StoryError::new(StoryErrorKind::ChoiceOutOfRange { index, available })
            })?;

        self.profile.advance();
        self.history.push(choice.clone());
        self.segment = None;

        debug!(
            progress = self.profile.progress(),
            location = %self.profile.location(),
            "Recorded choice"
        );

        Ok(choice)
    }

    /// Serializes the profile to a JSON save.
    pub fn save_json(&self) -> ChronicleResult<String> {
        serialize_profile(&self.profile)
    }

    /// Suggested save file name, embedding the story id.
    pub fn save_file_name(&self) -> String {
        save_file_name(&self.profile)
    }

    /// Loads save bytes into the profile.
    ///
    /// A failed parse or merge leaves the in-memory profile untouched.
    #[instrument(skip(self, bytes), fields(len = bytes.len()))]
    pub fn load_save(&mut self, bytes: &[u8]) -> ChronicleResult<()> {
        let patch = deserialize_patch(bytes)?;
        patch.merge_into(&mut self.profile)?;
        self.segment = None;
        Ok(())
    }
}
