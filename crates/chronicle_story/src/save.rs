//! Save/load codec for the profile.
//!
//! Saves are plain JSON objects with no version tag. Loading goes through an
//! allow-listed patch: each present key is validated by type and merged onto
//! the live profile, absent keys leave the live field untouched, and unknown
//! keys are rejected rather than silently adopted.

use crate::profile::{LOCATIONS, Profile};
use crate::{Gender, Genre};
use chronicle_error::{ChronicleResult, StoryError, StoryErrorKind};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

/// Serializes the full profile to a JSON save.
pub fn serialize_profile(profile: &Profile) -> ChronicleResult<String> {
    serde_json::to_string_pretty(profile)
        .map_err(|e| StoryError::new(StoryErrorKind::InvalidSaveData(e.to_string())).into())
}

/// Suggested file name for a save, embedding the story id.
pub fn save_file_name(profile: &Profile) -> String {
    format!("mars_story_{}.json", profile.story_id())
}

/// An allow-listed, partially-present view of a save file.
///
/// Every field is optional; keys absent from the save leave the live profile
/// untouched. Unknown keys fail deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub gender: Option<Gender>,
    pub age: Option<u8>,
    pub origin: Option<String>,
    pub genre: Option<Genre>,
    pub progress: Option<u32>,
    pub inventory: Option<Vec<String>>,
    pub location: Option<String>,
    pub story_id: Option<Uuid>,
    pub created: Option<bool>,
    /// Older saves carry the location list; the list is fixed, so the key is
    /// accepted and ignored.
    pub locations: Option<Vec<String>>,
}

/// Parses save bytes into a [`ProfilePatch`].
///
/// # Errors
///
/// Fails with `InvalidSaveData` when the bytes are not valid JSON, a field
/// has the wrong type, or an unknown key is present.
pub fn deserialize_patch(bytes: &[u8]) -> ChronicleResult<ProfilePatch> {
    serde_json::from_slice(bytes).map_err(|e| {
        warn!(error = %e, "Rejected save data");
        StoryError::new(StoryErrorKind::InvalidSaveData(e.to_string())).into()
    })
}

impl ProfilePatch {
    /// Merges the patch into a live profile, key by key.
    ///
    /// Validation happens before any mutation, so a failed merge leaves the
    /// profile exactly as it was.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidSaveData` when the patch location is not an entry
    /// of the fixed location list.
    pub fn merge_into(self, profile: &mut Profile) -> ChronicleResult<()> {
        if let Some(location) = &self.location {
            if !LOCATIONS.contains(&location.as_str()) {
                return Err(StoryError::new(StoryErrorKind::InvalidSaveData(format!(
                    "unknown location '{}'",
                    location
                )))
                .into());
            }
        }

        if let Some(name) = self.name {
            profile.set_name(name);
        }
        if let Some(gender) = self.gender {
            profile.set_gender(gender);
        }
        if let Some(age) = self.age {
            // Accepted as-is; the 1-125 bound is an entry-boundary rule only.
            profile.set_age(age);
        }
        if let Some(origin) = self.origin {
            profile.set_origin(origin);
        }
        if let Some(genre) = self.genre {
            profile.set_genre(genre);
        }
        if let Some(progress) = self.progress {
            profile.set_progress(progress);
        }
        if let Some(inventory) = self.inventory {
            profile.set_inventory(inventory);
        }
        if let Some(location) = self.location {
            profile.set_location(location);
        }
        if let Some(story_id) = self.story_id {
            profile.set_story_id(story_id);
        }
        if let Some(created) = self.created {
            profile.set_created(created);
        }

        debug!(story_id = %profile.story_id(), progress = profile.progress(), "Merged save data");
        Ok(())
    }
}
