//! The player profile and its closed attribute sets.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The fixed, ordered location list. Progress indexes into this list,
/// clamped at the final entry.
pub const LOCATIONS: &[&str] = &[
    "Mars Colony Alpha",
    "Olympus Mons Research Station",
    "Valles Marineris Outpost",
    "Phobos Orbital Dock",
    "The Underground Warrens",
    "Elysium Free Settlement",
    "Polar Ice Mines",
    "Terraforming Array Prime",
];

/// Origins offered at character creation.
pub const ORIGINS: &[&str] = &[
    "Earth-born",
    "Mars-born",
    "Belt Migrant",
    "Lunar Exile",
    "Station Raised",
];

/// Minimum age accepted at the character-creation boundary.
pub const MIN_AGE: u8 = 1;

/// Maximum age accepted at the character-creation boundary.
pub const MAX_AGE: u8 = 125;

/// Protagonist gender.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum Gender {
    Male,
    Female,
    #[serde(rename = "Non-binary")]
    #[strum(serialize = "Non-binary")]
    NonBinary,
    Other,
}

/// Story genre, a closed set.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum Genre {
    #[serde(rename = "Sci-Fi")]
    #[strum(serialize = "Sci-Fi")]
    SciFi,
    Mystery,
    Romance,
    Horror,
    Comedy,
    #[serde(rename = "Political Thriller")]
    #[strum(serialize = "Political Thriller")]
    PoliticalThriller,
    Cyberpunk,
    Survival,
    #[serde(rename = "Historical Fiction")]
    #[strum(serialize = "Historical Fiction")]
    HistoricalFiction,
    Noir,
}

/// The full mutable record describing the player and game progress.
///
/// One profile exists per session. It is created with defaults, mutated by
/// character creation and by each accepted choice, and optionally overwritten
/// field-by-field by a loaded save.
///
/// # Examples
///
/// ```
/// use chronicle_story::Profile;
///
/// let profile = Profile::default();
/// assert_eq!(profile.name(), "Alex");
/// assert_eq!(*profile.progress(), 0);
/// assert!(!profile.created());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Profile {
    /// Protagonist name
    name: String,
    /// Protagonist gender
    gender: Gender,
    /// Protagonist age; bounds enforced only at the input boundary
    age: u8,
    /// Protagonist origin
    origin: String,
    /// Story genre
    genre: Genre,
    /// Number of accepted choices, strictly increasing
    progress: u32,
    /// Carried items; present for save compatibility, unused by logic
    inventory: Vec<String>,
    /// Current location, always an entry of [`LOCATIONS`]
    location: String,
    /// Opaque session identity, stable across save/load
    story_id: Uuid,
    /// False until the character-creation form is submitted
    created: bool,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Alex".to_string(),
            gender: Gender::NonBinary,
            age: 29,
            origin: ORIGINS[0].to_string(),
            genre: Genre::SciFi,
            progress: 0,
            inventory: Vec::new(),
            location: LOCATIONS[0].to_string(),
            story_id: Uuid::new_v4(),
            created: false,
        }
    }
}

impl Profile {
    /// Returns the location the fixed list assigns to a progress value,
    /// clamped at the last entry.
    pub fn location_for(progress: u32) -> &'static str {
        let index = (progress as usize).min(LOCATIONS.len() - 1);
        LOCATIONS[index]
    }

    /// Applies the character-creation form.
    ///
    /// No validation happens here; bounds on age and the closed origin list
    /// are enforced at the input-collection boundary only.
    pub fn apply_character_creation(
        &mut self,
        name: impl Into<String>,
        gender: Gender,
        age: u8,
        origin: impl Into<String>,
        genre: Genre,
    ) {
        self.name = name.into();
        self.gender = gender;
        self.age = age;
        self.origin = origin.into();
        self.genre = genre;
        self.created = true;
    }

    /// Advances progress by one step and re-derives the location.
    ///
    /// Progress and location update together; nothing else observes an
    /// intermediate state.
    pub fn advance(&mut self) {
        self.progress += 1;
        self.location = Self::location_for(self.progress).to_string();
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub(crate) fn set_gender(&mut self, gender: Gender) {
        self.gender = gender;
    }

    pub(crate) fn set_age(&mut self, age: u8) {
        self.age = age;
    }

    pub(crate) fn set_origin(&mut self, origin: String) {
        self.origin = origin;
    }

    pub(crate) fn set_genre(&mut self, genre: Genre) {
        self.genre = genre;
    }

    pub(crate) fn set_progress(&mut self, progress: u32) {
        self.progress = progress;
    }

    pub(crate) fn set_inventory(&mut self, inventory: Vec<String>) {
        self.inventory = inventory;
    }

    pub(crate) fn set_location(&mut self, location: String) {
        self.location = location;
    }

    pub(crate) fn set_story_id(&mut self, story_id: Uuid) {
        self.story_id = story_id;
    }

    pub(crate) fn set_created(&mut self, created: bool) {
        self.created = created;
    }
}
