//! Story logic for the Chronicle narrative engine.
//!
//! This crate holds everything between the frontend and the model client:
//! the profile store, choice history, prompt builder, segment parser, the
//! session state machine, and the save/load codec.

mod engine;
mod history;
mod machine;
mod profile;
mod prompt;
mod save;
mod segment;
mod session;

pub use engine::{MAX_TOKENS, StoryEngine, TEMPERATURE, TOP_P};
pub use history::{CONTEXT_WINDOW, ChoiceHistory};
pub use machine::{Command, Machine, RenderDirective, SessionState};
pub use profile::{Gender, Genre, LOCATIONS, MAX_AGE, MIN_AGE, ORIGINS, Profile};
pub use prompt::{NEW_STORY_CONTEXT, build_prompt, context_string};
pub use save::{ProfilePatch, deserialize_patch, save_file_name, serialize_profile};
pub use segment::{MAX_CHOICES, MIN_CHOICES, Segment, parse_segment};
pub use session::Session;
