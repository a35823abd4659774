//! The session state machine.
//!
//! States and commands are explicit, and every transition yields a rendering
//! directive, so the core logic stays decoupled from whatever frontend drives
//! it. Generation IO happens outside the machine: a driver sees
//! [`RenderDirective::Generating`], performs the remote call, and feeds the
//! result back as [`Command::SegmentReady`] or [`Command::GenerationFailed`].

use crate::{Gender, Genre, Segment, Session};
use tracing::{debug, warn};

/// Discrete session states.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// Collecting the character-creation form
    CharacterCreation,
    /// A generation request is outstanding
    AwaitingGeneration,
    /// A segment and its choices are on display
    DisplayingSegment,
    /// An error message is on display; the prior state is resumable
    DisplayingError {
        /// User-facing message
        message: String,
        /// State to resume once the user retries
        resume: Box<SessionState>,
    },
}

/// Discrete commands driving the session.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Submit the character-creation form
    SubmitCharacter {
        name: String,
        gender: Gender,
        age: u8,
        origin: String,
        genre: Genre,
    },
    /// Request (or retry) generation of the next segment
    RequestSegment,
    /// A generated segment arrived from the collaborator
    SegmentReady(Segment),
    /// The remote call failed
    GenerationFailed(String),
    /// Select one of the displayed choices by index
    SelectChoice(usize),
    /// Export the profile as a JSON save
    SaveGame,
    /// Merge an uploaded save into the profile
    LoadSave(Vec<u8>),
}

/// What the frontend should render after a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderDirective {
    /// Show the character-creation form
    CharacterForm,
    /// Show a progress indicator and perform the remote call
    Generating,
    /// Show a chapter heading, narrative text, and choice buttons
    Segment {
        chapter: u32,
        narrative: String,
        choices: Vec<String>,
    },
    /// Show a user-facing error message
    Error(String),
    /// Offer the serialized save for download
    Saved { file_name: String, json: String },
    /// Show a status message
    Message(String),
}

/// The session state machine: a session plus its current state.
#[derive(Debug, derive_getters::Getters)]
pub struct Machine {
    /// The session being driven
    session: Session,
    /// Current state
    state: SessionState,
}

impl Default for Machine {
    fn default() -> Self {
        Self::new(Session::new())
    }
}

impl Machine {
    /// Creates a machine for the given session, starting at character
    /// creation (or awaiting generation when the profile is already created).
    pub fn new(session: Session) -> Self {
        let state = if *session.profile().created() {
            SessionState::AwaitingGeneration
        } else {
            SessionState::CharacterCreation
        };
        Self { session, state }
    }

    /// Applies a command, moving to the next state and returning what to
    /// render.
    ///
    /// Errors never escape: every failure becomes a `DisplayingError` state
    /// carrying the prior state, and the session data stays as it was.
    pub fn handle(&mut self, command: Command) -> RenderDirective {
        let state = std::mem::replace(&mut self.state, SessionState::CharacterCreation);
        let (next, directive) = self.transition(state, command);
        debug!(state = ?next, "Transitioned");
        self.state = next;
        directive
    }

    fn transition(
        &mut self,
        state: SessionState,
        command: Command,
    ) -> (SessionState, RenderDirective) {
        match (state, command) {
            (
                SessionState::CharacterCreation,
                Command::SubmitCharacter {
                    name,
                    gender,
                    age,
                    origin,
                    genre,
                },
            ) => {
                self.session
                    .apply_character_creation(name, gender, age, origin, genre);
                (SessionState::AwaitingGeneration, RenderDirective::Generating)
            }
            (SessionState::AwaitingGeneration, Command::SegmentReady(segment)) => {
                let directive = RenderDirective::Segment {
                    chapter: self.session.chapter(),
                    narrative: segment.narrative().clone(),
                    choices: segment.choices().clone(),
                };
                self.session.set_segment(segment);
                (SessionState::DisplayingSegment, directive)
            }
            (SessionState::AwaitingGeneration, Command::GenerationFailed(message)) => {
                warn!(error = %message, "Generation failed");
                (
                    SessionState::DisplayingError {
                        message: message.clone(),
                        resume: Box::new(SessionState::AwaitingGeneration),
                    },
                    RenderDirective::Error(message),
                )
            }
            (SessionState::DisplayingSegment, Command::SelectChoice(index)) => {
                match self.session.record_choice(index) {
                    Ok(_) => (SessionState::AwaitingGeneration, RenderDirective::Generating),
                    Err(e) => {
                        let message = e.to_string();
                        (
                            SessionState::DisplayingError {
                                message: message.clone(),
                                resume: Box::new(SessionState::DisplayingSegment),
                            },
                            RenderDirective::Error(message),
                        )
                    }
                }
            }
            (SessionState::DisplayingError { resume, .. }, Command::RequestSegment) => {
                // Resuming to a still-displayed segment re-renders it; any
                // other prior state means a fresh generation attempt.
                if matches!(*resume, SessionState::DisplayingSegment) {
                    if let Some(segment) = self.session.segment().clone() {
                        return (
                            SessionState::DisplayingSegment,
                            RenderDirective::Segment {
                                chapter: self.session.chapter(),
                                narrative: segment.narrative().clone(),
                                choices: segment.choices().clone(),
                            },
                        );
                    }
                }
                (SessionState::AwaitingGeneration, RenderDirective::Generating)
            }
            (state, Command::SaveGame) => {
                let directive = match self.session.save_json() {
                    Ok(json) => RenderDirective::Saved {
                        file_name: self.session.save_file_name(),
                        json,
                    },
                    Err(e) => RenderDirective::Error(e.to_string()),
                };
                (state, directive)
            }
            (state, Command::LoadSave(bytes)) => match self.session.load_save(&bytes) {
                Ok(()) => (
                    SessionState::AwaitingGeneration,
                    RenderDirective::Message("Game loaded successfully!".to_string()),
                ),
                Err(e) => {
                    let message = e.to_string();
                    warn!(error = %message, "Save load failed");
                    (
                        SessionState::DisplayingError {
                            message: message.clone(),
                            resume: Box::new(state),
                        },
                        RenderDirective::Error(message),
                    )
                }
            },
            (SessionState::CharacterCreation, _) => (
                SessionState::CharacterCreation,
                RenderDirective::CharacterForm,
            ),
            (state, command) => {
                warn!(state = ?state, command = ?command, "Command ignored in current state");
                let message = "Nothing to do for that action right now".to_string();
                (state, RenderDirective::Error(message))
            }
        }
    }
}
