//! Segment generation against the chat-completion collaborator.

use crate::segment::parse_segment;
use crate::{ChoiceHistory, Profile, Segment, build_prompt};
use chronicle_core::{GenerateRequest, Message, Role};
use chronicle_error::{ChronicleResult, StoryError, StoryErrorKind};
use chronicle_models::OpenAICompatibleClient;
use tracing::{debug, instrument};

/// Sampling temperature for segment generation.
pub const TEMPERATURE: f32 = 0.7;

/// Nucleus sampling parameter for segment generation.
pub const TOP_P: f32 = 0.9;

/// Maximum tokens per generated segment.
pub const MAX_TOKENS: u32 = 1500;

/// Generates story segments by prompting the remote model and parsing its
/// response.
#[derive(Debug, Clone, derive_new::new)]
pub struct StoryEngine {
    client: OpenAICompatibleClient,
}

impl StoryEngine {
    /// Generates the next segment for the given profile and history.
    ///
    /// The profile is not mutated here; progress and location advance only
    /// when the user's choice is recorded.
    ///
    /// # Errors
    ///
    /// Fails with a generation error when the remote call fails, and with
    /// `MalformedSegment` when the response carries fewer than two parseable
    /// choices. Neither failure is retried automatically.
    #[instrument(skip(self, profile, history), fields(progress = profile.progress()))]
    pub async fn generate_segment(
        &self,
        profile: &Profile,
        history: &ChoiceHistory,
    ) -> ChronicleResult<Segment> {
        let prompt = build_prompt(profile, history);
        let request = GenerateRequest {
            messages: vec![Message::new(Role::System, prompt)],
            max_tokens: Some(MAX_TOKENS),
            temperature: Some(TEMPERATURE),
            top_p: Some(TOP_P),
            model: None,
        };

        let response = self.client.generate(&request).await?;
        let segment = parse_segment(&response.content);

        debug!(
            narrative_len = segment.narrative().len(),
            choices = segment.choices().len(),
            "Parsed segment"
        );

        if !segment.is_playable() {
            return Err(StoryError::new(StoryErrorKind::MalformedSegment {
                found: segment.choices().len(),
            })
            .into());
        }

        Ok(segment)
    }
}
