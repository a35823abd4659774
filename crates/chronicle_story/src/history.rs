//! Append-only record of selected choices.

use serde::{Deserialize, Serialize};

/// The number of trailing choices used as generation context.
pub const CONTEXT_WINDOW: usize = 3;

/// Ordered, append-only sequence of previously selected choice texts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChoiceHistory {
    entries: Vec<String>,
}

impl ChoiceHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a selected choice.
    pub fn push(&mut self, choice: impl Into<String>) {
        self.entries.push(choice.into());
    }

    /// Number of recorded choices.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether any choice has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All recorded choices, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// The last up-to-[`CONTEXT_WINDOW`] choices, oldest-to-newest.
    pub fn recent(&self) -> &[String] {
        let start = self.entries.len().saturating_sub(CONTEXT_WINDOW);
        &self.entries[start..]
    }
}
