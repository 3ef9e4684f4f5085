//! Conversation history and the context block injected into modification prompts.
//!
//! The history is owned by the caller and round-tripped on every turn. The
//! domain only ever reads the most recent entries to anchor the model to prior
//! intent without re-sending earlier documents.

use serde::{Deserialize, Serialize};

/// Number of most recent entries rendered into the context block.
pub const CONTEXT_WINDOW: usize = 5;

/// Maximum number of entries a caller may send with a modification request.
pub const MAX_HISTORY_ENTRIES: usize = 10;

/// Context block used when no prior turns exist.
pub const FIRST_TURN_CONTEXT: &str = "This is the first modification of the landing page.";

/// Kind of turn recorded in the conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// The turn that produced the first document.
    InitialGeneration,
    /// A conversational edit of an existing document.
    Modification,
}

impl EntryKind {
    /// Human label used in the context block.
    pub fn label(&self) -> &'static str {
        match self {
            EntryKind::InitialGeneration => "Initial generation",
            EntryKind::Modification => "Modification",
        }
    }
}

/// One turn of a landing page conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationEntry {
    /// Unique, monotonic per conversation.
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    #[serde(rename = "userInput")]
    pub user_input: String,
    /// ISO-8601 timestamp as produced by the client.
    pub timestamp: String,
    #[serde(rename = "result", default, skip_serializing_if = "Option::is_none")]
    pub result_document: Option<String>,
    #[serde(
        rename = "previousHTML",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub previous_document: Option<String>,
}

impl ConversationEntry {
    /// Creates an entry without attached documents.
    pub fn new(
        id: i64,
        kind: EntryKind,
        user_input: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            id,
            kind,
            user_input: user_input.into(),
            timestamp: timestamp.into(),
            result_document: None,
            previous_document: None,
        }
    }
}

/// Renders the recent history as a compact, numbered context block.
///
/// Only the last [`CONTEXT_WINDOW`] entries are rendered, oldest first, one
/// line per entry. User input is embedded verbatim.
pub fn build_context(history: &[ConversationEntry]) -> String {
    if history.is_empty() {
        return FIRST_TURN_CONTEXT.to_string();
    }

    let start = history.len().saturating_sub(CONTEXT_WINDOW);

    history[start..]
        .iter()
        .enumerate()
        .map(|(i, entry)| format!("{}. {}: {}", i + 1, entry.kind.label(), entry.user_input))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history(len: usize) -> Vec<ConversationEntry> {
        (1..=len)
            .map(|i| {
                let kind = if i == 1 {
                    EntryKind::InitialGeneration
                } else {
                    EntryKind::Modification
                };
                ConversationEntry::new(i as i64, kind, format!("turn {}", i), "2025-01-01T00:00:00Z")
            })
            .collect()
    }

    #[test]
    fn empty_history_returns_first_turn_sentinel() {
        assert_eq!(build_context(&[]), FIRST_TURN_CONTEXT);
    }

    #[test]
    fn short_history_renders_every_entry() {
        let context = build_context(&history(2));

        assert_eq!(
            context,
            "1. Initial generation: turn 1\n2. Modification: turn 2"
        );
    }

    #[test]
    fn long_history_renders_last_five_in_order() {
        let context = build_context(&history(12));
        let lines: Vec<&str> = context.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "1. Modification: turn 8");
        assert_eq!(lines[4], "5. Modification: turn 12");
    }

    #[test]
    fn user_input_is_not_truncated() {
        let long_input = "x".repeat(2_000);
        let entries = vec![ConversationEntry::new(
            1,
            EntryKind::Modification,
            long_input.clone(),
            "2025-01-01T00:00:00Z",
        )];

        assert!(build_context(&entries).ends_with(&long_input));
    }

    #[test]
    fn entry_deserializes_from_client_wire_format() {
        let json = r#"{
            "id": 3,
            "type": "initial_generation",
            "userInput": "A bakery page",
            "timestamp": "2025-01-01T10:00:00.000Z",
            "result": "<html></html>"
        }"#;

        let entry: ConversationEntry = serde_json::from_str(json).unwrap();

        assert_eq!(entry.id, 3);
        assert_eq!(entry.kind, EntryKind::InitialGeneration);
        assert_eq!(entry.user_input, "A bakery page");
        assert_eq!(entry.result_document.as_deref(), Some("<html></html>"));
        assert!(entry.previous_document.is_none());
    }

    #[test]
    fn entry_kind_serializes_snake_case() {
        let json = serde_json::to_string(&EntryKind::InitialGeneration).unwrap();
        assert_eq!(json, "\"initial_generation\"");
    }
}
