/// Raw Messenger export documents.
///
/// A conversation is exported as one or more `message_N.json` parts, each
/// carrying its own participant list and message list. This module owns the
/// wire shape and file loading; structurally invalid documents are rejected
/// here, so the engine can assume well-formed parts.
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct RawParticipant {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawMessage {
    pub sender_name: String,
    pub timestamp_ms: i64,
    #[serde(default)]
    pub content: Option<String>,
    // Attachment contents are never read; the engine only consumes the
    // presence of these arrays. An empty array still marks presence.
    #[serde(default)]
    pub photos: Option<Vec<serde_json::Value>>,
    #[serde(default)]
    pub videos: Option<Vec<serde_json::Value>>,
    #[serde(default)]
    pub audio_files: Option<Vec<serde_json::Value>>,
}

/// One conversation part document. Fields beyond the participant roster and
/// message list (thread title, thread path, ...) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RawConversationPart {
    pub participants: Vec<RawParticipant>,
    pub messages: Vec<RawMessage>,
    #[serde(default)]
    pub title: Option<String>,
}

impl RawConversationPart {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read export part: {}", path.display()))?;

        let part: RawConversationPart = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON from: {}", path.display()))?;

        Ok(part)
    }
}
