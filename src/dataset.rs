/// Merged engine data model.
///
/// The Messenger export splits one conversation across parts; this module
/// folds them into a single roster and a single ordered message sequence,
/// which every downstream counter and bucketizer consumes.
use crate::error::{AnalysisError, Result};
use crate::export::{RawConversationPart, RawMessage};
use crate::text::normalize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub sender_name: String,
    pub timestamp_ms: i64,
    pub text: Option<String>,
    pub has_photo: bool,
    pub has_video: bool,
    pub has_audio: bool,
}

impl Message {
    fn from_raw(raw: &RawMessage) -> Self {
        Message {
            sender_name: normalize(&raw.sender_name),
            timestamp_ms: raw.timestamp_ms,
            text: raw.content.clone(),
            has_photo: raw.photos.is_some(),
            has_video: raw.videos.is_some(),
            has_audio: raw.audio_files.is_some(),
        }
    }
}

/// One logical conversation: the declared roster and every message, in
/// export order.
#[derive(Debug, Clone)]
pub struct ConversationDataset {
    /// Roster in the first part's declared order.
    pub participants: Vec<Participant>,
    /// Concatenation of all parts' messages, in input order.
    pub messages: Vec<Message>,
}

impl ConversationDataset {
    /// Merges export parts into one dataset.
    ///
    /// The roster is taken from the first part only; a conversation's
    /// identity does not change across export files, so later parts repeat
    /// the same list. Participant and sender names are passed through the
    /// mojibake repair before any grouping keys off them.
    pub fn merge(parts: &[RawConversationPart]) -> Result<Self> {
        let first = parts.first().ok_or(AnalysisError::NoParts)?;

        let participants = first
            .participants
            .iter()
            .map(|p| Participant {
                name: normalize(&p.name),
            })
            .collect();

        let messages = parts
            .iter()
            .flat_map(|part| part.messages.iter())
            .map(Message::from_raw)
            .collect();

        Ok(ConversationDataset {
            participants,
            messages,
        })
    }
}
