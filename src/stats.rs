use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::buckets::Histogram;

/// Complete statistical summary of one conversation.
///
/// Built once per analysis run and never mutated afterwards. Every mapping
/// iterates in insertion order (roster order for per-participant maps,
/// rank order for the emoji table), so serializing the same input twice
/// yields identical output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationStatistics {
    /// Declared roster, in the first export part's order.
    pub participants: Vec<String>,
    pub number_of_messages: u64,
    /// Text messages written entirely in uppercase.
    pub number_of_caps_lock_messages: u64,
    /// Earliest message timestamp, epoch milliseconds.
    pub start_ms: i64,
    /// Latest message timestamp, epoch milliseconds.
    pub end_ms: i64,
    pub participant_message_count: IndexMap<String, u64>,
    pub participant_photo_count: IndexMap<String, u64>,
    pub participant_video_count: IndexMap<String, u64>,
    pub participant_audio_count: IndexMap<String, u64>,
    pub total_photo_count: u64,
    pub total_video_count: u64,
    pub total_audio_count: u64,
    /// Keyed 0 (Sunday) through 6 (Saturday).
    pub messages_per_weekday: Histogram<u32>,
    /// Keyed 1 through 31.
    pub messages_per_month_day: Histogram<u32>,
    /// Keyed 0 (January) through 11 (December).
    pub messages_per_month: Histogram<u32>,
    /// Keyed by 3-day window start, epoch milliseconds.
    pub messages_per_window: Histogram<i64>,
    /// Distinct emoji to occurrence count, descending, ties in
    /// first-encountered order.
    pub emoji_occurrences: IndexMap<String, u64>,
}
