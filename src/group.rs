/// Per-participant grouping and attribute counting.
use indexmap::IndexMap;
use tracing::warn;

use crate::dataset::{Message, Participant};

/// Messages partitioned by sender, keyed by participant name.
///
/// Iteration order is deterministic: declared roster order first, then any
/// ad-hoc senders in first-appearance order.
pub type GroupedMessages<'a> = IndexMap<String, Vec<&'a Message>>;

/// Partitions messages into per-participant buckets.
///
/// Every declared participant gets a bucket, possibly empty. A sender that
/// is not on the roster is a data inconsistency; the message is kept in an
/// ad-hoc bucket rather than dropped, and the mismatch is surfaced as a
/// warning.
pub fn group_by_sender<'a>(
    messages: &'a [Message],
    participants: &[Participant],
) -> GroupedMessages<'a> {
    let mut groups: GroupedMessages = participants
        .iter()
        .map(|participant| (participant.name.clone(), Vec::new()))
        .collect();

    for message in messages {
        if !groups.contains_key(&message.sender_name) {
            warn!(
                sender = %message.sender_name,
                "message from sender not in the declared roster; keeping it in an ad-hoc bucket"
            );
        }
        groups
            .entry(message.sender_name.clone())
            .or_default()
            .push(message);
    }

    groups
}

/// Message count per participant. Explicit zero for silent participants.
pub fn count_messages(grouped: &GroupedMessages<'_>) -> IndexMap<String, u64> {
    grouped
        .iter()
        .map(|(name, bucket)| (name.clone(), bucket.len() as u64))
        .collect()
}

/// Counts each participant's messages matching a predicate. Participants
/// with no matching messages get an explicit zero entry.
pub fn count_by_attribute(
    grouped: &GroupedMessages<'_>,
    predicate: impl Fn(&Message) -> bool,
) -> IndexMap<String, u64> {
    grouped
        .iter()
        .map(|(name, bucket)| {
            let count = bucket.iter().filter(|message| predicate(message)).count();
            (name.clone(), count as u64)
        })
        .collect()
}

/// Counts messages matching a predicate across the whole conversation,
/// ignoring grouping.
pub fn count_total(messages: &[Message], predicate: impl Fn(&Message) -> bool) -> u64 {
    messages.iter().filter(|message| predicate(message)).count() as u64
}
