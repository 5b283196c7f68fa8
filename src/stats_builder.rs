/// Statistics assembly.
///
/// Orchestrates the whole pipeline: merge the export parts, group messages
/// by sender once, then derive every counter and histogram from that shared
/// grouping. The computation is pure and synchronous; callers that overlap
/// it with file reading materialize all parts first and invoke `analyze`
/// once.
use std::time::Instant;
use tracing::info;

use crate::buckets;
use crate::dataset::ConversationDataset;
use crate::emoji::rank_emoji;
use crate::error::{AnalysisError, Result};
use crate::export::RawConversationPart;
use crate::group::{count_by_attribute, count_messages, count_total, group_by_sender};
use crate::stats::ConversationStatistics;
use crate::text::is_shout;

/// Analyzes a conversation split across one or more export parts.
///
/// Fails with an empty-dataset error when no parts are given or the merged
/// parts carry no messages; the temporal extent is undefined in either
/// case.
pub fn analyze(parts: &[RawConversationPart]) -> Result<ConversationStatistics> {
    let started = Instant::now();

    let dataset = ConversationDataset::merge(parts)?;
    if dataset.messages.is_empty() {
        return Err(AnalysisError::NoMessages);
    }

    let grouped = group_by_sender(&dataset.messages, &dataset.participants);

    let participant_message_count = count_messages(&grouped);
    let participant_photo_count = count_by_attribute(&grouped, |m| m.has_photo);
    let participant_video_count = count_by_attribute(&grouped, |m| m.has_video);
    let participant_audio_count = count_by_attribute(&grouped, |m| m.has_audio);

    let total_photo_count = count_total(&dataset.messages, |m| m.has_photo);
    let total_video_count = count_total(&dataset.messages, |m| m.has_video);
    let total_audio_count = count_total(&dataset.messages, |m| m.has_audio);

    let messages_per_weekday = buckets::per_weekday(&grouped);
    let messages_per_month_day = buckets::per_month_day(&grouped);
    let messages_per_month = buckets::per_month(&grouped);
    let messages_per_window = buckets::per_window(&grouped);

    let (start_ms, end_ms) = dataset
        .messages
        .iter()
        .fold((i64::MAX, i64::MIN), |(lo, hi), message| {
            (lo.min(message.timestamp_ms), hi.max(message.timestamp_ms))
        });

    let texts: Vec<&str> = dataset
        .messages
        .iter()
        .filter_map(|message| message.text.as_deref())
        .collect();

    let number_of_caps_lock_messages =
        texts.iter().filter(|text| is_shout(text)).count() as u64;

    let emoji_occurrences = rank_emoji(&texts.join(" "));

    let stats = ConversationStatistics {
        participants: dataset
            .participants
            .iter()
            .map(|p| p.name.clone())
            .collect(),
        number_of_messages: dataset.messages.len() as u64,
        number_of_caps_lock_messages,
        start_ms,
        end_ms,
        participant_message_count,
        participant_photo_count,
        participant_video_count,
        participant_audio_count,
        total_photo_count,
        total_video_count,
        total_audio_count,
        messages_per_weekday,
        messages_per_month_day,
        messages_per_month,
        messages_per_window,
        emoji_occurrences,
    };

    info!(
        messages = stats.number_of_messages,
        participants = stats.participants.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "conversation analyzed"
    );

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buckets::WINDOW_MS;
    use crate::export::{RawMessage, RawParticipant};

    const DAY_MS: i64 = 24 * 60 * 60 * 1000;

    fn text_message(sender: &str, ts: i64, content: &str) -> RawMessage {
        RawMessage {
            sender_name: sender.to_string(),
            timestamp_ms: ts,
            content: Some(content.to_string()),
            photos: None,
            videos: None,
            audio_files: None,
        }
    }

    fn part(names: &[&str], messages: Vec<RawMessage>) -> RawConversationPart {
        RawConversationPart {
            participants: names
                .iter()
                .map(|name| RawParticipant {
                    name: name.to_string(),
                })
                .collect(),
            messages,
            title: None,
        }
    }

    fn anna_and_bob() -> RawConversationPart {
        part(
            &["Anna", "Bob"],
            vec![
                text_message("Anna", 0, "HELLO"),
                text_message("Bob", DAY_MS, "hi 😀"),
                text_message("Anna", 3 * DAY_MS, "😀 again 😀"),
            ],
        )
    }

    #[test]
    fn test_analyze_scenario() {
        let stats = analyze(&[anna_and_bob()]).unwrap();

        assert_eq!(stats.participants, vec!["Anna", "Bob"]);
        assert_eq!(stats.number_of_messages, 3);
        assert_eq!(stats.number_of_caps_lock_messages, 1);
        assert_eq!(stats.start_ms, 0);
        assert_eq!(stats.end_ms, 3 * DAY_MS);

        assert_eq!(stats.emoji_occurrences.len(), 1);
        assert_eq!(stats.emoji_occurrences["😀"], 3);

        // Anna's two messages are three days apart: two weekday buckets,
        // one message each.
        let anna_weekdays = &stats.messages_per_weekday["Anna"];
        assert_eq!(anna_weekdays.len(), 2);
        assert!(anna_weekdays.values().all(|&count| count == 1));

        // Bob's message (day 1) and Anna's second (day 3) land in
        // different 3-day windows: floor(86400000 / 259200000) = 0 but
        // floor(259200000 / 259200000) = 1.
        assert_eq!(stats.messages_per_window["Bob"][&0], 1);
        assert_eq!(stats.messages_per_window["Anna"][&WINDOW_MS], 1);
    }

    #[test]
    fn test_message_counts_sum_to_total() {
        let stats = analyze(&[anna_and_bob()]).unwrap();
        let sum: u64 = stats.participant_message_count.values().sum();
        assert_eq!(sum, stats.number_of_messages);
    }

    #[test]
    fn test_histogram_sums_match_per_participant_counts() {
        let stats = analyze(&[anna_and_bob()]).unwrap();

        for (name, &expected) in &stats.participant_message_count {
            for histogram_sum in [
                stats.messages_per_weekday[name].values().sum::<u64>(),
                stats.messages_per_month_day[name].values().sum::<u64>(),
                stats.messages_per_month[name].values().sum::<u64>(),
                stats.messages_per_window[name].values().sum::<u64>(),
            ] {
                assert_eq!(histogram_sum, expected);
            }
        }
    }

    #[test]
    fn test_single_message_extent_and_buckets() {
        let stats = analyze(&[part(
            &["Anna"],
            vec![text_message("Anna", 1_600_000_000_000, "hei")],
        )])
        .unwrap();

        assert_eq!(stats.start_ms, stats.end_ms);
        assert_eq!(stats.messages_per_weekday["Anna"].len(), 1);
        assert_eq!(stats.messages_per_month_day["Anna"].len(), 1);
        assert_eq!(stats.messages_per_month["Anna"].len(), 1);
        assert_eq!(stats.messages_per_window["Anna"].len(), 1);
    }

    #[test]
    fn test_silent_participant_has_explicit_zero_counts() {
        let stats = analyze(&[part(
            &["Anna", "Quiet"],
            vec![text_message("Anna", 0, "hei")],
        )])
        .unwrap();

        assert_eq!(stats.participant_message_count["Quiet"], 0);
        assert_eq!(stats.participant_photo_count["Quiet"], 0);
        assert_eq!(stats.participant_video_count["Quiet"], 0);
        assert_eq!(stats.participant_audio_count["Quiet"], 0);
        assert!(stats.messages_per_weekday["Quiet"].is_empty());
    }

    #[test]
    fn test_attachment_counts() {
        let mut with_photo = text_message("Anna", 0, "look");
        with_photo.photos = Some(vec![]);
        let with_audio = RawMessage {
            sender_name: "Bob".to_string(),
            timestamp_ms: 1,
            content: None,
            photos: None,
            videos: Some(vec![]),
            audio_files: Some(vec![]),
        };

        let stats = analyze(&[part(&["Anna", "Bob"], vec![with_photo, with_audio])]).unwrap();

        assert_eq!(stats.participant_photo_count["Anna"], 1);
        assert_eq!(stats.participant_photo_count["Bob"], 0);
        assert_eq!(stats.total_photo_count, 1);
        assert_eq!(stats.total_video_count, 1);
        assert_eq!(stats.total_audio_count, 1);
    }

    #[test]
    fn test_messages_without_text_are_excluded_from_shout_detection() {
        let shout = text_message("Anna", 0, "HELLO");
        let photo_only = RawMessage {
            sender_name: "Anna".to_string(),
            timestamp_ms: 1,
            content: None,
            photos: Some(vec![]),
            videos: None,
            audio_files: None,
        };

        let stats = analyze(&[part(&["Anna"], vec![shout, photo_only])]).unwrap();
        assert_eq!(stats.number_of_caps_lock_messages, 1);
    }

    #[test]
    fn test_unknown_sender_is_counted_not_dropped() {
        let stats = analyze(&[part(
            &["Anna"],
            vec![
                text_message("Anna", 0, "hei"),
                text_message("Mallory", 1, "intruding"),
            ],
        )])
        .unwrap();

        // The ad-hoc sender shows up in the counts but not the roster.
        assert_eq!(stats.participants, vec!["Anna"]);
        assert_eq!(stats.participant_message_count["Mallory"], 1);
        let sum: u64 = stats.participant_message_count.values().sum();
        assert_eq!(sum, stats.number_of_messages);
    }

    #[test]
    fn test_empty_inputs_fail() {
        assert!(matches!(analyze(&[]), Err(AnalysisError::NoParts)));

        let empty_part = part(&["Anna"], vec![]);
        assert!(matches!(
            analyze(&[empty_part]),
            Err(AnalysisError::NoMessages)
        ));
    }

    #[test]
    fn test_analyze_is_deterministic() {
        let parts = [anna_and_bob()];
        let first = serde_json::to_string(&analyze(&parts).unwrap()).unwrap();
        let second = serde_json::to_string(&analyze(&parts).unwrap()).unwrap();
        assert_eq!(first, second);
    }
}
