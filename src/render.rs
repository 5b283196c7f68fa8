/// Markdown report rendering.
///
/// A read-only consumer of `ConversationStatistics`; nothing here feeds
/// back into the engine.
use anyhow::Result;

use crate::stats::ConversationStatistics;
use crate::timefmt::format_date;

const DAY_MS: i64 = 24 * 60 * 60 * 1000;
const TOP_EMOJI: usize = 5;

const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Render conversation statistics to Markdown.
pub fn render(stats: &ConversationStatistics) -> Result<String> {
    let mut output = String::new();

    render_summary(&mut output, stats);
    render_emoji(&mut output, stats);
    render_participants(&mut output, stats);
    render_activity(&mut output, stats);

    Ok(output)
}

fn render_summary(output: &mut String, stats: &ConversationStatistics) {
    output.push_str("# Conversation statistics\n\n");

    let total_days = (stats.end_ms - stats.start_ms) / DAY_MS;
    output.push_str(&format!(
        "The conversation between {} spans **{}** messages in the **{}** days between **{}** and **{}**",
        join_names(&stats.participants),
        stats.number_of_messages,
        total_days,
        format_date(stats.start_ms),
        format_date(stats.end_ms),
    ));

    if total_days > 0 {
        let per_day = stats.number_of_messages / total_days as u64;
        if per_day > 0 {
            output.push_str(&format!(", about **{}** messages per day", per_day));
        }
    }
    output.push_str(".\n\n");

    output.push_str(&format!(
        "**{}** of these messages were written in all caps.\n\n",
        stats.number_of_caps_lock_messages
    ));

    output.push_str(&format!(
        "In total, **{}** photos, **{}** videos and **{}** audio clips were sent.\n\n",
        stats.total_photo_count, stats.total_video_count, stats.total_audio_count
    ));
}

fn render_emoji(output: &mut String, stats: &ConversationStatistics) {
    if stats.emoji_occurrences.is_empty() {
        return;
    }

    output.push_str("## Most used emoji\n\n");
    for (emoji, count) in stats.emoji_occurrences.iter().take(TOP_EMOJI) {
        output.push_str(&format!("- {} : {}\n", emoji, count));
    }
    output.push('\n');
}

fn render_participants(output: &mut String, stats: &ConversationStatistics) {
    output.push_str("## Participants\n\n");
    output.push_str("| Participant | Messages | Photos | Videos | Audio |\n");
    output.push_str("|---|---|---|---|---|\n");

    for (name, count) in &stats.participant_message_count {
        output.push_str(&format!(
            "| {} | {} | {} | {} | {} |\n",
            name,
            count,
            stats.participant_photo_count.get(name).copied().unwrap_or(0),
            stats.participant_video_count.get(name).copied().unwrap_or(0),
            stats.participant_audio_count.get(name).copied().unwrap_or(0),
        ));
    }
    output.push('\n');
}

fn render_activity(output: &mut String, stats: &ConversationStatistics) {
    output.push_str("## Activity by weekday\n\n");
    for day in 0..7u32 {
        let total: u64 = stats
            .messages_per_weekday
            .values()
            .filter_map(|buckets| buckets.get(&day))
            .sum();
        if total > 0 {
            output.push_str(&format!("- {}: {}\n", DAY_NAMES[day as usize], total));
        }
    }
    output.push('\n');

    output.push_str("## Activity by month\n\n");
    for month in 0..12u32 {
        let total: u64 = stats
            .messages_per_month
            .values()
            .filter_map(|buckets| buckets.get(&month))
            .sum();
        if total > 0 {
            output.push_str(&format!("- {}: {}\n", MONTH_NAMES[month as usize], total));
        }
    }
    output.push('\n');
}

fn join_names(names: &[String]) -> String {
    match names.len() {
        0 => "(nobody)".to_string(),
        1 => names[0].clone(),
        _ => format!(
            "{} and {}",
            names[..names.len() - 1].join(", "),
            names[names.len() - 1]
        ),
    }
}
