use chrono::{Local, TimeZone};

/// Format a millisecond timestamp as a local calendar date, or return a
/// placeholder on error.
pub fn format_date(ts_millis: i64) -> String {
    match Local.timestamp_millis_opt(ts_millis) {
        chrono::LocalResult::Single(datetime) => datetime.format("%B %-d, %Y").to_string(),
        _ => "invalid timestamp".to_string(),
    }
}

/// Format a millisecond timestamp with time of day, for log output.
pub fn format_datetime(ts_millis: i64) -> String {
    match Local.timestamp_millis_opt(ts_millis) {
        chrono::LocalResult::Single(datetime) => {
            datetime.format("%Y-%m-%d %H:%M:%S").to_string()
        }
        _ => "invalid timestamp".to_string(),
    }
}
