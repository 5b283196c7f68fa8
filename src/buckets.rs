/// Temporal histograms over message timestamps.
///
/// Calendar buckets (weekday, day-of-month, month) are derived from the
/// local representation of the timestamp, matching how people read their
/// own conversation history. The 3-day window bucket is pure epoch
/// arithmetic and independent of calendar boundaries.
use chrono::{DateTime, Datelike, Local, TimeZone};
use indexmap::IndexMap;
use tracing::warn;

use crate::dataset::Message;
use crate::group::GroupedMessages;

/// Bucket counts per participant. Sparse: a key is present only if at least
/// one of the participant's messages falls into it.
pub type Histogram<K> = IndexMap<String, IndexMap<K, u64>>;

/// Width of the fixed aggregation window: three days in milliseconds.
pub const WINDOW_MS: i64 = 3 * 24 * 60 * 60 * 1000;

fn local_datetime(ts_millis: i64) -> Option<DateTime<Local>> {
    Local.timestamp_millis_opt(ts_millis).single()
}

fn fold_buckets<K>(
    grouped: &GroupedMessages<'_>,
    key_of: impl Fn(&Message) -> Option<K>,
) -> Histogram<K>
where
    K: std::hash::Hash + Eq + Copy,
{
    grouped
        .iter()
        .map(|(name, bucket)| {
            let mut counts: IndexMap<K, u64> = IndexMap::new();
            for message in bucket {
                match key_of(message) {
                    Some(key) => *counts.entry(key).or_insert(0) += 1,
                    None => {
                        warn!(ts = message.timestamp_ms, "timestamp out of representable range");
                    }
                }
            }
            (name.clone(), counts)
        })
        .collect()
}

/// Messages per calendar weekday, keyed 0 (Sunday) through 6 (Saturday).
pub fn per_weekday(grouped: &GroupedMessages<'_>) -> Histogram<u32> {
    fold_buckets(grouped, |message| {
        local_datetime(message.timestamp_ms).map(|dt| dt.weekday().num_days_from_sunday())
    })
}

/// Messages per day of the month, keyed 1 through 31.
pub fn per_month_day(grouped: &GroupedMessages<'_>) -> Histogram<u32> {
    fold_buckets(grouped, |message| {
        local_datetime(message.timestamp_ms).map(|dt| dt.day())
    })
}

/// Messages per month of the year, keyed 0 (January) through 11 (December).
pub fn per_month(grouped: &GroupedMessages<'_>) -> Histogram<u32> {
    fold_buckets(grouped, |message| {
        local_datetime(message.timestamp_ms).map(|dt| dt.month0())
    })
}

/// Messages per fixed 3-day window, keyed by the window's floor-aligned
/// start in epoch milliseconds.
pub fn per_window(grouped: &GroupedMessages<'_>) -> Histogram<i64> {
    fold_buckets(grouped, |message| {
        Some(message.timestamp_ms.div_euclid(WINDOW_MS) * WINDOW_MS)
    })
}
