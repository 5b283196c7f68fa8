/// Emoji frequency ranking.
use indexmap::IndexMap;
use regex::Regex;
use std::sync::LazyLock;

/// Codepoints whose default rendering is an emoji glyph. Text-default
/// symbols (e.g. `☺`, or `❤` without a variation selector) are not part of
/// this class and are deliberately not counted.
static EMOJI_PRESENTATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{Emoji_Presentation}").expect("emoji pattern is valid"));

/// Ranks the distinct emoji in `text` by descending occurrence count.
///
/// Distinct emoji are collected in first-seen order, then each one is
/// counted by an independent re-scan of the text, keeping the match and
/// count steps separately verifiable. The sort is stable, so emoji with
/// equal counts keep their first-seen relative order; downstream rendering
/// depends on that determinism.
pub fn rank_emoji(text: &str) -> IndexMap<String, u64> {
    let mut occurrences: IndexMap<String, u64> = IndexMap::new();
    for matched in EMOJI_PRESENTATION.find_iter(text) {
        occurrences.entry(matched.as_str().to_string()).or_insert(0);
    }

    for (emoji, count) in occurrences.iter_mut() {
        *count = text.matches(emoji.as_str()).count() as u64;
    }

    let mut ranked: Vec<(String, u64)> = occurrences.into_iter().collect();
    ranked.sort_by_key(|(_, count)| std::cmp::Reverse(*count));
    ranked.into_iter().collect()
}
