/// Text repair and classification helpers.
///
/// Messenger exports from the era this tool targets were written as UTF-8,
/// then at some point decoded as Latin-1 and re-encoded, so a name like
/// "Bjørn" arrives as "BjÃ¸rn". The repair table below maps each known
/// corrupted byte pair back to the intended letter.

/// Known mojibake sequences and their intended characters.
const MOJIBAKE_REPAIRS: &[(&str, &str)] = &[
    ("\u{c3}\u{a6}", "æ"),
    ("\u{c3}\u{b8}", "ø"),
    ("\u{c3}\u{a5}", "å"),
    ("\u{c3}\u{86}", "Æ"),
    ("\u{c3}\u{98}", "Ø"),
    ("\u{c3}\u{85}", "Å"),
];

/// Repairs known mojibake sequences in a string.
///
/// Total and pure: strings without corrupted sequences pass through
/// unchanged, and repairing an already-repaired string is a no-op.
pub fn normalize(raw: &str) -> String {
    let mut fixed = raw.to_string();
    for (corrupted, intended) in MOJIBAKE_REPAIRS {
        if fixed.contains(corrupted) {
            fixed = fixed.replace(corrupted, intended);
        }
    }
    fixed
}

/// Whether a message text counts as a shout: longer than one character and
/// identical to its own uppercase form.
///
/// The length guard keeps single emoji or punctuation from being flagged.
pub fn is_shout(text: &str) -> bool {
    text.chars().count() > 1 && text.to_uppercase() == text
}
