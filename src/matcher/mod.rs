//! Phrase matching over parsed subtitle entries

use tracing::debug;

use crate::subtitle::SubtitleEntry;
use crate::timecode::Timecode;

/// Spelling variants of the target character call-out, as they appear in
/// fan-sub dialogue. Checked in listed order.
pub const TOSHINO_VARIANTS: &[&str] = &[
    "Toshino Kyouko",
    "Toshino Kyoko",
    "Toshinou Kyouko",
    "Toshinou Kyoko",
];

/// Spelling variants of the speaker tag the clips are keyed on
pub const AYANO_VARIANTS: &[&str] = &["Sugiura Ayano", "Sugiura Ayanou"];

/// The time range of one subtitle entry that contained a phrase variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhraseMatch {
    pub start: Timecode,
    pub end: Timecode,
}

/// Scan entries for the given phrase variants, in entry order.
///
/// Variants are tested in listed order and matching is case-sensitive exact
/// substring. An entry contributes at most one match: the first variant
/// found wins and the rest are not checked for that entry.
pub fn find_matches<S: AsRef<str>>(entries: &[SubtitleEntry], variants: &[S]) -> Vec<PhraseMatch> {
    let mut matches = Vec::new();

    for entry in entries {
        if variants
            .iter()
            .any(|variant| entry.text.contains(variant.as_ref()))
        {
            matches.push(PhraseMatch {
                start: entry.start,
                end: entry.end,
            });
        }
    }

    debug!("Found {} matching entries", matches.len());
    matches
}
