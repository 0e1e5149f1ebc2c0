//! SRT subtitle parsing
//!
//! Converts the line-oriented subtitle text produced by the extraction step
//! into an ordered sequence of timed entries. The parser is a single-pass
//! accumulator with two states: no entry open, or one entry open collecting
//! text lines until a blank line (or end of input) flushes it.

use tracing::debug;

use crate::error::ClipResult;
use crate::timecode::Timecode;

/// One parsed subtitle block: a time range plus its dialogue text.
///
/// Text lines are joined with a single space, and every line contributes a
/// trailing separator, so the accumulated text ends with one trailing space.
/// Phrase variants are interior substrings, so matching never depends on it,
/// and keeping it preserves parity with the extraction tool's output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitleEntry {
    pub start: Timecode,
    pub end: Timecode,
    pub text: String,
}

/// Parse SRT text into an ordered sequence of subtitle entries.
///
/// Lenient by design: index lines and anything else appearing before the
/// first timestamp line are ignored, and malformed timestamp lines (wrong
/// separator, missing arrow) are treated as plain dialogue text. The only
/// failure mode is a timestamp line whose fields are out of range, which is
/// fatal for the whole parse call.
pub fn parse_srt<'a, I>(lines: I) -> ClipResult<Vec<SubtitleEntry>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut entries = Vec::new();
    let mut current: Option<SubtitleEntry> = None;

    for line in lines {
        if line.trim().is_empty() {
            if let Some(entry) = current.take() {
                entries.push(entry);
            }
        } else if let Some((start, end)) = parse_timestamp_line(line)? {
            // A timestamp line always opens a fresh entry; an open entry
            // that never reached a blank line is dropped, not flushed.
            current = Some(SubtitleEntry {
                start,
                end,
                text: String::new(),
            });
        } else if let Some(entry) = current.as_mut() {
            entry.text.push_str(line);
            entry.text.push(' ');
        }
    }

    if let Some(entry) = current.take() {
        entries.push(entry);
    }

    debug!("Parsed {} subtitle entries", entries.len());
    Ok(entries)
}

/// Recognize a `start --> end` timestamp line in the comma notation.
///
/// Returns `Ok(None)` for lines that do not have the two-timestamp shape at
/// all (those fall through as plain text), and an error only when a line
/// that does have the shape carries an unparsable or out-of-range field.
fn parse_timestamp_line(line: &str) -> ClipResult<Option<(Timecode, Timecode)>> {
    let Some((lhs, rhs)) = line.split_once("-->") else {
        return Ok(None);
    };

    let (lhs, rhs) = (lhs.trim(), rhs.trim());
    if !has_timestamp_shape(lhs) || !has_timestamp_shape(rhs) {
        return Ok(None);
    }

    let start = Timecode::parse_srt(lhs)?;
    let end = Timecode::parse_srt(rhs)?;
    Ok(Some((start, end)))
}

/// Cheap structural check mirroring the reference pattern
/// `\d+:\d+:\d+,\d+`: three colon-separated digit groups and a comma
/// fraction. Range validation happens in the Timecode parser.
fn has_timestamp_shape(text: &str) -> bool {
    let Some((clock, fraction)) = text.split_once(',') else {
        return false;
    };
    let groups: Vec<&str> = clock.split(':').collect();
    groups.len() == 3
        && groups
            .iter()
            .all(|g| !g.is_empty() && g.bytes().all(|b| b.is_ascii_digit()))
        && !fraction.is_empty()
        && fraction.bytes().all(|b| b.is_ascii_digit())
}
