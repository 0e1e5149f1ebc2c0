//! Timestamp parsing, formatting, and arithmetic
//!
//! Subtitle files carry `HH:MM:SS,mmm` timestamps while ffmpeg's diagnostic
//! output uses `HH:MM:SS.mm`. Both notations parse into the same
//! millisecond-resolution value, and trim boundaries are formatted back out
//! as `HH:MM:SS.mmm`.

use std::fmt;

use crate::error::{ClipError, ClipResult};

/// A non-negative instant or duration with millisecond resolution.
///
/// Stored as an integer count of milliseconds so that formatting and the
/// round-trip through parse stay exact even when offsets arrive as
/// floating-point seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timecode {
    millis: u64,
}

impl Timecode {
    /// Create a Timecode from a total millisecond count
    pub fn from_millis(millis: u64) -> Self {
        Self { millis }
    }

    /// Create a Timecode from clock components
    pub fn from_components(hours: u64, minutes: u64, seconds: u64, millis: u64) -> Self {
        Self {
            millis: ((hours * 60 + minutes) * 60 + seconds) * 1000 + millis,
        }
    }

    /// Total milliseconds
    pub fn as_millis(&self) -> u64 {
        self.millis
    }

    /// Total seconds as a float (for logging and fps math)
    pub fn as_secs_f64(&self) -> f64 {
        self.millis as f64 / 1000.0
    }

    /// Parse a timestamp in either recognized notation.
    ///
    /// Accepts `HH:MM:SS,mmm` (SRT style) and `HH:MM:SS.mm` (probe style).
    /// The hour field may be any width; the fraction may be shorter or
    /// longer than three digits and is scaled to milliseconds.
    pub fn parse(text: &str) -> ClipResult<Self> {
        Self::parse_with(text, &[',', '.'])
    }

    /// Parse a timestamp in the SRT comma notation only.
    ///
    /// The subtitle parser uses this for timestamp-line detection: a line
    /// with a dot-separated fraction must not count as a timestamp line.
    pub fn parse_srt(text: &str) -> ClipResult<Self> {
        Self::parse_with(text, &[','])
    }

    fn parse_with(text: &str, separators: &[char]) -> ClipResult<Self> {
        let invalid = || ClipError::InvalidTimestamp {
            value: text.to_string(),
        };

        let text = text.trim();
        let mut clock = text.splitn(3, ':');
        let hours = clock.next().ok_or_else(invalid)?;
        let minutes = clock.next().ok_or_else(invalid)?;
        let rest = clock.next().ok_or_else(invalid)?;

        let (seconds, fraction) = rest
            .split_once(|c| separators.contains(&c))
            .ok_or_else(invalid)?;

        let hours: u64 = parse_field(hours).ok_or_else(invalid)?;
        let minutes: u64 = parse_field(minutes).ok_or_else(invalid)?;
        let seconds: u64 = parse_field(seconds).ok_or_else(invalid)?;
        let millis = parse_fraction_millis(fraction).ok_or_else(invalid)?;

        if minutes >= 60 || seconds >= 60 || millis >= 1000 {
            return Err(invalid());
        }

        Ok(Self::from_components(hours, minutes, seconds, millis))
    }

    /// Return a new Timecode with the given (possibly fractional) seconds
    /// added. Negative offsets saturate at zero.
    pub fn add_seconds(&self, seconds: f64) -> Self {
        let delta = (seconds * 1000.0).round() as i64;
        let millis = (self.millis as i64 + delta).max(0) as u64;
        Self { millis }
    }

    fn components(&self) -> (u64, u64, u64, u64) {
        let hours = self.millis / 3_600_000;
        let minutes = (self.millis / 60_000) % 60;
        let seconds = (self.millis / 1000) % 60;
        let millis = self.millis % 1000;
        (hours, minutes, seconds, millis)
    }
}

/// Format as `HH:MM:SS.mmm`, the notation trim requests are built with.
impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (hours, minutes, seconds, millis) = self.components();
        write!(f, "{:02}:{:02}:{:02}.{:03}", hours, minutes, seconds, millis)
    }
}

fn parse_field(text: &str) -> Option<u64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// Scale a fraction field of any digit width to milliseconds, so `05`
/// (ffmpeg centiseconds) reads as 50ms and `500` as 500ms.
fn parse_fraction_millis(text: &str) -> Option<u64> {
    parse_field(text)?;
    let mut digits: String = text.to_string();
    while digits.len() < 3 {
        digits.push('0');
    }
    digits[..3].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_srt_notation() {
        let tc = Timecode::parse("00:00:05,000").unwrap();
        assert_eq!(tc.as_millis(), 5000);

        let tc = Timecode::parse("01:02:03,456").unwrap();
        assert_eq!(tc, Timecode::from_components(1, 2, 3, 456));
    }

    #[test]
    fn test_parse_probe_notation() {
        let tc = Timecode::parse("00:23:40.05").unwrap();
        assert_eq!(tc.as_millis(), 23 * 60_000 + 40_000 + 50);
    }

    #[test]
    fn test_parse_variable_width_fields() {
        // ffmpeg-generated SRT output is zero-padded, but the reference
        // pattern accepts any digit width
        let tc = Timecode::parse("0:0:5,1").unwrap();
        assert_eq!(tc.as_millis(), 5100);
    }

    #[test]
    fn test_parse_rejects_out_of_range_fields() {
        assert!(Timecode::parse("00:60:00,000").is_err());
        assert!(Timecode::parse("00:00:60,000").is_err());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Timecode::parse("not a time").is_err());
        assert!(Timecode::parse("00:00:05").is_err());
        assert!(Timecode::parse("05,000").is_err());
        assert!(Timecode::parse("00:00:-5,000").is_err());
        assert!(Timecode::parse("").is_err());
    }

    #[test]
    fn test_parse_srt_rejects_dot_fraction() {
        assert!(Timecode::parse_srt("00:00:05.000").is_err());
        assert!(Timecode::parse_srt("00:00:05,000").is_ok());
    }

    #[test]
    fn test_format() {
        let tc = Timecode::from_components(1, 2, 3, 456);
        assert_eq!(tc.to_string(), "01:02:03.456");

        assert_eq!(Timecode::from_millis(0).to_string(), "00:00:00.000");
    }

    #[test]
    fn test_round_trip() {
        for millis in [0, 1, 999, 1000, 59_999, 3_600_000, 86_399_999] {
            let tc = Timecode::from_millis(millis);
            assert_eq!(Timecode::parse(&tc.to_string()).unwrap(), tc);
        }
    }

    #[test]
    fn test_add_seconds() {
        let tc = Timecode::from_millis(7500);
        assert_eq!(tc.add_seconds(2.0).as_millis(), 9500);
        assert_eq!(tc.add_seconds(0.25).as_millis(), 7750);
        assert_eq!(tc.add_seconds(0.0), tc);
    }

    #[test]
    fn test_add_seconds_saturates_at_zero() {
        let tc = Timecode::from_millis(500);
        assert_eq!(tc.add_seconds(-2.0).as_millis(), 0);
    }
}
