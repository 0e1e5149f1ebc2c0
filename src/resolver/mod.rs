//! Clip range resolution
//!
//! Turns phrase matches into final trim boundaries, applying the optional
//! end offset. Output order equals match order; the position in the output
//! sequence is the clip's 0-based index in the output file name.

use crate::matcher::PhraseMatch;
use crate::timecode::Timecode;

/// Final trim boundaries for one output clip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipRange {
    pub start: Timecode,
    pub end: Timecode,
}

/// Resolve matches into clip ranges, one per match.
///
/// The end offset is applied as-is, without clamping against the source
/// duration; ffmpeg stops at end of stream when the requested `-to` lies
/// past it.
pub fn resolve(matches: &[PhraseMatch], end_offset_secs: Option<f64>) -> Vec<ClipRange> {
    matches
        .iter()
        .map(|m| ClipRange {
            start: m.start,
            end: match end_offset_secs {
                Some(offset) => m.end.add_seconds(offset),
                None => m.end,
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phrase_match(start_ms: u64, end_ms: u64) -> PhraseMatch {
        PhraseMatch {
            start: Timecode::from_millis(start_ms),
            end: Timecode::from_millis(end_ms),
        }
    }

    #[test]
    fn test_no_offset_passes_range_through() {
        let ranges = resolve(&[phrase_match(5000, 7500)], None);
        assert_eq!(
            ranges,
            vec![ClipRange {
                start: Timecode::from_millis(5000),
                end: Timecode::from_millis(7500),
            }]
        );
    }

    #[test]
    fn test_offset_extends_end_only() {
        let ranges = resolve(&[phrase_match(5000, 7500)], Some(2.0));
        assert_eq!(ranges[0].start, Timecode::from_millis(5000));
        assert_eq!(ranges[0].end, Timecode::from_millis(9500));
    }

    #[test]
    fn test_fractional_offset() {
        let ranges = resolve(&[phrase_match(0, 1000)], Some(0.75));
        assert_eq!(ranges[0].end, Timecode::from_millis(1750));
    }

    #[test]
    fn test_order_and_count_preserved() {
        let matches = vec![
            phrase_match(0, 1000),
            phrase_match(2000, 3000),
            phrase_match(4000, 5000),
        ];
        let ranges = resolve(&matches, Some(1.0));
        assert_eq!(ranges.len(), matches.len());
        for (range, m) in ranges.iter().zip(&matches) {
            assert_eq!(range.start, m.start);
            assert_eq!(range.end, m.end.add_seconds(1.0));
        }
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(resolve(&[], Some(2.0)).is_empty());
        assert!(resolve(&[], None).is_empty());
    }
}
