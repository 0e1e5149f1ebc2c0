//! Media probing via ffmpeg diagnostic output
//!
//! Runs `ffmpeg -i <file>` with no output target, which makes ffmpeg print
//! the stream layout to stderr and exit. The duration and frame rate are
//! scraped out of that text; the scraping itself is a pure function so it
//! can be tested against captured ffmpeg output.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::info;

use crate::error::{ClipError, ClipResult};
use crate::timecode::Timecode;

const DURATION_MARKER: &str = "Duration: ";
const FPS_MARKER: &str = " fps,";

/// Metadata for one source video file, created once per file and consumed
/// by every downstream step.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoInfo {
    pub path: PathBuf,
    pub name: String,
    pub duration: Timecode,
    pub fps: f64,
}

/// Probe a video file for its duration and frame rate
pub fn probe_video(path: &Path) -> ClipResult<VideoInfo> {
    info!("Getting information for video in path {:?}", path);

    let output = Command::new("ffmpeg")
        .arg("-i")
        .arg(path)
        .output()
        .map_err(|e| ClipError::ProbeError {
            message: format!("failed to run ffmpeg: {}", e),
        })?;

    // ffmpeg exits non-zero when given no output file; the stream banner on
    // stderr is still complete, so only the text matters here.
    let stderr = String::from_utf8_lossy(&output.stderr);
    let (duration, fps) = parse_probe_output(&stderr)?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(VideoInfo {
        path: path.to_path_buf(),
        name,
        duration,
        fps,
    })
}

/// Extract (duration, fps) from ffmpeg's stderr banner.
///
/// The duration is the text between `Duration: ` and the next comma, e.g.
/// `Duration: 00:23:40.05, start: ...`. The frame rate is the space-delimited
/// token ending at ` fps,`, e.g. `..., 25.08 fps, 25 tbr, ...`.
pub fn parse_probe_output(text: &str) -> ClipResult<(Timecode, f64)> {
    let duration_start = text
        .find(DURATION_MARKER)
        .map(|i| i + DURATION_MARKER.len())
        .ok_or_else(|| ClipError::ProbeError {
            message: "no duration marker in ffmpeg output".to_string(),
        })?;
    let duration_end =
        text[duration_start..]
            .find(',')
            .map(|i| duration_start + i)
            .ok_or_else(|| ClipError::ProbeError {
                message: "unterminated duration field in ffmpeg output".to_string(),
            })?;
    let duration = Timecode::parse(text[duration_start..duration_end].trim())?;

    let fps_end = text.find(FPS_MARKER).ok_or_else(|| ClipError::ProbeError {
        message: "no fps marker in ffmpeg output".to_string(),
    })?;
    let fps_start = text[..fps_end].rfind(' ').map(|i| i + 1).unwrap_or(0);
    let fps: f64 = text[fps_start..fps_end]
        .parse()
        .map_err(|_| ClipError::ProbeError {
            message: format!("unparsable fps value: {}", &text[fps_start..fps_end]),
        })?;

    if fps <= 0.0 {
        return Err(ClipError::ProbeError {
            message: format!("non-positive fps value: {}", fps),
        });
    }

    Ok((duration, fps))
}
