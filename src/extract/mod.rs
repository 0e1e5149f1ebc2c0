//! Subtitle track extraction via ffmpeg
//!
//! Converts a file's embedded subtitle stream to SRT text by writing it to
//! a temporary file and reading it back. The temp file lives in the output
//! directory (same filesystem as the final clips) and is removed when the
//! handle drops.

use std::fs;
use std::path::Path;
use std::process::Command;

use tracing::info;

use crate::error::{ClipError, ClipResult};
use crate::probe::VideoInfo;

/// Extract the embedded subtitle track of `info` as SRT text
pub fn extract_subtitles(info: &VideoInfo, work_dir: &Path) -> ClipResult<String> {
    info!("[{}] Started extracting subtitles", info.name);

    let temp = tempfile::Builder::new()
        .prefix("phraseclip-")
        .suffix(".srt")
        .tempfile_in(work_dir)?;

    let output = Command::new("ffmpeg")
        .arg("-i")
        .arg(&info.path)
        .args(["-c:s", "srt", "-y"])
        .arg(temp.path())
        .output()
        .map_err(|e| ClipError::ExtractionError {
            message: format!("failed to run ffmpeg: {}", e),
        })?;

    if !output.status.success() {
        return Err(ClipError::ExtractionError {
            message: format!(
                "[{}] ffmpeg exited with {}: {}",
                info.name,
                output.status,
                String::from_utf8_lossy(&output.stderr)
                    .lines()
                    .last()
                    .unwrap_or_default()
            ),
        });
    }

    let text = fs::read_to_string(temp.path())?;
    info!("[{}] Finished extracting subtitles", info.name);
    Ok(text)
}
