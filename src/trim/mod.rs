//! Clip trimming via ffmpeg
//!
//! One ffmpeg invocation per resolved clip range. The video is re-timed to
//! the source frame rate and audio timestamps are reset so every clip starts
//! at zero.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::info;

use crate::error::{ClipError, ClipResult};
use crate::probe::VideoInfo;
use crate::resolver::ClipRange;

/// Build the output path for clip `index` of `info`:
/// `({stem})_{label}_{index}.mp4` under `output_dir`.
pub fn clip_output_path(
    output_dir: &Path,
    info: &VideoInfo,
    label: &str,
    index: usize,
) -> PathBuf {
    let stem = info
        .path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| info.name.clone());
    output_dir.join(format!("({})_{}_{}.mp4", stem, label, index))
}

/// Trim one clip range out of the source video
pub fn trim_video(info: &VideoInfo, range: &ClipRange, output_path: &Path) -> ClipResult<()> {
    info!(
        "[{}] Started trimming video to output path {:?}",
        info.name, output_path
    );

    let output = Command::new("ffmpeg")
        .arg("-i")
        .arg(&info.path)
        .args(["-ss", &range.start.to_string()])
        .args(["-to", &range.end.to_string()])
        .args(["-vf", &format!("fps={}", info.fps)])
        .args(["-af", "asetpts=PTS-STARTPTS"])
        .arg("-y")
        .arg(output_path)
        .output()
        .map_err(|e| ClipError::TrimError {
            message: format!("failed to run ffmpeg: {}", e),
        })?;

    if !output.status.success() {
        return Err(ClipError::TrimError {
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

    info!("[{}] Finished trimming video", info.name);
    Ok(())
}
