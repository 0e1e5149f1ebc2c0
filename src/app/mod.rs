//! Batch pipeline orchestration
//!
//! Walks the input directory, then runs probe → extract → parse → match →
//! resolve → trim for each video file. A file that fails any step is logged
//! and skipped; the run continues with the remaining files.

use std::path::{Path, PathBuf};

use tracing::{error, info, warn};
use walkdir::WalkDir;

use crate::config::RunConfig;
use crate::error::{ClipError, ClipResult};
use crate::extract::extract_subtitles;
use crate::matcher::find_matches;
use crate::probe::{probe_video, VideoInfo};
use crate::resolver::{resolve, ClipRange};
use crate::subtitle::parse_srt;
use crate::trim::{clip_output_path, trim_video};

/// The per-directory clipping pipeline
pub struct Pipeline {
    config: RunConfig,
}

/// Outcome of one processed file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileReport {
    pub matches: usize,
    pub clips_written: usize,
}

impl Pipeline {
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    /// Run the full pipeline: one trimmed clip per phrase match, written to
    /// `output_dir`. Returns the total number of clips written.
    pub fn run(&self, input_dir: &Path, output_dir: &Path) -> ClipResult<usize> {
        validate_directory(input_dir)?;
        validate_directory(output_dir)?;

        let videos = self.collect_videos(input_dir)?;
        info!("Found {} video files in {:?}", videos.len(), input_dir);

        let mut total_clips = 0;
        for video in &videos {
            match self.process_file(video, output_dir) {
                Ok(report) => total_clips += report.clips_written,
                Err(e) => error!("Skipping {:?}: {}", video, e),
            }
        }

        Ok(total_clips)
    }

    /// Dry run: report matches without trimming anything
    pub fn scan(&self, input_dir: &Path) -> ClipResult<usize> {
        validate_directory(input_dir)?;

        let videos = self.collect_videos(input_dir)?;
        info!("Found {} video files in {:?}", videos.len(), input_dir);

        let mut total_matches = 0;
        for video in &videos {
            match self.scan_file(video) {
                Ok(count) => total_matches += count,
                Err(e) => error!("Skipping {:?}: {}", video, e),
            }
        }

        Ok(total_matches)
    }

    /// Non-recursive directory listing filtered by configured extensions,
    /// sorted lexicographically so clip numbering is stable across runs.
    fn collect_videos(&self, input_dir: &Path) -> ClipResult<Vec<PathBuf>> {
        let mut videos: Vec<PathBuf> = WalkDir::new(input_dir)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(|path| self.has_video_extension(path))
            .collect();
        videos.sort();
        Ok(videos)
    }

    fn has_video_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                self.config
                    .extensions
                    .iter()
                    .any(|allowed| allowed.eq_ignore_ascii_case(ext))
            })
            .unwrap_or(false)
    }

    fn process_file(&self, video: &Path, output_dir: &Path) -> ClipResult<FileReport> {
        let (info, ranges) = self.match_file(video, output_dir)?;

        if ranges.is_empty() {
            info!("[{}] No matching lines in this file", info.name);
            return Ok(FileReport {
                matches: 0,
                clips_written: 0,
            });
        }

        let mut clips_written = 0;
        for (index, range) in ranges.iter().enumerate() {
            let output_path = clip_output_path(output_dir, &info, &self.config.label, index);
            trim_video(&info, range, &output_path)?;
            clips_written += 1;
        }

        Ok(FileReport {
            matches: ranges.len(),
            clips_written,
        })
    }

    fn scan_file(&self, video: &Path) -> ClipResult<usize> {
        // Temp SRT goes next to the source when only scanning
        let work_dir = video.parent().unwrap_or_else(|| Path::new("."));
        let (info, ranges) = self.match_file(video, work_dir)?;

        if ranges.is_empty() {
            info!("[{}] No matching lines in this file", info.name);
        }
        for (index, range) in ranges.iter().enumerate() {
            println!("{}\t{}\t{} --> {}", info.name, index, range.start, range.end);
        }

        Ok(ranges.len())
    }

    /// Shared front half of the pipeline: probe, extract, parse, match,
    /// resolve. Returns the file's metadata and its resolved clip ranges.
    fn match_file(&self, video: &Path, work_dir: &Path) -> ClipResult<(VideoInfo, Vec<ClipRange>)> {
        let info = probe_video(video)?;
        info!(
            "File Name: {}, Video Duration: {}, FPS: {}",
            info.name, info.duration, info.fps
        );

        let srt_text = extract_subtitles(&info, work_dir)?;
        if srt_text.trim().is_empty() {
            warn!("[{}] Extracted subtitle track is empty", info.name);
        }

        let entries = parse_srt(srt_text.lines())?;
        info!(
            "[{}] Finished parsing subtitles. Final count is {}",
            info.name,
            entries.len()
        );

        let matches = find_matches(&entries, &self.config.phrases);
        info!(
            "[{}] Finished searching. Final count is {}",
            info.name,
            matches.len()
        );

        let ranges = resolve(&matches, self.config.end_offset_secs);
        Ok((info, ranges))
    }
}

fn validate_directory(path: &Path) -> ClipResult<()> {
    if !path.exists() {
        return Err(ClipError::InputPathNotFound {
            path: path.display().to_string(),
        });
    }
    if !path.is_dir() {
        return Err(ClipError::NotADirectory {
            path: path.display().to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn pipeline() -> Pipeline {
        Pipeline::new(RunConfig::default())
    }

    #[test]
    fn test_validate_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(validate_directory(dir.path()).is_ok());
        assert!(matches!(
            validate_directory(&dir.path().join("missing")),
            Err(ClipError::InputPathNotFound { .. })
        ));

        let file = dir.path().join("a.mp4");
        fs::write(&file, b"").unwrap();
        assert!(matches!(
            validate_directory(&file),
            Err(ClipError::NotADirectory { .. })
        ));
    }

    #[test]
    fn test_collect_videos_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.mkv", "a.mp4", "notes.txt", "c.MP4"] {
            fs::write(dir.path().join(name), b"").unwrap();
        }
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub/d.mp4"), b"").unwrap();

        let videos = pipeline().collect_videos(dir.path()).unwrap();
        let names: Vec<_> = videos
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        // Nested files excluded, extensions matched case-insensitively
        assert_eq!(names, vec!["a.mp4", "b.mkv", "c.MP4"]);
    }
}
