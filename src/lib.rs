//! PhraseClip CLI Library
//!
//! Batch media clipper: extracts embedded subtitle tracks with ffmpeg,
//! parses them into timed entries, finds dialogue lines containing any of a
//! configured set of phrase variants, and trims one clip per match.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod matcher;
pub mod probe;
pub mod resolver;
pub mod subtitle;
pub mod timecode;
pub mod trim;

// Re-export commonly used types
pub use config::RunConfig;
pub use error::{ClipError, ClipResult};
pub use matcher::{find_matches, PhraseMatch};
pub use probe::VideoInfo;
pub use resolver::{resolve, ClipRange};
pub use subtitle::{parse_srt, SubtitleEntry};
pub use timecode::Timecode;
