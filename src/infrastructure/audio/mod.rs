mod ffmpeg_extractor;

pub use ffmpeg_extractor::{DEFAULT_FFMPEG_BINARY, FfmpegAudioExtractor, check_ffmpeg_binary};
