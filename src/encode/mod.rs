/// MP4 output through the system `ffmpeg`.
pub mod ffmpeg;
