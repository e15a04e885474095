use super::*;
use crate::foundation::core::{Resolution, Rgb};
use crate::render::raster::RasterImage;

fn request(duration: f64) -> CompositionRequest {
    let header = RasterImage::from_premul(1280, 2, [0u8, 0, 0, 255].repeat(1280 * 2)).unwrap();
    let patrons = RasterImage::from_premul(1280, 4, vec![0u8; 1280 * 4 * 4]).unwrap();
    CompositionRequest::new(header, patrons, Resolution::Hd720, Rgb::BLACK, duration).unwrap()
}

#[test]
fn args_follow_input_order_of_filter_graph() {
    let enc = FfmpegEncoder::new(FfmpegEncoderOpts::new("out/credits.mp4"));
    let args: Vec<String> = enc
        .command_args(&request(5.0), Path::new("p.png"), Path::new("h.png"))
        .into_iter()
        .map(|a| a.to_string_lossy().into_owned())
        .collect();

    assert_eq!(args[0], "-y");
    let inputs: Vec<&str> = args
        .iter()
        .enumerate()
        .filter(|(_, a)| *a == "-i")
        .map(|(i, _)| args[i + 1].as_str())
        .collect();
    assert_eq!(
        inputs,
        ["color=c=0x000000:s=1280x720:d=5:r=30/1", "p.png", "h.png"]
    );
    assert!(args.windows(2).any(|w| w == ["-t", "5"]));
    assert!(args.windows(2).any(|w| w == ["-preset", "fast"]));
    assert!(args.windows(2).any(|w| w == ["-pix_fmt", "yuv420p"]));
    assert!(args.iter().any(|a| a == "-shortest"));
    assert_eq!(args.last().map(String::as_str), Some("out/credits.mp4"));
}

#[test]
fn no_overwrite_uses_dash_n() {
    let mut opts = FfmpegEncoderOpts::new("x.mp4");
    opts.overwrite = false;
    let args = FfmpegEncoder::new(opts).command_args(
        &request(5.0),
        Path::new("p.png"),
        Path::new("h.png"),
    );
    assert_eq!(args[0], "-n");
}

#[test]
fn existing_output_is_kept_without_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("credits.mp4");
    std::fs::write(&out, b"keep").unwrap();
    let mut opts = FfmpegEncoderOpts::new(&out);
    opts.overwrite = false;

    let err = FfmpegEncoder::new(opts).encode(&request(5.0)).unwrap_err();
    assert!(err.to_string().contains("already exists"));
    assert_eq!(std::fs::read(&out).unwrap(), b"keep");
}

#[test]
fn ensure_parent_dir_creates_missing_directories() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("a/b/credits.mp4");
    ensure_parent_dir(&out).unwrap();
    assert!(dir.path().join("a/b").is_dir());
}

#[test]
fn encodes_mp4_when_ffmpeg_is_available() {
    if !is_ffmpeg_on_path() {
        return;
    }
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("credits.mp4");
    let mut opts = FfmpegEncoderOpts::new(&out);
    opts.timeout = Some(Duration::from_secs(120));
    FfmpegEncoder::new(opts).encode(&request(1.0)).unwrap();
    assert!(std::fs::metadata(&out).unwrap().len() > 0);
}
