use crate::compose::request::CompositionRequest;
use crate::foundation::error::{CreditsError, CreditsResult};
use std::ffi::OsString;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Options for [`FfmpegEncoder`] MP4 output.
#[derive(Clone, Debug)]
pub struct FfmpegEncoderOpts {
    /// Output MP4 file path.
    pub out_path: PathBuf,
    /// Overwrite output file if it already exists.
    pub overwrite: bool,
    /// Kill `ffmpeg` when it runs longer than this.
    pub timeout: Option<Duration>,
}

impl FfmpegEncoderOpts {
    /// Create options for outputting an MP4 to `out_path`.
    pub fn new(out_path: impl Into<PathBuf>) -> Self {
        Self {
            out_path: out_path.into(),
            overwrite: true,
            timeout: None,
        }
    }
}

/// Encodes a [`CompositionRequest`] with the system `ffmpeg`.
///
/// Both layers are written as PNG into a temporary directory that lives until `ffmpeg` exits;
/// `ffmpeg` loops them as still inputs and performs the scroll itself.
#[derive(Clone, Debug)]
pub struct FfmpegEncoder {
    opts: FfmpegEncoderOpts,
}

impl FfmpegEncoder {
    /// Create an encoder writing to `opts.out_path`.
    pub fn new(opts: FfmpegEncoderOpts) -> Self {
        Self { opts }
    }

    /// Encoder options.
    pub fn opts(&self) -> &FfmpegEncoderOpts {
        &self.opts
    }

    /// Full `ffmpeg` argument list for `req` given the PNG locations of both layers.
    pub fn command_args(
        &self,
        req: &CompositionRequest,
        patrons_png: &Path,
        header_png: &Path,
    ) -> Vec<OsString> {
        let duration = req.duration_secs.to_string();
        let overwrite = if self.opts.overwrite { "-y" } else { "-n" };
        let mut args: Vec<OsString> = vec![overwrite.into()];
        for a in ["-loglevel", "error", "-f", "lavfi", "-i"] {
            args.push(a.into());
        }
        args.push(req.background_source().into());
        for png in [patrons_png, header_png] {
            for a in ["-loop", "1", "-t", duration.as_str(), "-i"] {
                args.push(a.into());
            }
            args.push(png.into());
        }
        args.push("-filter_complex".into());
        args.push(req.filter_complex().into());
        for a in [
            "-map",
            "[out]",
            "-c:v",
            "libx264",
            "-pix_fmt",
            "yuv420p",
            "-preset",
            "fast",
            "-shortest",
        ] {
            args.push(a.into());
        }
        args.push(self.opts.out_path.clone().into());
        args
    }

    /// Render `req` to the configured MP4 path.
    #[tracing::instrument(skip(self, req), fields(out = %self.opts.out_path.display(), frames = req.frame_count()))]
    pub fn encode(&self, req: &CompositionRequest) -> CreditsResult<()> {
        ensure_parent_dir(&self.opts.out_path)?;
        if !self.opts.overwrite && self.opts.out_path.exists() {
            return Err(CreditsError::validation(format!(
                "output file '{}' already exists",
                self.opts.out_path.display()
            )));
        }
        if !is_ffmpeg_on_path() {
            return Err(CreditsError::encode(
                "ffmpeg is required for MP4 encoding, but was not found on PATH",
            ));
        }

        use anyhow::Context as _;
        let tmp = tempfile::Builder::new()
            .prefix("credits-")
            .tempdir()
            .context("create temporary directory for layer images")?;
        let patrons_png = tmp.path().join("patrons.png");
        let header_png = tmp.path().join("header.png");
        req.patrons.save_png(&patrons_png)?;
        req.header.save_png(&header_png)?;

        let args = self.command_args(req, &patrons_png, &header_png);
        tracing::debug!(filter = %req.filter_complex(), "spawning ffmpeg");

        let mut child = Command::new("ffmpeg")
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                CreditsError::encode(format!(
                    "failed to spawn ffmpeg (is it installed and on PATH?): {e}"
                ))
            })?;

        let mut stderr = child
            .stderr
            .take()
            .ok_or_else(|| CreditsError::encode("failed to open ffmpeg stderr (unexpected)"))?;
        let stderr_drain = std::thread::spawn(move || {
            let mut stderr_bytes = Vec::new();
            stderr.read_to_end(&mut stderr_bytes)?;
            Ok::<_, std::io::Error>(stderr_bytes)
        });

        let status = wait_with_timeout(&mut child, self.opts.timeout)?;
        let stderr_bytes = stderr_drain
            .join()
            .map_err(|_| CreditsError::encode("ffmpeg stderr drain thread panicked"))?
            .map_err(|e| CreditsError::encode(format!("ffmpeg stderr read failed: {e}")))?;

        match status {
            Some(status) if status.success() => {
                tracing::info!(out = %self.opts.out_path.display(), "credits video written");
                Ok(())
            }
            Some(status) => {
                let stderr = String::from_utf8_lossy(&stderr_bytes);
                Err(CreditsError::encode(format!(
                    "ffmpeg exited with status {}: {}",
                    status,
                    stderr.trim()
                )))
            }
            None => Err(CreditsError::encode(format!(
                "ffmpeg timed out after {:?} and was killed",
                self.opts.timeout.unwrap_or_default()
            ))),
        }
    }
}

/// Wait for `child`; `Ok(None)` means the timeout expired and the child was killed.
fn wait_with_timeout(
    child: &mut Child,
    timeout: Option<Duration>,
) -> CreditsResult<Option<ExitStatus>> {
    let Some(timeout) = timeout else {
        return child
            .wait()
            .map(Some)
            .map_err(|e| CreditsError::encode(format!("failed to wait for ffmpeg: {e}")));
    };

    let deadline = Instant::now() + timeout;
    loop {
        match child.try_wait() {
            Ok(Some(status)) => return Ok(Some(status)),
            Ok(None) if Instant::now() >= deadline => {
                tracing::warn!(?timeout, "ffmpeg timed out; killing");
                // The child may exit between `try_wait` and `kill`.
                let _ = child.kill();
                let _ = child.wait();
                return Ok(None);
            }
            Ok(None) => std::thread::sleep(POLL_INTERVAL),
            Err(e) => {
                return Err(CreditsError::encode(format!(
                    "failed to poll ffmpeg status: {e}"
                )));
            }
        }
    }
}

/// Ensure the parent directory of `path` exists.
pub fn ensure_parent_dir(path: &Path) -> CreditsResult<()> {
    if let Some(parent) = path.parent() {
        use anyhow::Context as _;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Return `true` when `ffmpeg` can be invoked from `PATH`.
pub fn is_ffmpeg_on_path() -> bool {
    std::process::Command::new("ffmpeg")
        .arg("-version")
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/ffmpeg.rs"]
mod tests;
