use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use sha2::Digest as _;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "credits", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the credits MP4 (requires `ffmpeg` on PATH).
    Render(RenderArgs),
    /// Write the header and patron layers (and optional preview frames) as PNGs.
    Stills(StillsArgs),
    /// Print how every font family key resolves.
    Fonts(FontsArgs),
}

#[derive(Args, Debug)]
struct SourceArgs {
    /// Input request JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Replace the request's patrons with a text file, one name per line.
    #[arg(long, conflicts_with = "cache")]
    patrons: Option<PathBuf>,

    /// Replace the request's patrons with a patron cache file.
    #[arg(long)]
    cache: Option<PathBuf>,

    /// Store the final patron list as a cache file.
    #[arg(long)]
    write_cache: Option<PathBuf>,

    /// Sort patrons alphabetically, ignoring case.
    #[arg(long, default_value_t = false)]
    sort: bool,

    /// Directory holding the bundled font files.
    #[arg(long, default_value = "fonts")]
    fonts: PathBuf,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Output MP4 path.
    #[arg(long)]
    out: PathBuf,

    /// Overwrite output if it already exists.
    #[arg(long, default_value_t = true)]
    overwrite: bool,

    /// Kill `ffmpeg` after this many seconds.
    #[arg(long)]
    timeout_secs: Option<u64>,
}

#[derive(Args, Debug)]
struct StillsArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Output directory.
    #[arg(long)]
    out_dir: PathBuf,

    /// Also composite the full frame at these times (seconds).
    #[arg(long = "at")]
    at_secs: Vec<f64>,
}

#[derive(Args, Debug)]
struct FontsArgs {
    /// Directory holding the bundled font files.
    #[arg(long, default_value = "fonts")]
    fonts: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Stills(args) => cmd_stills(args),
        Command::Fonts(args) => cmd_fonts(args),
    }
}

fn load_request(source: &SourceArgs) -> anyhow::Result<credits_roll::CreditsRequest> {
    let mut req = credits_roll::CreditsRequest::from_path(&source.in_path)?;
    if let Some(path) = &source.patrons {
        req.patrons = credits_roll::patrons::source::read_name_list(path)?;
    } else if let Some(path) = &source.cache {
        req.patrons = credits_roll::PatronCache::read(path)?.patrons;
    }
    if source.sort {
        credits_roll::sort_case_insensitive(&mut req.patrons);
    }
    if let Some(path) = &source.write_cache {
        credits_roll::PatronCache::new(req.patrons.clone()).write(path)?;
    }
    Ok(req)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let req = load_request(&args.source)?;
    let fonts = credits_roll::FontRegistry::new(&args.source.fonts);
    let output = credits_roll::render_credits(&req, &fonts)?;

    let mut opts = credits_roll::FfmpegEncoderOpts::new(&args.out);
    opts.overwrite = args.overwrite;
    opts.timeout = args.timeout_secs.map(Duration::from_secs);
    credits_roll::FfmpegEncoder::new(opts).encode(&output.composition)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_stills(args: StillsArgs) -> anyhow::Result<()> {
    let req = load_request(&args.source)?;
    let fonts = credits_roll::FontRegistry::new(&args.source.fonts);
    let output = credits_roll::render_credits(&req, &fonts)?;
    let comp = &output.composition;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;
    write_png(&comp.header, &args.out_dir.join("header.png"))?;
    write_png(&comp.patrons, &args.out_dir.join("patrons.png"))?;
    for t in &args.at_secs {
        let frame = comp.render_frame(*t)?;
        write_png(&frame, &args.out_dir.join(format!("frame_{t:.2}s.png")))?;
    }

    let plan = &comp.plan;
    eprintln!("header font:   {}", output.header_font);
    eprintln!("patron font:   {}", output.patron_font);
    eprintln!("header height: {}", comp.header_height());
    eprintln!("patron height: {}", comp.patron_height());
    eprintln!("rows:          {}", output.grid_layout.rows.len());
    eprintln!("total scroll:  {} px", plan.total_scroll_px);
    eprintln!("speed:         {:.3} px/s", plan.speed_px_per_s);
    eprintln!("overlay y:     {}", plan.overlay_y_expr());
    Ok(())
}

fn write_png(img: &credits_roll::RasterImage, path: &Path) -> anyhow::Result<()> {
    img.save_png(path)?;
    eprintln!("wrote {}", path.display());
    Ok(())
}

fn cmd_fonts(args: FontsArgs) -> anyhow::Result<()> {
    let fonts = credits_roll::FontRegistry::new(&args.fonts);
    eprintln!("fonts (dir {}):", fonts.font_dir().display());
    for family in credits_roll::FontFamily::ALL {
        for bold in [false, true] {
            let resolved = fonts.resolve(*family, bold);
            let weight = if bold { "bold" } else { "regular" };
            eprintln!("  {family} ({weight}):");
            eprintln!("    font_source: {}", resolved.source);
            if let credits_roll::FontFace::Outline(font) = &resolved.face {
                eprintln!("    family:      {}", font.family_name());
                eprintln!("    sha256:      {}", sha256_hex(font.bytes()));
            }
        }
    }
    Ok(())
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    out
}
