use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use holemask::JsonConfig as _;

#[derive(Parser, Debug)]
#[command(name = "holemask", version)]
struct Cli {
    /// Increase log verbosity (`-v` debug, `-vv` trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rasterize a static hole mask as a PNG.
    Mask(MaskArgs),
    /// Run the guided fill animation and write the final mask as a PNG.
    Fill(FillArgs),
    /// Replay pointer strokes onto a draw board and write the canvas as a PNG.
    Paint(PaintArgs),
}

#[derive(Parser, Debug)]
struct MaskArgs {
    /// Input mask config JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct FillArgs {
    /// Input writer config JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path for the final mask.
    #[arg(long)]
    out: PathBuf,

    /// Ticks per second.
    #[arg(long, default_value_t = 30.0)]
    fps: f64,

    /// Also write every uploaded frame into this directory.
    #[arg(long)]
    frames_dir: Option<PathBuf>,

    /// Stop after this many ticks.
    #[arg(long)]
    max_ticks: Option<u64>,
}

#[derive(Parser, Debug)]
struct PaintArgs {
    /// Input draw board config JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Strokes JSON: `{"rect_size": [w, h], "points": [[x, y], ...]}` in centered local space.
    #[arg(long)]
    strokes: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Debug, serde::Deserialize)]
struct Strokes {
    rect_size: [f64; 2],
    #[serde(default)]
    points: Vec<[f64; 2]>,
}

struct DiscardSink;

impl holemask::SurfaceSink for DiscardSink {
    fn upload(&mut self, _frame: &holemask::FrameRGBA) -> holemask::HoleMaskResult<()> {
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Mask(args) => cmd_mask(args),
        Command::Fill(args) => cmd_fill(args),
        Command::Paint(args) => cmd_paint(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_mask(args: MaskArgs) -> anyhow::Result<()> {
    let config = holemask::MaskConfig::from_path(&args.in_path)?;
    let mut mask = holemask::HoleMask::new(config)?;
    mask.initialize();

    holemask::save_png(&mask.frame(), &args.out)
        .with_context(|| format!("write mask '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_fill(args: FillArgs) -> anyhow::Result<()> {
    anyhow::ensure!(
        args.fps.is_finite() && args.fps > 0.0,
        "--fps must be a positive number"
    );

    let config = holemask::WriterConfig::from_path(&args.in_path)?;
    let mut writer = holemask::HoleWriter::new(config)?;
    writer.initialize();

    let dt = 1.0 / args.fps;
    let stats = match &args.frames_dir {
        Some(dir) => {
            let mut sink = holemask::PngSink::new(dir, "fill");
            holemask::drive_fill(&mut writer, dt, args.max_ticks, &mut sink)?
        }
        None => holemask::drive_fill(&mut writer, dt, args.max_ticks, &mut DiscardSink)?,
    };

    holemask::save_png(&writer.frame(), &args.out)
        .with_context(|| format!("write mask '{}'", args.out.display()))?;

    if let Some(dir) = &args.frames_dir {
        eprintln!("wrote {} frames to {}", stats.uploads, dir.display());
    }
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_paint(args: PaintArgs) -> anyhow::Result<()> {
    let config = holemask::DrawBoardConfig::from_path(&args.in_path)?;
    let f = std::fs::File::open(&args.strokes)
        .with_context(|| format!("open strokes '{}'", args.strokes.display()))?;
    let strokes: Strokes = serde_json::from_reader(std::io::BufReader::new(f))
        .with_context(|| format!("parse strokes '{}'", args.strokes.display()))?;

    let mut board = holemask::DrawBoard::new(config)?;
    board.initialize();

    let rect = holemask::Vec2::new(strokes.rect_size[0], strokes.rect_size[1]);
    let mut written = 0;
    for [x, y] in strokes.points {
        written += board.pointer_down(holemask::Point::new(x, y), rect);
    }
    tracing::debug!(cells = written, "strokes replayed");

    holemask::save_png(&board.frame(), &args.out)
        .with_context(|| format!("write canvas '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
