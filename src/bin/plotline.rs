use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};

use plotline::{
    BoundaryPolicy, Canvas, ChartLayout, CsvFileSource, DomainPolicy, Event, InMemorySurface,
    JsonDirSurface, LoaderOpts, Margins, SessionOpts, SlideshowSession, Strictness, fuel_economy_story,
    load_dataset,
};

#[derive(Parser, Debug)]
#[command(name = "plotline", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compile one scene of the fuel-economy story into a JSON frame.
    Frame(FrameArgs),
    /// Walk every scene in order, writing one JSON frame per scene.
    Play(PlayArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input CSV dataset.
    #[arg(long)]
    data: PathBuf,

    /// Scene index (0-based).
    #[arg(long, default_value_t = 0)]
    scene: usize,

    /// Output JSON path.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Parser, Debug)]
struct PlayArgs {
    /// Input CSV dataset.
    #[arg(long)]
    data: PathBuf,

    /// Output directory for frame-NNN.json files.
    #[arg(long)]
    out_dir: PathBuf,

    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Args, Debug)]
struct CommonArgs {
    /// Keep rows whose cylinder count is missing or non-positive.
    #[arg(long, default_value_t = false)]
    lenient: bool,

    /// Boundary policy at the ends of the scene sequence.
    #[arg(long, value_enum, default_value_t = BoundaryArg::Wrap)]
    boundary: BoundaryArg,

    /// Axis domain policy.
    #[arg(long, value_enum, default_value_t = DomainArg::Tight)]
    domain: DomainArg,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BoundaryArg {
    Wrap,
    Clamp,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DomainArg {
    Tight,
    Zero,
}

impl From<BoundaryArg> for BoundaryPolicy {
    fn from(arg: BoundaryArg) -> Self {
        match arg {
            BoundaryArg::Wrap => BoundaryPolicy::Wrap,
            BoundaryArg::Clamp => BoundaryPolicy::Clamp,
        }
    }
}

impl From<DomainArg> for DomainPolicy {
    fn from(arg: DomainArg) -> Self {
        match arg {
            DomainArg::Tight => DomainPolicy::Tight,
            DomainArg::Zero => DomainPolicy::ZeroAnchored { headroom: 0.05 },
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Play(args) => cmd_play(args),
    }
}

fn build_session(data: &Path, common: &CommonArgs) -> anyhow::Result<SlideshowSession> {
    let loader_opts = LoaderOpts {
        strictness: if common.lenient {
            Strictness::MpgOnly
        } else {
            Strictness::RequireCylinders
        },
        ..LoaderOpts::default()
    };
    let locator = data.to_string_lossy();
    let loaded = load_dataset(&CsvFileSource, locator.as_ref(), &loader_opts);

    let catalog = fuel_economy_story()?;
    let layout = ChartLayout::new(
        Canvas {
            width: 960,
            height: 500,
        },
        Margins::default(),
    )?;
    let session_opts = SessionOpts {
        boundary: common.boundary.into(),
        domain: common.domain.into(),
    };
    let mut session = SlideshowSession::new(catalog, layout, session_opts)?;
    session.submit(Event::DataLoaded(loaded));
    Ok(session)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let mut session = build_session(&args.data, &args.common)?;
    let scene_count = session.catalog().len();
    if args.scene >= scene_count {
        anyhow::bail!("scene {} out of range for a story of {scene_count}", args.scene);
    }
    for _ in 0..args.scene {
        session.submit(Event::Advance);
    }
    let mut surface = InMemorySurface::new();
    session.pump(&mut surface)?;

    let frame = session.current_frame()?;
    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(&frame)?;
    std::fs::write(&args.out, json).with_context(|| format!("write '{}'", args.out.display()))?;
    println!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_play(args: PlayArgs) -> anyhow::Result<()> {
    let mut session = build_session(&args.data, &args.common)?;
    let mut surface = JsonDirSurface::new(&args.out_dir)?;

    // One frame for the load outcome, then one per remaining scene.
    for _ in 1..session.catalog().len() {
        session.submit(Event::Advance);
    }
    session.pump(&mut surface)?;

    println!(
        "wrote {} frames to {}",
        surface.frames_written(),
        args.out_dir.display()
    );
    Ok(())
}
