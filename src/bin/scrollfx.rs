use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "scrollfx", version)]
struct Cli {
    /// Log pipeline events to stderr (repeat for more detail).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load and validate a page description.
    Validate(ValidateArgs),
    /// Print the scroll snapshot and layer styles at one scroll position.
    Sample(SampleArgs),
    /// Sweep the page through its scroll range and write one JSON sample per frame.
    Simulate(SimulateArgs),
    /// Write the reference landing page description.
    Landing(LandingArgs),
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input page JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Input page JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Vertical scroll position in px.
    #[arg(long, allow_hyphen_values = true)]
    scroll: f64,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Input page JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Number of frames to sample.
    #[arg(long)]
    frames: u64,

    /// Sampling rate.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// First scroll position (defaults to the start of the tracked range).
    #[arg(long, allow_hyphen_values = true)]
    from: Option<f64>,

    /// Last scroll position (defaults to the end of the tracked range).
    #[arg(long, allow_hyphen_values = true)]
    to: Option<f64>,

    /// Output JSONL path; stdout when absent.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct LandingArgs {
    /// Output page JSON path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Validate(args) => cmd_validate(args),
        Command::Sample(args) => cmd_sample(args),
        Command::Simulate(args) => cmd_simulate(args),
        Command::Landing(args) => cmd_landing(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => return,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let page = scrollfx::Page::from_path(&args.in_path)?;
    println!(
        "ok: {} sections, {} bindings, {} nav links",
        page.sections.len(),
        page.bindings.len(),
        page.nav.len()
    );
    let source =
        scrollfx::ScrollProgressSource::new(page.tracked_region, page.viewport, page.offset);
    match source.scroll_range() {
        Some((s0, s1)) => println!("scroll range: {s0}..{s1} px"),
        None => println!("scroll range: degenerate (progress stays 0)"),
    }
    Ok(())
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.scroll.is_finite(), "--scroll must be finite");
    let page = scrollfx::Page::from_path(&args.in_path)?;
    let mut mounted = page.mount()?;
    let snap = mounted.scroll_to(args.scroll);

    println!("scroll_y={} progress={:.6}", snap.scroll_y, snap.progress);
    for (name, style) in mounted.layer_styles() {
        println!("{name}: {}", style.to_css());
    }
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let page = scrollfx::Page::from_path(&args.in_path)?;
    let fps = scrollfx::Fps::new(args.fps, 1)?;
    let mut sweep = scrollfx::ScrollSweep::new(fps, args.frames);
    sweep.from = args.from;
    sweep.to = args.to;

    let stats = match &args.out {
        Some(path) => {
            let f = create_file(path)?;
            let mut sink = scrollfx::JsonLinesSink::new(BufWriter::new(f));
            let stats = scrollfx::simulate(&page, sweep, &mut sink)?;
            eprintln!("wrote {}", path.display());
            stats
        }
        None => {
            let stdout = std::io::stdout();
            let mut sink = scrollfx::JsonLinesSink::new(stdout.lock());
            scrollfx::simulate(&page, sweep, &mut sink)?
        }
    };
    eprintln!(
        "{} frames, progress {:.4} -> {:.4}",
        stats.frames, stats.first_progress, stats.last_progress
    );
    Ok(())
}

fn cmd_landing(args: LandingArgs) -> anyhow::Result<()> {
    let page = scrollfx::Page::landing()?;
    let mut f = create_file(&args.out)?;
    f.write_all(page.to_json_pretty()?.as_bytes())
        .with_context(|| format!("write page '{}'", args.out.display()))?;
    f.write_all(b"\n")?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn create_file(path: &Path) -> anyhow::Result<File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    File::create(path).with_context(|| format!("create '{}'", path.display()))
}
