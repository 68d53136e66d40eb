use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "unveil", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate one instant of a page and emit the frame as JSON.
    Sample(SampleArgs),
    /// Replay a scroll script and emit one JSON frame per line.
    Timeline(TimelineArgs),
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Input page JSON.
    #[arg(long)]
    page: PathBuf,

    /// Instant to evaluate, in milliseconds since mount.
    #[arg(long)]
    at_ms: u64,

    /// Scroll offset at that instant; omit to exercise the no-provider path.
    #[arg(long)]
    scroll: Option<f64>,

    /// Viewport as WIDTHxHEIGHT; omit to exercise the fail-open path.
    #[arg(long)]
    viewport: Option<String>,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct TimelineArgs {
    /// Input page JSON.
    #[arg(long)]
    page: PathBuf,

    /// Scroll script JSON.
    #[arg(long)]
    script: PathBuf,

    /// Output path (JSON Lines); stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Sample(args) => cmd_sample(args),
        Command::Timeline(args) => cmd_timeline(args),
    }
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let page = load_page(&args.page)?;
    let viewport = args.viewport.as_deref().map(parse_viewport).transpose()?;

    let session = unveil::PageSession::new(
        page,
        unveil::SessionOpts {
            viewport,
            scroll: args.scroll,
            mounted_at: unveil::TimeMs(0),
        },
    )?;
    let frame = session.sample(unveil::TimeMs(args.at_ms))?;
    let json = serde_json::to_string_pretty(&frame).context("serialize frame")?;

    write_output(args.out.as_deref(), &json)
}

fn cmd_timeline(args: TimelineArgs) -> anyhow::Result<()> {
    let page = load_page(&args.page)?;
    let script_json = std::fs::read_to_string(&args.script)
        .with_context(|| format!("read script '{}'", args.script.display()))?;
    let script: unveil::ScrollScript =
        serde_json::from_str(&script_json).context("parse scroll script")?;

    let frames = unveil::replay(page, &script)?;
    let mut lines = String::new();
    for frame in &frames {
        lines.push_str(&serde_json::to_string(frame).context("serialize frame")?);
        lines.push('\n');
    }

    write_output(args.out.as_deref(), &lines)?;
    eprintln!("replayed {} frames", frames.len());
    Ok(())
}

fn load_page(path: &Path) -> anyhow::Result<unveil::Page> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("read page '{}'", path.display()))?;
    Ok(unveil::Page::from_json_str(&json)?)
}

fn parse_viewport(s: &str) -> anyhow::Result<unveil::Viewport> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| anyhow::anyhow!("viewport must be WIDTHxHEIGHT, got '{s}'"))?;
    let width: f64 = w
        .trim()
        .parse()
        .with_context(|| format!("viewport width '{w}'"))?;
    let height: f64 = h
        .trim()
        .parse()
        .with_context(|| format!("viewport height '{h}'"))?;
    Ok(unveil::Viewport::new(width, height)?)
}

fn write_output(out: Option<&Path>, contents: &str) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(path, contents)
                .with_context(|| format!("write '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => print!("{contents}"),
    }
    Ok(())
}
