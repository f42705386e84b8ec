use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use podstats::{Chart, ChartConfig, ChartKind, InputEvent};
use podstats::{stats, storage, viz};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "podstats",
    version,
    about = "Chart podcast episode metrics: scales, trends, zoom and SVG output"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one chart to an SVG file.
    Render(RenderArgs),
    /// Print (or save) the chart frame as JSON.
    Frame(FrameArgs),
    /// Print per-metric summary statistics.
    Stats(StatsArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ChartArg {
    /// Episode duration vs. completion rate (scatter, zoomable, trend)
    DurationCompletion,
    /// New and returning listeners per episode (stacked bars)
    ListenerMix,
    /// Cumulative subscribers per episode (line, trend)
    SubscriberGrowth,
    /// Social shares vs. subscribers gained (scatter, zoomable, trend)
    SharesSubscribers,
}

impl From<ChartArg> for ChartKind {
    fn from(c: ChartArg) -> Self {
        match c {
            ChartArg::DurationCompletion => ChartKind::DurationCompletion,
            ChartArg::ListenerMix => ChartKind::ListenerMix,
            ChartArg::SubscriberGrowth => ChartKind::SubscriberGrowth,
            ChartArg::SharesSubscribers => ChartKind::SharesSubscribers,
        }
    }
}

#[derive(Args, Debug)]
struct ChartArgs {
    /// Episode CSV with a header row.
    #[arg(short, long)]
    input: PathBuf,
    /// Which chart to build.
    #[arg(short, long, value_enum)]
    chart: ChartArg,
    /// JSON chart configuration; flags below override its fields.
    #[arg(long)]
    config: Option<PathBuf>,
    /// JSON array of input events replayed before the frame is built.
    #[arg(long)]
    events: Option<PathBuf>,
    /// Chart width in pixels (default 720).
    #[arg(long)]
    width: Option<f64>,
    /// Chart height in pixels (default 420).
    #[arg(long)]
    height: Option<f64>,
    /// Maximum zoom level for scatter charts (default 8).
    #[arg(long)]
    max_zoom: Option<f64>,
    /// Locale for number labels (en, de, fr, es, it, pt, nl).
    #[arg(long)]
    locale: Option<String>,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    chart: ChartArgs,
    /// Output path (.svg).
    #[arg(short, long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    chart: ChartArgs,
    /// Save the frame here instead of printing it.
    #[arg(short, long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct StatsArgs {
    /// Episode CSV with a header row.
    #[arg(short, long)]
    input: PathBuf,
}

fn fmt_opt(v: Option<f64>) -> String {
    match v {
        Some(x) if x.is_finite() => {
            // Format up to 4 decimals, then trim trailing zeros and trailing dot.
            let s = format!("{:.4}", x);
            s.trim_end_matches('0').trim_end_matches('.').to_string()
        }
        _ => "NA".to_string(),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Stats(args) => cmd_stats(args),
    }
}

fn build_chart(args: &ChartArgs) -> Result<Chart> {
    let mut config: ChartConfig = match args.config.as_ref() {
        Some(path) => storage::load_json(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => ChartConfig::default(),
    };
    if let Some(w) = args.width {
        config.width = w;
    }
    if let Some(h) = args.height {
        config.height = h;
    }
    if let Some(z) = args.max_zoom {
        config.max_zoom = z;
    }
    if let Some(l) = args.locale.as_ref() {
        config.locale = l.clone();
    }

    let episodes = storage::load_csv(&args.input)
        .with_context(|| format!("reading episodes {}", args.input.display()))?;
    let mut chart = Chart::new(args.chart.into(), &episodes, config)?;

    if let Some(path) = args.events.as_ref() {
        let events: Vec<InputEvent> = storage::load_json(path)
            .with_context(|| format!("reading events {}", path.display()))?;
        for event in events {
            chart.handle(event);
        }
    }
    Ok(chart)
}

fn cmd_render(args: RenderArgs) -> Result<()> {
    let chart = build_chart(&args.chart)?;
    viz::render_svg(&chart.frame(), &args.out)?;
    eprintln!("Wrote chart to {}", args.out.display());
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> Result<()> {
    let frame = build_chart(&args.chart)?.frame();
    match args.out.as_ref() {
        Some(path) => {
            storage::save_json(&frame, path)?;
            eprintln!("Saved frame to {}", path.display());
        }
        None => println!("{}", serde_json::to_string_pretty(&frame)?),
    }
    Ok(())
}

fn cmd_stats(args: StatsArgs) -> Result<()> {
    let episodes = storage::load_csv(&args.input)
        .with_context(|| format!("reading episodes {}", args.input.display()))?;
    for s in stats::metric_summaries(&episodes) {
        println!(
            "{:<20} count={}  min={} max={} mean={} median={}",
            s.metric,
            s.count,
            fmt_opt(s.min),
            fmt_opt(s.max),
            fmt_opt(s.mean),
            fmt_opt(s.median)
        );
    }
    Ok(())
}
