use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use gitart::{
    ActivitySeries, Compositor, LevelPolicy, StyleId, StyleParams, TextOverflow, ViewportClass,
};

#[derive(Parser, Debug)]
#[command(name = "gitart", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a year of activity as a PNG.
    Render(RenderArgs),
    /// List the available styles.
    Styles,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input series JSON (flat day array or nested contributions shape).
    #[arg(long = "in", conflicts_with = "synthetic")]
    in_path: Option<PathBuf>,

    /// Render a deterministic synthetic series with this seed instead of
    /// reading a file.
    #[arg(long)]
    synthetic: Option<u64>,

    /// Year for the synthetic series.
    #[arg(long, default_value_t = 2026)]
    year: i32,

    /// Visual style.
    #[arg(long, value_enum, default_value_t = StyleId::Classic)]
    style: StyleId,

    /// Level classification policy for records without a precomputed level.
    #[arg(long, value_enum, default_value_t = PolicyChoice::Absolute)]
    policy: PolicyChoice,

    /// Display density.
    #[arg(long, value_enum, default_value_t = ViewportClass::Standard)]
    viewport: ViewportClass,

    /// Overlay text (text style).
    #[arg(long)]
    text: Option<String>,

    /// Truncate overlay text that is wider than the grid instead of letting
    /// it overflow.
    #[arg(long)]
    truncate_text: bool,

    /// Username for the caption and the output filename.
    #[arg(long)]
    name: Option<String>,

    /// Draw the `@name • N commits` caption (grid styles, needs --name).
    #[arg(long)]
    caption: bool,

    /// Draw month labels above the grid (grid styles).
    #[arg(long)]
    labels: bool,

    /// Output directory.
    #[arg(long, default_value = ".")]
    out: PathBuf,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum PolicyChoice {
    Absolute,
    Relative,
}

impl From<PolicyChoice> for LevelPolicy {
    fn from(c: PolicyChoice) -> Self {
        match c {
            PolicyChoice::Absolute => LevelPolicy::Absolute,
            PolicyChoice::Relative => LevelPolicy::RelativeToMax,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Styles => {
            for id in Compositor::new().registry().ids() {
                println!("{id}");
            }
            Ok(())
        }
    }
}

fn read_series(args: &RenderArgs) -> anyhow::Result<ActivitySeries> {
    let policy = LevelPolicy::from(args.policy);
    if let Some(seed) = args.synthetic {
        return Ok(ActivitySeries::synthetic(args.year, seed, policy)?);
    }
    let path = args
        .in_path
        .as_deref()
        .context("either --in or --synthetic is required")?;
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("open series '{}'", path.display()))?;
    let series = ActivitySeries::from_json(&json, policy)
        .with_context(|| format!("parse series '{}'", path.display()))?;
    Ok(series)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let series = read_series(&args)?;
    if series.is_empty() {
        eprintln!("no activity data; nothing to render");
        return Ok(());
    }

    let params = StyleParams {
        text: args.text.clone(),
        display_name: args.name.clone(),
        show_caption: args.caption,
        show_month_labels: args.labels,
        text_overflow: if args.truncate_text {
            TextOverflow::Truncate
        } else {
            TextOverflow::Overlap
        },
    };

    let compositor = Compositor::new();
    let raster = compositor.render(&series, args.style, &params, args.viewport)?;
    let path = gitart::export_png(&raster, &args.out, args.style, args.name.as_deref())?;

    eprintln!("wrote {}", path.display());
    Ok(())
}
