use anyhow::{Context, Result};
use chartopts::request::ChartRequest;
use chartopts::{ExportSettings, storage};
use clap::{Args, Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "chartopts",
    version,
    about = "Turn analytics chart configs and evaluation results into renderer-ready chart options"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build chart options (and optionally the export payload and a CSV table).
    Build(BuildArgs),
}

#[derive(Args, Debug)]
struct BuildArgs {
    /// Request JSON with chartConfig, evaluationData and chartDataMaps ("-" for stdin).
    #[arg(short, long)]
    input: PathBuf,
    /// Write JSON to this file instead of stdout.
    #[arg(short, long)]
    out: Option<PathBuf>,
    /// Also write the resolved data table as CSV.
    #[arg(long)]
    csv: Option<PathBuf>,
    /// Export width when the request has no renderingConfig.width.
    #[arg(long, default_value_t = 1000)]
    width: u32,
    /// Export height when the request has no renderingConfig.height.
    #[arg(long, default_value_t = 600)]
    height: u32,
    /// Export scale factor.
    #[arg(long, default_value_t = 2)]
    scale: u32,
    /// Emit only the chart options, without the export envelope.
    #[arg(long, default_value_t = false)]
    options_only: bool,
    /// Compact JSON instead of pretty-printed.
    #[arg(long, default_value_t = false)]
    compact: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Build(args) => cmd_build(args),
    }
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut s = String::new();
        std::io::stdin()
            .read_to_string(&mut s)
            .context("reading request from stdin")?;
        Ok(s)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
    }
}

fn cmd_build(args: BuildArgs) -> Result<()> {
    let text = read_input(&args.input)?;
    let request = ChartRequest::from_json(&text).context("parsing request JSON")?;
    let settings = ExportSettings {
        scale: args.scale,
        default_width: args.width,
        default_height: args.height,
    };

    let payload = request.build_payload(&settings)?;
    let json = if args.options_only {
        to_json(&payload.export.options, args.compact)?
    } else {
        to_json(&payload, args.compact)?
    };

    match args.out.as_ref() {
        Some(path) => {
            std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
            eprintln!("Wrote chart options to {}", path.display());
        }
        None => println!("{json}"),
    }

    if let Some(path) = args.csv.as_ref() {
        let spec = &payload.export.options;
        let metric = request.chart_config.as_ref().and_then(|c| c.metric());
        storage::save_csv(spec, metric, path)?;
        eprintln!(
            "Saved {} rows to {}",
            storage::table_rows(spec).len(),
            path.display()
        );
    }

    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T, compact: bool) -> Result<String> {
    let s = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    Ok(s)
}
