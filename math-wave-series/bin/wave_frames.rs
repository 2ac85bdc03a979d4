//! Evaluate a series problem and write its frames as JSON
//!
//! Usage:
//!     cargo run --bin wave-frames -- --scenario fixed_string --output string.json
//!     cargo run --bin wave-frames -- --config membrane.json --modes 20

use anyhow::{Context, bail};
use clap::Parser;
use math_wave_series::scenarios::{self, SCENARIO_NAMES};
use math_wave_series::{ProblemConfig, load_config, solve};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "wave-frames",
    about = "Evaluate an eigenfunction-series wave solution and export its frames as JSON"
)]
struct Cli {
    /// Preset problem (use --list-scenarios to see available names)
    #[arg(long, conflicts_with = "config")]
    scenario: Option<String>,

    /// JSON problem configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the truncation order
    #[arg(long)]
    modes: Option<usize>,

    /// Output file (defaults to <name>_frames.json)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the resolved configuration as JSON and exit
    #[arg(long)]
    print_config: bool,

    /// List preset scenarios and exit
    #[arg(long)]
    list_scenarios: bool,
}

fn resolve_config(args: &Cli) -> anyhow::Result<ProblemConfig> {
    let mut config = match (&args.scenario, &args.config) {
        (Some(name), _) => match scenarios::by_name(name) {
            Some(config) => config,
            None => bail!("unknown scenario '{name}'; use --list-scenarios"),
        },
        (None, Some(path)) => {
            load_config(path).with_context(|| format!("loading {}", path.display()))?
        }
        (None, None) => bail!("either --scenario or --config must be provided"),
    };

    if let Some(modes) = args.modes {
        config.modes = modes;
    }
    config.validate()?;
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Cli::parse();

    if args.list_scenarios {
        for name in SCENARIO_NAMES {
            println!("{name}");
        }
        return Ok(());
    }

    let config = resolve_config(&args)?;
    if args.print_config {
        println!("{}", config.to_json_string()?);
        return Ok(());
    }

    let frames = solve(&config)?;
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("{}_frames.json", config.name)));
    frames
        .save_json(&output)
        .with_context(|| format!("writing {}", output.display()))?;

    println!(
        "{}: {} frames, {} points, max |u| = {:.4} -> {}",
        frames.name,
        frames.len(),
        frames.positions.len(),
        frames.max_abs(),
        output.display()
    );
    Ok(())
}
