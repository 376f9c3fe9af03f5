mod errors;
mod formatter;
mod parser;

use anyhow::{Context, Result};
use clap::Parser;
use formatter::StdOutFormatter;
use parser::Config;

#[derive(Parser, Debug)]
#[command(
    name = "ballotsum",
    version,
    about = "Summarize accepted absentee ballots by county",
    long_about = "ballotsum reads a daily absentee-voter extract (the STATEWIDE.csv \
                  inside the Secretary of State's zip), prints descriptive breakdowns \
                  of ballot style and status, and writes accepted-ballot counts per \
                  county to a small CSV suitable for a turnout map.\n\n\
                  Example usage:\n  \
                  ballotsum --config run.toml"
)]
struct Args {
    /// Path to the TOML configuration file naming the extract and output
    #[arg(short, long, value_name = "FILE")]
    config: String,

    /// Print the full error chain on failure
    #[arg(short, long)]
    debug: bool,
}

fn run(args: &Args) -> Result<()> {
    let config_path = std::path::PathBuf::from(&args.config);
    let config_str = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let config: Config = toml::from_str(config_str.as_str())
        .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;
    let pipeline_config = parser::resolve(&config)?;

    let version = env!("CARGO_PKG_VERSION");
    let formatter = StdOutFormatter::new(version.to_string());
    formatter.print_intro();
    formatter.print_loading(&pipeline_config.in_path);

    let summary = ballotsum_core::run(&pipeline_config).with_context(|| {
        format!(
            "Summary run failed for '{}'",
            pipeline_config.in_path.display()
        )
    })?;

    formatter.print_summary(&summary);
    formatter.print_written(&pipeline_config.out_path, summary.county_count);

    Ok(())
}

fn main() {
    let args = Args::parse();
    let debug = args.debug;

    if let Err(err) = run(&args) {
        if debug {
            eprintln!("Error: {:?}", err);
        } else {
            eprintln!("Error: {:#}", err);
            eprintln!("\nHint: Run with --debug flag for the full error chain");
        }
        std::process::exit(1);
    }
}
