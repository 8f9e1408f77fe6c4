use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "perfreport")]
#[command(about = "Render a distributed object-store speedtest result as a readable report")]
#[command(version)]
struct Cli {
    /// Speedtest result: a .json document or a .zip bundle with cluster metadata
    input: PathBuf,

    /// Print the re-encoded result as indented JSON instead of the text report
    #[arg(long)]
    json: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    debug!(input = %cli.input.display(), "loading speedtest result");
    let result = perfreport_core::load(&cli.input)
        .with_context(|| format!("cannot parse {} as a speedtest result", cli.input.display()))?;

    if cli.json {
        println!("{}", result.to_json()?);
    } else {
        print!("{result}");
    }
    Ok(())
}
