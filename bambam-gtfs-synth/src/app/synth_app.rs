use super::SynthOperation;
use clap::Parser;

/// command line tool for synthesizing GTFS service from planning-level route geometries
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct SynthApp {
    #[command(subcommand)]
    pub op: SynthOperation,
}
