use super::TransitNetOperation;
use clap::Parser;

/// command line tool for transit network connectivity analysis and service
/// frequency optimization over a GTFS-like schedule directory
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct TransitNetApp {
    #[command(subcommand)]
    pub op: TransitNetOperation,
}
