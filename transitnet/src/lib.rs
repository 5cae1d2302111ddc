//! File-based tooling around `transitnet-core`: reads a GTFS-like schedule directory,
//! runs connectivity analysis and frequency optimization, and writes flat reports.
pub mod app;
pub mod config;
pub mod gtfs;
pub mod report;
pub mod sample;
mod transitnet_cli_error;

pub use transitnet_cli_error::TransitNetCliError;
