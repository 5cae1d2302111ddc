use thiserror::Error;
use transitnet_core::{
    connectivity::ConnectivityError, graph::GraphError, model::ModelError,
};

#[derive(Error, Debug)]
pub enum TransitNetCliError {
    #[error("failure reading run configuration: {0}")]
    ConfigurationError(String),
    #[error("failure reading {0}: {1}")]
    CsvReadError(String, csv::Error),
    #[error("failure writing {0}: {1}")]
    CsvWriteError(String, csv::Error),
    #[error("failure parsing {0}: {1}")]
    GtfsParseError(String, String),
    #[error("invalid schedule: {source}")]
    ModelError {
        #[from]
        source: ModelError,
    },
    #[error("failure building transit graph: {source}")]
    GraphError {
        #[from]
        source: GraphError,
    },
    #[error("failure running connectivity analysis: {source}")]
    ConnectivityError {
        #[from]
        source: ConnectivityError,
    },
    #[error("failure encoding JSON: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
    #[error("failure reading or writing file: {source}")]
    StdIoError {
        #[from]
        source: std::io::Error,
    },
    #[error("{0}")]
    InternalError(String),
}
