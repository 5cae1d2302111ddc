use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConnectivityError {
    #[error("cannot analyze connectivity of a graph with no nodes")]
    EmptyGraph,
}
