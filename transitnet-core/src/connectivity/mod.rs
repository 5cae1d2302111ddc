mod betweenness;
mod centrality;
mod clustering;
mod connectivity_config;
mod connectivity_error;
mod connectivity_ops;
mod connectivity_report;
mod search;

pub use betweenness::betweenness_centrality;
pub use centrality::{degree_centrality, rank_top_k};
pub use clustering::{average_clustering, local_clustering};
pub use connectivity_config::{ConnectivityConfig, ShortestPathWeighting};
pub use connectivity_error::ConnectivityError;
pub use connectivity_ops::analyze;
pub use connectivity_report::{ConnectivityReport, RankedStop};
pub use search::{bfs_hops, connected_components, diameter};
