use super::ShortestPathWeighting;
use crate::model::StopId;
use serde::Serialize;

/// a stop and its score within a centrality ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedStop {
    pub stop_id: StopId,
    pub score: f64,
}

/// structural metrics of a [`crate::graph::TransitGraph`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConnectivityReport {
    pub n_nodes: usize,
    pub n_edges: usize,
    pub average_degree: f64,
    pub is_connected: bool,
    pub n_components: usize,
    /// longest shortest hop path. absent when the graph is disconnected.
    pub diameter: Option<usize>,
    pub average_clustering: f64,
    pub density: f64,
    /// highest degree centrality first
    pub most_connected_stops: Vec<RankedStop>,
    /// highest betweenness centrality first
    pub most_important_stops: Vec<RankedStop>,
    pub betweenness_weighting: ShortestPathWeighting,
}
