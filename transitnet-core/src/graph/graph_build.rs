use super::{GraphError, TransitGraph};

/// result of a graph construction pass. trips that could not be used are kept
/// alongside the graph rather than failing the whole build.
#[derive(Debug, Clone)]
pub struct GraphBuild {
    pub graph: TransitGraph,
    /// one [`GraphError::MalformedTrip`] per trip left out of the graph
    pub skipped_trips: Vec<GraphError>,
    /// consecutive stop visits to the same stop that were not inserted as edges
    pub rejected_self_loops: usize,
    /// trip hops folded into an edge that an earlier hop had already created
    pub merged_hops: usize,
    /// number of trips considered
    pub n_trips: usize,
}

impl GraphBuild {
    pub fn n_skipped_trips(&self) -> usize {
        self.skipped_trips.len()
    }

    pub fn n_used_trips(&self) -> usize {
        self.n_trips - self.skipped_trips.len()
    }
}
