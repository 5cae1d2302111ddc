mod distance_calculation_policy;
mod graph_build;
mod graph_builder;
mod graph_error;
mod stop_pair;
mod transit_edge;
mod transit_graph;

pub use distance_calculation_policy::DistanceCalculationPolicy;
pub use graph_build::GraphBuild;
pub use graph_builder::{build, get_ordered_stop_times};
pub use graph_error::GraphError;
pub use stop_pair::StopPair;
pub use transit_edge::TransitEdge;
pub use transit_graph::{EdgeUpdate, TransitGraph};

/// dense index of a stop within a [`TransitGraph`]. indices follow ascending
/// [`crate::model::StopId`] order.
pub type NodeIndex = usize;
