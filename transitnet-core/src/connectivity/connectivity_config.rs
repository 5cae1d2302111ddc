use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// which notion of path length is used when counting shortest paths for
/// betweenness centrality.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ShortestPathWeighting {
    /// every hop counts as 1
    #[default]
    Unweighted,
    /// hops are weighted by their distance in kilometers
    Weighted,
}

impl Display for ShortestPathWeighting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShortestPathWeighting::Unweighted => write!(f, "unweighted"),
            ShortestPathWeighting::Weighted => write!(f, "weighted"),
        }
    }
}

/// parameters of a connectivity analysis.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ConnectivityConfig {
    /// how many stops to retain in each centrality ranking
    pub top_k: usize,
    pub betweenness_weighting: ShortestPathWeighting,
    /// run per-source traversals on the rayon thread pool
    pub parallelize: bool,
}

impl Default for ConnectivityConfig {
    fn default() -> Self {
        Self {
            top_k: 5,
            betweenness_weighting: ShortestPathWeighting::default(),
            parallelize: true,
        }
    }
}
