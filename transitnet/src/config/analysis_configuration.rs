use crate::TransitNetCliError;
use serde::{Deserialize, Serialize};
use transitnet_core::{
    connectivity::{ConnectivityConfig, ShortestPathWeighting},
    frequency::HeadwayPolicy,
    graph::DistanceCalculationPolicy,
};

/// defines behaviors for a transit network analysis run
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct AnalysisConfiguration {
    pub distance_calculation_policy: DistanceCalculationPolicy,
    pub betweenness_weighting: ShortestPathWeighting,
    /// number of stops retained in each centrality ranking
    pub top_k: usize,
    pub headway_policy: HeadwayPolicy,
    /// used for routes whose source data carries no vehicle capacity
    pub default_vehicle_capacity: i64,
    /// used for routes with no headway in the source data and fewer than two trips
    pub default_headway_minutes: f64,
    pub parallelize: bool,
    pub overwrite: bool,
    pub compress: bool,
}

impl Default for AnalysisConfiguration {
    fn default() -> Self {
        Self {
            distance_calculation_policy: Default::default(),
            betweenness_weighting: Default::default(),
            top_k: 5,
            headway_policy: Default::default(),
            default_vehicle_capacity: 60,
            default_headway_minutes: 10.0,
            parallelize: true,
            overwrite: true,
            compress: false,
        }
    }
}

impl AnalysisConfiguration {
    pub fn connectivity_config(&self) -> ConnectivityConfig {
        ConnectivityConfig {
            top_k: self.top_k,
            betweenness_weighting: self.betweenness_weighting,
            parallelize: self.parallelize,
        }
    }
}

impl TryFrom<&String> for AnalysisConfiguration {
    type Error = TransitNetCliError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        let read = |f: &String| {
            std::fs::read_to_string(f).map_err(|e| {
                TransitNetCliError::ConfigurationError(format!("failure reading {f}: {e}"))
            })
        };
        if f.ends_with(".toml") {
            let s = read(f)?;
            toml::from_str(&s).map_err(|e| {
                TransitNetCliError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else if f.ends_with(".json") {
            let s = read(f)?;
            serde_json::from_str(&s).map_err(|e| {
                TransitNetCliError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else {
            Err(TransitNetCliError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )))
        }
    }
}
