use itertools::Itertools;
use serde::{Serialize, Serializer};
use transitnet_core::{
    frequency::FrequencyRecommendation,
    graph::{StopPair, TransitEdge},
    service::ServiceFrequency,
};

/// a row of frequency_optimization.csv. headways are reported in the column names used
/// by planners ("frequency" in minutes between vehicles).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FrequencyOptimizationRow {
    pub route_id: String,
    pub route_name: String,
    #[serde(serialize_with = "serialize_minutes")]
    pub current_frequency: f64,
    pub optimal_frequency: u32,
    pub current_utilization: f64,
    pub optimal_utilization: f64,
    pub efficiency_gain: f64,
}

impl From<&FrequencyRecommendation> for FrequencyOptimizationRow {
    fn from(value: &FrequencyRecommendation) -> Self {
        FrequencyOptimizationRow {
            route_id: value.route_id.to_string(),
            route_name: value.route_name.clone(),
            current_frequency: value.current_headway,
            optimal_frequency: value.recommended_headway,
            current_utilization: value.current_utilization,
            optimal_utilization: value.recommended_utilization,
            efficiency_gain: value.efficiency_gain,
        }
    }
}

/// whole minutes are written without a fractional part, e.g. `5` rather than `5.0`.
fn serialize_minutes<S>(minutes: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if minutes.fract() == 0.0 && minutes.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*minutes as i64)
    } else {
        serializer.serialize_f64(*minutes)
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ServiceFrequencyRow {
    pub route_id: String,
    pub trips_per_day: usize,
    pub avg_frequency_minutes: f64,
    pub first_departure: String,
    pub last_departure: String,
}

impl From<&ServiceFrequency> for ServiceFrequencyRow {
    fn from(value: &ServiceFrequency) -> Self {
        ServiceFrequencyRow {
            route_id: value.route_id.to_string(),
            trips_per_day: value.trips_per_day,
            avg_frequency_minutes: value.avg_headway_minutes,
            first_departure: value.first_departure.to_hhmm(),
            last_departure: value.last_departure.to_hhmm(),
        }
    }
}

/// a row of graph_edges.csv, with the serving routes joined by `;`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GraphEdgeRow {
    pub src_stop_id: String,
    pub dst_stop_id: String,
    pub weight_km: f64,
    pub routes: String,
}

impl From<(&StopPair, &TransitEdge)> for GraphEdgeRow {
    fn from((pair, edge): (&StopPair, &TransitEdge)) -> Self {
        let (src, dst) = pair.endpoints();
        GraphEdgeRow {
            src_stop_id: src.to_string(),
            dst_stop_id: dst.to_string(),
            weight_km: edge.weight_km,
            routes: edge.routes.iter().join(";"),
        }
    }
}
