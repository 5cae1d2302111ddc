use crate::model::RouteId;
use serde::Serialize;

/// recommended service change for one route. utilization values are percentages
/// rounded to one decimal place; `efficiency_gain` is the percentage point
/// difference between recommended and current utilization and is negative when
/// the recommended headway would carry the same demand less efficiently.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyRecommendation {
    pub route_id: RouteId,
    pub route_name: String,
    pub current_headway: f64,
    pub recommended_headway: u32,
    pub current_utilization: f64,
    pub recommended_utilization: f64,
    pub efficiency_gain: f64,
}
