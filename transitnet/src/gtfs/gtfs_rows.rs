use serde::{Deserialize, Serialize};

/// a row of stops.txt. `daily_passengers` is a non-standard extension column.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StopRow {
    pub stop_id: String,
    #[serde(default)]
    pub stop_name: Option<String>,
    pub stop_lat: f64,
    pub stop_lon: f64,
    #[serde(default)]
    pub zone_id: Option<String>,
    #[serde(default)]
    pub daily_passengers: Option<u64>,
}

/// a row of routes.txt. everything after `route_long_name` is a non-standard extension
/// carrying the operating parameters used for frequency optimization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouteRow {
    pub route_id: String,
    #[serde(default)]
    pub agency_id: Option<String>,
    #[serde(default)]
    pub route_short_name: Option<String>,
    #[serde(default)]
    pub route_long_name: Option<String>,
    #[serde(default)]
    pub start_stop_id: Option<String>,
    #[serde(default)]
    pub end_stop_id: Option<String>,
    /// minutes
    #[serde(default)]
    pub current_headway: Option<f64>,
    #[serde(default)]
    pub vehicle_capacity: Option<i64>,
    /// minutes
    #[serde(default)]
    pub avg_travel_time: Option<f64>,
}

impl RouteRow {
    /// long name when present, otherwise the short name, otherwise the id.
    pub fn display_name(&self) -> String {
        [&self.route_long_name, &self.route_short_name]
            .into_iter()
            .flatten()
            .find(|s| !s.is_empty())
            .cloned()
            .unwrap_or_else(|| self.route_id.clone())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TripRow {
    pub route_id: String,
    #[serde(default)]
    pub service_id: Option<String>,
    pub trip_id: String,
}

/// a row of stop_times.txt. times are kept as strings here since GTFS allows hours
/// past 23; they are parsed into schedule times when the model is assembled.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StopTimeRow {
    pub trip_id: String,
    pub arrival_time: String,
    pub departure_time: String,
    pub stop_id: String,
    pub stop_sequence: u32,
}
