use super::{RouteId, StopId};
use serde::{Deserialize, Serialize};

/// a scheduled service realized by one or more trips.
///
/// headway and capacity are kept as read from the source data. their positivity
/// is checked when a recommendation is computed so that one bad route does not
/// prevent the rest of the schedule from being analyzed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub route_id: RouteId,
    pub name: String,
    pub agency_id: Option<String>,
    /// minutes between consecutive scheduled departures
    pub headway_minutes: f64,
    /// passengers per vehicle, seated and standing
    pub vehicle_capacity: i64,
    pub avg_travel_time_minutes: Option<f64>,
    /// terminal where the route begins
    pub start_stop_id: StopId,
    /// terminal where the route ends
    pub end_stop_id: StopId,
}
