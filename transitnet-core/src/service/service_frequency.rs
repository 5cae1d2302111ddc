use crate::model::{RouteId, ScheduleModel, ScheduleTime, Trip};
use itertools::Itertools;
use serde::Serialize;

/// observed service pattern of a single route, taken from the first departure of each of
/// its trips.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceFrequency {
    pub route_id: RouteId,
    pub trips_per_day: usize,
    /// mean interval between consecutive trip departures, rounded to one decimal
    pub avg_headway_minutes: f64,
    pub first_departure: ScheduleTime,
    pub last_departure: ScheduleTime,
}

/// summarizes every route with at least two departing trips, in schedule route order.
/// routes with fewer trips have no observable headway and are omitted.
pub fn analyze_service_frequency(schedule: &ScheduleModel) -> Vec<ServiceFrequency> {
    schedule
        .routes()
        .keys()
        .filter_map(|route_id| {
            let departures = sorted_departures(schedule.trips_for_route(route_id));
            let (first, last) = match (departures.first(), departures.last()) {
                (Some(first), Some(last)) if departures.len() > 1 => (*first, *last),
                _ => return None,
            };
            let avg = mean_interval_minutes(&departures)?;
            Some(ServiceFrequency {
                route_id: route_id.clone(),
                trips_per_day: departures.len(),
                avg_headway_minutes: (avg * 10.0).round() / 10.0,
                first_departure: first,
                last_departure: last,
            })
        })
        .collect_vec()
}

/// mean minutes between consecutive departures of a set of trips, or None when fewer
/// than two trips have a departure time.
pub fn observed_headway_minutes<'a>(trips: impl IntoIterator<Item = &'a Trip>) -> Option<f64> {
    mean_interval_minutes(&sorted_departures(trips))
}

fn sorted_departures<'a>(trips: impl IntoIterator<Item = &'a Trip>) -> Vec<ScheduleTime> {
    trips
        .into_iter()
        .filter_map(|t| t.first_departure())
        .sorted()
        .collect_vec()
}

fn mean_interval_minutes(sorted: &[ScheduleTime]) -> Option<f64> {
    if sorted.len() < 2 {
        return None;
    }
    let total_seconds: u32 = sorted
        .iter()
        .tuple_windows()
        .map(|(a, b)| b.seconds() - a.seconds())
        .sum();
    Some(total_seconds as f64 / (sorted.len() - 1) as f64 / 60.0)
}
