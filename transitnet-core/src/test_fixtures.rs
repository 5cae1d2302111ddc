//! small hand-built schedules shared by the unit tests in this crate.
use crate::model::{Route, RouteId, ScheduleModel, ScheduleTime, Stop, StopId, StopTime, Trip, TripId};

pub fn stop(id: &str, lat: f64, lon: f64, daily_passengers: u64) -> Stop {
    Stop::new(StopId::from(id), id, lat, lon)
        .unwrap()
        .with_daily_passengers(daily_passengers)
}

pub fn route(id: &str, start: &str, end: &str, headway: f64, capacity: i64) -> Route {
    Route {
        route_id: RouteId::from(id),
        name: format!("route {id}"),
        agency_id: Some(String::from("AG")),
        headway_minutes: headway,
        vehicle_capacity: capacity,
        avg_travel_time_minutes: None,
        start_stop_id: StopId::from(start),
        end_stop_id: StopId::from(end),
    }
}

/// a trip visiting the given stops in order, one minute apart, with sequence
/// indices starting at 1.
pub fn trip(id: &str, route_id: &str, stops: &[&str]) -> Trip {
    trip_departing(id, route_id, stops, ScheduleTime::from_hms(6, 0, 0))
}

pub fn trip_departing(id: &str, route_id: &str, stops: &[&str], start: ScheduleTime) -> Trip {
    let stop_times = stops
        .iter()
        .enumerate()
        .map(|(idx, s)| {
            let t = start.plus_minutes(idx as u32);
            StopTime::new(StopId::from(*s), t, t, idx as u32 + 1)
        })
        .collect();
    Trip::new(TripId::from(id), RouteId::from(route_id), stop_times)
}

/// a straight line of stops heading east along the equator, 0.01 degrees apart.
pub fn line_schedule(stop_ids: &[&str], trips: Vec<Trip>) -> ScheduleModel {
    let stops = stop_ids
        .iter()
        .enumerate()
        .map(|(idx, id)| stop(id, 0.0, idx as f64 * 0.01, 0))
        .collect();
    let route_ids = trips
        .iter()
        .map(|t| t.route_id.0.clone())
        .collect::<std::collections::BTreeSet<_>>();
    let first = stop_ids.first().copied().unwrap_or_default();
    let last = stop_ids.last().copied().unwrap_or_default();
    let routes = route_ids
        .iter()
        .map(|r| route(r, first, last, 10.0, 60))
        .collect();
    ScheduleModel::new(stops, routes, trips).unwrap()
}
