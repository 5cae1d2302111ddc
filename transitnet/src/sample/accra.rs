//! a small demonstration network of Accra, Ghana bus terminals with observed daily
//! boardings and the operating parameters of five trotro and Metro Mass routes.
use crate::TransitNetCliError;
use transitnet_core::model::{
    Route, RouteId, ScheduleModel, ScheduleTime, Stop, StopId, StopTime, Trip, TripId,
};

/// (stop_id, name, lat, lon, zone, daily passengers)
const STOPS: [(&str, &str, f64, f64, &str, u64); 10] = [
    ("ST001", "Kwame Nkrumah Circle", 5.5600, -0.2000, "Z1", 15000),
    ("ST002", "Kaneshie Market", 5.5450, -0.2300, "Z1", 12000),
    ("ST003", "Achimota Station", 5.6050, -0.2200, "Z2", 8000),
    ("ST004", "Tema Station", 5.6700, -0.0800, "Z3", 10000),
    ("ST005", "Madina Market", 5.6800, -0.1600, "Z2", 7000),
    ("ST006", "Lapaz", 5.6000, -0.2500, "Z1", 6000),
    ("ST007", "Dansoman", 5.5300, -0.2800, "Z1", 5000),
    ("ST008", "Airport", 5.6050, -0.1700, "Z2", 9000),
    ("ST009", "University of Ghana", 5.6500, -0.1900, "Z2", 4000),
    ("ST010", "Nungua", 5.5900, -0.0600, "Z3", 3000),
];

/// (route_id, name, agency, start, end, headway minutes, capacity, travel time minutes)
const ROUTES: [(&str, &str, &str, &str, &str, f64, i64, f64); 5] = [
    ("R001", "Circle-Kaneshie", "GPRTU", "ST001", "ST002", 5.0, 80, 45.0),
    ("R002", "Achimota-Tema", "GPRTU", "ST003", "ST004", 8.0, 60, 90.0),
    ("R003", "Madina-Airport", "METRO_MASS", "ST005", "ST008", 12.0, 50, 60.0),
    ("R004", "Lapaz-Nungua", "GPRTU", "ST006", "ST010", 15.0, 40, 75.0),
    ("R005", "Dansoman-UG", "METRO_MASS", "ST007", "ST009", 10.0, 70, 85.0),
];

const TRIPS_PER_ROUTE: u32 = 5;

/// builds the sample network. each route runs hourly terminal to terminal from 06:00.
pub fn sample_schedule() -> Result<ScheduleModel, TransitNetCliError> {
    let stops = STOPS
        .iter()
        .map(|(id, name, lat, lon, zone, demand)| {
            Ok(Stop::new(StopId::from(*id), name, *lat, *lon)?
                .with_zone(zone)
                .with_daily_passengers(*demand))
        })
        .collect::<Result<Vec<_>, TransitNetCliError>>()?;

    let routes = ROUTES
        .iter()
        .map(
            |(id, name, agency, start, end, headway, capacity, travel)| Route {
                route_id: RouteId::from(*id),
                name: name.to_string(),
                agency_id: Some(agency.to_string()),
                headway_minutes: *headway,
                vehicle_capacity: *capacity,
                avg_travel_time_minutes: Some(*travel),
                start_stop_id: StopId::from(*start),
                end_stop_id: StopId::from(*end),
            },
        )
        .collect::<Vec<_>>();

    let mut trips = vec![];
    for route in routes.iter() {
        for trip_idx in 0..TRIPS_PER_ROUTE {
            let trip_id = TripId(format!("T{:03}", trips.len() + 1));
            let depart = ScheduleTime::from_hms(6 + trip_idx, 0, 0);
            let travel = route.avg_travel_time_minutes.unwrap_or_default() as u32;
            let arrive = depart.plus_minutes(travel);
            let stop_times = vec![
                StopTime::new(route.start_stop_id.clone(), depart, depart, 1),
                StopTime::new(route.end_stop_id.clone(), arrive, arrive, 2),
            ];
            trips.push(Trip::new(trip_id, route.route_id.clone(), stop_times));
        }
    }

    let schedule = ScheduleModel::new(stops, routes, trips)?;
    Ok(schedule)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_schedule() {
        let schedule = sample_schedule().unwrap();
        assert_eq!(schedule.stops().len(), 10);
        assert_eq!(schedule.routes().len(), 5);
        assert_eq!(schedule.trips().len(), 25);
        assert_eq!(schedule.n_agencies(), 2);

        let circle = schedule.get_stop(&StopId::from("ST001")).unwrap();
        assert_eq!(circle.daily_passengers, 15000);
        assert_eq!(circle.zone_id.as_deref(), Some("Z1"));

        let t5 = schedule.trips().get(&TripId::from("T005")).unwrap();
        assert_eq!(t5.route_id, RouteId::from("R001"));
        assert_eq!(t5.first_departure(), Some(ScheduleTime::from_hms(10, 0, 0)));
        let arrival = t5.last_stop_time().map(|st| st.arrival);
        assert_eq!(arrival, Some(ScheduleTime::from_hms(10, 45, 0)));
    }
}
