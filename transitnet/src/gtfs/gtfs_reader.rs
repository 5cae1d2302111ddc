use super::{filenames, RouteRow, StopRow, StopTimeRow, TripRow};
use crate::{config::AnalysisConfiguration, TransitNetCliError};
use indexmap::IndexMap;
use kdam::tqdm;
use serde::de::DeserializeOwned;
use std::path::Path;
use transitnet_core::{
    model::{
        Route, RouteId, ScheduleModel, ScheduleTime, Stop, StopId, StopTime, Trip, TripId,
    },
    service::observed_headway_minutes,
};

/// reads stops.txt, routes.txt, trips.txt and stop_times.txt from a directory and
/// assembles them into a validated schedule.
///
/// route operating parameters missing from routes.txt are filled in: terminals from the
/// route's first trip, headway from the observed trip departures and then from the
/// configured default, and capacity from the configured default.
pub fn read_schedule(
    directory: &Path,
    conf: &AnalysisConfiguration,
) -> Result<ScheduleModel, TransitNetCliError> {
    let stop_rows: Vec<StopRow> = read_rows(directory, filenames::STOPS)?;
    let route_rows: Vec<RouteRow> = read_rows(directory, filenames::ROUTES)?;
    let trip_rows: Vec<TripRow> = read_rows(directory, filenames::TRIPS)?;
    let stop_time_rows = read_stop_time_rows(directory)?;
    log::info!(
        "read {} stops, {} routes, {} trips, {} stop times from {}",
        stop_rows.len(),
        route_rows.len(),
        trip_rows.len(),
        stop_time_rows.len(),
        directory.display()
    );

    let stops = stop_rows
        .into_iter()
        .map(|row| {
            let name = row.stop_name.clone().unwrap_or_else(|| row.stop_id.clone());
            let stop = Stop::new(StopId(row.stop_id), &name, row.stop_lat, row.stop_lon)?
                .with_daily_passengers(row.daily_passengers.unwrap_or_default());
            Ok(match &row.zone_id {
                Some(zone) if !zone.is_empty() => stop.with_zone(zone),
                _ => stop,
            })
        })
        .collect::<Result<Vec<_>, TransitNetCliError>>()?;

    let mut stop_times_by_trip: IndexMap<String, Vec<StopTime>> = IndexMap::new();
    for row in stop_time_rows.into_iter() {
        let arrival = parse_time(&row.arrival_time)?;
        let departure = parse_time(&row.departure_time)?;
        let stop_time = StopTime::new(StopId(row.stop_id), arrival, departure, row.stop_sequence);
        stop_times_by_trip
            .entry(row.trip_id)
            .or_default()
            .push(stop_time);
    }

    let trips = trip_rows
        .into_iter()
        .map(|row| {
            let stop_times = stop_times_by_trip
                .swap_remove(&row.trip_id)
                .unwrap_or_default();
            Trip::new(TripId(row.trip_id), RouteId(row.route_id), stop_times)
        })
        .collect::<Vec<_>>();
    if !stop_times_by_trip.is_empty() {
        log::warn!(
            "{} trip ids in {} have no entry in {}, ignoring their stop times",
            stop_times_by_trip.len(),
            filenames::STOP_TIMES,
            filenames::TRIPS
        );
    }

    let routes = route_rows
        .into_iter()
        .map(|row| route_from_row(row, &trips, conf))
        .collect::<Vec<_>>();

    let schedule = ScheduleModel::new(stops, routes, trips)?;
    Ok(schedule)
}

fn route_from_row(row: RouteRow, trips: &[Trip], conf: &AnalysisConfiguration) -> Route {
    let route_id = RouteId(row.route_id.clone());
    let route_trips = trips
        .iter()
        .filter(|t| t.route_id == route_id)
        .collect::<Vec<_>>();

    let first_trip = route_trips.first();
    let terminal = |explicit: &Option<String>, observed: Option<&StopTime>, which: &str| {
        match (explicit, observed) {
            (Some(stop_id), _) if !stop_id.is_empty() => StopId(stop_id.clone()),
            (_, Some(stop_time)) => stop_time.stop_id.clone(),
            _ => {
                log::warn!("route '{route_id}' has no {which} stop and no trips to derive one from");
                StopId::default()
            }
        }
    };
    let start_stop_id = terminal(
        &row.start_stop_id,
        first_trip.and_then(|t| t.first_stop_time()),
        "start",
    );
    let end_stop_id = terminal(
        &row.end_stop_id,
        first_trip.and_then(|t| t.last_stop_time()),
        "end",
    );

    let headway_minutes = row
        .current_headway
        .or_else(|| observed_headway_minutes(route_trips.iter().copied()))
        .unwrap_or(conf.default_headway_minutes);
    let vehicle_capacity = row
        .vehicle_capacity
        .unwrap_or(conf.default_vehicle_capacity);

    Route {
        name: row.display_name(),
        route_id,
        agency_id: row.agency_id.filter(|a| !a.is_empty()),
        headway_minutes,
        vehicle_capacity,
        avg_travel_time_minutes: row.avg_travel_time,
        start_stop_id,
        end_stop_id,
    }
}

fn parse_time(value: &str) -> Result<ScheduleTime, TransitNetCliError> {
    value.parse::<ScheduleTime>().map_err(|e| {
        TransitNetCliError::GtfsParseError(String::from(filenames::STOP_TIMES), e.to_string())
    })
}

fn csv_reader(
    directory: &Path,
    filename: &str,
) -> Result<csv::Reader<std::fs::File>, TransitNetCliError> {
    let filepath = directory.join(filename);
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(&filepath)
        .map_err(|e| TransitNetCliError::CsvReadError(filepath.display().to_string(), e))
}

fn read_rows<T: DeserializeOwned>(
    directory: &Path,
    filename: &str,
) -> Result<Vec<T>, TransitNetCliError> {
    csv_reader(directory, filename)?
        .into_deserialize::<T>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| TransitNetCliError::CsvReadError(String::from(filename), e))
}

fn read_stop_time_rows(directory: &Path) -> Result<Vec<StopTimeRow>, TransitNetCliError> {
    let reader = csv_reader(directory, filenames::STOP_TIMES)?;
    let row_iter = tqdm!(
        reader.into_deserialize::<StopTimeRow>(),
        desc = format!("reading {}", filenames::STOP_TIMES)
    );
    let rows = row_iter
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| TransitNetCliError::CsvReadError(String::from(filenames::STOP_TIMES), e))?;
    eprintln!();
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_feed(name: &str, files: &[(&str, &str)]) -> PathBuf {
        let dir = std::env::temp_dir().join("transitnet_reader_tests").join(name);
        std::fs::create_dir_all(&dir).unwrap();
        for (filename, contents) in files {
            std::fs::write(dir.join(filename), contents).unwrap();
        }
        dir
    }

    const STOPS: &str = "stop_id,stop_name,stop_lat,stop_lon,zone_id,daily_passengers
S1,First,5.56,-0.20,Z1,15000
S2,Second,5.545,-0.23,,12000
S3,Third,5.60,-0.25,Z2,
";
    const TRIPS: &str = "route_id,service_id,trip_id
R1,WEEKDAY,T1
R1,WEEKDAY,T2
R2,WEEKDAY,T3
";
    const STOP_TIMES: &str = "trip_id,arrival_time,departure_time,stop_id,stop_sequence
T1,06:00:00,06:00:00,S1,1
T1,06:10:00,06:10:00,S2,2
T2,06:20:00,06:20:00,S1,1
T2,06:30:00,06:30:00,S2,2
T3,07:00:00,07:00:00,S2,1
T3,07:15:00,07:15:00,S3,2
";

    #[test]
    fn test_read_with_extension_columns() {
        let routes = "route_id,agency_id,route_short_name,route_long_name,start_stop_id,end_stop_id,current_headway,vehicle_capacity,avg_travel_time
R1,GPRTU,37,Circle-Kaneshie,S1,S2,5,80,45
R2,METRO_MASS,MM1,,S2,S3,12,50,
";
        let dir = write_feed(
            "extension",
            &[
                ("stops.txt", STOPS),
                ("routes.txt", routes),
                ("trips.txt", TRIPS),
                ("stop_times.txt", STOP_TIMES),
            ],
        );
        let schedule = read_schedule(&dir, &AnalysisConfiguration::default()).unwrap();
        assert_eq!(schedule.stops().len(), 3);
        assert_eq!(schedule.trips().len(), 3);
        assert_eq!(schedule.n_agencies(), 2);

        let s2 = schedule.get_stop(&StopId::from("S2")).unwrap();
        assert_eq!(s2.zone_id, None);
        assert_eq!(s2.daily_passengers, 12000);
        let s3 = schedule.get_stop(&StopId::from("S3")).unwrap();
        assert_eq!(s3.daily_passengers, 0);

        let r1 = schedule.get_route(&RouteId::from("R1")).unwrap();
        assert_eq!(r1.name, "Circle-Kaneshie");
        assert_eq!(r1.headway_minutes, 5.0);
        assert_eq!(r1.vehicle_capacity, 80);
        assert_eq!(r1.avg_travel_time_minutes, Some(45.0));
        let r2 = schedule.get_route(&RouteId::from("R2")).unwrap();
        assert_eq!(r2.name, "MM1");
        assert_eq!(r2.avg_travel_time_minutes, None);

        let t1 = schedule.trips().get(&TripId::from("T1")).unwrap();
        assert_eq!(t1.stop_times.len(), 2);
        assert_eq!(t1.first_departure(), Some(ScheduleTime::from_hms(6, 0, 0)));
    }

    #[test]
    fn test_read_derives_missing_route_parameters() {
        let routes = "route_id,agency_id,route_short_name,route_long_name
R1,GPRTU,37,
R2,GPRTU,2,
";
        let dir = write_feed(
            "derived",
            &[
                ("stops.txt", STOPS),
                ("routes.txt", routes),
                ("trips.txt", TRIPS),
                ("stop_times.txt", STOP_TIMES),
            ],
        );
        let conf = AnalysisConfiguration::default();
        let schedule = read_schedule(&dir, &conf).unwrap();
        let r1 = schedule.get_route(&RouteId::from("R1")).unwrap();
        assert_eq!(r1.start_stop_id, StopId::from("S1"));
        assert_eq!(r1.end_stop_id, StopId::from("S2"));
        // two trips 20 minutes apart
        assert!((r1.headway_minutes - 20.0).abs() < 1e-9);
        assert_eq!(r1.vehicle_capacity, conf.default_vehicle_capacity);
        // a single trip has no observed headway
        let r2 = schedule.get_route(&RouteId::from("R2")).unwrap();
        assert_eq!(r2.headway_minutes, conf.default_headway_minutes);
        assert_eq!(r2.start_stop_id, StopId::from("S2"));
        assert_eq!(r2.end_stop_id, StopId::from("S3"));
    }

    #[test]
    fn test_read_rejects_bad_time() {
        let routes = "route_id\nR1\nR2\n";
        let bad_times = "trip_id,arrival_time,departure_time,stop_id,stop_sequence
T1,6am,06:00:00,S1,1
";
        let dir = write_feed(
            "bad_time",
            &[
                ("stops.txt", STOPS),
                ("routes.txt", routes),
                ("trips.txt", TRIPS),
                ("stop_times.txt", bad_times),
            ],
        );
        let result = read_schedule(&dir, &AnalysisConfiguration::default());
        assert!(matches!(
            result,
            Err(TransitNetCliError::GtfsParseError(_, _))
        ));
    }

    #[test]
    fn test_read_missing_file() {
        let dir = write_feed("missing", &[("stops.txt", STOPS)]);
        let result = read_schedule(&dir, &AnalysisConfiguration::default());
        assert!(matches!(result, Err(TransitNetCliError::CsvReadError(_, _))));
    }
}
