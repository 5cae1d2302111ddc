use super::{filenames, RouteRow, StopRow, StopTimeRow, TripRow};
use crate::{
    report::{create_csv_writer, create_directory},
    TransitNetCliError,
};
use serde::Serialize;
use std::path::Path;
use transitnet_core::{
    graph::get_ordered_stop_times,
    model::{Route, ScheduleModel, Stop, Trip},
};

const SERVICE_ID: &str = "WEEKDAY";

/// writes a schedule as stops.txt, routes.txt, trips.txt and stop_times.txt, including
/// the demand and operating parameter extension columns read by `read_schedule`.
pub fn write_schedule(
    schedule: &ScheduleModel,
    directory: &Path,
    overwrite: bool,
) -> Result<(), TransitNetCliError> {
    create_directory(directory)?;
    write_rows(
        directory,
        filenames::STOPS,
        schedule.stops().values().map(StopRow::from),
        overwrite,
    )?;
    write_rows(
        directory,
        filenames::ROUTES,
        schedule.routes().values().map(RouteRow::from),
        overwrite,
    )?;
    write_rows(
        directory,
        filenames::TRIPS,
        schedule.trips().values().map(TripRow::from),
        overwrite,
    )?;
    let rows = schedule
        .trips()
        .values()
        .flat_map(stop_time_rows)
        .collect::<Vec<_>>();
    write_rows(
        directory,
        filenames::STOP_TIMES,
        rows.into_iter(),
        overwrite,
    )?;
    log::info!(
        "wrote {} stops, {} routes, {} trips to {}",
        schedule.stops().len(),
        schedule.routes().len(),
        schedule.trips().len(),
        directory.display()
    );
    Ok(())
}

/// stop times of a trip in sequence order. trips that do not order cleanly are
/// written as stored.
fn stop_time_rows(trip: &Trip) -> Vec<StopTimeRow> {
    let ordered = match get_ordered_stop_times(trip) {
        Ok(ordered) => ordered,
        Err(_) => trip.stop_times.iter().collect(),
    };
    ordered
        .into_iter()
        .map(|st| StopTimeRow {
            trip_id: trip.trip_id.to_string(),
            arrival_time: st.arrival.to_string(),
            departure_time: st.departure.to_string(),
            stop_id: st.stop_id.to_string(),
            stop_sequence: st.stop_sequence,
        })
        .collect()
}

fn write_rows<T: Serialize>(
    directory: &Path,
    filename: &str,
    rows: impl Iterator<Item = T>,
    overwrite: bool,
) -> Result<(), TransitNetCliError> {
    let Some((_, mut writer)) = create_csv_writer(directory, filename, overwrite, false)? else {
        return Ok(());
    };
    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| TransitNetCliError::CsvWriteError(String::from(filename), e))?;
    }
    writer.flush()?;
    Ok(())
}

impl From<&Stop> for StopRow {
    fn from(value: &Stop) -> Self {
        StopRow {
            stop_id: value.stop_id.to_string(),
            stop_name: Some(value.name.clone()),
            stop_lat: value.lat,
            stop_lon: value.lon,
            zone_id: value.zone_id.clone(),
            daily_passengers: Some(value.daily_passengers),
        }
    }
}

impl From<&Route> for RouteRow {
    fn from(value: &Route) -> Self {
        RouteRow {
            route_id: value.route_id.to_string(),
            agency_id: value.agency_id.clone(),
            route_short_name: None,
            route_long_name: Some(value.name.clone()),
            start_stop_id: Some(value.start_stop_id.to_string()),
            end_stop_id: Some(value.end_stop_id.to_string()),
            current_headway: Some(value.headway_minutes),
            vehicle_capacity: Some(value.vehicle_capacity),
            avg_travel_time: value.avg_travel_time_minutes,
        }
    }
}

impl From<&Trip> for TripRow {
    fn from(value: &Trip) -> Self {
        TripRow {
            route_id: value.route_id.to_string(),
            service_id: Some(String::from(SERVICE_ID)),
            trip_id: value.trip_id.to_string(),
        }
    }
}
