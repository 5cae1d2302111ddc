//! reading and writing the GTFS-like directory format consumed by `transitnet analyze`.
mod gtfs_reader;
mod gtfs_rows;
mod gtfs_writer;

pub use gtfs_reader::read_schedule;
pub use gtfs_rows::{RouteRow, StopRow, StopTimeRow, TripRow};
pub use gtfs_writer::write_schedule;

pub mod filenames {
    pub const STOPS: &str = "stops.txt";
    pub const ROUTES: &str = "routes.txt";
    pub const TRIPS: &str = "trips.txt";
    pub const STOP_TIMES: &str = "stop_times.txt";
}
