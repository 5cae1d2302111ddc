use super::{RouteId, ScheduleTime, StopId, TripId};

/// a single visit of a trip to a stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopTime {
    pub stop_id: StopId,
    pub arrival: ScheduleTime,
    pub departure: ScheduleTime,
    /// 1-based position of this visit along the trip
    pub stop_sequence: u32,
}

impl StopTime {
    pub fn new(
        stop_id: StopId,
        arrival: ScheduleTime,
        departure: ScheduleTime,
        stop_sequence: u32,
    ) -> StopTime {
        StopTime {
            stop_id,
            arrival,
            departure,
            stop_sequence,
        }
    }
}

/// one concrete scheduled run of a route. stop times are stored as provided and
/// may be out of order; ordering and validation happen during graph construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trip {
    pub trip_id: TripId,
    pub route_id: RouteId,
    pub stop_times: Vec<StopTime>,
}

impl Trip {
    pub fn new(trip_id: TripId, route_id: RouteId, stop_times: Vec<StopTime>) -> Trip {
        Trip {
            trip_id,
            route_id,
            stop_times,
        }
    }

    /// the stop time with the lowest sequence index, if any
    pub fn first_stop_time(&self) -> Option<&StopTime> {
        self.stop_times.iter().min_by_key(|st| st.stop_sequence)
    }

    /// the stop time with the highest sequence index, if any
    pub fn last_stop_time(&self) -> Option<&StopTime> {
        self.stop_times.iter().max_by_key(|st| st.stop_sequence)
    }

    /// departure time from the first stop of this trip
    pub fn first_departure(&self) -> Option<ScheduleTime> {
        self.first_stop_time().map(|st| st.departure)
    }
}
