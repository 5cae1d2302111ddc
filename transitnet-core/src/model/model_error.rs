use super::{RouteId, StopId, TripId};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("stop '{0}' has latitude {1} outside of [-90, 90]")]
    InvalidLatitude(StopId, f64),
    #[error("stop '{0}' has longitude {1} outside of [-180, 180]")]
    InvalidLongitude(StopId, f64),
    #[error("stop id '{0}' appears more than once in the schedule")]
    DuplicateStopId(StopId),
    #[error("route id '{0}' appears more than once in the schedule")]
    DuplicateRouteId(RouteId),
    #[error("trip id '{0}' appears more than once in the schedule")]
    DuplicateTripId(TripId),
    #[error("trip '{0}' references route '{1}' not found in schedule")]
    TripMissingRoute(TripId, RouteId),
    #[error("trip '{0}' references stop '{1}' not found in schedule")]
    TripMissingStop(TripId, StopId),
    #[error("unable to parse schedule time '{0}': {1}")]
    InvalidScheduleTime(String, String),
}
