use crate::model::{StopId, TripId};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("trip '{trip_id}' is malformed: {reason}")]
    MalformedTrip { trip_id: TripId, reason: String },
    #[error("attempting to get node '{0}' not in graph")]
    GraphMissingNodeId(StopId),
    #[error("stop '{0}' referenced by a trip is missing from the schedule")]
    ScheduleMissingStop(StopId),
}
