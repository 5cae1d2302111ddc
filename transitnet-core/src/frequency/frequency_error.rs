use crate::model::{RouteId, StopId};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FrequencyError {
    #[error("route '{route_id}' references stop '{stop_id}' which has no demand data")]
    UnknownStop { route_id: RouteId, stop_id: StopId },
    #[error("route '{route_id}' is invalid: {reason}")]
    InvalidRoute { route_id: RouteId, reason: String },
}

impl FrequencyError {
    pub fn route_id(&self) -> &RouteId {
        match self {
            FrequencyError::UnknownStop { route_id, .. } => route_id,
            FrequencyError::InvalidRoute { route_id, .. } => route_id,
        }
    }
}
