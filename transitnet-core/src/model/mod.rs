mod identifiers;
mod model_error;
mod route;
mod schedule_model;
mod schedule_time;
mod stop;
mod trip;

pub use identifiers::{RouteId, StopId, TripId};
pub use model_error::ModelError;
pub use route::Route;
pub use schedule_model::ScheduleModel;
pub use schedule_time::ScheduleTime;
pub use stop::Stop;
pub use trip::{StopTime, Trip};
