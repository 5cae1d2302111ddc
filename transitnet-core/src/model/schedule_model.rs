use super::{ModelError, Route, RouteId, Stop, StopId, Trip, TripId};
use indexmap::IndexMap;
use itertools::Itertools;

/// the typed schedule snapshot that every analysis in this crate runs against.
/// collections preserve the order in which entities were provided.
#[derive(Debug, Clone, Default)]
pub struct ScheduleModel {
    stops: IndexMap<StopId, Stop>,
    routes: IndexMap<RouteId, Route>,
    trips: IndexMap<TripId, Trip>,
}

impl ScheduleModel {
    /// assembles a schedule, confirming that identifiers are unique, coordinates are
    /// valid, and that every trip refers to a known route and known stops.
    pub fn new(
        stops: Vec<Stop>,
        routes: Vec<Route>,
        trips: Vec<Trip>,
    ) -> Result<ScheduleModel, ModelError> {
        let mut stop_lookup: IndexMap<StopId, Stop> = IndexMap::with_capacity(stops.len());
        for stop in stops.into_iter() {
            stop.validate()?;
            if stop_lookup.contains_key(&stop.stop_id) {
                return Err(ModelError::DuplicateStopId(stop.stop_id));
            }
            stop_lookup.insert(stop.stop_id.clone(), stop);
        }

        let mut route_lookup: IndexMap<RouteId, Route> = IndexMap::with_capacity(routes.len());
        for route in routes.into_iter() {
            if route_lookup.contains_key(&route.route_id) {
                return Err(ModelError::DuplicateRouteId(route.route_id));
            }
            route_lookup.insert(route.route_id.clone(), route);
        }

        let mut trip_lookup: IndexMap<TripId, Trip> = IndexMap::with_capacity(trips.len());
        for trip in trips.into_iter() {
            if !route_lookup.contains_key(&trip.route_id) {
                return Err(ModelError::TripMissingRoute(trip.trip_id, trip.route_id));
            }
            if let Some(st) = trip
                .stop_times
                .iter()
                .find(|st| !stop_lookup.contains_key(&st.stop_id))
            {
                return Err(ModelError::TripMissingStop(
                    trip.trip_id.clone(),
                    st.stop_id.clone(),
                ));
            }
            if trip_lookup.contains_key(&trip.trip_id) {
                return Err(ModelError::DuplicateTripId(trip.trip_id));
            }
            trip_lookup.insert(trip.trip_id.clone(), trip);
        }

        Ok(ScheduleModel {
            stops: stop_lookup,
            routes: route_lookup,
            trips: trip_lookup,
        })
    }

    pub fn stops(&self) -> &IndexMap<StopId, Stop> {
        &self.stops
    }

    pub fn routes(&self) -> &IndexMap<RouteId, Route> {
        &self.routes
    }

    pub fn trips(&self) -> &IndexMap<TripId, Trip> {
        &self.trips
    }

    pub fn get_stop(&self, stop_id: &StopId) -> Option<&Stop> {
        self.stops.get(stop_id)
    }

    pub fn get_route(&self, route_id: &RouteId) -> Option<&Route> {
        self.routes.get(route_id)
    }

    /// trips belonging to a route, in schedule order
    pub fn trips_for_route<'a>(&'a self, route_id: &'a RouteId) -> impl Iterator<Item = &'a Trip> {
        self.trips.values().filter(move |t| &t.route_id == route_id)
    }

    /// number of distinct agencies referenced by routes.
    pub fn n_agencies(&self) -> usize {
        self.routes
            .values()
            .filter_map(|r| r.agency_id.as_ref())
            .unique()
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ScheduleTime, StopTime};
    use crate::test_fixtures::{route, stop};

    #[test]
    fn test_rejects_duplicate_stop() {
        let result = ScheduleModel::new(
            vec![stop("A", 0.0, 0.0, 0), stop("A", 1.0, 1.0, 0)],
            vec![],
            vec![],
        );
        assert_eq!(
            result.unwrap_err(),
            ModelError::DuplicateStopId(StopId::from("A"))
        );
    }

    #[test]
    fn test_rejects_trip_with_unknown_stop() {
        let trip = Trip::new(
            TripId::from("T1"),
            RouteId::from("R1"),
            vec![StopTime::new(
                StopId::from("Z"),
                ScheduleTime(0),
                ScheduleTime(0),
                1,
            )],
        );
        let result = ScheduleModel::new(
            vec![stop("A", 0.0, 0.0, 0), stop("B", 0.0, 0.1, 0)],
            vec![route("R1", "A", "B", 5.0, 80)],
            vec![trip],
        );
        assert_eq!(
            result.unwrap_err(),
            ModelError::TripMissingStop(TripId::from("T1"), StopId::from("Z"))
        );
    }

    #[test]
    fn test_rejects_trip_with_unknown_route() {
        let trip = Trip::new(TripId::from("T1"), RouteId::from("R9"), vec![]);
        let result = ScheduleModel::new(vec![stop("A", 0.0, 0.0, 0)], vec![], vec![trip]);
        assert!(matches!(result, Err(ModelError::TripMissingRoute(_, _))));
    }

    #[test]
    fn test_preserves_insertion_order() {
        let schedule = ScheduleModel::new(
            vec![stop("C", 0.0, 0.0, 0), stop("A", 0.0, 0.1, 0)],
            vec![
                route("R2", "C", "A", 5.0, 80),
                route("R1", "A", "C", 5.0, 80),
            ],
            vec![],
        )
        .unwrap();
        let stop_ids = schedule.stops().keys().map(|s| s.0.as_str()).collect::<Vec<_>>();
        assert_eq!(stop_ids, vec!["C", "A"]);
        let route_ids = schedule.routes().keys().map(|r| r.0.as_str()).collect::<Vec<_>>();
        assert_eq!(route_ids, vec!["R2", "R1"]);
    }
}
