use crate::model::RouteId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// a direct connection between two stops, collapsed over every trip that
/// makes the hop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitEdge {
    /// shortest observed distance between the two stops in kilometers
    pub weight_km: f64,
    /// every route with at least one trip traversing this connection
    pub routes: BTreeSet<RouteId>,
}

impl TransitEdge {
    pub fn new(weight_km: f64, route_id: RouteId) -> TransitEdge {
        TransitEdge {
            weight_km,
            routes: BTreeSet::from([route_id]),
        }
    }

    /// folds another observation of this connection into the edge.
    pub fn merge(&mut self, weight_km: f64, route_id: RouteId) {
        self.weight_km = self.weight_km.min(weight_km);
        self.routes.insert(route_id);
    }
}
