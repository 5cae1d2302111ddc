use super::{FrequencyError, FrequencyOutcomes, FrequencyRecommendation, HeadwayPolicy};
use crate::model::{Route, Stop, StopId};
use indexmap::IndexMap;

/// recommends a headway for every route from the demand at its two terminals.
///
/// each route is handled independently. a route that fails validation or refers to
/// an unknown stop yields an error in its slot and does not affect the others. output
/// order matches input order and the result depends only on the inputs.
pub fn optimize<'a>(
    routes: impl IntoIterator<Item = &'a Route>,
    stops: &IndexMap<StopId, Stop>,
    policy: &HeadwayPolicy,
) -> FrequencyOutcomes {
    let outcomes = routes
        .into_iter()
        .map(|route| {
            let result = recommend(route, stops, policy);
            if let Err(e) = &result {
                log::warn!("skipping frequency optimization: {e}");
            }
            result
        })
        .collect::<Vec<_>>();
    let outcomes = FrequencyOutcomes(outcomes);
    log::info!("frequency optimization {}", outcomes.summary());
    outcomes
}

/// recommendation for a single route. see [`optimize`].
pub fn recommend(
    route: &Route,
    stops: &IndexMap<StopId, Stop>,
    policy: &HeadwayPolicy,
) -> Result<FrequencyRecommendation, FrequencyError> {
    if !(route.headway_minutes > 0.0) || !route.headway_minutes.is_finite() {
        return Err(FrequencyError::InvalidRoute {
            route_id: route.route_id.clone(),
            reason: format!("headway must be positive, found {}", route.headway_minutes),
        });
    }
    if route.vehicle_capacity <= 0 {
        return Err(FrequencyError::InvalidRoute {
            route_id: route.route_id.clone(),
            reason: format!(
                "vehicle capacity must be positive, found {}",
                route.vehicle_capacity
            ),
        });
    }
    let demand_at = |stop_id: &StopId| {
        stops
            .get(stop_id)
            .map(|s| s.daily_passengers as f64)
            .ok_or_else(|| FrequencyError::UnknownStop {
                route_id: route.route_id.clone(),
                stop_id: stop_id.clone(),
            })
    };
    let start_demand = demand_at(&route.start_stop_id)?;
    let end_demand = demand_at(&route.end_stop_id)?;
    let avg_demand = (start_demand + end_demand) / 2.0;

    let capacity = route.vehicle_capacity as f64;
    let recommended_headway = policy.recommend_headway(avg_demand);
    let current_utilization =
        avg_demand / policy.capacity_per_day(capacity, route.headway_minutes);
    let recommended_utilization =
        avg_demand / policy.capacity_per_day(capacity, recommended_headway as f64);
    let efficiency_gain = (recommended_utilization - current_utilization) * 100.0;

    Ok(FrequencyRecommendation {
        route_id: route.route_id.clone(),
        route_name: route.name.clone(),
        current_headway: route.headway_minutes,
        recommended_headway,
        current_utilization: round_one_decimal(current_utilization * 100.0),
        recommended_utilization: round_one_decimal(recommended_utilization * 100.0),
        efficiency_gain: round_one_decimal(efficiency_gain),
    })
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
