use serde::Serialize;
use transitnet_core::frequency::FrequencyOutcomes;

/// a rule-based finding derived from the optimization results.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Insight {
    pub category: String,
    pub insight: String,
    pub action: String,
}

/// insights over the routes that produced a recommendation. routes that failed
/// optimization are not considered. returns an empty list when nothing succeeded.
pub fn generate_insights(outcomes: &FrequencyOutcomes) -> Vec<Insight> {
    let recommendations = outcomes.recommendations();
    if recommendations.is_empty() {
        return vec![];
    }
    let mut insights = vec![];

    let avg_gain = recommendations
        .iter()
        .map(|r| r.efficiency_gain)
        .sum::<f64>()
        / recommendations.len() as f64;
    insights.push(Insight {
        category: String::from("Route Optimization"),
        insight: format!(
            "Average efficiency gain of {avg_gain:.1}% achievable through frequency optimization"
        ),
        action: String::from("Implement dynamic frequency adjustment based on demand patterns"),
    });

    if let Some(under) = recommendations
        .iter()
        .min_by(|a, b| a.current_utilization.total_cmp(&b.current_utilization))
    {
        insights.push(Insight {
            category: String::from("Resource Allocation"),
            insight: format!(
                "{} has only {}% capacity utilization",
                under.route_name, under.current_utilization
            ),
            action: format!(
                "Adjust headway from {} to {} minutes",
                under.current_headway, under.recommended_headway
            ),
        });
    }
    insights
}

#[cfg(test)]
mod tests {
    use super::*;
    use transitnet_core::frequency::{FrequencyError, FrequencyRecommendation};
    use transitnet_core::model::RouteId;

    fn rec(id: &str, current_utilization: f64, efficiency_gain: f64) -> FrequencyRecommendation {
        FrequencyRecommendation {
            route_id: RouteId::from(id),
            route_name: format!("route {id}"),
            current_headway: 15.0,
            recommended_headway: 5,
            current_utilization,
            recommended_utilization: current_utilization + efficiency_gain,
            efficiency_gain,
        }
    }

    #[test]
    fn test_insights() {
        let outcomes = FrequencyOutcomes(vec![
            Ok(rec("R1", 87.9, 158.2)),
            Err(FrequencyError::InvalidRoute {
                route_id: RouteId::from("R2"),
                reason: String::from("headway must be positive, found 0"),
            }),
            Ok(rec("R3", 24.4, -10.0)),
        ]);
        let insights = generate_insights(&outcomes);
        assert_eq!(insights.len(), 2);
        assert_eq!(
            insights[0].insight,
            "Average efficiency gain of 74.1% achievable through frequency optimization"
        );
        assert_eq!(
            insights[1].insight,
            "route R3 has only 24.4% capacity utilization"
        );
        assert_eq!(insights[1].action, "Adjust headway from 15 to 5 minutes");
    }

    #[test]
    fn test_no_insights_without_recommendations() {
        assert!(generate_insights(&FrequencyOutcomes::default()).is_empty());
    }
}
