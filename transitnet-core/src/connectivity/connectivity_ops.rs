use super::{
    betweenness_centrality, centrality, clustering, search, ConnectivityConfig,
    ConnectivityError, ConnectivityReport,
};
use crate::graph::TransitGraph;

/// computes the structural metrics and centrality rankings of a transit graph.
///
/// fails only when the graph has no nodes; no partial report is produced in that case.
pub fn analyze(
    graph: &TransitGraph,
    config: &ConnectivityConfig,
) -> Result<ConnectivityReport, ConnectivityError> {
    let n_nodes = graph.n_nodes();
    if n_nodes == 0 {
        return Err(ConnectivityError::EmptyGraph);
    }
    let n_edges = graph.n_edges();
    let average_degree = (2 * n_edges) as f64 / n_nodes as f64;
    let density = if n_nodes > 1 {
        (2 * n_edges) as f64 / (n_nodes * (n_nodes - 1)) as f64
    } else {
        0.0
    };

    let components = search::connected_components(graph);
    let is_connected = components.len() == 1;
    let diameter = if is_connected {
        search::diameter(graph, config.parallelize)
    } else {
        None
    };
    let average_clustering = clustering::average_clustering(graph);

    let degree_scores = centrality::degree_centrality(graph);
    let most_connected_stops = centrality::rank_top_k(graph, &degree_scores, config.top_k);

    log::debug!(
        "computing {} betweenness centrality over {n_nodes} nodes",
        config.betweenness_weighting
    );
    let betweenness_scores =
        betweenness_centrality(graph, config.betweenness_weighting, config.parallelize);
    let most_important_stops = centrality::rank_top_k(graph, &betweenness_scores, config.top_k);

    log::info!(
        "connectivity: {n_nodes} nodes, {n_edges} edges, {} component(s), diameter {:?}",
        components.len(),
        diameter
    );

    Ok(ConnectivityReport {
        n_nodes,
        n_edges,
        average_degree,
        is_connected,
        n_components: components.len(),
        diameter,
        average_clustering,
        density,
        most_connected_stops,
        most_important_stops,
        betweenness_weighting: config.betweenness_weighting,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{build, DistanceCalculationPolicy};
    use crate::model::{RouteId, StopId};
    use crate::test_fixtures::{line_schedule, trip};

    fn graph(nodes: &[&str], edges: &[(&str, &str)]) -> TransitGraph {
        let mut g = TransitGraph::new(nodes.iter().map(|s| StopId::from(*s)));
        for (a, b) in edges {
            g.upsert_edge(&StopId::from(*a), &StopId::from(*b), 1.0, &RouteId::from("R"))
                .unwrap();
        }
        g
    }

    #[test]
    fn test_empty_graph_fails() {
        let g = graph(&[], &[]);
        let result = analyze(&g, &ConnectivityConfig::default());
        assert_eq!(result, Err(ConnectivityError::EmptyGraph));
    }

    #[test]
    fn test_three_stop_path() {
        let schedule = line_schedule(&["A", "B", "C"], vec![trip("T1", "R1", &["A", "B", "C"])]);
        let built = build(&schedule, &DistanceCalculationPolicy::default()).unwrap();
        let report = analyze(&built.graph, &ConnectivityConfig::default()).unwrap();
        assert_eq!(report.n_nodes, 3);
        assert_eq!(report.n_edges, 2);
        assert!(report.is_connected);
        assert_eq!(report.n_components, 1);
        assert_eq!(report.diameter, Some(2));
        assert_eq!(report.average_clustering, 0.0);
        assert!((report.density - 2.0 / 3.0).abs() < 1e-12);
        assert!((report.average_degree - 4.0 / 3.0).abs() < 1e-12);
        assert_eq!(report.most_connected_stops[0].stop_id, StopId::from("B"));
        assert_eq!(report.most_important_stops[0].stop_id, StopId::from("B"));
        assert_eq!(report.most_important_stops[0].score, 1.0);
    }

    #[test]
    fn test_disconnected_graph_has_no_diameter() {
        let g = graph(&["A", "B", "C", "D"], &[("A", "B"), ("C", "D")]);
        let report = analyze(&g, &ConnectivityConfig::default()).unwrap();
        assert!(!report.is_connected);
        assert_eq!(report.n_components, 2);
        assert_eq!(report.diameter, None);
    }

    #[test]
    fn test_single_node() {
        let g = graph(&["A"], &[]);
        let report = analyze(&g, &ConnectivityConfig::default()).unwrap();
        assert!(report.is_connected);
        assert_eq!(report.diameter, Some(0));
        assert_eq!(report.density, 0.0);
        assert_eq!(report.average_degree, 0.0);
    }

    #[test]
    fn test_metric_bounds_and_average_degree_identity() {
        let g = graph(
            &["A", "B", "C", "D", "E", "F"],
            &[
                ("A", "B"),
                ("B", "C"),
                ("A", "C"),
                ("C", "D"),
                ("D", "E"),
                ("E", "F"),
                ("F", "D"),
            ],
        );
        let report = analyze(&g, &ConnectivityConfig::default()).unwrap();
        assert_eq!(
            report.average_degree,
            2.0 * report.n_edges as f64 / report.n_nodes as f64
        );
        assert!((0.0..=1.0).contains(&report.density));
        assert!((0.0..=1.0).contains(&report.average_clustering));
        assert!(report.diameter.unwrap_or_default() >= 1);
        assert_eq!(report.most_connected_stops.len(), 5);
        // C and D bridge the two triangles
        let top_two = report
            .most_important_stops
            .iter()
            .take(2)
            .map(|r| r.stop_id.0.as_str())
            .collect::<Vec<_>>();
        assert_eq!(top_two, vec!["C", "D"]);
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let g = graph(
            &["A", "B", "C", "D", "E"],
            &[("A", "B"), ("B", "C"), ("C", "D"), ("D", "E"), ("E", "A")],
        );
        let first = analyze(&g, &ConnectivityConfig::default()).unwrap();
        let second = analyze(&g, &ConnectivityConfig::default()).unwrap();
        assert_eq!(first, second);
    }
}
