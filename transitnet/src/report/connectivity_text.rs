use itertools::Itertools;
use transitnet_core::connectivity::{ConnectivityReport, RankedStop};

/// flat `key: value` rendering of a connectivity report, one metric per line.
pub fn connectivity_lines(report: &ConnectivityReport) -> Vec<String> {
    let diameter = report
        .diameter
        .map(|d| d.to_string())
        .unwrap_or_else(|| String::from("undefined"));
    vec![
        format!("num_nodes: {}", report.n_nodes),
        format!("num_edges: {}", report.n_edges),
        format!("average_degree: {:.4}", report.average_degree),
        format!("is_connected: {}", report.is_connected),
        format!("num_components: {}", report.n_components),
        format!("diameter: {diameter}"),
        format!("average_clustering: {:.4}", report.average_clustering),
        format!("density: {:.4}", report.density),
        format!(
            "most_connected_stops: {}",
            ranking(&report.most_connected_stops)
        ),
        format!(
            "most_important_stops: {}",
            ranking(&report.most_important_stops)
        ),
        format!("betweenness_weighting: {}", report.betweenness_weighting),
    ]
}

fn ranking(stops: &[RankedStop]) -> String {
    stops
        .iter()
        .map(|r| format!("{} ({:.4})", r.stop_id, r.score))
        .join(", ")
}
