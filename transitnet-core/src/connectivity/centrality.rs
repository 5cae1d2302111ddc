use super::RankedStop;
use crate::graph::TransitGraph;

/// degree of each node divided by the number of other nodes. a graph with a
/// single node gives that node a centrality of 1.
pub fn degree_centrality(graph: &TransitGraph) -> Vec<f64> {
    let n = graph.n_nodes();
    if n <= 1 {
        return vec![1.0; n];
    }
    let scale = 1.0 / (n - 1) as f64;
    (0..n).map(|idx| graph.degree(idx) as f64 * scale).collect()
}

/// the `k` highest scoring stops, highest first. equal scores are ordered by
/// ascending stop id, which is the graph's node order.
pub fn rank_top_k(graph: &TransitGraph, scores: &[f64], k: usize) -> Vec<RankedStop> {
    let mut order = (0..scores.len().min(graph.n_nodes())).collect::<Vec<_>>();
    order.sort_by(|a, b| scores[*b].total_cmp(&scores[*a]).then(a.cmp(b)));
    order
        .into_iter()
        .take(k)
        .filter_map(|idx| {
            graph.stop_id(idx).map(|stop_id| RankedStop {
                stop_id: stop_id.clone(),
                score: scores[idx],
            })
        })
        .collect()
}
