use crate::graph::{NodeIndex, TransitGraph};
use itertools::Itertools;

/// fraction of pairs of neighbors of `node` that are themselves adjacent. nodes
/// with fewer than two neighbors have a coefficient of 0.
pub fn local_clustering(graph: &TransitGraph, node: NodeIndex) -> f64 {
    let degree = graph.degree(node);
    if degree < 2 {
        return 0.0;
    }
    let neighbors = graph.neighbors(node).collect::<Vec<_>>();
    let links = neighbors
        .iter()
        .tuple_combinations()
        .filter(|(u, v)| graph.is_adjacent(**u, **v))
        .count();
    let possible = degree * (degree - 1) / 2;
    links as f64 / possible as f64
}

/// mean of [`local_clustering`] over every node, or 0 for an empty graph.
pub fn average_clustering(graph: &TransitGraph) -> f64 {
    let n = graph.n_nodes();
    if n == 0 {
        return 0.0;
    }
    let total: f64 = (0..n).map(|idx| local_clustering(graph, idx)).sum();
    total / n as f64
}
