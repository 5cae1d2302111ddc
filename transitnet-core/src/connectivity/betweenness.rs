use super::ShortestPathWeighting;
use crate::graph::{NodeIndex, TransitGraph};
use ordered_float::OrderedFloat;
use rayon::prelude::*;
use std::{
    cmp::Reverse,
    collections::{BinaryHeap, VecDeque},
};

/// number of source nodes accumulated together before partial sums are merged.
/// the chunk boundaries are fixed, so summation order does not depend on how
/// rayon schedules the chunks.
const SOURCE_CHUNK_SIZE: usize = 64;

/// shortest path structure from a single source, as used by Brandes' algorithm.
struct SingleSourcePaths {
    /// nodes in the order they were settled (non-decreasing distance)
    settled: Vec<NodeIndex>,
    /// predecessors of each node on shortest paths from the source
    predecessors: Vec<Vec<NodeIndex>>,
    /// number of shortest paths from the source to each node
    sigma: Vec<f64>,
}

/// normalized betweenness centrality of every node using Brandes' accumulation.
///
/// for graphs with more than two nodes, raw scores are scaled by
/// `1 / ((n - 1)(n - 2))`. each unordered pair of endpoints is visited from both
/// ends, so this yields the fraction of shortest paths between other node pairs
/// that pass through the node.
pub fn betweenness_centrality(
    graph: &TransitGraph,
    weighting: ShortestPathWeighting,
    parallelize: bool,
) -> Vec<f64> {
    let n = graph.n_nodes();
    let sources = (0..n).collect::<Vec<_>>();
    let accumulate_chunk = |chunk: &[NodeIndex]| -> Vec<f64> {
        let mut partial = vec![0.0; n];
        for &source in chunk {
            accumulate_source(graph, source, weighting, &mut partial);
        }
        partial
    };

    let partials: Vec<Vec<f64>> = if parallelize {
        sources
            .par_chunks(SOURCE_CHUNK_SIZE)
            .map(accumulate_chunk)
            .collect()
    } else {
        sources
            .chunks(SOURCE_CHUNK_SIZE)
            .map(accumulate_chunk)
            .collect()
    };

    let mut betweenness = vec![0.0; n];
    for partial in partials.iter() {
        for (total, value) in betweenness.iter_mut().zip(partial.iter()) {
            *total += value;
        }
    }

    if n > 2 {
        let scale = 1.0 / ((n - 1) * (n - 2)) as f64;
        for value in betweenness.iter_mut() {
            *value *= scale;
        }
    }
    betweenness
}

/// adds the pair dependencies of `source` to `betweenness`.
fn accumulate_source(
    graph: &TransitGraph,
    source: NodeIndex,
    weighting: ShortestPathWeighting,
    betweenness: &mut [f64],
) {
    let paths = match weighting {
        ShortestPathWeighting::Unweighted => shortest_paths_unweighted(graph, source),
        ShortestPathWeighting::Weighted => shortest_paths_weighted(graph, source),
    };
    let mut delta = vec![0.0; graph.n_nodes()];
    for &w in paths.settled.iter().rev() {
        let coefficient = (1.0 + delta[w]) / paths.sigma[w];
        for &v in paths.predecessors[w].iter() {
            delta[v] += paths.sigma[v] * coefficient;
        }
        if w != source {
            betweenness[w] += delta[w];
        }
    }
}

fn shortest_paths_unweighted(graph: &TransitGraph, source: NodeIndex) -> SingleSourcePaths {
    let n = graph.n_nodes();
    let mut settled = Vec::with_capacity(n);
    let mut predecessors = vec![vec![]; n];
    let mut sigma = vec![0.0; n];
    let mut hops: Vec<Option<usize>> = vec![None; n];
    sigma[source] = 1.0;
    hops[source] = Some(0);

    let mut frontier = VecDeque::from([source]);
    while let Some(v) = frontier.pop_front() {
        settled.push(v);
        let v_hops = hops[v].unwrap_or_default();
        for w in graph.neighbors(v) {
            if hops[w].is_none() {
                hops[w] = Some(v_hops + 1);
                frontier.push_back(w);
            }
            if hops[w] == Some(v_hops + 1) {
                sigma[w] += sigma[v];
                predecessors[w].push(v);
            }
        }
    }

    SingleSourcePaths {
        settled,
        predecessors,
        sigma,
    }
}

fn shortest_paths_weighted(graph: &TransitGraph, source: NodeIndex) -> SingleSourcePaths {
    let n = graph.n_nodes();
    let mut settled = Vec::with_capacity(n);
    let mut predecessors: Vec<Vec<NodeIndex>> = vec![vec![]; n];
    let mut sigma = vec![0.0; n];
    let mut dist: Vec<Option<f64>> = vec![None; n];
    let mut seen: Vec<Option<f64>> = vec![None; n];
    sigma[source] = 1.0;
    seen[source] = Some(0.0);

    // entries are (distance, insertion counter, node, node that pushed it). the counter
    // keeps pops of equal distance in insertion order.
    let mut counter: usize = 0;
    let mut heap = BinaryHeap::new();
    heap.push(Reverse((OrderedFloat(0.0), counter, source, source)));

    while let Some(Reverse((OrderedFloat(d), _, v, pred))) = heap.pop() {
        if dist[v].is_some() {
            continue;
        }
        if v != source {
            sigma[v] += sigma[pred];
        }
        settled.push(v);
        dist[v] = Some(d);
        for (w, weight) in graph.weighted_neighbors(v) {
            let vw_dist = d + weight;
            let improves = match seen[w] {
                None => true,
                Some(current) => vw_dist < current,
            };
            if dist[w].is_none() && improves {
                seen[w] = Some(vw_dist);
                counter += 1;
                heap.push(Reverse((OrderedFloat(vw_dist), counter, w, v)));
                sigma[w] = 0.0;
                predecessors[w] = vec![v];
            } else if seen[w] == Some(vw_dist) {
                sigma[w] += sigma[v];
                predecessors[w].push(v);
            }
        }
    }

    SingleSourcePaths {
        settled,
        predecessors,
        sigma,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RouteId, StopId};

    fn graph(nodes: &[&str], edges: &[(&str, &str, f64)]) -> TransitGraph {
        let mut g = TransitGraph::new(nodes.iter().map(|s| StopId::from(*s)));
        for (a, b, w) in edges {
            g.upsert_edge(&StopId::from(*a), &StopId::from(*b), *w, &RouteId::from("R"))
                .unwrap();
        }
        g
    }

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected.iter()) {
            assert!((a - e).abs() < 1e-12, "{actual:?} != {expected:?}");
        }
    }

    #[test]
    fn test_path_midpoint() {
        let g = graph(&["A", "B", "C"], &[("A", "B", 1.0), ("B", "C", 1.0)]);
        let bc = betweenness_centrality(&g, ShortestPathWeighting::Unweighted, false);
        assert_close(&bc, &[0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_square_splits_paths() {
        // 4-cycle A-B-C-D-A: each node lies on one of two shortest paths between
        // its two neighbors
        let g = graph(
            &["A", "B", "C", "D"],
            &[
                ("A", "B", 1.0),
                ("B", "C", 1.0),
                ("C", "D", 1.0),
                ("D", "A", 1.0),
            ],
        );
        let bc = betweenness_centrality(&g, ShortestPathWeighting::Unweighted, true);
        let expected = 1.0 / 6.0;
        assert_close(&bc, &[expected; 4]);
    }

    #[test]
    fn test_weighted_prefers_short_detour() {
        // direct A-C hop is long; the weighted shortest path detours through B
        let g = graph(
            &["A", "B", "C"],
            &[("A", "B", 1.0), ("B", "C", 1.0), ("A", "C", 5.0)],
        );
        let unweighted = betweenness_centrality(&g, ShortestPathWeighting::Unweighted, false);
        let weighted = betweenness_centrality(&g, ShortestPathWeighting::Weighted, false);
        assert_close(&unweighted, &[0.0, 0.0, 0.0]);
        assert_close(&weighted, &[0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        // a ladder large enough to span several source chunks
        let names = (0..150).map(|i| format!("S{i:03}")).collect::<Vec<_>>();
        let mut g = TransitGraph::new(names.iter().map(|s| StopId(s.clone())));
        for i in 0..names.len() {
            for j in [i + 1, i + 2] {
                if j < names.len() {
                    g.upsert_edge(
                        &StopId(names[i].clone()),
                        &StopId(names[j].clone()),
                        1.0 + (i % 7) as f64,
                        &RouteId::from("R"),
                    )
                    .unwrap();
                }
            }
        }
        for weighting in [ShortestPathWeighting::Unweighted, ShortestPathWeighting::Weighted] {
            let sequential = betweenness_centrality(&g, weighting, false);
            let parallel = betweenness_centrality(&g, weighting, true);
            assert_eq!(sequential, parallel);
            assert!(sequential.iter().all(|v| (0.0..=1.0).contains(v)));
        }
    }
}
