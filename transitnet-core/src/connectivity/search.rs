use crate::graph::{NodeIndex, TransitGraph};
use rayon::prelude::*;
use std::collections::VecDeque;

/// hop count from `src` to every node using breadth-first search over the
/// undirected graph. unreachable nodes are `None`.
pub fn bfs_hops(graph: &TransitGraph, src: NodeIndex) -> Vec<Option<usize>> {
    let mut hops: Vec<Option<usize>> = vec![None; graph.n_nodes()];
    if src >= graph.n_nodes() {
        return hops;
    }
    let mut frontier: VecDeque<NodeIndex> = VecDeque::new();
    hops[src] = Some(0);
    frontier.push_back(src);

    while let Some(next_id) = frontier.pop_front() {
        let next_hops = hops[next_id].unwrap_or_default() + 1;
        for neighbor in graph.neighbors(next_id) {
            if hops[neighbor].is_none() {
                hops[neighbor] = Some(next_hops);
                frontier.push_back(neighbor);
            }
        }
    }
    hops
}

/// partitions the nodes into connected components. each component lists its
/// nodes in ascending order and components are ordered by their smallest node.
pub fn connected_components(graph: &TransitGraph) -> Vec<Vec<NodeIndex>> {
    let mut assigned = vec![false; graph.n_nodes()];
    let mut components = vec![];
    for root in 0..graph.n_nodes() {
        if assigned[root] {
            continue;
        }
        let mut component = vec![];
        let mut frontier: VecDeque<NodeIndex> = VecDeque::from([root]);
        assigned[root] = true;
        while let Some(next_id) = frontier.pop_front() {
            component.push(next_id);
            for neighbor in graph.neighbors(next_id) {
                if !assigned[neighbor] {
                    assigned[neighbor] = true;
                    frontier.push_back(neighbor);
                }
            }
        }
        component.sort_unstable();
        components.push(component);
    }
    components
}

/// the largest eccentricity over all nodes, measured in hops. only defined for a
/// connected, non-empty graph; otherwise `None`.
pub fn diameter(graph: &TransitGraph, parallelize: bool) -> Option<usize> {
    let eccentricity = |src: NodeIndex| -> Option<usize> {
        bfs_hops(graph, src)
            .into_iter()
            .collect::<Option<Vec<_>>>()
            .and_then(|hops| hops.into_iter().max())
    };
    let n = graph.n_nodes();
    if n == 0 {
        return None;
    }
    let eccentricities: Option<Vec<usize>> = if parallelize {
        (0..n).into_par_iter().map(eccentricity).collect()
    } else {
        (0..n).map(eccentricity).collect()
    };
    eccentricities.and_then(|e| e.into_iter().max())
}
