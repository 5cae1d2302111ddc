use super::{GraphError, NodeIndex, StopPair, TransitEdge};
use crate::model::{RouteId, StopId};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// undirected simple graph of stops connected by direct hops.
///
/// nodes refer to stops by identifier only; stop attributes are resolved through
/// the [`crate::model::ScheduleModel`] the graph was built from. nodes are held in
/// ascending identifier order so that every traversal over the graph is deterministic.
#[derive(Debug, Clone, Default)]
pub struct TransitGraph {
    nodes: Vec<StopId>,
    node_index: HashMap<StopId, NodeIndex>,
    edges: BTreeMap<StopPair, TransitEdge>,
    /// neighbor index to edge weight in kilometers, mirrored on both endpoints
    adj: Vec<BTreeMap<NodeIndex, f64>>,
}

/// whether [`TransitGraph::upsert_edge`] added a new connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeUpdate {
    Inserted,
    Merged,
}

impl TransitGraph {
    /// creates a graph with one node per distinct stop id and no edges.
    pub fn new(stop_ids: impl IntoIterator<Item = StopId>) -> TransitGraph {
        let nodes = stop_ids.into_iter().collect::<BTreeSet<_>>();
        let nodes = nodes.into_iter().collect::<Vec<_>>();
        let node_index = nodes
            .iter()
            .enumerate()
            .map(|(idx, id)| (id.clone(), idx))
            .collect();
        let adj = vec![BTreeMap::new(); nodes.len()];
        TransitGraph {
            nodes,
            node_index,
            edges: BTreeMap::new(),
            adj,
        }
    }

    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn n_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn nodes(&self) -> &[StopId] {
        &self.nodes
    }

    pub fn node_index(&self, stop_id: &StopId) -> Option<NodeIndex> {
        self.node_index.get(stop_id).copied()
    }

    pub fn stop_id(&self, idx: NodeIndex) -> Option<&StopId> {
        self.nodes.get(idx)
    }

    pub fn get_edge(&self, a: &StopId, b: &StopId) -> Option<&TransitEdge> {
        self.edges.get(&StopPair::new(a.clone(), b.clone()))
    }

    /// edges in ascending stop pair order
    pub fn edges(&self) -> impl Iterator<Item = (&StopPair, &TransitEdge)> {
        self.edges.iter()
    }

    /// neighbors of a node in ascending index order. an unknown index has no neighbors.
    pub fn neighbors(&self, idx: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.adj.get(idx).into_iter().flat_map(|n| n.keys().copied())
    }

    /// neighbors of a node with the weight of the connecting edge, in ascending index order.
    pub fn weighted_neighbors(&self, idx: NodeIndex) -> impl Iterator<Item = (NodeIndex, f64)> + '_ {
        self.adj
            .get(idx)
            .into_iter()
            .flat_map(|n| n.iter().map(|(v, w)| (*v, *w)))
    }

    pub fn degree(&self, idx: NodeIndex) -> usize {
        self.adj.get(idx).map(|n| n.len()).unwrap_or_default()
    }

    pub fn is_adjacent(&self, u: NodeIndex, v: NodeIndex) -> bool {
        self.adj.get(u).map(|n| n.contains_key(&v)).unwrap_or_default()
    }

    /// edge weight in kilometers between two adjacent nodes
    pub fn weight(&self, u: NodeIndex, v: NodeIndex) -> Option<f64> {
        self.adj.get(u)?.get(&v).copied()
    }

    /// inserts a connection between two stops, or folds the observation into the
    /// existing edge (minimum weight, union of routes). callers must not pass a loop.
    pub fn upsert_edge(
        &mut self,
        src: &StopId,
        dst: &StopId,
        weight_km: f64,
        route_id: &RouteId,
    ) -> Result<EdgeUpdate, GraphError> {
        let src_idx = self
            .node_index(src)
            .ok_or_else(|| GraphError::GraphMissingNodeId(src.clone()))?;
        let dst_idx = self
            .node_index(dst)
            .ok_or_else(|| GraphError::GraphMissingNodeId(dst.clone()))?;
        let key = StopPair::new(src.clone(), dst.clone());
        match self.edges.get_mut(&key) {
            Some(edge) => {
                edge.merge(weight_km, route_id.clone());
                let merged = edge.weight_km;
                self.adj[src_idx].insert(dst_idx, merged);
                self.adj[dst_idx].insert(src_idx, merged);
                Ok(EdgeUpdate::Merged)
            }
            None => {
                self.edges
                    .insert(key, TransitEdge::new(weight_km, route_id.clone()));
                self.adj[src_idx].insert(dst_idx, weight_km);
                self.adj[dst_idx].insert(src_idx, weight_km);
                Ok(EdgeUpdate::Inserted)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(v: &[&str]) -> Vec<StopId> {
        v.iter().map(|s| StopId::from(*s)).collect()
    }

    #[test]
    fn test_nodes_sorted_and_deduplicated() {
        let graph = TransitGraph::new(ids(&["C", "A", "B", "A"]));
        assert_eq!(graph.nodes(), ids(&["A", "B", "C"]).as_slice());
        assert_eq!(graph.node_index(&StopId::from("C")), Some(2));
    }

    #[test]
    fn test_upsert_merges_parallel_connections() {
        let mut graph = TransitGraph::new(ids(&["A", "B"]));
        let (a, b) = (StopId::from("A"), StopId::from("B"));
        let first = graph.upsert_edge(&a, &b, 2.0, &RouteId::from("R1")).unwrap();
        let second = graph.upsert_edge(&b, &a, 1.5, &RouteId::from("R2")).unwrap();
        let third = graph.upsert_edge(&a, &b, 3.0, &RouteId::from("R1")).unwrap();
        assert_eq!(first, EdgeUpdate::Inserted);
        assert_eq!(second, EdgeUpdate::Merged);
        assert_eq!(third, EdgeUpdate::Merged);
        assert_eq!(graph.n_edges(), 1);
        let edge = graph.get_edge(&b, &a).unwrap();
        assert_eq!(edge.weight_km, 1.5);
        assert_eq!(
            edge.routes,
            BTreeSet::from([RouteId::from("R1"), RouteId::from("R2")])
        );
        assert_eq!(graph.degree(0), 1);
        assert_eq!(graph.degree(1), 1);
        assert_eq!(graph.weight(0, 1), Some(1.5));
        assert_eq!(graph.weight(1, 0), Some(1.5));
        assert_eq!(graph.weighted_neighbors(0).collect::<Vec<_>>(), vec![(1, 1.5)]);
        assert_eq!(graph.weight(0, 0), None);
    }

    #[test]
    fn test_upsert_unknown_node_fails() {
        let mut graph = TransitGraph::new(ids(&["A"]));
        let result = graph.upsert_edge(
            &StopId::from("A"),
            &StopId::from("Z"),
            1.0,
            &RouteId::from("R1"),
        );
        assert_eq!(
            result,
            Err(GraphError::GraphMissingNodeId(StopId::from("Z")))
        );
    }
}
