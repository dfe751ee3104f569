use crate::error::CollapseError;
use crate::mapping::candidate::LinkCandidate;
use crate::mapping::graph::{PseudoEdge, PseudoNode, PseudoPath, PseudoRouteStop};
use crate::mapping::primitives::Dijkstra;
use crate::network::LinkId;
use crate::schedule::RouteStop;

use log::trace;
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use rustc_hash::FxHashMap;
use std::fmt::Debug;

/// The layered candidate graph of one transit route.
///
/// Nodes are identified by their layer and candidate link, so adding
/// an edge between known stops reuses their nodes.
#[derive(Clone, Default)]
pub struct PseudoGraph {
    graph: DiGraph<PseudoNode, PseudoEdge>,
    lookup: FxHashMap<(usize, LinkId), NodeIndex>,
    ends: Option<(NodeIndex, NodeIndex)>,
}

impl Debug for PseudoGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "PseudoGraph {{ nodes: {}, edges: {}, ends: {:?} }}",
            self.graph.node_count(),
            self.graph.edge_count(),
            self.ends
        )
    }
}

impl PseudoGraph {
    pub fn new() -> Self {
        Self::default()
    }

    fn insert_stop(&mut self, layer: usize, stop: &RouteStop, candidate: &LinkCandidate) -> NodeIndex {
        *self
            .lookup
            .entry((layer, candidate.link_id().clone()))
            .or_insert_with(|| {
                self.graph.add_node(PseudoNode::Stop(PseudoRouteStop::new(
                    layer,
                    stop.clone(),
                    candidate.clone(),
                )))
            })
    }

    /// Joins a candidate of the stop in `layer` to a candidate of the
    /// stop in the following layer.
    pub fn add_edge(
        &mut self,
        layer: usize,
        current_stop: &RouteStop,
        current: &LinkCandidate,
        next_stop: &RouteStop,
        next: &LinkCandidate,
        edge: PseudoEdge,
    ) -> EdgeIndex {
        let from = self.insert_stop(layer, current_stop, current);
        let to = self.insert_stop(layer + 1, next_stop, next);

        trace!(
            "Layer {layer}: {} -> {} weight={} artificial={}",
            current.link_id(),
            next.link_id(),
            edge.weight,
            edge.is_artificial()
        );

        self.graph.add_edge(from, to, edge)
    }

    /// Attaches SOURCE to every candidate of the first stop, and every
    /// candidate of the last stop to DESTINATION.
    ///
    /// Candidate nodes which no edge created yet are created here, so a
    /// route with a single stop still yields a path.
    pub fn add_dummy_edges(
        &mut self,
        stops: &[RouteStop],
        first: &[LinkCandidate],
        last: &[LinkCandidate],
    ) -> Result<(NodeIndex, NodeIndex), CollapseError> {
        if self.ends.is_some() {
            return Err(CollapseError::EndsAlreadyAttached);
        }

        let (Some(first_stop), Some(last_stop)) = (stops.first(), stops.last()) else {
            return Err(CollapseError::LayerMissing);
        };
        let last_layer = stops.len() - 1;

        let source = self.graph.add_node(PseudoNode::Source);
        let destination = self.graph.add_node(PseudoNode::Destination);

        for candidate in first {
            let node = self.insert_stop(0, first_stop, candidate);
            self.graph.add_edge(source, node, PseudoEdge::zero());
        }

        for candidate in last {
            let node = self.insert_stop(last_layer, last_stop, candidate);
            self.graph.add_edge(node, destination, PseudoEdge::zero());
        }

        self.ends = Some((source, destination));
        Ok((source, destination))
    }

    /// Finds the least-cost path from SOURCE to DESTINATION.
    ///
    /// Nodes are ranked by layer, so every node is expanded once even
    /// when weights are negative. Outgoing edges are relaxed in insertion
    /// order, so between equal-cost paths the one built first is returned.
    pub fn collapse(&self) -> Result<PseudoPath, CollapseError> {
        let (source, destination) = self.ends.ok_or(CollapseError::NoEnds)?;

        let path = Dijkstra
            .shortest_path(source, destination, |node| self.rank(*node), |node| {
                let mut edges = self
                    .graph
                    .edges_directed(*node, Direction::Outgoing)
                    .map(|edge| (edge.target(), edge.id(), edge.weight().weight))
                    .collect::<Vec<_>>();

                edges.sort_unstable_by_key(|(_, id, _)| *id);
                edges
            })
            .ok_or(CollapseError::NoPathFound)?;

        let mut stops = Vec::with_capacity(path.steps.len());
        let mut legs = Vec::with_capacity(path.steps.len());

        for (node, edge) in &path.steps {
            let PseudoNode::Stop(stop) = &self.graph[*node] else {
                continue;
            };

            // The edge reaching the first stop leaves SOURCE.
            match edge {
                Some(edge) if !stops.is_empty() => legs.push(self.graph[*edge].clone()),
                _ => {}
            }

            stops.push(stop.clone());
        }

        Ok(PseudoPath::new(path.cost, stops, legs))
    }

    fn rank(&self, node: NodeIndex) -> usize {
        match &self.graph[node] {
            PseudoNode::Source => 0,
            PseudoNode::Stop(stop) => stop.layer + 1,
            PseudoNode::Destination => usize::MAX,
        }
    }

    /// The selected stop sequence, one entry per route stop, or `None`
    /// if DESTINATION cannot be reached.
    pub fn least_cost_stop_sequence(&self) -> Option<Vec<PseudoRouteStop>> {
        self.collapse().ok().map(PseudoPath::into_stops)
    }

    /// The edge between two stops, each given by its layer and candidate link.
    pub fn edge(&self, from: (usize, &LinkId), to: (usize, &LinkId)) -> Option<&PseudoEdge> {
        let a = self.lookup.get(&(from.0, from.1.clone()))?;
        let b = self.lookup.get(&(to.0, to.1.clone()))?;

        self.graph
            .find_edge(*a, *b)
            .and_then(|index| self.graph.edge_weight(index))
    }

    pub fn ends(&self) -> Option<(NodeIndex, NodeIndex)> {
        self.ends
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}
