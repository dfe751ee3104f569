use crate::network::{Link, LinkId, Network, NodeId};

use geo::Point;
use std::hash::{Hash, Hasher};

/// A network link which may serve a stop.
///
/// Candidates are immutable once produced. Two candidates are
/// equal when they refer to the same link.
#[derive(Clone, Debug)]
pub struct LinkCandidate {
    link_id: LinkId,
    from_node: NodeId,
    to_node: NodeId,
    from_position: Point,
    to_position: Point,

    /// Travel cost of the link itself.
    cost: f64,
}

impl LinkCandidate {
    pub fn new<L, N>(link_id: L, from: (N, Point), to: (N, Point), cost: f64) -> Self
    where
        L: Into<LinkId>,
        N: Into<NodeId>,
    {
        let (from_node, from_position) = from;
        let (to_node, to_position) = to;

        Self {
            link_id: link_id.into(),
            from_node: from_node.into(),
            to_node: to_node.into(),
            from_position,
            to_position,
            cost,
        }
    }

    /// Builds the candidate for a link of the network, or `None`
    /// if either of its nodes has no position.
    pub fn from_link(network: &Network, link: &Link, cost: f64) -> Option<Self> {
        Some(Self {
            link_id: link.id.clone(),
            from_node: link.from.clone(),
            to_node: link.to.clone(),
            from_position: network.position(&link.from)?,
            to_position: network.position(&link.to)?,
            cost,
        })
    }

    pub fn link_id(&self) -> &LinkId {
        &self.link_id
    }

    /// The upstream node of the link.
    pub fn from_node(&self) -> &NodeId {
        &self.from_node
    }

    /// The downstream node of the link.
    pub fn to_node(&self) -> &NodeId {
        &self.to_node
    }

    pub fn from_position(&self) -> Point {
        self.from_position
    }

    pub fn to_position(&self) -> Point {
        self.to_position
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// A loop link starts and ends at the same node. It carries no
    /// movement, so it can never be part of a network path.
    pub fn is_loop_link(&self) -> bool {
        self.from_node == self.to_node
    }
}

impl PartialEq for LinkCandidate {
    fn eq(&self, other: &Self) -> bool {
        self.link_id == other.link_id
    }
}

impl Eq for LinkCandidate {}

impl Hash for LinkCandidate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.link_id.hash(state);
    }
}
