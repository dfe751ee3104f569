use crate::config::ArtificialLinkConfig;
use crate::mapping::candidate::LinkCandidate;
use crate::network::{Link, LinkId, Node, NodeId, ARTIFICIAL_LINK_MODE};

use geo::{Distance, Euclidean, Point};
use std::hash::{Hash, Hasher};

/// Prefix of every artificial link id.
pub const ARTIFICIAL_LINK_PREFIX: &str = "pt_";

/// A directed link which is not part of the network yet.
///
/// It connects the downstream node of one candidate to the upstream
/// node of the candidate following it. Two artificial links are equal
/// when their ids are, and the id is derived from the two nodes, so
/// each pair of nodes is linked at most once.
#[derive(Clone, Debug)]
pub struct ArtificialLink {
    pub id: LinkId,
    pub from: NodeId,
    pub to: NodeId,
    pub from_position: Point,
    pub to_position: Point,

    pub length: f64,
    pub freespeed: f64,
    pub capacity: f64,
    pub lanes: f64,
}

impl ArtificialLink {
    pub fn between(
        current: &LinkCandidate,
        next: &LinkCandidate,
        attributes: &ArtificialLinkConfig,
    ) -> Self {
        let from = current.to_node().clone();
        let to = next.from_node().clone();

        Self {
            id: Self::id_of(&from, &to),
            length: Euclidean.distance(current.to_position(), next.from_position()),
            from_position: current.to_position(),
            to_position: next.from_position(),
            from,
            to,
            freespeed: attributes.freespeed,
            capacity: attributes.capacity,
            lanes: attributes.lanes,
        }
    }

    pub fn id_of(from: &NodeId, to: &NodeId) -> LinkId {
        LinkId::from(format!("{ARTIFICIAL_LINK_PREFIX}{from}_{to}"))
    }

    /// The two end nodes, used when they are missing from the network.
    pub fn nodes(&self) -> [Node; 2] {
        [
            Node::new(self.from.clone(), self.from_position),
            Node::new(self.to.clone(), self.to_position),
        ]
    }

    pub fn to_link(&self) -> Link {
        Link::new(self.id.clone(), self.from.clone(), self.to.clone())
            .with_length(self.length)
            .with_freespeed(self.freespeed)
            .with_capacity(self.capacity)
            .with_lanes(self.lanes)
            .with_modes([ARTIFICIAL_LINK_MODE])
    }
}

impl PartialEq for ArtificialLink {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ArtificialLink {}

impl Hash for ArtificialLink {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
