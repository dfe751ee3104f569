use crate::mapping::candidate::LinkCandidate;
use crate::network::LinkId;
use crate::schedule::RouteStop;

/// A route stop served by one of its candidates.
#[derive(Clone, Debug, PartialEq)]
pub struct PseudoRouteStop {
    /// Index of the layer, equal to the position of the stop in its route.
    pub layer: usize,
    pub stop: RouteStop,
    pub candidate: LinkCandidate,
}

impl PseudoRouteStop {
    pub fn new(layer: usize, stop: RouteStop, candidate: LinkCandidate) -> Self {
        Self {
            layer,
            stop,
            candidate,
        }
    }

    #[inline]
    pub fn link_id(&self) -> &LinkId {
        self.candidate.link_id()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum PseudoNode {
    Source,
    Destination,
    Stop(PseudoRouteStop),
}

impl PseudoNode {
    pub fn stop(&self) -> Option<&PseudoRouteStop> {
        match self {
            PseudoNode::Stop(stop) => Some(stop),
            _ => None,
        }
    }

    /// Whether the node is one of the two ends of the graph.
    #[inline]
    pub fn is_butt(&self) -> bool {
        !matches!(self, PseudoNode::Stop(_))
    }
}
