use crate::network::LinkId;

/// Represents the edge between two [`PseudoNode`](super::PseudoNode)s.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PseudoEdge {
    pub weight: f64,

    /// Network links between the two candidates, or `None` if the
    /// candidates are joined by an artificial link.
    pub links: Option<Vec<LinkId>>,
}

impl PseudoEdge {
    pub fn new(weight: f64, links: Option<Vec<LinkId>>) -> Self {
        Self { weight, links }
    }

    /// The free edge joining a butt node to its layer.
    pub fn zero() -> Self {
        Self::new(0.0, Some(vec![]))
    }

    #[inline]
    pub fn is_artificial(&self) -> bool {
        self.links.is_none()
    }
}
