use crate::mapping::candidate::LinkCandidate;
use crate::network::LinkId;
use crate::schedule::{RouteStop, TransitLine, TransitRoute};

/// A path through the network between two link candidates.
///
/// The links of the path lie strictly between the candidates:
/// neither candidate link is part of [`links`](#structfield.links).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LeastCostPath {
    pub cost: f64,
    pub links: Vec<LinkId>,
}

impl LeastCostPath {
    pub fn new(cost: f64, links: Vec<LinkId>) -> Self {
        Self { cost, links }
    }

    /// The path between two candidates which already touch.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Estimates travel costs between stops and finds least-cost paths
/// between candidates.
///
/// Both operations must be pure: calling them concurrently from
/// several workers with the same arguments yields the same result.
pub trait PathOracle: Sync {
    /// A lower-bound style estimate of the cost of travelling between
    /// two consecutive stops of a route. Never negative.
    fn minimal_travel_cost(
        &self,
        from: &RouteStop,
        to: &RouteStop,
        line: &TransitLine,
        route: &TransitRoute,
    ) -> f64;

    /// The least-cost path leaving `from` and entering `to`,
    /// or `None` if the network does not connect them.
    fn least_cost_path(
        &self,
        from: &LinkCandidate,
        to: &LinkCandidate,
        line: &TransitLine,
        route: &TransitRoute,
    ) -> Option<LeastCostPath>;
}
