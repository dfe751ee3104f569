use crate::config::ArtificialLinkConfig;
use crate::mapping::artificial::ArtificialLink;
use crate::mapping::graph::{PseudoEdge, PseudoRouteStop};
use crate::mapping::schedule::{PseudoLeg, PseudoRoute};
use crate::network::LinkId;
use crate::schedule::{LineId, RouteId};

/// The least-cost path through a [`PseudoGraph`](super::PseudoGraph).
///
/// Holds one stop per route stop, and one leg between every pair
/// of consecutive stops.
#[derive(Clone, Debug)]
pub struct PseudoPath {
    pub cost: f64,

    stops: Vec<PseudoRouteStop>,
    legs: Vec<PseudoEdge>,
}

impl PseudoPath {
    pub(crate) fn new(cost: f64, stops: Vec<PseudoRouteStop>, legs: Vec<PseudoEdge>) -> Self {
        Self { cost, stops, legs }
    }

    pub fn stops(&self) -> &[PseudoRouteStop] {
        &self.stops
    }

    pub fn into_stops(self) -> Vec<PseudoRouteStop> {
        self.stops
    }

    /// Consecutive stop pairs with the edge joining them.
    pub fn legs(&self) -> impl Iterator<Item = (&PseudoRouteStop, &PseudoRouteStop, &PseudoEdge)> {
        self.stops
            .windows(2)
            .zip(&self.legs)
            .map(|(pair, edge)| (&pair[0], &pair[1], edge))
    }

    /// Links of every network path on the selected path, in order.
    /// Candidate links themselves are not included.
    pub fn network_link_ids(&self) -> Vec<LinkId> {
        self.legs
            .iter()
            .filter_map(|edge| edge.links.as_deref())
            .flatten()
            .cloned()
            .collect()
    }

    /// One artificial link per artificial edge on the selected path.
    pub fn artificial_network_links(&self, attributes: &ArtificialLinkConfig) -> Vec<ArtificialLink> {
        self.legs()
            .filter(|(_, _, edge)| edge.is_artificial())
            .map(|(current, next, _)| {
                ArtificialLink::between(&current.candidate, &next.candidate, attributes)
            })
            .collect()
    }

    pub fn into_pseudo_route(
        self,
        line: LineId,
        route: RouteId,
        attributes: &ArtificialLinkConfig,
    ) -> PseudoRoute {
        let legs = self
            .legs()
            .map(|(current, next, edge)| match &edge.links {
                Some(links) => PseudoLeg::Network(links.clone()),
                None => PseudoLeg::Artificial(
                    ArtificialLink::between(&current.candidate, &next.candidate, attributes).id,
                ),
            })
            .collect();

        PseudoRoute {
            line,
            route,
            network_link_ids: self.network_link_ids(),
            cost: self.cost,
            stops: self.stops,
            legs,
        }
    }
}
