use crate::config::{MappingConfig, TravelCostType};
use crate::mapping::candidate::LinkCandidate;
use crate::mapping::oracle::{LeastCostPath, LinkCosting, PathOracle};
use crate::network::{Link, Network, NodeId};
use crate::schedule::{RouteStop, TransitLine, TransitRoute};

use geo::{Distance, Euclidean};
use log::trace;
use pathfinding::prelude::dijkstra;
use std::collections::{BTreeMap, BTreeSet};

/// Scale applied to costs before searching, the search
/// itself operates on whole thousandths.
const COST_SCALE: f64 = 1_000.0;

/// A [`PathOracle`] which routes over a [`Network`].
///
/// Paths run from the downstream node of the first candidate to the
/// upstream node of the second, over links whose modes admit the
/// route's transport mode.
pub struct NetworkRouter<'a> {
    network: &'a Network,
    costing: LinkCosting,
    modes: BTreeMap<String, BTreeSet<String>>,
}

impl<'a> NetworkRouter<'a> {
    pub fn new(network: &'a Network, config: &MappingConfig) -> Self {
        Self {
            network,
            costing: LinkCosting::new(config.travel_cost_type),
            modes: config.transport_mode_assignment.clone(),
        }
    }

    #[inline]
    fn scaled(cost: f64) -> u64 {
        (cost * COST_SCALE).round() as u64
    }

    fn traversable(&self, link: &Link, modes: Option<&BTreeSet<String>>) -> bool {
        link.allows_any(modes) && self.costing.link_cost(link).is_finite()
    }

    /// The cheapest link between two adjacent nodes.
    fn connecting(
        &self,
        from: &NodeId,
        to: &NodeId,
        modes: Option<&BTreeSet<String>>,
    ) -> Option<&'a Link> {
        self.network
            .out_links(from)
            .filter(|link| &link.to == to && self.traversable(link, modes))
            .min_by(|a, b| {
                self.costing
                    .link_cost(a)
                    .total_cmp(&self.costing.link_cost(b))
            })
    }

    /// Routes between two nodes of the network.
    pub fn route_nodes(
        &self,
        start: &NodeId,
        finish: &NodeId,
        modes: Option<&BTreeSet<String>>,
    ) -> Option<LeastCostPath> {
        if start == finish {
            return Some(LeastCostPath::empty());
        }

        let (nodes, _) = dijkstra(
            start,
            |node| {
                self.network
                    .out_links(node)
                    .filter(|link| self.traversable(link, modes))
                    .map(|link| (link.to.clone(), Self::scaled(self.costing.link_cost(link))))
                    .collect::<Vec<_>>()
            },
            |node| node == finish,
        )?;

        let links = nodes
            .windows(2)
            .map(|pair| self.connecting(&pair[0], &pair[1], modes))
            .collect::<Option<Vec<_>>>()?;

        let cost = links
            .iter()
            .map(|link| self.costing.link_cost(link))
            .sum::<f64>();

        trace!("Routed {start} -> {finish} over {} links, cost={cost}", links.len());

        Some(LeastCostPath::new(
            cost,
            links.into_iter().map(|link| link.id.clone()).collect(),
        ))
    }
}

impl PathOracle for NetworkRouter<'_> {
    fn minimal_travel_cost(
        &self,
        from: &RouteStop,
        to: &RouteStop,
        _line: &TransitLine,
        _route: &TransitRoute,
    ) -> f64 {
        match self.costing.cost_type() {
            TravelCostType::TravelTime => match (from.departure(), to.arrival()) {
                (Some(departure), Some(arrival)) => (arrival - departure).max(0.0),
                _ => 0.0,
            },
            TravelCostType::LinkLength => {
                Euclidean.distance(from.facility.position, to.facility.position)
            }
        }
    }

    fn least_cost_path(
        &self,
        from: &LinkCandidate,
        to: &LinkCandidate,
        _line: &TransitLine,
        route: &TransitRoute,
    ) -> Option<LeastCostPath> {
        let modes = self.modes.get(&route.transport_mode);
        self.route_nodes(from.to_node(), to.from_node(), modes)
    }
}
