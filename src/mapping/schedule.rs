//! Mapped transit routes.

use crate::mapping::graph::PseudoRouteStop;
use crate::network::LinkId;
use crate::schedule::{LineId, RouteId};
use crate::util::FxIndexMap;

/// How a vehicle travels between two consecutive stops.
#[derive(Clone, Debug, PartialEq)]
pub enum PseudoLeg {
    /// Along existing network links, excluding both stop links.
    Network(Vec<LinkId>),

    /// Along a single artificial link.
    Artificial(LinkId),
}

/// A transit route with one selected link per stop.
#[derive(Clone, Debug)]
pub struct PseudoRoute {
    pub line: LineId,
    pub route: RouteId,

    /// Cost of the least-cost path which selected the stops.
    pub cost: f64,
    pub stops: Vec<PseudoRouteStop>,
    pub legs: Vec<PseudoLeg>,

    /// Links of every network leg, in order.
    pub network_link_ids: Vec<LinkId>,
}

impl PseudoRoute {
    /// The links of the selected stops, in route order.
    pub fn stop_link_ids(&self) -> impl Iterator<Item = &LinkId> {
        self.stops.iter().map(PseudoRouteStop::link_id)
    }

    /// The full link sequence a vehicle takes: every stop link, with
    /// the links of the leg to the next stop in between.
    pub fn link_sequence(&self) -> Vec<LinkId> {
        let mut sequence = Vec::new();

        for (index, stop) in self.stops.iter().enumerate() {
            sequence.push(stop.link_id().clone());

            match self.legs.get(index) {
                Some(PseudoLeg::Network(links)) => sequence.extend(links.iter().cloned()),
                Some(PseudoLeg::Artificial(link)) => sequence.push(link.clone()),
                None => {}
            }
        }

        // Consecutive stops served by the same link traverse it once.
        sequence.dedup();
        sequence
    }

    pub fn artificial_link_ids(&self) -> impl Iterator<Item = &LinkId> {
        self.legs.iter().filter_map(|leg| match leg {
            PseudoLeg::Artificial(link) => Some(link),
            PseudoLeg::Network(_) => None,
        })
    }
}

/// The mapped routes of a schedule, keyed by line and route.
#[derive(Clone, Debug, Default)]
pub struct PseudoSchedule {
    routes: FxIndexMap<(LineId, RouteId), PseudoRoute>,
}

impl PseudoSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a mapped route, replacing an earlier mapping of the same route.
    pub fn add_pseudo_route(&mut self, route: PseudoRoute) {
        self.routes
            .insert((route.line.clone(), route.route.clone()), route);
    }

    /// Absorbs the routes of another schedule, such as that of another worker.
    pub fn merge(&mut self, other: PseudoSchedule) {
        self.routes.extend(other.routes);
    }

    pub fn get(&self, line: &LineId, route: &RouteId) -> Option<&PseudoRoute> {
        self.routes.get(&(line.clone(), route.clone()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&(LineId, RouteId), &PseudoRoute)> {
        self.routes.iter()
    }

    pub fn routes(&self) -> impl Iterator<Item = &PseudoRoute> {
        self.routes.values()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Orders routes by line and route id.
    pub fn sort(&mut self) {
        self.routes.sort_unstable_keys();
    }
}
