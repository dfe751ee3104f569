use crate::config::{ArtificialLinkConfig, MappingConfig};
use crate::error::{CollapseError, MappingError};
use crate::mapping::artificial::ArtificialLinks;
use crate::mapping::candidate::{CandidateProvider, LinkCandidate};
use crate::mapping::costing::EdgeCosting;
use crate::mapping::graph::{PseudoEdge, PseudoGraph};
use crate::mapping::oracle::{LeastCostPath, PathOracle};
use crate::mapping::router::Dispatcher;
use crate::mapping::schedule::PseudoSchedule;
use crate::schedule::{RouteStop, TransitLine, TransitRoute};

use itertools::Itertools;
use log::{debug, trace};

/// A routing worker.
///
/// Polls transit lines from its [`Dispatcher`] until none remain,
/// mapping every route of each line. Results are kept by the worker
/// until [`into_results`](Self::into_results) is called.
pub struct PseudoRouter<'a, 'q, P, O>
where
    P: CandidateProvider,
    O: PathOracle,
{
    provider: &'a P,
    oracle: &'a O,
    dispatcher: &'a Dispatcher<'q>,

    costing: EdgeCosting,
    attributes: ArtificialLinkConfig,

    schedule: PseudoSchedule,
    artificial_links: ArtificialLinks,
}

impl<'a, 'q, P, O> PseudoRouter<'a, 'q, P, O>
where
    P: CandidateProvider,
    O: PathOracle,
{
    pub fn new(
        provider: &'a P,
        oracle: &'a O,
        dispatcher: &'a Dispatcher<'q>,
        config: &MappingConfig,
    ) -> Self {
        Self {
            provider,
            oracle,
            dispatcher,
            costing: EdgeCosting::new(config.max_travel_cost_factor),
            attributes: config.artificial_link.clone(),
            schedule: PseudoSchedule::default(),
            artificial_links: ArtificialLinks::default(),
        }
    }

    /// Routes lines until the dispatcher runs dry. The first failure
    /// aborts the dispatcher, stopping every other worker too.
    pub fn run(&mut self) -> Result<(), MappingError> {
        while let Some(line) = self.dispatcher.poll() {
            for route in line.routes() {
                if let Err(err) = self.process_route(line, route) {
                    self.dispatcher.abort();
                    return Err(err);
                }
            }
        }

        if self.dispatcher.is_aborted() {
            return Err(MappingError::Aborted);
        }

        Ok(())
    }

    /// Maps a single route, recording its pseudo route and the
    /// artificial links it requires.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip_all, fields(line = %line.id, route = %route.id)))]
    pub fn process_route(
        &mut self,
        line: &TransitLine,
        route: &TransitRoute,
    ) -> Result<(), MappingError> {
        let graph = self.build_graph(line, route)?;

        let path = graph.collapse().map_err(|err| match err {
            CollapseError::NoPathFound => {
                let name = |stop: Option<&RouteStop>| {
                    stop.map(|stop| stop.name().to_string()).unwrap_or_default()
                };

                MappingError::NoPathFound {
                    line: line.id.clone(),
                    route: route.id.clone(),
                    from_stop: name(route.first_stop()),
                    to_stop: name(route.last_stop()),
                }
            }
            other => MappingError::Collapse(other),
        })?;

        debug!(
            "Routed {}/{}: {} stops, cost={}",
            line.id,
            route.id,
            path.stops().len(),
            path.cost
        );

        self.artificial_links
            .extend(path.artificial_network_links(&self.attributes));
        self.schedule.add_pseudo_route(path.into_pseudo_route(
            line.id.clone(),
            route.id.clone(),
            &self.attributes,
        ));

        self.dispatcher.route_completed();
        Ok(())
    }

    /// Builds the pseudo graph of a route, with one layer per stop and
    /// an edge between every pair of candidates of consecutive stops.
    pub fn build_graph(
        &self,
        line: &TransitLine,
        route: &TransitRoute,
    ) -> Result<PseudoGraph, MappingError> {
        let stops = &route.stops;
        if stops.is_empty() {
            return Err(MappingError::EmptyRoute {
                line: line.id.clone(),
                route: route.id.clone(),
            });
        }

        let candidates = stops
            .iter()
            .map(|stop| self.provider.candidates(stop, line, route))
            .collect::<Vec<_>>();

        let mut graph = PseudoGraph::new();

        for (layer, (current_stop, next_stop)) in stops.iter().tuple_windows().enumerate() {
            let minimal = self
                .oracle
                .minimal_travel_cost(current_stop, next_stop, line, route);
            let max_allowed = self.costing.max_allowed_travel_cost(minimal);

            if minimal == 0.0 {
                self.dispatcher
                    .warn_zero_travel_cost(line, current_stop.name(), next_stop.name());
            }

            for current in &candidates[layer] {
                for next in &candidates[layer + 1] {
                    let path = self.path_between(current, next, line, route);
                    let decision = self.costing.decide(current, next, path, max_allowed);

                    graph.add_edge(
                        layer,
                        current_stop,
                        current,
                        next_stop,
                        next,
                        PseudoEdge::new(decision.weight, decision.links),
                    );
                }
            }
        }

        let last = stops.len() - 1;
        graph.add_dummy_edges(stops, &candidates[0], &candidates[last])?;

        trace!("Built {graph:?} for {}/{}", line.id, route.id);
        Ok(graph)
    }

    fn path_between(
        &self,
        current: &LinkCandidate,
        next: &LinkCandidate,
        line: &TransitLine,
        route: &TransitRoute,
    ) -> Option<LeastCostPath> {
        // Loop links have no extent to route from or to.
        if current.is_loop_link() || next.is_loop_link() {
            return None;
        }

        self.oracle.least_cost_path(current, next, line, route)
    }

    /// The routes mapped and artificial links required by this worker.
    pub fn into_results(self) -> (PseudoSchedule, ArtificialLinks) {
        (self.schedule, self.artificial_links)
    }
}
