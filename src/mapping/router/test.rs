use crate::config::MappingConfig;
use crate::error::MappingError;
use crate::mapping::candidate::LinkCandidate;
use crate::mapping::oracle::{LeastCostPath, PathOracle};
use crate::mapping::router::{Dispatcher, LoggedProgress, Progress, PseudoRouter};
use crate::mapping::PseudoLeg;
use crate::network::LinkId;
use crate::schedule::{RouteStop, StopFacility, TransitLine, TransitRoute};

use approx::assert_relative_eq;
use geo::Point;
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Answers from fixed tables, keyed by stop index and candidate link.
#[derive(Default)]
struct TableOracle {
    minimal: FxHashMap<(usize, usize), f64>,
    paths: FxHashMap<(LinkId, LinkId), LeastCostPath>,
}

impl TableOracle {
    fn minimal(mut self, from: usize, to: usize, cost: f64) -> Self {
        self.minimal.insert((from, to), cost);
        self
    }

    fn path(mut self, from: &str, to: &str, cost: f64, links: &[&str]) -> Self {
        let links = links.iter().map(|id| LinkId::from(*id)).collect();
        self.paths.insert(
            (LinkId::from(from), LinkId::from(to)),
            LeastCostPath::new(cost, links),
        );
        self
    }
}

impl PathOracle for TableOracle {
    fn minimal_travel_cost(
        &self,
        from: &RouteStop,
        to: &RouteStop,
        _line: &TransitLine,
        _route: &TransitRoute,
    ) -> f64 {
        self.minimal
            .get(&(from.index, to.index))
            .copied()
            .unwrap_or_default()
    }

    fn least_cost_path(
        &self,
        from: &LinkCandidate,
        to: &LinkCandidate,
        _line: &TransitLine,
        _route: &TransitRoute,
    ) -> Option<LeastCostPath> {
        self.paths
            .get(&(from.link_id().clone(), to.link_id().clone()))
            .cloned()
    }
}

fn candidate(link: &str) -> LinkCandidate {
    LinkCandidate::new(
        link,
        (format!("{link}:from").as_str(), Point::new(0.0, 0.0)),
        (format!("{link}:to").as_str(), Point::new(10.0, 0.0)),
        0.0,
    )
}

/// Candidates of each stop by its index.
fn table(layers: &[&[&str]]) -> impl Fn(&RouteStop, &TransitLine, &TransitRoute) -> Vec<LinkCandidate> + Sync {
    let layers = layers
        .iter()
        .map(|links| links.iter().map(|link| candidate(link)).collect::<Vec<_>>())
        .collect::<Vec<_>>();

    move |stop: &RouteStop, _: &TransitLine, _: &TransitRoute| {
        layers.get(stop.index).cloned().unwrap_or_default()
    }
}

fn line(stops: usize) -> TransitLine {
    let route = (0..stops).fold(TransitRoute::new("route", "bus"), |route, index| {
        let facility = StopFacility::new(
            format!("f{index}"),
            format!("Stop {index}"),
            Point::new(index as f64 * 100.0, 0.0),
        );
        route.with_stop(Arc::new(facility), None, None)
    });

    TransitLine::new("line").with_route(route)
}

fn config() -> MappingConfig {
    MappingConfig::default()
        .with_threads(1)
        .with_max_travel_cost_factor(5.0)
}

#[test_log::test]
fn mixes_real_and_artificial_edges() {
    let provider = table(&[&["a0"], &["b0", "b1"], &["c0"]]);

    // Allowances: 2 * 5 = 10 between stops 0 and 1, 1.6 * 5 = 8 between 1 and 2.
    let oracle = TableOracle::default()
        .minimal(0, 1, 2.0)
        .minimal(1, 2, 1.6)
        .path("a0", "b0", 5.0, &["p1"])
        .path("a0", "b1", 7.0, &["p2"])
        .path("b0", "c0", 9.0, &["p3"]);

    let line = line(3);
    let route = &line.routes[0];
    let dispatcher = Dispatcher::new(&());
    let mut router = PseudoRouter::new(&provider, &oracle, &dispatcher, &config());

    let graph = router.build_graph(&line, route).expect("graph builds");
    let edge = |a: (usize, &str), b: (usize, &str)| {
        graph
            .edge((a.0, &LinkId::from(a.1)), (b.0, &LinkId::from(b.1)))
            .cloned()
            .expect("edge exists")
    };

    assert!(!edge((0, "a0"), (1, "b0")).is_artificial());
    assert_relative_eq!(edge((0, "a0"), (1, "b0")).weight, 5.0);
    assert!(edge((1, "b0"), (2, "c0")).is_artificial());
    assert_relative_eq!(edge((1, "b0"), (2, "c0")).weight, 8.0);
    assert!(edge((1, "b1"), (2, "c0")).is_artificial());

    router.process_route(&line, route).expect("route maps");
    let (schedule, artificial_links) = router.into_results();

    let mapped = schedule
        .get(&line.id, &route.id)
        .expect("route was recorded");

    let stops = mapped
        .stop_link_ids()
        .map(LinkId::as_str)
        .collect::<Vec<_>>();
    assert_eq!(stops, vec!["a0", "b0", "c0"]);
    assert_relative_eq!(mapped.cost, 13.0);

    assert_eq!(
        mapped.legs,
        vec![
            PseudoLeg::Network(vec![LinkId::from("p1")]),
            PseudoLeg::Artificial(LinkId::from("pt_b0:to_c0:from")),
        ]
    );

    assert_eq!(artificial_links.len(), 1);
    let link = artificial_links
        .get(&LinkId::from("pt_b0:to_c0:from"))
        .expect("artificial link recorded");
    assert_eq!(link.from.as_str(), "b0:to");
    assert_eq!(link.to.as_str(), "c0:from");
}

#[test]
fn loop_links_are_never_routed() {
    let stop_loop = LinkCandidate::new(
        "loop",
        ("s", Point::new(0.0, 0.0)),
        ("s", Point::new(0.0, 0.0)),
        0.0,
    );
    assert!(stop_loop.is_loop_link());

    let provider = move |stop: &RouteStop, _: &TransitLine, _: &TransitRoute| match stop.index {
        0 => vec![candidate("a0")],
        _ => vec![stop_loop.clone()],
    };

    // A path is on offer, but must not be asked for.
    let oracle = TableOracle::default()
        .minimal(0, 1, 10.0)
        .path("a0", "loop", 1.0, &["p"]);

    let line = line(2);
    let dispatcher = Dispatcher::new(&());
    let router = PseudoRouter::new(&provider, &oracle, &dispatcher, &config());
    let graph = router
        .build_graph(&line, &line.routes[0])
        .expect("graph builds");

    let edge = graph
        .edge((0, &LinkId::from("a0")), (1, &LinkId::from("loop")))
        .expect("edge exists");
    assert!(edge.is_artificial());
    assert_relative_eq!(edge.weight, 50.0);
}

#[test]
fn missing_candidates_name_the_route() {
    let provider = table(&[&["a0"], &[], &["c0"]]);
    let oracle = TableOracle::default();

    let line = line(3);
    let route = &line.routes[0];
    let dispatcher = Dispatcher::new(&());
    let mut router = PseudoRouter::new(&provider, &oracle, &dispatcher, &config());

    match router.process_route(&line, route) {
        Err(MappingError::NoPathFound {
            line,
            route,
            from_stop,
            to_stop,
        }) => {
            assert_eq!(line.as_str(), "line");
            assert_eq!(route.as_str(), "route");
            assert_eq!(from_stop, "Stop 0");
            assert_eq!(to_stop, "Stop 2");
        }
        other => panic!("expected a missing path, got {other:?}"),
    }

    let (schedule, artificial_links) = router.into_results();
    assert!(schedule.is_empty());
    assert!(artificial_links.is_empty());
}

#[test]
fn empty_routes_are_rejected() {
    let provider = table(&[]);
    let oracle = TableOracle::default();

    let line = line(0);
    let dispatcher = Dispatcher::new(&());
    let router = PseudoRouter::new(&provider, &oracle, &dispatcher, &config());

    assert!(matches!(
        router.build_graph(&line, &line.routes[0]),
        Err(MappingError::EmptyRoute { .. })
    ));
}

#[test]
fn failure_aborts_the_dispatcher() {
    let provider = table(&[&["a0"], &[]]);
    let oracle = TableOracle::default();

    let lines = vec![line(2), line(2)];
    let dispatcher = Dispatcher::new(&());
    dispatcher.extend(&lines);

    let mut router = PseudoRouter::new(&provider, &oracle, &dispatcher, &config());
    assert!(matches!(router.run(), Err(MappingError::NoPathFound { .. })));

    assert!(dispatcher.is_aborted());
    assert!(dispatcher.poll().is_none());
    assert_eq!(dispatcher.len(), 1);
}

#[test]
fn zero_travel_cost_warns_once() {
    let dispatcher = Dispatcher::new(&());
    let line = line(2);

    assert!(dispatcher.warn_zero_travel_cost(&line, "A", "B"));
    assert!(!dispatcher.warn_zero_travel_cost(&line, "B", "C"));
}

#[test]
fn progress_counts_routes() {
    let provider = table(&[&["a0"], &["b0"]]);
    let oracle = TableOracle::default().minimal(0, 1, 1.0);

    let lines = vec![line(2), line(2), line(2)];
    let progress = LoggedProgress::new(3);
    let dispatcher = Dispatcher::new(&progress);
    dispatcher.extend(&lines);

    let mut router = PseudoRouter::new(&provider, &oracle, &dispatcher, &config());
    router.run().expect("all routes map");

    assert_eq!(progress.completed(), 3);
    assert_eq!(dispatcher.len(), 0);

    // Every line holds the same route ids, so later mappings replace earlier ones.
    let (schedule, _) = router.into_results();
    assert_eq!(schedule.len(), 1);

    progress.update();
    assert_eq!(progress.completed(), 4);
}

#[test]
fn dispatcher_hands_out_lines_in_order() {
    let lines = (0..3)
        .map(|index| TransitLine::new(format!("line{index}")))
        .collect::<Vec<_>>();

    let dispatcher = Dispatcher::new(&());
    dispatcher.add_transit_line(&lines[0]);
    dispatcher.extend(&lines[1..]);
    assert_eq!(dispatcher.len(), 3);

    let polled = std::iter::from_fn(|| dispatcher.poll())
        .map(|line| line.id.to_string())
        .collect::<Vec<_>>();

    assert_eq!(polled, vec!["line0", "line1", "line2"]);
    assert!(dispatcher.is_empty());
}

#[test]
fn concurrent_workers_claim_each_line_once() {
    let lines = (0..256)
        .map(|index| TransitLine::new(format!("line{index}")))
        .collect::<Vec<_>>();

    let dispatcher = Dispatcher::new(&());
    dispatcher.extend(&lines);

    let claimed = std::thread::scope(|scope| {
        let workers = (0..4)
            .map(|_| {
                scope.spawn(|| {
                    std::iter::from_fn(|| dispatcher.poll())
                        .map(|line| line.id.to_string())
                        .collect::<Vec<_>>()
                })
            })
            .collect::<Vec<_>>();

        workers
            .into_iter()
            .flat_map(|worker| worker.join().expect("worker must not panic"))
            .collect::<Vec<_>>()
    });

    let unique = claimed.iter().collect::<std::collections::BTreeSet<_>>();
    assert_eq!(claimed.len(), lines.len());
    assert_eq!(unique.len(), lines.len());
    assert!(dispatcher.is_empty());
}
