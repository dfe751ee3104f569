use crate::config::ArtificialLinkConfig;
use crate::mapping::artificial::{ArtificialLink, ArtificialLinks};
use crate::mapping::candidate::LinkCandidate;
use crate::network::{Link, LinkId, Network, Node, NodeId};

use approx::assert_relative_eq;
use geo::Point;

fn candidate(link: &str, from: (&str, Point), to: (&str, Point)) -> LinkCandidate {
    LinkCandidate::new(link, from, to, 0.0)
}

fn pair() -> (LinkCandidate, LinkCandidate) {
    (
        candidate("ab", ("a", Point::new(0.0, 0.0)), ("b", Point::new(100.0, 0.0))),
        candidate("cd", ("c", Point::new(100.0, 300.0)), ("d", Point::new(100.0, 400.0))),
    )
}

#[test]
fn joins_downstream_to_upstream() {
    let (current, next) = pair();
    let attributes = ArtificialLinkConfig {
        freespeed: 5.0,
        capacity: 500.0,
        lanes: 2.0,
    };

    let link = ArtificialLink::between(&current, &next, &attributes);
    assert_eq!(link.id.as_str(), "pt_b_c");
    assert_eq!(link.from, NodeId::from("b"));
    assert_eq!(link.to, NodeId::from("c"));
    assert_relative_eq!(link.length, 300.0);

    let network_link = link.to_link();
    assert!(network_link.is_artificial());
    assert_relative_eq!(network_link.freespeed, 5.0);
    assert_relative_eq!(network_link.capacity, 500.0);
    assert_relative_eq!(network_link.lanes, 2.0);
    assert_relative_eq!(network_link.travel_time(), 60.0);
}

#[test]
fn keeps_first_link_per_id() {
    let (current, next) = pair();
    let mut links = ArtificialLinks::new();

    assert!(links.insert(ArtificialLink::between(&current, &next, &ArtificialLinkConfig::default())));

    let wider = ArtificialLinkConfig {
        lanes: 4.0,
        ..Default::default()
    };
    assert!(!links.insert(ArtificialLink::between(&current, &next, &wider)));

    assert_eq!(links.len(), 1);
    let kept = links.get(&LinkId::from("pt_b_c")).expect("link kept");
    assert_relative_eq!(kept.lanes, 1.0);
}

#[test]
fn merges_and_sorts() {
    let (ab, cd) = pair();
    let mut first = ArtificialLinks::from_iter([ArtificialLink::between(
        &cd,
        &ab,
        &ArtificialLinkConfig::default(),
    )]);
    let second = ArtificialLinks::from_iter([
        ArtificialLink::between(&ab, &cd, &ArtificialLinkConfig::default()),
        ArtificialLink::between(&cd, &ab, &ArtificialLinkConfig::default()),
    ]);

    first.merge(second);
    first.sort();

    let ids = first.iter().map(|link| link.id.as_str()).collect::<Vec<_>>();
    assert_eq!(ids, vec!["pt_b_c", "pt_d_a"]);
}

#[test]
fn commit_creates_missing_nodes_once() {
    let (current, next) = pair();

    let mut network = Network::new();
    network.add_node(Node::new("a", Point::new(0.0, 0.0)));
    network.add_node(Node::new("b", Point::new(100.0, 0.0)));
    network
        .add_link(Link::new("ab", "a", "b"))
        .expect("link must insert");

    let links = ArtificialLinks::from_iter([ArtificialLink::between(
        &current,
        &next,
        &ArtificialLinkConfig::default(),
    )]);

    let inserted = links.commit(&mut network).expect("commit succeeds");
    assert_eq!(inserted, vec![LinkId::from("pt_b_c")]);
    assert_eq!(
        network.position(&NodeId::from("c")),
        Some(Point::new(100.0, 300.0))
    );

    assert!(links.commit(&mut network).expect("commit succeeds").is_empty());
    assert_eq!(network.link_count(), 2);
    assert_eq!(network.node_count(), 3);
}
