use crate::error::NetworkError;
use crate::network::{Link, LinkId, Network, Node, NodeId, ARTIFICIAL_LINK_MODE};

use geo::Point;
use std::collections::BTreeSet;

fn triangle() -> Network {
    let mut network = Network::new();
    network.add_node(Node::new("a", Point::new(0.0, 0.0)));
    network.add_node(Node::new("b", Point::new(100.0, 0.0)));
    network.add_node(Node::new("c", Point::new(100.0, 100.0)));

    for (id, from, to) in [("ab", "a", "b"), ("bc", "b", "c"), ("ca", "c", "a"), ("ac", "a", "c")] {
        network
            .add_link(Link::new(id, from, to).with_length(100.0).with_freespeed(10.0))
            .expect("link must insert");
    }

    network
}

#[test]
fn adjacency_follows_insertion_order() {
    let network = triangle();

    let out = network
        .out_links(&NodeId::from("a"))
        .map(|link| link.id.as_str())
        .collect::<Vec<_>>();
    assert_eq!(out, vec!["ab", "ac"]);

    let into = network
        .in_links(&NodeId::from("c"))
        .map(|link| link.id.as_str())
        .collect::<Vec<_>>();
    assert_eq!(into, vec!["bc", "ac"]);

    assert_eq!(network.out_links(&NodeId::from("missing")).count(), 0);
}

#[test]
fn rejects_duplicate_and_dangling_links() {
    let mut network = triangle();

    let duplicate = network.add_link(Link::new("ab", "a", "b"));
    assert_eq!(duplicate, Err(NetworkError::DuplicateLink(LinkId::from("ab"))));

    let dangling = network.add_link(Link::new("ax", "a", "x"));
    assert_eq!(dangling, Err(NetworkError::MissingNode(NodeId::from("x"))));

    assert_eq!(network.link_count(), 4);
}

#[test]
fn keeps_first_node_on_conflict() {
    let mut network = triangle();
    assert!(!network.add_node(Node::new("a", Point::new(5.0, 5.0))));
    assert_eq!(network.position(&NodeId::from("a")), Some(Point::new(0.0, 0.0)));
}

#[test]
fn link_properties() {
    let link = Link::new("l", "a", "a").with_length(50.0).with_freespeed(5.0);
    assert!(link.is_loop());
    assert_eq!(link.travel_time(), 10.0);
    assert!(link.allows_any(None));

    let bus_only = Link::new("l", "a", "b").with_modes(["bus"]);
    let car = BTreeSet::from(["car".to_string()]);
    let bus = BTreeSet::from(["bus".to_string(), "car".to_string()]);
    assert!(!bus_only.allows_any(Some(&car)));
    assert!(bus_only.allows_any(Some(&bus)));

    let artificial = Link::new("pt", "a", "b").with_modes([ARTIFICIAL_LINK_MODE]);
    assert!(artificial.is_artificial());
}
