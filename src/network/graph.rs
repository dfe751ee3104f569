use crate::error::NetworkError;
use crate::network::{Link, LinkId, Node, NodeId};

use crate::util::FxIndexMap;

use geo::Point;
use rustc_hash::FxHashMap;
use std::fmt::{Debug, Formatter};

/// A directed network of nodes and links.
///
/// Adjacency is maintained on insertion, so the inbound and outbound
/// links of a node are available without scanning every link.
#[derive(Default, Clone)]
pub struct Network {
    nodes: FxIndexMap<NodeId, Node>,
    links: FxIndexMap<LinkId, Link>,

    out_links: FxHashMap<NodeId, Vec<LinkId>>,
    in_links: FxHashMap<NodeId, Vec<LinkId>>,
}

impl Debug for Network {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Network with Nodes: {}, Links: {}",
            self.nodes.len(),
            self.links.len()
        )
    }
}

impl Network {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the node, returning `false` if a node with
    /// the same id already existed. Existing nodes are kept.
    pub fn add_node(&mut self, node: Node) -> bool {
        if self.nodes.contains_key(&node.id) {
            return false;
        }

        self.nodes.insert(node.id.clone(), node);
        true
    }

    /// Inserts the link. Both of its nodes must already be present,
    /// and no other link may share its id.
    pub fn add_link(&mut self, link: Link) -> Result<(), NetworkError> {
        if self.links.contains_key(&link.id) {
            return Err(NetworkError::DuplicateLink(link.id));
        }

        for node in [&link.from, &link.to] {
            if !self.nodes.contains_key(node) {
                return Err(NetworkError::MissingNode(node.clone()));
            }
        }

        self.out_links
            .entry(link.from.clone())
            .or_default()
            .push(link.id.clone());
        self.in_links
            .entry(link.to.clone())
            .or_default()
            .push(link.id.clone());

        self.links.insert(link.id.clone(), link);
        Ok(())
    }

    #[inline]
    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    #[inline]
    pub fn link(&self, id: &LinkId) -> Option<&Link> {
        self.links.get(id)
    }

    #[inline]
    pub fn contains_node(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    #[inline]
    pub fn contains_link(&self, id: &LinkId) -> bool {
        self.links.contains_key(id)
    }

    #[inline]
    pub fn position(&self, id: &NodeId) -> Option<Point> {
        self.nodes.get(id).map(|node| node.position)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn links(&self) -> impl Iterator<Item = &Link> {
        self.links.values()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Links leaving the node, in insertion order.
    pub fn out_links<'a>(&'a self, node: &NodeId) -> impl Iterator<Item = &'a Link> + 'a {
        Self::resolve(&self.links, self.out_links.get(node))
    }

    /// Links arriving at the node, in insertion order.
    pub fn in_links<'a>(&'a self, node: &NodeId) -> impl Iterator<Item = &'a Link> + 'a {
        Self::resolve(&self.links, self.in_links.get(node))
    }

    fn resolve<'a>(
        links: &'a FxIndexMap<LinkId, Link>,
        ids: Option<&'a Vec<LinkId>>,
    ) -> impl Iterator<Item = &'a Link> + 'a {
        ids.into_iter()
            .flatten()
            .filter_map(move |id| links.get(id))
    }
}
