use crate::network::NodeId;
use std::collections::BTreeSet;

crate::define_id!(
    /// Identifies a [`Link`] within the [`Network`](super::Network).
    LinkId
);

/// The network mode carried by artificial links.
pub const ARTIFICIAL_LINK_MODE: &str = "artificial";

/// A directed link between two nodes.
///
/// Links are traversable by the network [modes](#field.modes) they
/// list. An empty set of modes places no restriction on the link.
#[derive(Clone, Debug, PartialEq)]
pub struct Link {
    pub id: LinkId,
    pub from: NodeId,
    pub to: NodeId,

    pub length: f64,
    pub freespeed: f64,
    pub capacity: f64,

    /// The number of lanes represented by the link.
    pub lanes: f64,
    pub modes: BTreeSet<String>,
}

impl Link {
    pub fn new(id: impl Into<LinkId>, from: impl Into<NodeId>, to: impl Into<NodeId>) -> Self {
        Self {
            id: id.into(),
            from: from.into(),
            to: to.into(),
            length: 0.0,
            freespeed: 1.0,
            capacity: 1000.0,
            lanes: 1.0,
            modes: BTreeSet::new(),
        }
    }

    pub fn with_length(self, length: f64) -> Self {
        Self { length, ..self }
    }

    pub fn with_freespeed(self, freespeed: f64) -> Self {
        Self { freespeed, ..self }
    }

    pub fn with_capacity(self, capacity: f64) -> Self {
        Self { capacity, ..self }
    }

    pub fn with_lanes(self, lanes: f64) -> Self {
        Self { lanes, ..self }
    }

    pub fn with_modes<I, S>(self, modes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            modes: modes.into_iter().map(Into::into).collect(),
            ..self
        }
    }

    /// Free-flow traversal time of the link.
    #[inline]
    pub fn travel_time(&self) -> f64 {
        if self.freespeed > 0.0 {
            self.length / self.freespeed
        } else {
            f64::INFINITY
        }
    }

    /// A loop link starts and ends at the same node.
    #[inline]
    pub fn is_loop(&self) -> bool {
        self.from == self.to
    }

    #[inline]
    pub fn is_artificial(&self) -> bool {
        self.modes.contains(ARTIFICIAL_LINK_MODE)
    }

    /// Whether the link may be used by any of the given network modes.
    /// Passing `None` allows every link.
    pub fn allows_any(&self, modes: Option<&BTreeSet<String>>) -> bool {
        match modes {
            None => true,
            Some(_) if self.modes.is_empty() => true,
            Some(modes) => !self.modes.is_disjoint(modes),
        }
    }
}
