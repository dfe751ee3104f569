use geo::Point;

crate::define_id!(
    /// Identifies a [`Node`] within the [`Network`](super::Network).
    NodeId
);

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub position: Point,
}

impl Node {
    pub fn new(id: impl Into<NodeId>, position: Point) -> Self {
        Self {
            id: id.into(),
            position,
        }
    }
}
