//! Weighting of pseudo graph edges.
//!
//! Consecutive candidates are joined either by a network path, or by an
//! artificial edge when the path is missing or too expensive. A path is
//! acceptable when its cost stays below the route's allowance, which is
//! the minimal travel cost between the stops scaled by the configured
//! factor.
//!
//! Each edge also carries half the cost of both candidate links, so that
//! every candidate link on the chosen path is counted exactly once.
//! Artificial edges subtract this half cost instead, which may leave
//! them with a negative weight. This is intended: an artificial edge
//! between expensive candidates is preferred over one between cheap
//! candidates.

use crate::mapping::candidate::LinkCandidate;
use crate::mapping::oracle::LeastCostPath;
use crate::network::LinkId;

/// Multiplies the path cost between two candidates on the same link,
/// which would otherwise require looping around the block.
pub const SAME_LINK_PENALTY: f64 = 4.0;

/// The outcome of weighing the connection between two candidates.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeDecision {
    pub weight: f64,

    /// The network links of the path, or `None` for an artificial edge.
    pub links: Option<Vec<LinkId>>,
}

impl EdgeDecision {
    #[inline]
    pub fn is_artificial(&self) -> bool {
        self.links.is_none()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeCosting {
    max_travel_cost_factor: f64,
}

impl EdgeCosting {
    pub fn new(max_travel_cost_factor: f64) -> Self {
        Self {
            max_travel_cost_factor,
        }
    }

    /// The largest path cost accepted between two stops.
    #[inline]
    pub fn max_allowed_travel_cost(&self, minimal_travel_cost: f64) -> f64 {
        minimal_travel_cost * self.max_travel_cost_factor
    }

    /// Weighs the edge between two candidates given their least-cost
    /// path, if one was found. Paths touching a loop link are ignored.
    pub fn decide(
        &self,
        current: &LinkCandidate,
        next: &LinkCandidate,
        path: Option<LeastCostPath>,
        max_allowed: f64,
    ) -> EdgeDecision {
        let half_candidates = 0.5 * current.cost() + 0.5 * next.cost();

        let existing = path
            .filter(|_| !current.is_loop_link() && !next.is_loop_link())
            .map(|path| {
                let cost = if current.link_id() == next.link_id() {
                    path.cost * SAME_LINK_PENALTY
                } else {
                    path.cost
                };

                (cost, path.links)
            })
            .filter(|(cost, _)| *cost < max_allowed);

        match existing {
            Some((cost, links)) => EdgeDecision {
                weight: cost + half_candidates,
                links: Some(links),
            },
            None => EdgeDecision {
                weight: max_allowed - half_candidates,
                links: None,
            },
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;
    use geo::Point;

    fn candidate(id: &str, from: &str, to: &str, cost: f64) -> LinkCandidate {
        LinkCandidate::new(
            id,
            (from, Point::new(0.0, 0.0)),
            (to, Point::new(10.0, 0.0)),
            cost,
        )
    }

    #[test]
    fn accepts_path_below_allowance() {
        let costing = EdgeCosting::new(5.0);
        let a = candidate("a", "1", "2", 10.0);
        let b = candidate("b", "3", "4", 6.0);

        let path = LeastCostPath::new(20.0, vec![LinkId::from("x")]);
        let decision = costing.decide(&a, &b, Some(path), costing.max_allowed_travel_cost(10.0));

        assert!(!decision.is_artificial());
        assert_relative_eq!(decision.weight, 28.0);
    }

    #[test]
    fn falls_back_to_artificial_when_too_expensive() {
        let costing = EdgeCosting::new(2.0);
        let a = candidate("a", "1", "2", 10.0);
        let b = candidate("b", "3", "4", 6.0);

        // Equal to the allowance is not below it.
        let path = LeastCostPath::new(20.0, vec![]);
        let decision = costing.decide(&a, &b, Some(path), costing.max_allowed_travel_cost(10.0));

        assert!(decision.is_artificial());
        assert_relative_eq!(decision.weight, 12.0);
    }

    #[test]
    fn artificial_weight_may_be_negative() {
        let costing = EdgeCosting::new(1.0);
        let a = candidate("a", "1", "2", 40.0);
        let b = candidate("b", "3", "4", 20.0);

        let decision = costing.decide(&a, &b, None, 10.0);
        assert_relative_eq!(decision.weight, -20.0);
    }

    #[test]
    fn same_link_penalty_tips_into_artificial() {
        let costing = EdgeCosting::new(5.0);
        let a = candidate("a", "1", "2", 2.0);
        let allowance = costing.max_allowed_travel_cost(10.0);

        // 15 is acceptable on its own, but not once quadrupled.
        let path = LeastCostPath::new(15.0, vec![LinkId::from("x")]);
        let decision = costing.decide(&a, &a.clone(), Some(path), allowance);

        assert!(decision.is_artificial());
        assert_relative_eq!(decision.weight, 48.0);
    }

    #[test]
    fn loop_links_never_use_a_path() {
        let costing = EdgeCosting::new(5.0);
        let a = candidate("a", "1", "2", 0.0);
        let stop_loop = candidate("pt_s", "s", "s", 0.0);

        let decision = costing.decide(&a, &stop_loop, Some(LeastCostPath::empty()), 50.0);
        assert!(decision.is_artificial());
        assert_relative_eq!(decision.weight, 50.0);
    }
}
