//! Pseudo-routing of transit routes.
//!
//! A transit route is mapped by choosing one [link candidate](candidate::LinkCandidate)
//! per stop. The choice is made over a layered [pseudo graph](graph::PseudoGraph)
//! whose edges carry either the least-cost network path between two
//! candidates, or an [artificial link](artificial::ArtificialLink) when the
//! network offers no acceptable path.

pub mod artificial;
pub mod candidate;
pub mod costing;
pub mod graph;
pub mod mapper;
pub mod oracle;
pub mod primitives;
pub mod router;
pub mod schedule;

#[doc(inline)]
pub use schedule::{PseudoLeg, PseudoRoute, PseudoSchedule};
