use crate::mapping::candidate::LinkCandidate;
use crate::schedule::{RouteStop, TransitLine, TransitRoute};

/// Supplies the link candidates of a stop.
///
/// Implementations must be deterministic: the same stop, line and
/// route always yield the same candidates in the same order. They are
/// shared between routing workers, hence the `Sync` bound.
pub trait CandidateProvider: Sync {
    fn candidates(
        &self,
        stop: &RouteStop,
        line: &TransitLine,
        route: &TransitRoute,
    ) -> Vec<LinkCandidate>;
}

impl<F> CandidateProvider for F
where
    F: Fn(&RouteStop, &TransitLine, &TransitRoute) -> Vec<LinkCandidate> + Sync,
{
    fn candidates(
        &self,
        stop: &RouteStop,
        line: &TransitLine,
        route: &TransitRoute,
    ) -> Vec<LinkCandidate> {
        self(stop, line, route)
    }
}
