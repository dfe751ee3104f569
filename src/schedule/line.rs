use crate::schedule::{RouteStop, StopFacility};

use indexmap::IndexMap;
use std::sync::Arc;

crate::define_id!(LineId);
crate::define_id!(RouteId);

#[derive(Clone, Debug, PartialEq)]
pub struct TransitRoute {
    pub id: RouteId,

    /// The schedule mode of the route, such as `bus` or `rail`.
    pub transport_mode: String,
    pub stops: Vec<RouteStop>,
}

impl TransitRoute {
    pub fn new(id: impl Into<RouteId>, transport_mode: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            transport_mode: transport_mode.into(),
            stops: vec![],
        }
    }

    /// Appends a stop, assigning its index from its position in the route.
    pub fn with_stop(
        mut self,
        facility: Arc<StopFacility>,
        arrival: Option<f64>,
        departure: Option<f64>,
    ) -> Self {
        let index = self.stops.len();
        self.stops
            .push(RouteStop::new(index, facility).with_offsets(arrival, departure));
        self
    }

    pub fn first_stop(&self) -> Option<&RouteStop> {
        self.stops.first()
    }

    pub fn last_stop(&self) -> Option<&RouteStop> {
        self.stops.last()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TransitLine {
    pub id: LineId,
    pub routes: IndexMap<RouteId, TransitRoute>,
}

impl TransitLine {
    pub fn new(id: impl Into<LineId>) -> Self {
        Self {
            id: id.into(),
            routes: IndexMap::new(),
        }
    }

    pub fn with_route(mut self, route: TransitRoute) -> Self {
        self.routes.insert(route.id.clone(), route);
        self
    }

    pub fn routes(&self) -> impl Iterator<Item = &TransitRoute> {
        self.routes.values()
    }
}
