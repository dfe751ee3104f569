use geo::Point;
use std::sync::Arc;

crate::define_id!(StopFacilityId);

/// The physical location at which a transit vehicle stops.
#[derive(Clone, Debug, PartialEq)]
pub struct StopFacility {
    pub id: StopFacilityId,
    pub name: String,
    pub position: Point,
}

impl StopFacility {
    pub fn new(id: impl Into<StopFacilityId>, name: impl Into<String>, position: Point) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            position,
        }
    }
}

/// A single visit of a route to a [`StopFacility`].
///
/// Offsets are given in seconds relative to the departure of the
/// route from its first stop.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteStop {
    /// Position of the stop within its route.
    pub index: usize,
    pub facility: Arc<StopFacility>,

    pub arrival_offset: Option<f64>,
    pub departure_offset: Option<f64>,
}

impl RouteStop {
    pub fn new(index: usize, facility: Arc<StopFacility>) -> Self {
        Self {
            index,
            facility,
            arrival_offset: None,
            departure_offset: None,
        }
    }

    pub fn with_offsets(self, arrival: Option<f64>, departure: Option<f64>) -> Self {
        Self {
            arrival_offset: arrival,
            departure_offset: departure,
            ..self
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.facility.name
    }

    /// The time the vehicle leaves the stop, or arrives
    /// at it when no departure is scheduled.
    #[inline]
    pub fn departure(&self) -> Option<f64> {
        self.departure_offset.or(self.arrival_offset)
    }

    /// The time the vehicle reaches the stop, or departs
    /// from it when no arrival is scheduled.
    #[inline]
    pub fn arrival(&self) -> Option<f64> {
        self.arrival_offset.or(self.departure_offset)
    }
}
