use crate::network::LinkId;
use crate::util::FxIndexMap;

use smallvec::SmallVec;

crate::define_id!(
    /// Identifies a [`Lane`] within its [`LanesToLinkAssignment`].
    LaneId
);

#[derive(Clone, Debug, PartialEq)]
pub struct Lane {
    pub id: LaneId,

    /// Lateral position among the lanes of a link. Negative values lie
    /// to the left, positive values to the right.
    pub alignment: i32,
    pub capacity_vehicles_per_hour: f64,
    pub starts_at_meter_from_link_end: f64,
    pub represented_lanes: f64,
    pub to_links: SmallVec<[LinkId; 2]>,
}

impl Lane {
    pub fn new(id: impl Into<LaneId>) -> Self {
        Self {
            id: id.into(),
            alignment: 0,
            capacity_vehicles_per_hour: 0.0,
            starts_at_meter_from_link_end: 0.0,
            represented_lanes: 1.0,
            to_links: SmallVec::new(),
        }
    }

    pub fn with_alignment(self, alignment: i32) -> Self {
        Self { alignment, ..self }
    }

    pub fn with_capacity(self, capacity_vehicles_per_hour: f64) -> Self {
        Self {
            capacity_vehicles_per_hour,
            ..self
        }
    }

    pub fn with_start(self, starts_at_meter_from_link_end: f64) -> Self {
        Self {
            starts_at_meter_from_link_end,
            ..self
        }
    }

    pub fn with_represented_lanes(self, represented_lanes: f64) -> Self {
        Self {
            represented_lanes,
            ..self
        }
    }

    pub fn towards(mut self, link: LinkId) -> Self {
        self.to_links.push(link);
        self
    }

    #[inline]
    pub fn leads_to(&self, link: &LinkId) -> bool {
        self.to_links.contains(link)
    }
}

/// The lanes of a single inbound link.
#[derive(Clone, Debug, PartialEq)]
pub struct LanesToLinkAssignment {
    pub link_id: LinkId,
    lanes: FxIndexMap<LaneId, Lane>,
}

impl LanesToLinkAssignment {
    pub fn new(link_id: LinkId) -> Self {
        Self {
            link_id,
            lanes: FxIndexMap::default(),
        }
    }

    /// Adds the lane unless one with the same id exists,
    /// returning whether it was added.
    pub fn add_lane(&mut self, lane: Lane) -> bool {
        if self.lanes.contains_key(&lane.id) {
            return false;
        }

        self.lanes.insert(lane.id.clone(), lane);
        true
    }

    pub fn lane(&self, id: &LaneId) -> Option<&Lane> {
        self.lanes.get(id)
    }

    pub fn contains_lane(&self, id: &LaneId) -> bool {
        self.lanes.contains_key(id)
    }

    /// Whether any lane leads to the link.
    pub fn reaches(&self, link: &LinkId) -> bool {
        self.lanes.values().any(|lane| lane.leads_to(link))
    }

    pub fn lanes(&self) -> impl Iterator<Item = &Lane> {
        self.lanes.values()
    }

    pub fn len(&self) -> usize {
        self.lanes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }
}

/// Lane assignments keyed by inbound link.
#[derive(Clone, Debug, Default)]
pub struct Lanes {
    assignments: FxIndexMap<LinkId, LanesToLinkAssignment>,
}

impl Lanes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the assignment, replacing any previous one for the same link.
    pub fn add_assignment(&mut self, assignment: LanesToLinkAssignment) {
        self.assignments
            .insert(assignment.link_id.clone(), assignment);
    }

    pub fn assignment(&self, link: &LinkId) -> Option<&LanesToLinkAssignment> {
        self.assignments.get(link)
    }

    pub fn assignment_mut(&mut self, link: &LinkId) -> Option<&mut LanesToLinkAssignment> {
        self.assignments.get_mut(link)
    }

    /// The assignment of the link, created empty if missing.
    pub fn assignment_or_default(&mut self, link: &LinkId) -> &mut LanesToLinkAssignment {
        self.assignments
            .entry(link.clone())
            .or_insert_with(|| LanesToLinkAssignment::new(link.clone()))
    }

    pub fn contains(&self, link: &LinkId) -> bool {
        self.assignments.contains_key(link)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LanesToLinkAssignment> {
        self.assignments.values()
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}
