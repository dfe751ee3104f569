use crate::lanes::{order_to_links, Lane, LaneId, Lanes};
use crate::mapping::artificial::ArtificialLink;
use crate::network::Network;

use log::trace;

/// Saturation flow of a single lane, in vehicles per hour.
pub const LANE_CAPACITY_PER_HOUR: f64 = 1800.0;

/// Queue offset of lanes synthesised at artificial links, in metres.
const TURN_LANE_START: f64 = 100.0;

/// Adds turn lanes towards every outbound link at the upstream node of
/// a freshly inserted artificial link.
///
/// Nodes without lanes stay without them: lanes are only synthesised
/// when some inbound link of the node already has an assignment. Each
/// real inbound link then gets one lane per outbound link it cannot
/// reach yet. Returns the number of lanes added.
pub fn add_turn_lanes(network: &Network, lanes: &mut Lanes, artificial: &ArtificialLink) -> usize {
    let node = &artificial.from;

    if !network.in_links(node).any(|link| lanes.contains(&link.id)) {
        return 0;
    }

    let mut added = 0;
    for in_link in network.in_links(node).filter(|link| !link.is_artificial()) {
        let order = order_to_links(network, in_link, None);
        let assignment = lanes.assignment_or_default(&in_link.id);

        for out_link in network.out_links(&in_link.to) {
            let id = LaneId::from(format!("{}-{}-{}", in_link.from, in_link.to, out_link.to));
            if assignment.contains_lane(&id) || assignment.reaches(&out_link.id) {
                continue;
            }

            let lane = Lane::new(id)
                .with_alignment(order.get(&out_link.id).copied().unwrap_or_default())
                .with_capacity(LANE_CAPACITY_PER_HOUR * out_link.lanes)
                .with_start(TURN_LANE_START)
                .with_represented_lanes(out_link.lanes)
                .towards(out_link.id.clone());

            trace!("Adding lane {} on {} towards {}", lane.id, in_link.id, out_link.id);
            added += usize::from(assignment.add_lane(lane));
        }
    }

    added
}
