use crate::lanes::{Lane, Lanes, LANE_CAPACITY_PER_HOUR};
use crate::mapping::PseudoSchedule;
use crate::network::Network;

use log::{error, info};

/// Queue offset of lanes added to repair a missing connection, in metres.
const REPAIR_LANE_START: f64 = 50.0;

/// Problems found in the link sequences of mapped routes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConsistencyReport {
    /// Routes with at least one missing link or connection.
    pub wrong_routes: usize,
    /// Links referenced by a route but absent from the network.
    pub missing_links: usize,
    /// Consecutive links not joined by any lane.
    pub missing_connections: usize,
}

impl ConsistencyReport {
    pub fn is_consistent(&self) -> bool {
        self.wrong_routes == 0
    }
}

/// Checks every mapped route against the network and its lanes.
///
/// A link with a lane assignment must have a lane leading to the next
/// link of the route. Where none does, a single-lane connection is
/// added and the gap is counted.
pub fn check_consistency(
    network: &Network,
    schedule: &PseudoSchedule,
    lanes: &mut Lanes,
) -> ConsistencyReport {
    let mut report = ConsistencyReport::default();

    for route in schedule.routes() {
        let links = route.link_sequence();
        let mut problem = false;

        for (index, link) in links.iter().enumerate() {
            if !network.contains_link(link) {
                error!("Link {link} of route {}/{} is not part of the network", route.line, route.route);
                report.missing_links += 1;
                problem = true;
            }

            let Some(next) = links.get(index + 1) else {
                continue;
            };

            let Some(assignment) = lanes.assignment_mut(link) else {
                continue;
            };

            if assignment.reaches(next) {
                continue;
            }

            error!("Link {link} has no lane towards {next}, adding one");
            assignment.add_lane(
                Lane::new(format!("{link}_{next}"))
                    .with_capacity(LANE_CAPACITY_PER_HOUR)
                    .with_represented_lanes(1.0)
                    .with_start(REPAIR_LANE_START)
                    .towards(next.clone()),
            );

            report.missing_connections += 1;
            problem = true;
        }

        if problem {
            report.wrong_routes += 1;
        }
    }

    info!("Consistency check: {report:?}");
    report
}
