use crate::config::{CandidateConfig, MappingConfig};
use crate::error::NetworkError;
use crate::mapping::candidate::{CandidateProvider, LinkCandidate};
use crate::mapping::oracle::LinkCosting;
use crate::network::{Link, LinkId, Network, Node, NodeId, ARTIFICIAL_LINK_MODE};
use crate::schedule::{RouteStop, StopFacility, StopFacilityId, TransitLine, TransitRoute};
use crate::util::FxIndexMap;

use geo::{Distance, Euclidean, LineInterpolatePoint, LineLocatePoint, LineString, Point};
use itertools::Itertools;
use log::{debug, info};
use rayon::prelude::*;
use rstar::primitives::GeomWithData;
use rstar::RTree;
use rustc_hash::{FxHashMap, FxHashSet};
use wkt::ToWkt;
use std::collections::BTreeSet;

type NodeEntry = GeomWithData<[f64; 2], NodeId>;

/// Candidates of each stop facility, per transport mode.
type CandidateTable = FxHashMap<StopFacilityId, FxHashMap<String, Vec<LinkCandidate>>>;

/// Provides the links closest to each stop as its candidates.
///
/// Candidates are computed once for every stop facility and transport
/// mode used by the schedule. A stop with no link nearby is served by a
/// loop link placed at the stop itself, which [`insert_loop_links`]
/// adds to the network once mapping has finished.
///
/// [`insert_loop_links`]: NearestLinkCandidates::insert_loop_links
#[derive(Debug, Default)]
pub struct NearestLinkCandidates {
    table: CandidateTable,
    loop_links: FxIndexMap<LinkId, (Node, Link)>,
}

impl NearestLinkCandidates {
    pub fn new(network: &Network, lines: &[TransitLine], config: &MappingConfig) -> Self {
        let costing = LinkCosting::new(config.travel_cost_type);
        let index = RTree::bulk_load(
            network
                .nodes()
                .map(|node| NodeEntry::new([node.position.x(), node.position.y()], node.id.clone()))
                .collect(),
        );

        let requests = lines
            .iter()
            .flat_map(TransitLine::routes)
            .flat_map(|route| {
                route
                    .stops
                    .iter()
                    .map(move |stop| (stop.facility.clone(), route.transport_mode.clone()))
            })
            .unique_by(|(facility, mode)| (facility.id.clone(), mode.clone()))
            .collect::<Vec<_>>();

        let located = requests
            .into_par_iter()
            .map(|(facility, mode)| {
                let candidates = Self::locate(
                    network,
                    &index,
                    &facility,
                    config.network_modes(&mode),
                    &config.candidates,
                    costing,
                );

                (facility, mode, candidates)
            })
            .collect::<Vec<_>>();

        let mut provider = Self::default();
        for (facility, mode, mut candidates) in located {
            if candidates.is_empty() {
                candidates.push(provider.loop_candidate(&facility));
            }

            provider
                .table
                .entry(facility.id.clone())
                .or_default()
                .insert(mode, candidates);
        }

        info!(
            "Located candidates for {} stop facilities, {} require a loop link",
            provider.table.len(),
            provider.loop_links.len()
        );

        provider
    }

    /// The closest links to a stop facility, nearest first. Links at
    /// equal distance are ordered by id.
    fn locate(
        network: &Network,
        index: &RTree<NodeEntry>,
        facility: &StopFacility,
        modes: Option<&BTreeSet<String>>,
        config: &CandidateConfig,
        costing: LinkCosting,
    ) -> Vec<LinkCandidate> {
        let origin = facility.position;
        let radius = config.max_link_candidate_distance;

        let mut seen = FxHashSet::default();
        let mut scored = index
            .locate_within_distance([origin.x(), origin.y()], radius * radius)
            .flat_map(|entry| network.out_links(&entry.data).chain(network.in_links(&entry.data)))
            .filter(|link| seen.insert(link.id.clone()))
            .filter(|link| !link.is_artificial() && link.allows_any(modes))
            .filter_map(|link| {
                let distance = Self::distance(network, link, &origin)?;
                (distance <= radius).then_some((distance, link))
            })
            .collect::<Vec<_>>();

        scored.sort_by(|(a_distance, a), (b_distance, b)| {
            a_distance.total_cmp(b_distance).then_with(|| a.id.cmp(&b.id))
        });

        let candidates = scored
            .into_iter()
            .take(config.n_link_candidates)
            .filter_map(|(_, link)| LinkCandidate::from_link(network, link, costing.link_cost(link)))
            .collect::<Vec<_>>();

        debug!(
            "Stop {} at {} has {} candidates within {radius}",
            facility.id,
            origin.wkt_string(),
            candidates.len()
        );

        candidates
    }

    /// Shortest distance between the point and the link geometry.
    fn distance(network: &Network, link: &Link, origin: &Point) -> Option<f64> {
        let from = network.position(&link.from)?;
        let to = network.position(&link.to)?;

        if link.is_loop() {
            return Some(Euclidean.distance(from, *origin));
        }

        let line = LineString::from(vec![from, to]);
        let projected = line
            .line_locate_point(origin)
            .and_then(|fraction| line.line_interpolate_point(fraction))
            .unwrap_or(from);

        Some(Euclidean.distance(projected, *origin))
    }

    fn loop_candidate(&mut self, facility: &StopFacility) -> LinkCandidate {
        let id = format!("pt_{}", facility.id);
        let node = Node::new(id.as_str(), facility.position);
        let link = Link::new(id.as_str(), id.as_str(), id.as_str())
            .with_modes([ARTIFICIAL_LINK_MODE]);

        let candidate = LinkCandidate::new(
            id.as_str(),
            (id.as_str(), facility.position),
            (id.as_str(), facility.position),
            0.0,
        );

        self.loop_links
            .entry(link.id.clone())
            .or_insert((node, link));

        candidate
    }

    /// The loop links created for stops without nearby links.
    pub fn loop_links(&self) -> impl Iterator<Item = &Link> {
        self.loop_links.values().map(|(_, link)| link)
    }

    /// Adds every loop link, and its node, which the network lacks.
    /// Returns the number of links inserted.
    pub fn insert_loop_links(&self, network: &mut Network) -> Result<usize, NetworkError> {
        let mut inserted = 0;

        for (node, link) in self.loop_links.values() {
            if network.contains_link(&link.id) {
                continue;
            }

            network.add_node(node.clone());
            network.add_link(link.clone())?;
            inserted += 1;
        }

        Ok(inserted)
    }
}

impl CandidateProvider for NearestLinkCandidates {
    fn candidates(
        &self,
        stop: &RouteStop,
        _line: &TransitLine,
        route: &TransitRoute,
    ) -> Vec<LinkCandidate> {
        self.table
            .get(&stop.facility.id)
            .and_then(|modes| modes.get(&route.transport_mode))
            .cloned()
            .unwrap_or_default()
    }
}

