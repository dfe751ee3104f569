use crate::error::NetworkError;
use crate::lanes::{add_turn_lanes, Lanes};
use crate::mapping::artificial::ArtificialLink;
use crate::network::{LinkId, Network};
use crate::util::FxIndexMap;

use log::{debug, info};

/// A set of artificial links, keyed by id.
///
/// Inserting a link whose id is already present keeps the first one.
#[derive(Clone, Debug, Default)]
pub struct ArtificialLinks {
    links: FxIndexMap<LinkId, ArtificialLink>,
}

impl ArtificialLinks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if a link with the same id was already present.
    pub fn insert(&mut self, link: ArtificialLink) -> bool {
        if self.links.contains_key(&link.id) {
            return false;
        }

        self.links.insert(link.id.clone(), link);
        true
    }

    /// Absorbs the links of another set, such as that of another worker.
    pub fn merge(&mut self, other: ArtificialLinks) {
        self.extend(other.links.into_values());
    }

    pub fn get(&self, id: &LinkId) -> Option<&ArtificialLink> {
        self.links.get(id)
    }

    pub fn contains(&self, id: &LinkId) -> bool {
        self.links.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ArtificialLink> {
        self.links.values()
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Orders the set by link id, so that results do not depend on
    /// which worker produced a link.
    pub fn sort(&mut self) {
        self.links.sort_unstable_keys();
    }

    /// Inserts every link not yet part of the network, creating missing
    /// end nodes. Committing the same set twice inserts nothing the
    /// second time. Returns the ids of the inserted links.
    pub fn commit(&self, network: &mut Network) -> Result<Vec<LinkId>, NetworkError> {
        let mut inserted = Vec::new();

        for link in self.iter() {
            if network.contains_link(&link.id) {
                continue;
            }

            for node in link.nodes() {
                if network.add_node(node.clone()) {
                    debug!("Created node {} for artificial link {}", node.id, link.id);
                }
            }

            network.add_link(link.to_link())?;
            inserted.push(link.id.clone());
        }

        info!(
            "Committed {} of {} artificial links to network",
            inserted.len(),
            self.len()
        );

        Ok(inserted)
    }

    /// As [`commit`](Self::commit), additionally adding turn lanes at the
    /// upstream node of every inserted link.
    pub fn commit_with_lanes(
        &self,
        network: &mut Network,
        lanes: &mut Lanes,
    ) -> Result<Vec<LinkId>, NetworkError> {
        let inserted = self.commit(network)?;

        let added = inserted
            .iter()
            .filter_map(|id| self.get(id))
            .map(|link| add_turn_lanes(network, lanes, link))
            .sum::<usize>();

        debug!("Added {added} turn lanes for artificial links");
        Ok(inserted)
    }
}

impl Extend<ArtificialLink> for ArtificialLinks {
    fn extend<T: IntoIterator<Item = ArtificialLink>>(&mut self, iter: T) {
        for link in iter {
            self.insert(link);
        }
    }
}

impl FromIterator<ArtificialLink> for ArtificialLinks {
    fn from_iter<T: IntoIterator<Item = ArtificialLink>>(iter: T) -> Self {
        let mut links = Self::new();
        links.extend(iter);
        links
    }
}
