//! Configuration of a mapping run.
//!
//! Every field has a default, so a configuration file only needs
//! to name the values it overrides.
//!
//! ```toml
//! threads = 4
//! max_travel_cost_factor = 5.0
//! travel_cost_type = "travelTime"
//!
//! [candidates]
//! n_link_candidates = 6
//! max_link_candidate_distance = 90.0
//!
//! [transport_mode_assignment]
//! bus = ["car", "bus"]
//! rail = ["rail"]
//! ```
use crate::error::ConfigError;

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::num::NonZeroUsize;
use std::path::Path;
use strum::{Display, EnumString};

const DEFAULT_MAX_TRAVEL_COST_FACTOR: f64 = 5.0;
const DEFAULT_N_LINK_CANDIDATES: usize = 6;
const DEFAULT_MAX_LINK_CANDIDATE_DISTANCE: f64 = 90.0;

/// Which property of a link is used as its travel cost.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum TravelCostType {
    /// Free-flow travel time, `length / freespeed`.
    #[default]
    TravelTime,
    /// Link length.
    LinkLength,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateConfig {
    /// The number of closest links kept as candidates for a stop.
    pub n_link_candidates: usize,

    /// Links further than this distance from a stop are never candidates.
    pub max_link_candidate_distance: f64,
}

impl Default for CandidateConfig {
    fn default() -> Self {
        Self {
            n_link_candidates: DEFAULT_N_LINK_CANDIDATES,
            max_link_candidate_distance: DEFAULT_MAX_LINK_CANDIDATE_DISTANCE,
        }
    }
}

/// Attributes given to every artificial link inserted into the network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtificialLinkConfig {
    pub freespeed: f64,
    pub capacity: f64,
    pub lanes: f64,
}

impl Default for ArtificialLinkConfig {
    fn default() -> Self {
        Self {
            freespeed: 1.0,
            capacity: 9999.0,
            lanes: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MappingConfig {
    /// Number of workers routing transit lines concurrently.
    pub threads: usize,

    /// Multiplied with the minimal travel cost between two stops to obtain
    /// the highest cost a network path may have before an artificial link
    /// is used instead. Larger values tolerate longer detours.
    pub max_travel_cost_factor: f64,

    pub travel_cost_type: TravelCostType,

    pub candidates: CandidateConfig,

    /// Schedule transport mode to the network modes a route of that mode
    /// may use. Modes without an entry may use every link.
    pub transport_mode_assignment: BTreeMap<String, BTreeSet<String>>,

    pub artificial_link: ArtificialLinkConfig,
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self {
            threads: std::thread::available_parallelism()
                .map(NonZeroUsize::get)
                .unwrap_or(1),
            max_travel_cost_factor: DEFAULT_MAX_TRAVEL_COST_FACTOR,
            travel_cost_type: TravelCostType::default(),
            candidates: CandidateConfig::default(),
            transport_mode_assignment: BTreeMap::new(),
            artificial_link: ArtificialLinkConfig::default(),
        }
    }
}

impl MappingConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: MappingConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    pub fn with_threads(self, threads: usize) -> Self {
        Self { threads, ..self }
    }

    pub fn with_max_travel_cost_factor(self, max_travel_cost_factor: f64) -> Self {
        Self {
            max_travel_cost_factor,
            ..self
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.threads == 0 {
            return Err(ConfigError::Invalid("threads must be at least 1".into()));
        }

        if !(self.max_travel_cost_factor >= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "max_travel_cost_factor must be at least 1, got {}",
                self.max_travel_cost_factor
            )));
        }

        if self.candidates.n_link_candidates == 0 {
            return Err(ConfigError::Invalid(
                "n_link_candidates must be at least 1".into(),
            ));
        }

        if self.artificial_link.freespeed <= 0.0 {
            return Err(ConfigError::Invalid(
                "artificial link freespeed must be positive".into(),
            ));
        }

        Ok(())
    }

    /// The network modes usable by routes of the given schedule mode,
    /// or `None` if any link may be used.
    pub fn network_modes(&self, transport_mode: &str) -> Option<&BTreeSet<String>> {
        self.transport_mode_assignment.get(transport_mode)
    }
}
