use crate::network::{LinkId, NodeId};
use crate::schedule::{LineId, RouteId};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MappingError {
    #[error(
        "pseudo graph has no path from SOURCE to DESTINATION for transit route {route} \
         on line {line} from \"{from_stop}\" to \"{to_stop}\""
    )]
    NoPathFound {
        line: LineId,
        route: RouteId,
        from_stop: String,
        to_stop: String,
    },

    #[error("transit route {route} on line {line} has no stops")]
    EmptyRoute { line: LineId, route: RouteId },

    #[error("could not collapse pseudo graph: {0}")]
    Collapse(#[from] CollapseError),

    #[error("network error: {0}")]
    Network(#[from] NetworkError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("could not build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("mapping was aborted after another worker failed")]
    Aborted,
}

impl MappingError {
    /// Whether the error only reflects a failure raised elsewhere in the run.
    pub fn is_aborted(&self) -> bool {
        matches!(self, MappingError::Aborted)
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CollapseError {
    #[error("ends were not attached")]
    NoEnds,

    #[error("ends already attached to graph, cannot attach more than once")]
    EndsAlreadyAttached,

    #[error("cannot attach ends to a route without stops")]
    LayerMissing,

    #[error("could not find a path through the pseudo graph")]
    NoPathFound,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum NetworkError {
    #[error("node {0} is not part of the network")]
    MissingNode(NodeId),

    #[error("link {0} already exists in the network")]
    DuplicateLink(LinkId),

    #[error("link {0} is not part of the network")]
    UnknownLink(LinkId),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}
