//! Entry point of a mapping run.

use crate::config::MappingConfig;
use crate::error::{MappingError, NetworkError};
use crate::lanes::{check_consistency, ConsistencyReport, Lanes};
use crate::mapping::artificial::ArtificialLinks;
use crate::mapping::candidate::{CandidateProvider, NearestLinkCandidates};
use crate::mapping::oracle::{NetworkRouter, PathOracle};
use crate::mapping::router::{Dispatcher, LoggedProgress, Progress, PseudoRouter};
use crate::mapping::schedule::PseudoSchedule;
use crate::network::{LinkId, Network};
use crate::schedule::TransitLine;

use log::{debug, info};
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;

/// The merged results of every routing worker.
#[derive(Clone, Debug, Default)]
pub struct MappingOutcome {
    pub schedule: PseudoSchedule,
    pub artificial_links: ArtificialLinks,
}

impl MappingOutcome {
    /// Inserts the artificial links into the network.
    pub fn commit(&self, network: &mut Network) -> Result<Vec<LinkId>, NetworkError> {
        self.artificial_links.commit(network)
    }

    /// Inserts the artificial links into the network, adding turn lanes
    /// at their upstream nodes.
    pub fn commit_with_lanes(
        &self,
        network: &mut Network,
        lanes: &mut Lanes,
    ) -> Result<Vec<LinkId>, NetworkError> {
        self.artificial_links.commit_with_lanes(network, lanes)
    }
}

#[derive(Debug, Clone)]
pub struct TransitMapper {
    config: MappingConfig,
}

impl TransitMapper {
    pub fn new(config: MappingConfig) -> Result<Self, MappingError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &MappingConfig {
        &self.config
    }

    /// Routes every transit route of the given lines.
    ///
    /// Lines are spread over `threads` workers. The first route which
    /// cannot be mapped stops the run, and its error is returned.
    /// Otherwise the outcome does not depend on the number of workers.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(lines = lines.len())))]
    pub fn route_lines<P, O>(
        &self,
        lines: &[TransitLine],
        provider: &P,
        oracle: &O,
        progress: &dyn Progress,
    ) -> Result<MappingOutcome, MappingError>
    where
        P: CandidateProvider,
        O: PathOracle,
    {
        let threads = self.config.threads;
        let dispatcher = Dispatcher::new(progress);
        dispatcher.extend(lines);

        info!(
            "Routing {} transit lines on {threads} threads",
            dispatcher.len()
        );

        let pool = ThreadPoolBuilder::new().num_threads(threads).build()?;
        let results = pool.install(|| {
            (0..threads)
                .into_par_iter()
                .map(|worker| -> Result<_, MappingError> {
                    let mut router = PseudoRouter::new(provider, oracle, &dispatcher, &self.config);
                    router.run()?;

                    debug!("Worker {worker} finished");
                    Ok(router.into_results())
                })
                .collect::<Vec<_>>()
        });

        let mut outcome = MappingOutcome::default();
        let mut failure: Option<MappingError> = None;

        for result in results {
            match result {
                Ok((schedule, artificial_links)) => {
                    outcome.schedule.merge(schedule);
                    outcome.artificial_links.merge(artificial_links);
                }
                // Keep the error which caused the abort over the aborts it caused.
                Err(err) => {
                    if failure.as_ref().map_or(true, MappingError::is_aborted) {
                        failure = Some(err);
                    }
                }
            }
        }

        if let Some(err) = failure {
            return Err(err);
        }

        outcome.schedule.sort();
        outcome.artificial_links.sort();

        info!(
            "Mapped {} transit routes, requiring {} artificial links",
            outcome.schedule.len(),
            outcome.artificial_links.len()
        );

        Ok(outcome)
    }

    /// Maps the lines onto the network using the closest links as
    /// candidates, then inserts the required artificial and loop links.
    ///
    /// With `lanes`, turn lanes are added for artificial links and the
    /// resulting routes are checked for consistency against them.
    pub fn map_to_network(
        &self,
        lines: &[TransitLine],
        network: &mut Network,
        lanes: Option<&mut Lanes>,
    ) -> Result<(MappingOutcome, Option<ConsistencyReport>), MappingError> {
        let provider = NearestLinkCandidates::new(network, lines, &self.config);
        let progress = LoggedProgress::new(lines.iter().map(|line| line.routes.len()).sum());

        let outcome = {
            let oracle = NetworkRouter::new(network, &self.config);
            self.route_lines(lines, &provider, &oracle, &progress)?
        };

        provider.insert_loop_links(network)?;

        let report = match lanes {
            Some(lanes) => {
                outcome.commit_with_lanes(network, lanes)?;
                Some(check_consistency(network, &outcome.schedule, lanes))
            }
            None => {
                outcome.commit(network)?;
                None
            }
        };

        Ok((outcome, report))
    }
}
