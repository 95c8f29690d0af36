//! Two-leg connection planning.
//!
//! Reconstructs the run the traveller is on, finds when it reaches the
//! interchange, then checks every onward run from the interchange for
//! whether it reaches the destination and whether it does so directly.

use std::fmt;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::domain::{Departure, MatchError, RunId, StopId, StoppingPattern, Timing};
use crate::ptv::{DepartureBoard, DeparturesQuery, PtvError};

use super::config::PlannerConfig;
use super::journey::CandidateJourney;
use super::provider::TransitProvider;
use super::rank::rank_by_arrival;

/// Which stop lookup a malformed pattern was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupStage {
    /// The boarding stop in the first run's pattern.
    Origin,
    /// The interchange stop in the first run's pattern.
    Interchange,
    /// The destination stop in an onward run's pattern.
    Destination,
}

impl fmt::Display for LookupStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LookupStage::Origin => "origin",
            LookupStage::Interchange => "interchange",
            LookupStage::Destination => "destination",
        })
    }
}

/// Error from connection planning.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    /// No first-leg departure in the query window
    #[error("run resolution failed: no departure from stop {stop} at or after {after}")]
    NoService { stop: StopId, after: DateTime<Utc> },

    /// The first run has no stopping pattern
    #[error("pattern fetch failed: no stopping pattern for run {run}")]
    PatternUnavailable { run: RunId },

    /// A stop that must appear exactly once in a pattern does not
    #[error(
        "{stage} lookup failed: run {run} calls at stop {stop} {matches} times, expected exactly once"
    )]
    MalformedPattern {
        stage: LookupStage,
        run: RunId,
        stop: StopId,
        matches: usize,
    },

    /// A request to the transit service failed
    #[error("transit service request failed: {0}")]
    Transport(#[from] PtvError),
}

/// The leg the traveller is already on.
#[derive(Debug, Clone)]
pub struct FirstLeg {
    pub run_id: RunId,
    pub origin: StopId,
    /// Effective departure from the origin.
    pub departs: Timing,
    /// Effective time at the interchange.
    pub interchange_arrival: Timing,
    pub pattern: StoppingPattern,
}

/// Result of planning.
#[derive(Debug, Clone)]
pub struct Plan {
    pub first_leg: FirstLeg,

    /// Feasible onward journeys, earliest arrival first. May be empty.
    pub journeys: Vec<CandidateJourney>,
}

/// Connection planner.
///
/// Holds no state between calls; every `plan` re-issues its requests.
pub struct Planner<'a, P: TransitProvider> {
    provider: &'a P,
    config: &'a PlannerConfig,
}

impl<'a, P: TransitProvider> Planner<'a, P> {
    /// Create a new planner.
    pub fn new(provider: &'a P, config: &'a PlannerConfig) -> Self {
        Self { provider, config }
    }

    /// Plan onward connections for the first run leaving `origin` at or after
    /// `departure_time`.
    pub async fn plan(
        &self,
        departure_time: DateTime<Utc>,
        origin: StopId,
    ) -> Result<Plan, PlanError> {
        let first_leg = self.resolve_first_leg(departure_time, origin).await?;
        info!(
            run = %first_leg.run_id,
            departs = %first_leg.departs,
            interchange = %first_leg.interchange_arrival,
            "resolved first leg"
        );

        let onward = self
            .provider
            .departures(&self.query(
                self.config.interchange_stop,
                self.config.onward_max_results,
                true,
                first_leg.interchange_arrival.utc,
            ))
            .await?;

        let journeys = self
            .onward_journeys(onward, first_leg.interchange_arrival)
            .await?;
        info!(candidates = journeys.len(), "planned onward journeys");

        Ok(Plan {
            first_leg,
            journeys,
        })
    }

    async fn resolve_first_leg(
        &self,
        departure_time: DateTime<Utc>,
        origin: StopId,
    ) -> Result<FirstLeg, PlanError> {
        let board = self
            .provider
            .departures(&self.query(origin, 1, false, departure_time))
            .await?;

        let departure = board
            .departures
            .into_iter()
            .next()
            .ok_or(PlanError::NoService {
                stop: origin,
                after: departure_time,
            })?;
        let run_id = departure.run_id;
        let departs = departure.effective();
        debug!(run = %run_id, departs = %departs, "first departure");

        let pattern = self
            .provider
            .stopping_pattern(run_id, self.config.route_type, departure_time)
            .await?
            .ok_or(PlanError::PatternUnavailable { run: run_id })?;

        locate(&pattern, origin, LookupStage::Origin)?;
        let interchange_arrival =
            locate(&pattern, self.config.interchange_stop, LookupStage::Interchange)?.effective();

        Ok(FirstLeg {
            run_id,
            origin,
            departs,
            interchange_arrival,
            pattern,
        })
    }

    async fn onward_journeys(
        &self,
        board: DepartureBoard,
        interchange_arrival: Timing,
    ) -> Result<Vec<CandidateJourney>, PlanError> {
        let DepartureBoard { departures, runs } = board;
        let mut journeys = Vec::with_capacity(departures.len());

        for departure in departures {
            let run_id = departure.run_id;
            let departs = departure.effective();

            // The time-window query can still return runs that already left.
            if departs.utc < interchange_arrival.utc {
                debug!(run = %run_id, departs = %departs, "skipping departure before arrival");
                continue;
            }

            let Some(pattern) = self
                .provider
                .stopping_pattern(run_id, self.config.route_type, departs.utc)
                .await?
            else {
                warn!(run = %run_id, "no stopping pattern for onward run, skipping");
                continue;
            };

            match pattern.find_stop(self.config.destination_stop) {
                Ok(_) => {}
                Err(MatchError::Missing) => {
                    debug!(run = %run_id, "onward run does not serve destination");
                    continue;
                }
                Err(MatchError::Ambiguous(matches)) => {
                    return Err(PlanError::MalformedPattern {
                        stage: LookupStage::Destination,
                        run: run_id,
                        stop: self.config.destination_stop,
                        matches,
                    });
                }
            }

            let direct = !pattern.visits(self.config.transfer_point_stop);
            let arrives = departs.shifted(self.config.arrival_offset(direct));
            debug!(run = %run_id, direct, arrives = %arrives, "candidate");

            let run = runs.get(&run_id).cloned();
            journeys.push(CandidateJourney::new(
                departure,
                run,
                pattern,
                arrives,
                direct,
                &self.config.timezone,
            ));
        }

        Ok(rank_by_arrival(journeys))
    }

    fn query(
        &self,
        stop_id: StopId,
        max_results: u32,
        expand_runs: bool,
        at_or_after: DateTime<Utc>,
    ) -> DeparturesQuery {
        DeparturesQuery {
            route_type: self.config.route_type,
            stop_id,
            route_id: self.config.route_id,
            direction_id: self.config.direction_id,
            max_results,
            expand_runs,
            at_or_after,
        }
    }
}

/// Find the entry for `stop`, failing if the run does not call there exactly once.
fn locate(
    pattern: &StoppingPattern,
    stop: StopId,
    stage: LookupStage,
) -> Result<&Departure, PlanError> {
    pattern
        .find_stop(stop)
        .map_err(|e| PlanError::MalformedPattern {
            stage,
            run: pattern.run_id,
            stop,
            matches: e.matches(),
        })
}

#[cfg(test)]
#[path = "plan_tests.rs"]
mod tests;
