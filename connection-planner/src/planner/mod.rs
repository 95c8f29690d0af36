//! Connection planner.
//!
//! This module implements the core of the tool: it answers "if I catch the
//! next train from here, which onward trains from the interchange get me to
//! my destination, and which of them go there directly?"

mod config;
mod journey;
mod plan;
mod provider;
mod rank;

pub use config::PlannerConfig;
pub use journey::CandidateJourney;
pub use plan::{FirstLeg, LookupStage, Plan, PlanError, Planner};
pub use provider::TransitProvider;
pub use rank::rank_by_arrival;
