//! Domain types for the connection planner.
//!
//! These types represent validated PTV data. Conversion from the wire format
//! happens in [`crate::ptv`]; code that receives these types can trust that
//! every timestamp is a UTC instant.

mod departure;
mod ids;
mod pattern;
mod time;

pub use departure::{Departure, Run, Timing};
pub use ids::{DirectionId, InvalidId, RouteId, RouteType, RunId, StopId};
pub use pattern::{MatchError, StoppingPattern, find_exactly_one};
pub use time::{TimeError, local_to_utc, parse_hhmm};
