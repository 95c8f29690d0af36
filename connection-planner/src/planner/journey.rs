//! Candidate onward journeys.

use chrono::DateTime;
use chrono_tz::Tz;

use crate::domain::{Departure, Run, StoppingPattern, Timing};

/// One way of completing the trip from the interchange.
///
/// Built per onward departure while planning; nothing outlives the report.
#[derive(Debug, Clone)]
pub struct CandidateJourney {
    /// The onward departure from the interchange.
    pub departure: Departure,

    /// Run metadata, when the service sent it.
    pub run: Option<Run>,

    /// Everywhere the onward run stops.
    pub pattern: StoppingPattern,

    /// Effective departure from the interchange.
    pub departs: Timing,
    pub departs_local: DateTime<Tz>,

    /// Estimated arrival at the destination.
    pub arrives: Timing,
    pub arrives_local: DateTime<Tz>,

    /// The run does not pass through the transfer point.
    pub direct: bool,
}

impl CandidateJourney {
    pub fn new(
        departure: Departure,
        run: Option<Run>,
        pattern: StoppingPattern,
        arrives: Timing,
        direct: bool,
        tz: &Tz,
    ) -> Self {
        let departs = departure.effective();
        Self {
            departs_local: departs.local(tz),
            arrives_local: arrives.local(tz),
            departure,
            run,
            pattern,
            departs,
            arrives,
            direct,
        }
    }

    pub fn platform(&self) -> Option<&str> {
        self.departure.platform_number.as_deref()
    }
}
