//! Departures, runs and effective times.

use std::fmt;

use chrono::{DateTime, Duration, TimeZone, Utc};

use super::{RouteId, RunId, StopId};

/// An instant together with whether it came from real-time data.
///
/// The instant is always UTC. Conversion to a local zone is for display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Timing {
    pub utc: DateTime<Utc>,
    pub realtime: bool,
}

impl Timing {
    pub fn new(utc: DateTime<Utc>, realtime: bool) -> Self {
        Self { utc, realtime }
    }

    /// Shift the instant, keeping the real-time flag.
    pub fn shifted(self, by: Duration) -> Self {
        Self {
            utc: self.utc + by,
            realtime: self.realtime,
        }
    }

    /// The instant in the given zone.
    pub fn local<Tz: TimeZone>(&self, tz: &Tz) -> DateTime<Tz> {
        self.utc.with_timezone(tz)
    }
}

impl fmt::Display for Timing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({})",
            self.utc.format("%Y-%m-%d %H:%M:%S UTC"),
            if self.realtime { "real-time" } else { "scheduled" }
        )
    }
}

/// One stop event of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Departure {
    pub stop_id: StopId,
    pub run_id: RunId,
    pub route_id: Option<RouteId>,
    pub scheduled: DateTime<Utc>,
    /// Real-time estimate, when the service has one.
    pub estimated: Option<DateTime<Utc>>,
    pub platform_number: Option<String>,
    pub at_platform: bool,
}

impl Departure {
    /// Create a departure with only a scheduled time.
    pub fn scheduled(stop_id: StopId, run_id: RunId, scheduled: DateTime<Utc>) -> Self {
        Self {
            stop_id,
            run_id,
            route_id: None,
            scheduled,
            estimated: None,
            platform_number: None,
            at_platform: false,
        }
    }

    /// Set the real-time estimate.
    pub fn with_estimate(mut self, estimated: DateTime<Utc>) -> Self {
        self.estimated = Some(estimated);
        self
    }

    /// Set the platform.
    pub fn with_platform(mut self, platform: impl Into<String>, at_platform: bool) -> Self {
        self.platform_number = Some(platform.into());
        self.at_platform = at_platform;
        self
    }

    /// The estimate if present, otherwise the scheduled time.
    pub fn effective(&self) -> Timing {
        match self.estimated {
            Some(estimated) => Timing::new(estimated, true),
            None => Timing::new(self.scheduled, false),
        }
    }

    /// Returns true if a real-time estimate is available.
    pub fn is_realtime(&self) -> bool {
        self.estimated.is_some()
    }
}

/// Metadata for a run, as returned alongside a departure list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub run_id: RunId,
    pub route_id: Option<RouteId>,
    pub destination_name: Option<String>,
    pub final_stop_id: Option<StopId>,
}

impl Run {
    pub fn new(run_id: RunId) -> Self {
        Self {
            run_id,
            route_id: None,
            destination_name: None,
            final_stop_id: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::Australia::Melbourne;

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, h, m, 0).unwrap()
    }

    #[test]
    fn effective_prefers_estimate() {
        let dep = Departure::scheduled(StopId(1162), RunId(1), at(8, 0)).with_estimate(at(8, 3));
        let t = dep.effective();
        assert_eq!(t.utc, at(8, 3));
        assert!(t.realtime);
        assert!(dep.is_realtime());
    }

    #[test]
    fn effective_falls_back_to_scheduled() {
        let dep = Departure::scheduled(StopId(1162), RunId(1), at(8, 0));
        let t = dep.effective();
        assert_eq!(t.utc, at(8, 0));
        assert!(!t.realtime);
        assert!(!dep.is_realtime());
    }

    #[test]
    fn estimate_earlier_than_schedule_still_wins() {
        let dep = Departure::scheduled(StopId(1162), RunId(1), at(8, 5)).with_estimate(at(8, 4));
        assert_eq!(dep.effective().utc, at(8, 4));
    }

    #[test]
    fn shifted_keeps_flag() {
        let t = Timing::new(at(8, 0), true).shifted(Duration::minutes(14));
        assert_eq!(t.utc, at(8, 14));
        assert!(t.realtime);
    }

    #[test]
    fn local_conversion() {
        // AEDT is UTC+11 in mid-March.
        let t = Timing::new(at(8, 0), false);
        assert_eq!(t.local(&Melbourne).format("%H:%M").to_string(), "19:00");
    }

    #[test]
    fn display() {
        let t = Timing::new(at(8, 0), true);
        assert_eq!(t.to_string(), "2024-03-15 08:00:00 UTC (real-time)");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn instant() -> impl Strategy<Value = DateTime<Utc>> {
        (1_600_000_000i64..1_900_000_000).prop_map(|s| DateTime::from_timestamp(s, 0).unwrap())
    }

    proptest! {
        /// The effective instant is the estimate when present, else the schedule.
        #[test]
        fn effective_is_estimate_or_scheduled(
            scheduled in instant(),
            estimated in prop::option::of(instant())
        ) {
            let mut dep = Departure::scheduled(StopId(1), RunId(1), scheduled);
            dep.estimated = estimated;

            let t = dep.effective();
            prop_assert_eq!(t.utc, estimated.unwrap_or(scheduled));
            prop_assert_eq!(t.realtime, estimated.is_some());
        }
    }
}
