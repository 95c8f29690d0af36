//! Planner configuration: which stops matter and how arrivals are estimated.

use chrono::Duration;
use chrono_tz::Tz;

use crate::domain::{DirectionId, RouteId, RouteType, StopId};

/// Configuration parameters for connection planning.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Transport mode of both legs.
    pub route_type: RouteType,

    /// Direction of travel of both legs.
    pub direction_id: DirectionId,

    /// Restrict both legs to one route, if set.
    pub route_id: Option<RouteId>,

    /// Where the traveller changes.
    pub interchange_stop: StopId,

    /// Where the traveller finishes.
    pub destination_stop: StopId,

    /// A stop that only indirect onward runs pass through.
    pub transfer_point_stop: StopId,

    /// How many onward departures to consider.
    pub onward_max_results: u32,

    /// Minutes from interchange departure to destination for a direct run.
    ///
    /// This is an estimate, not read from the run's pattern.
    pub direct_offset_mins: i64,

    /// Minutes from interchange departure to destination for an indirect run.
    pub indirect_offset_mins: i64,

    /// Zone for presenting times.
    pub timezone: Tz,
}

impl PlannerConfig {
    /// Returns the direct run offset as a Duration.
    pub fn direct_offset(&self) -> Duration {
        Duration::minutes(self.direct_offset_mins)
    }

    /// Returns the indirect run offset as a Duration.
    pub fn indirect_offset(&self) -> Duration {
        Duration::minutes(self.indirect_offset_mins)
    }

    /// Estimated travel time from the interchange to the destination.
    pub fn arrival_offset(&self, direct: bool) -> Duration {
        if direct {
            self.direct_offset()
        } else {
            self.indirect_offset()
        }
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            route_type: RouteType::TRAIN,
            direction_id: DirectionId(0),
            route_id: None,
            interchange_stop: StopId(1162),    // Richmond
            destination_stop: StopId(1071),    // Flinders Street
            transfer_point_stop: StopId(1155), // Parliament
            onward_max_results: 10,
            direct_offset_mins: 4,
            indirect_offset_mins: 14,
            timezone: chrono_tz::Australia::Melbourne,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PlannerConfig::default();

        assert_eq!(config.route_type, RouteType::TRAIN);
        assert_eq!(config.direction_id, DirectionId(0));
        assert_eq!(config.route_id, None);
        assert_eq!(config.interchange_stop, StopId(1162));
        assert_eq!(config.destination_stop, StopId(1071));
        assert_eq!(config.transfer_point_stop, StopId(1155));
        assert_eq!(config.onward_max_results, 10);
        assert_eq!(config.timezone, chrono_tz::Australia::Melbourne);
    }

    #[test]
    fn offsets() {
        let config = PlannerConfig::default();

        assert_eq!(config.direct_offset(), Duration::minutes(4));
        assert_eq!(config.indirect_offset(), Duration::minutes(14));
        assert_eq!(config.arrival_offset(true), Duration::minutes(4));
        assert_eq!(config.arrival_offset(false), Duration::minutes(14));
    }
}
