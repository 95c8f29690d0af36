//! Ordering of candidate journeys.

use super::journey::CandidateJourney;

/// Sort journeys by local arrival, earliest first.
///
/// The sort is stable: journeys arriving at the same instant keep the order
/// in which the service listed their departures.
pub fn rank_by_arrival(mut journeys: Vec<CandidateJourney>) -> Vec<CandidateJourney> {
    journeys.sort_by(|a, b| a.arrives_local.cmp(&b.arrives_local));
    journeys
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Departure, RunId, StopId, StoppingPattern};
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use chrono_tz::Australia::Melbourne;

    fn base() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 8, 0, 0).unwrap()
    }

    fn journey(run: u64, depart_min: i64, offset_min: i64) -> CandidateJourney {
        let dep = Departure::scheduled(
            StopId(1162),
            RunId(run),
            base() + Duration::minutes(depart_min),
        );
        let arrives = dep.effective().shifted(Duration::minutes(offset_min));
        CandidateJourney::new(
            dep,
            None,
            StoppingPattern::new(RunId(run), Vec::new()),
            arrives,
            offset_min == 4,
            &Melbourne,
        )
    }

    fn runs(journeys: &[CandidateJourney]) -> Vec<u64> {
        journeys.iter().map(|j| j.departure.run_id.get()).collect()
    }

    #[test]
    fn sorts_by_arrival() {
        let ranked = rank_by_arrival(vec![
            journey(1, 10, 14), // arrives +24
            journey(2, 15, 4),  // arrives +19
            journey(3, 2, 14),  // arrives +16
        ]);
        assert_eq!(runs(&ranked), vec![3, 2, 1]);
    }

    #[test]
    fn equal_arrivals_keep_input_order() {
        let ranked = rank_by_arrival(vec![
            journey(1, 20, 14), // arrives +34
            journey(2, 30, 4),  // arrives +34
            journey(3, 5, 4),   // arrives +9
        ]);
        assert_eq!(runs(&ranked), vec![3, 1, 2]);
    }

    #[test]
    fn empty_input() {
        assert!(rank_by_arrival(Vec::new()).is_empty());
    }
}
