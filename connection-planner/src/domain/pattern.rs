//! Stopping patterns and exactly-one stop lookup.

use super::{Departure, RunId, StopId};

/// Outcome of looking for an element that must occur exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MatchError {
    #[error("no matching entry")]
    Missing,

    #[error("{0} matching entries, expected exactly one")]
    Ambiguous(usize),
}

impl MatchError {
    /// Number of matches that were found.
    pub fn matches(&self) -> usize {
        match self {
            MatchError::Missing => 0,
            MatchError::Ambiguous(n) => *n,
        }
    }
}

/// Find the single element satisfying `pred`.
///
/// Fails with [`MatchError::Missing`] if nothing matches and
/// [`MatchError::Ambiguous`] if more than one element does.
pub fn find_exactly_one<'a, T, F>(items: &'a [T], mut pred: F) -> Result<&'a T, MatchError>
where
    F: FnMut(&T) -> bool,
{
    let mut found = None;
    let mut count = 0;
    for item in items {
        if pred(item) {
            count += 1;
            found.get_or_insert(item);
        }
    }
    match (found, count) {
        (Some(item), 1) => Ok(item),
        (None, _) => Err(MatchError::Missing),
        (_, n) => Err(MatchError::Ambiguous(n)),
    }
}

/// All stops a run visits, in visiting order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoppingPattern {
    pub run_id: RunId,
    pub departures: Vec<Departure>,
}

impl StoppingPattern {
    pub fn new(run_id: RunId, departures: Vec<Departure>) -> Self {
        Self { run_id, departures }
    }

    /// The entry for `stop`, which the run must visit exactly once.
    pub fn find_stop(&self, stop: StopId) -> Result<&Departure, MatchError> {
        find_exactly_one(self.departures.as_slice(), |d| d.stop_id == stop)
    }

    /// How many times the run calls at `stop`.
    pub fn stop_count(&self, stop: StopId) -> usize {
        self.departures.iter().filter(|d| d.stop_id == stop).count()
    }

    /// Returns true if the run calls at `stop` at all.
    pub fn visits(&self, stop: StopId) -> bool {
        self.departures.iter().any(|d| d.stop_id == stop)
    }

    pub fn len(&self) -> usize {
        self.departures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.departures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn pattern(stops: &[u32]) -> StoppingPattern {
        let base = Utc.with_ymd_and_hms(2024, 3, 15, 8, 0, 0).unwrap();
        let departures = stops
            .iter()
            .enumerate()
            .map(|(i, s)| {
                Departure::scheduled(
                    StopId(*s),
                    RunId(7),
                    base + chrono::Duration::minutes(2 * i as i64),
                )
            })
            .collect();
        StoppingPattern::new(RunId(7), departures)
    }

    #[test]
    fn finds_single_stop() {
        let p = pattern(&[1071, 1155, 1162, 1181]);
        let dep = p.find_stop(StopId(1162)).unwrap();
        assert_eq!(dep.stop_id, StopId(1162));
        assert_eq!(dep.scheduled.format("%H:%M").to_string(), "08:04");
    }

    #[test]
    fn missing_stop() {
        let p = pattern(&[1071, 1155]);
        assert_eq!(p.find_stop(StopId(1162)), Err(MatchError::Missing));
        assert!(!p.visits(StopId(1162)));
    }

    #[test]
    fn repeated_stop_is_ambiguous() {
        // City loop runs pass some stations twice.
        let p = pattern(&[1071, 1155, 1162, 1071]);
        let err = p.find_stop(StopId(1071)).unwrap_err();
        assert_eq!(err, MatchError::Ambiguous(2));
        assert_eq!(err.matches(), 2);
        assert_eq!(p.stop_count(StopId(1071)), 2);
    }

    #[test]
    fn empty_pattern() {
        let p = pattern(&[]);
        assert!(p.is_empty());
        assert_eq!(p.find_stop(StopId(1)), Err(MatchError::Missing));
    }

    #[test]
    fn find_exactly_one_generic() {
        assert_eq!(find_exactly_one(&[1, 2, 3], |x| *x == 2), Ok(&2));
        assert_eq!(find_exactly_one(&[1, 2, 2], |x| *x == 2), Err(MatchError::Ambiguous(2)));
        assert_eq!(find_exactly_one(&[1, 3], |x| *x == 2), Err(MatchError::Missing));
    }

    #[test]
    fn error_display() {
        assert_eq!(MatchError::Missing.to_string(), "no matching entry");
        assert_eq!(
            MatchError::Ambiguous(3).to_string(),
            "3 matching entries, expected exactly one"
        );
    }
}
