//! PTV timetable API response DTOs.
//!
//! These types map directly to the v3 JSON responses. Only the fields the
//! planner reads are declared; serde ignores the rest. Fields the API sends
//! as `null` are `Option`.

use std::collections::HashMap;

use serde::Deserialize;

/// Response from `/v3/departures/...`.
#[derive(Debug, Clone, Deserialize)]
pub struct DeparturesResponse {
    #[serde(default)]
    pub departures: Vec<DepartureDto>,

    /// Run metadata keyed by run id as a string. Present when `expand=run`.
    #[serde(default)]
    pub runs: HashMap<String, RunDto>,
}

/// Response from `/v3/pattern/run/...`.
///
/// The service omits `departures` entirely when it has no pattern for the
/// run, which is distinct from an empty list.
#[derive(Debug, Clone, Deserialize)]
pub struct PatternResponse {
    pub departures: Option<Vec<DepartureDto>>,
}

/// A single departure as returned by either endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct DepartureDto {
    pub stop_id: u32,

    pub route_id: Option<u32>,

    pub run_id: u64,

    pub direction_id: Option<u32>,

    /// Scheduled departure, `YYYY-MM-DDTHH:MM:SSZ`.
    pub scheduled_departure_utc: String,

    /// Real-time estimate; `null` when unavailable.
    pub estimated_departure_utc: Option<String>,

    #[serde(default)]
    pub at_platform: bool,

    pub platform_number: Option<String>,

    pub departure_sequence: Option<u32>,
}

/// Run metadata from the `runs` map.
#[derive(Debug, Clone, Deserialize)]
pub struct RunDto {
    pub run_id: u64,

    pub route_id: Option<u32>,

    pub route_type: Option<u8>,

    pub final_stop_id: Option<u32>,

    pub destination_name: Option<String>,

    /// "scheduled" or "updated".
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_without_departures_section() {
        let resp: PatternResponse = serde_json::from_str(r#"{"status":{"version":"3.0"}}"#).unwrap();
        assert!(resp.departures.is_none());
    }

    #[test]
    fn pattern_with_empty_departures() {
        let resp: PatternResponse = serde_json::from_str(r#"{"departures":[]}"#).unwrap();
        assert_eq!(resp.departures.map(|d| d.len()), Some(0));
    }

    #[test]
    fn departure_with_null_estimate() {
        let json = r#"{
            "stop_id": 1162,
            "route_id": 6,
            "run_id": 951,
            "run_ref": "951",
            "direction_id": 0,
            "disruption_ids": [],
            "scheduled_departure_utc": "2024-03-15T08:30:00Z",
            "estimated_departure_utc": null,
            "at_platform": false,
            "platform_number": "5",
            "flags": "",
            "departure_sequence": 0
        }"#;
        let dep: DepartureDto = serde_json::from_str(json).unwrap();
        assert_eq!(dep.stop_id, 1162);
        assert_eq!(dep.run_id, 951);
        assert!(dep.estimated_departure_utc.is_none());
        assert_eq!(dep.platform_number.as_deref(), Some("5"));
    }

    #[test]
    fn departures_without_runs() {
        let resp: DeparturesResponse = serde_json::from_str(r#"{"departures":[]}"#).unwrap();
        assert!(resp.departures.is_empty());
        assert!(resp.runs.is_empty());
    }
}
