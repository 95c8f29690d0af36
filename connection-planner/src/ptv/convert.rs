//! Conversion from PTV DTOs to domain types.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::domain::{Departure, RouteId, Run, RunId, StopId, StoppingPattern};

use super::types::{DepartureDto, DeparturesResponse, PatternResponse, RunDto};

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConversionError {
    /// Failed to parse a timestamp
    #[error("invalid timestamp {value:?} in {field}")]
    InvalidTimestamp { field: &'static str, value: String },

    /// A key in the runs map is not a run id
    #[error("invalid run key: {0}")]
    InvalidRunKey(String),
}

/// Departures plus the run metadata that came with them.
#[derive(Debug, Clone, Default)]
pub struct DepartureBoard {
    pub departures: Vec<Departure>,
    pub runs: HashMap<RunId, Run>,
}

impl DepartureBoard {
    /// Metadata for `run`, if the service returned it.
    pub fn run(&self, run: RunId) -> Option<&Run> {
        self.runs.get(&run)
    }
}

/// Parse a UTC timestamp as sent by the API.
///
/// The API sends `YYYY-MM-DDTHH:MM:SSZ`; anything RFC 3339 is accepted.
pub fn parse_utc(field: &'static str, value: &str) -> Result<DateTime<Utc>, ConversionError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| ConversionError::InvalidTimestamp {
            field,
            value: value.to_string(),
        })
}

/// Convert one departure.
pub fn convert_departure(dto: &DepartureDto) -> Result<Departure, ConversionError> {
    let scheduled = parse_utc("scheduled_departure_utc", &dto.scheduled_departure_utc)?;
    let estimated = dto
        .estimated_departure_utc
        .as_deref()
        .map(|s| parse_utc("estimated_departure_utc", s))
        .transpose()?;

    Ok(Departure {
        stop_id: StopId(dto.stop_id),
        run_id: RunId(dto.run_id),
        route_id: dto.route_id.map(RouteId),
        scheduled,
        estimated,
        platform_number: dto.platform_number.clone(),
        at_platform: dto.at_platform,
    })
}

fn convert_run(dto: &RunDto) -> Run {
    Run {
        run_id: RunId(dto.run_id),
        route_id: dto.route_id.map(RouteId),
        destination_name: dto.destination_name.clone(),
        final_stop_id: dto.final_stop_id.map(StopId),
    }
}

/// Convert a departures response, keeping response order.
pub fn convert_departures(resp: &DeparturesResponse) -> Result<DepartureBoard, ConversionError> {
    let departures = resp
        .departures
        .iter()
        .map(convert_departure)
        .collect::<Result<Vec<_>, _>>()?;

    let mut runs = HashMap::with_capacity(resp.runs.len());
    for (key, dto) in &resp.runs {
        let run_id = key
            .parse::<RunId>()
            .map_err(|_| ConversionError::InvalidRunKey(key.clone()))?;
        runs.insert(run_id, convert_run(dto));
    }

    Ok(DepartureBoard { departures, runs })
}

/// Convert a pattern response. `None` means the service has no pattern.
pub fn convert_pattern(
    run_id: RunId,
    resp: &PatternResponse,
) -> Result<Option<StoppingPattern>, ConversionError> {
    let Some(dtos) = &resp.departures else {
        return Ok(None);
    };

    let departures = dtos
        .iter()
        .map(convert_departure)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Some(StoppingPattern::new(run_id, departures)))
}
