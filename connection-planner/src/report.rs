//! Text rendering of a plan.
//!
//! Two views of the same candidates: wall-clock times in the configured zone,
//! and offsets from the moment the first run reaches the interchange.

use chrono::{DateTime, Duration, Utc};
use chrono_tz::Tz;

use crate::planner::{CandidateJourney, FirstLeg, Plan};

const LOCAL_FORMAT: &str = "%Y-%m-%d %H:%M:%S %Z";

/// Format a signed duration as `+H:MM:SS` / `-H:MM:SS`.
pub fn format_offset(offset: Duration) -> String {
    let sign = if offset < Duration::zero() { '-' } else { '+' };
    let secs = offset.num_seconds().abs();
    format!(
        "{sign}{}:{:02}:{:02}",
        secs / 3600,
        (secs % 3600) / 60,
        secs % 60
    )
}

fn describe(
    departs: &str,
    departs_realtime: bool,
    arrives: &str,
    arrives_realtime: bool,
    journey: &CandidateJourney,
) -> String {
    format!(
        "{departs} ({}) {arrives} ({}) platform {} ({}) direct {}",
        realtime_label(departs_realtime),
        realtime_label(arrives_realtime),
        journey.platform().unwrap_or("?"),
        if journey.departure.at_platform {
            "at platform"
        } else {
            "not at platform"
        },
        journey.direct
    )
}

fn realtime_label(realtime: bool) -> &'static str {
    if realtime { "real-time" } else { "scheduled" }
}

/// Summary lines for the leg the traveller is on.
pub fn render_first_leg(leg: &FirstLeg, tz: &Tz) -> Vec<String> {
    vec![
        format!("run_id = {}", leg.run_id),
        format!("departure time (UTC) = {}", leg.departs),
        format!(
            "departure time (local) = {} ({})",
            leg.departs.local(tz).format(LOCAL_FORMAT),
            realtime_label(leg.departs.realtime)
        ),
        format!("change time (UTC) = {}", leg.interchange_arrival),
        format!(
            "change time (local) = {} ({})",
            leg.interchange_arrival.local(tz).format(LOCAL_FORMAT),
            realtime_label(leg.interchange_arrival.realtime)
        ),
    ]
}

/// One line per journey with local wall-clock times.
pub fn render_journeys(journeys: &[CandidateJourney]) -> Vec<String> {
    journeys
        .iter()
        .map(|j| {
            describe(
                &j.departs_local.format(LOCAL_FORMAT).to_string(),
                j.departs.realtime,
                &j.arrives_local.format(LOCAL_FORMAT).to_string(),
                j.arrives.realtime,
                j,
            )
        })
        .collect()
}

/// One line per journey with times as offsets from `reference`.
pub fn render_offsets(journeys: &[CandidateJourney], reference: DateTime<Utc>) -> Vec<String> {
    journeys
        .iter()
        .map(|j| {
            describe(
                &format_offset(j.departs.utc - reference),
                j.departs.realtime,
                &format_offset(j.arrives.utc - reference),
                j.arrives.realtime,
                j,
            )
        })
        .collect()
}

/// The full report: first leg, absolute times, then offsets from the change.
pub fn render_plan(plan: &Plan, tz: &Tz) -> String {
    let mut lines = render_first_leg(&plan.first_leg, tz);
    lines.push(String::new());
    if plan.journeys.is_empty() {
        lines.push("no onward connections found".to_string());
    } else {
        lines.extend(render_journeys(&plan.journeys));
        lines.push(String::new());
        lines.extend(render_offsets(
            &plan.journeys,
            plan.first_leg.interchange_arrival.utc,
        ));
    }
    lines.join("\n")
}
