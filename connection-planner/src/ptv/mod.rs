//! PTV timetable API client.
//!
//! This module provides an HTTP client for the Public Transport Victoria
//! timetable API (v3), limited to the two calls the planner needs:
//! departures from a stop and the stopping pattern of a run.
//!
//! Key characteristics of the API:
//! - Every request is signed with the developer key (see [`sign_request`])
//! - Times are UTC instants in `YYYY-MM-DDTHH:MM:SSZ` form
//! - A pattern response without a `departures` section means the service
//!   has no pattern for that run

mod client;
mod convert;
mod error;
mod signing;
mod types;

pub use client::{DeparturesQuery, PtvClient, PtvConfig, pattern_path_and_query};
pub use convert::{ConversionError, DepartureBoard, parse_utc};
pub use error::PtvError;
pub use signing::sign_request;
pub use types::{DepartureDto, DeparturesResponse, PatternResponse, RunDto};
