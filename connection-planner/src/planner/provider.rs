//! The planner's view of the transit data service.

use chrono::{DateTime, Utc};

use crate::domain::{RouteType, RunId, StoppingPattern};
use crate::ptv::{DepartureBoard, DeparturesQuery, PtvClient, PtvError};

/// Trait for providing departures and stopping patterns.
///
/// This abstraction allows the planner to be tested with fixture data.
#[allow(async_fn_in_trait)]
pub trait TransitProvider {
    /// Upcoming departures matching `query`, in service order.
    async fn departures(&self, query: &DeparturesQuery) -> Result<DepartureBoard, PtvError>;

    /// The stopping pattern of `run_id`, or `None` if the service has none.
    async fn stopping_pattern(
        &self,
        run_id: RunId,
        route_type: RouteType,
        at_or_after: DateTime<Utc>,
    ) -> Result<Option<StoppingPattern>, PtvError>;
}

impl TransitProvider for PtvClient {
    async fn departures(&self, query: &DeparturesQuery) -> Result<DepartureBoard, PtvError> {
        PtvClient::departures(self, query).await
    }

    async fn stopping_pattern(
        &self,
        run_id: RunId,
        route_type: RouteType,
        at_or_after: DateTime<Utc>,
    ) -> Result<Option<StoppingPattern>, PtvError> {
        PtvClient::stopping_pattern(self, run_id, route_type, at_or_after).await
    }
}
