use carrier_client::{
    AuthError, CarrierApi, CarrierResponse, QueryKind, TrackingError, TrackingNumber,
    TrackingQuery,
};
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub(crate) enum TrackingRequestError {
    #[error("Tracking number is missing or empty")]
    MalformedInput,
    #[error("Unable to acquire carrier access token: {0}")]
    UpstreamAuth(#[from] AuthError),
    #[error("Carrier tracking query failed: {0}")]
    UpstreamTracking(#[from] TrackingError),
    #[error("Unable to serialize tracking report: {0}")]
    Report(#[from] serde_json::Error),
}

impl TrackingRequestError {
    /// Every kind shares one message; the cause only goes to the server log.
    pub(crate) fn user_message(&self) -> &'static str {
        "Failed to fetch tracking data"
    }
}

pub(crate) fn parse_query(
    kind: QueryKind,
    tracking_number: Option<&str>,
) -> Result<TrackingQuery, TrackingRequestError> {
    let number = tracking_number
        .ok_or(TrackingRequestError::MalformedInput)
        .and_then(|raw| {
            TrackingNumber::new(raw).map_err(|_| TrackingRequestError::MalformedInput)
        })?;

    Ok(TrackingQuery::new(kind, number))
}

pub(crate) struct TrackingService {
    carrier: Arc<dyn CarrierApi>,
}

impl TrackingService {
    pub(crate) fn new(carrier: Arc<dyn CarrierApi>) -> Self {
        Self { carrier }
    }

    /// Authenticates and then runs the tracking query. Every call fetches a
    /// fresh token which is dropped as soon as the query completes.
    pub(crate) async fn fetch(
        &self,
        query: &TrackingQuery,
    ) -> Result<CarrierResponse, TrackingRequestError> {
        let token = self.carrier.acquire_token().await?;
        let response = self.carrier.query_tracking(query, &token).await?;

        Ok(response)
    }
}
