mod fedex;
mod types;

pub use fedex::*;
pub use reqwest::StatusCode;
pub use types::*;

use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
    #[error("OAuth endpoint responded with status {0}")]
    UnexpectedStatus(StatusCode),
    #[error("OAuth response does not contain an access token")]
    MissingAccessToken,
}

#[derive(Debug, thiserror::Error)]
pub enum TrackingError {
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
    #[error("Tracking endpoint responded with status {0}")]
    UnexpectedStatus(StatusCode),
}

/// Two-step access to a carrier tracking API: a token exchange followed by an
/// authorized tracking query.
///
/// Tokens are not cached, so each tracking query should be preceded by its own
/// call to [`CarrierApi::acquire_token`].
#[async_trait]
pub trait CarrierApi: Send + Sync {
    async fn acquire_token(&self) -> Result<AuthToken, AuthError>;

    async fn query_tracking(
        &self,
        query: &TrackingQuery,
        token: &AuthToken,
    ) -> Result<CarrierResponse, TrackingError>;
}
