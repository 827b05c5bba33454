use crate::fedex::request::{tracking_path, tracking_request_body};
use crate::{
    AuthError, AuthToken, CarrierApi, CarrierResponse, ClientCredentials, TrackingError,
    TrackingQuery,
};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

pub const FEDEX_API_ENDPOINT: &str = "https://apis.fedex.com";

const OAUTH_TOKEN_PATH: &str = "/oauth/token";
const CLIENT_CREDENTIALS_GRANT: &str = "client_credentials";
const TRANSACTION_ID_HEADER: &str = "x-customer-transaction-id";

pub struct FedexClient {
    client: Client,
    endpoint: String,
    credentials: ClientCredentials,
}

impl FedexClient {
    pub fn create(endpoint: &str, credentials: ClientCredentials) -> Result<Self, reqwest::Error> {
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            credentials,
        })
    }
}

#[async_trait]
impl CarrierApi for FedexClient {
    async fn acquire_token(&self) -> Result<AuthToken, AuthError> {
        #[derive(Serialize)]
        struct TokenForm<'a> {
            grant_type: &'a str,
            client_id: &'a str,
            client_secret: &'a str,
        }

        #[derive(Deserialize)]
        struct TokenResponse {
            access_token: Option<String>,
        }

        let form = TokenForm {
            grant_type: CLIENT_CREDENTIALS_GRANT,
            client_id: &self.credentials.client_id,
            client_secret: &self.credentials.client_secret,
        };

        let response = self
            .client
            .post(format!("{}{}", self.endpoint, OAUTH_TOKEN_PATH))
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "OAuth token request was rejected");
            return Err(AuthError::UnexpectedStatus(status));
        }

        match response.json::<TokenResponse>().await?.access_token {
            Some(access_token) if !access_token.is_empty() => Ok(AuthToken::new(access_token)),
            _ => Err(AuthError::MissingAccessToken),
        }
    }

    async fn query_tracking(
        &self,
        query: &TrackingQuery,
        token: &AuthToken,
    ) -> Result<CarrierResponse, TrackingError> {
        let transaction_id = Uuid::new_v4();

        debug!(
            %transaction_id,
            kind = %query.kind(),
            tracking_number = %query.number(),
            "Sending tracking request"
        );

        let response = self
            .client
            .post(format!("{}{}", self.endpoint, tracking_path(query.kind())))
            .bearer_auth(token.as_str())
            .header(TRANSACTION_ID_HEADER, transaction_id.to_string())
            .json(&tracking_request_body(query))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, %transaction_id, "Tracking request was rejected");
            return Err(TrackingError::UnexpectedStatus(status));
        }

        Ok(response.json::<CarrierResponse>().await?)
    }
}
