use carrier_client::{ClientCredentials, FEDEX_API_ENDPOINT};
use serde::Deserialize;
use tracking_results::StatusRemarks;

fn default_bind_address() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_shutdown_timeout() -> u64 {
    30u64
}

fn default_fedex_api_endpoint() -> String {
    FEDEX_API_ENDPOINT.to_string()
}

fn default_append_status_remarks() -> bool {
    true
}

#[derive(Clone, Deserialize)]
pub(crate) struct Config {
    #[serde(default = "default_bind_address")]
    pub(crate) bind_address: String,
    #[serde(default = "default_shutdown_timeout")]
    pub(crate) shutdown_timeout: u64,
    #[serde(default = "default_fedex_api_endpoint")]
    pub(crate) fedex_api_endpoint: String,
    #[serde(default = "default_append_status_remarks")]
    pub(crate) append_status_remarks: bool,
    fedex_client_id: String,
    fedex_client_secret: String,
}

impl Config {
    pub(crate) fn from_env() -> Result<Self, envy::Error> {
        Self::from_vars(std::env::vars())
    }

    pub(crate) fn from_vars<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter(vars)
    }

    pub(crate) fn fedex_credentials(&self) -> ClientCredentials {
        ClientCredentials::new(&self.fedex_client_id, &self.fedex_client_secret)
    }

    pub(crate) fn status_remarks(&self) -> StatusRemarks {
        match self.append_status_remarks {
            true => StatusRemarks::Append,
            false => StatusRemarks::Omit,
        }
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("bind_address", &self.bind_address)
            .field("shutdown_timeout", &self.shutdown_timeout)
            .field("fedex_api_endpoint", &self.fedex_api_endpoint)
            .field("append_status_remarks", &self.append_status_remarks)
            .field("fedex_client_id", &self.fedex_client_id)
            .field("fedex_client_secret", &"<redacted>")
            .finish()
    }
}
