use serde::{Deserialize, Serialize};
use std::ops::Deref;

#[derive(Eq, PartialEq, Clone, Copy, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryKind {
    Master,
    Single,
}

impl QueryKind {
    /// Name of the inbound request field that carries the tracking number.
    pub fn input_field(&self) -> &'static str {
        match self {
            QueryKind::Master => "masterTrackingNumber",
            QueryKind::Single => "trackingNumber",
        }
    }
}

impl std::fmt::Display for QueryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryKind::Master => write!(f, "master"),
            QueryKind::Single => write!(f, "single"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Tracking number is empty")]
pub struct EmptyTrackingNumber;

// TrackingNumber
#[derive(Eq, PartialEq, Clone, Hash, Debug, Serialize)]
pub struct TrackingNumber(String);

impl TrackingNumber {
    pub fn new(raw: &str) -> Result<Self, EmptyTrackingNumber> {
        match raw.trim() {
            "" => Err(EmptyTrackingNumber),
            trimmed => Ok(Self(trimmed.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for TrackingNumber {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for TrackingNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Eq, PartialEq, Clone, Debug)]
pub struct TrackingQuery {
    kind: QueryKind,
    number: TrackingNumber,
}

impl TrackingQuery {
    pub fn new(kind: QueryKind, number: TrackingNumber) -> Self {
        Self { kind, number }
    }

    pub fn kind(&self) -> QueryKind {
        self.kind
    }

    pub fn number(&self) -> &TrackingNumber {
        &self.number
    }
}

/// Bearer credential returned by the OAuth endpoint. Has no `Display` or
/// `Serialize` impl and its `Debug` output is redacted.
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AuthToken(<redacted>)")
    }
}

#[derive(Clone)]
pub struct ClientCredentials {
    pub(crate) client_id: String,
    pub(crate) client_secret: String,
}

impl ClientCredentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }
}

impl std::fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Raw tracking payload exactly as the carrier returned it.
#[derive(PartialEq, Clone, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CarrierResponse(serde_json::Value);

impl CarrierResponse {
    pub fn into_inner(self) -> serde_json::Value {
        self.0
    }
}

impl From<serde_json::Value> for CarrierResponse {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}

impl Deref for CarrierResponse {
    type Target = serde_json::Value;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
