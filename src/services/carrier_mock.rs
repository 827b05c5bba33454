use async_trait::async_trait;
use carrier_client::{
    AuthError, AuthToken, CarrierApi, CarrierResponse, StatusCode, TrackingError, TrackingQuery,
};
use serde_json::Value;
use std::sync::Mutex;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum CarrierCall {
    AcquireToken,
    QueryTracking { query: TrackingQuery, token: String },
}

pub(crate) struct CarrierMock {
    fail_auth: bool,
    fail_tracking: bool,
    response: Value,
    calls: Mutex<Vec<CarrierCall>>,
    issued_tokens: Mutex<u32>,
}

impl CarrierMock {
    pub(crate) fn succeeding(response: Value) -> Self {
        Self {
            fail_auth: false,
            fail_tracking: false,
            response,
            calls: Mutex::new(vec![]),
            issued_tokens: Mutex::new(0),
        }
    }

    pub(crate) fn failing_auth() -> Self {
        Self {
            fail_auth: true,
            ..Self::succeeding(Value::Null)
        }
    }

    pub(crate) fn failing_tracking() -> Self {
        Self {
            fail_tracking: true,
            ..Self::succeeding(Value::Null)
        }
    }

    pub(crate) fn calls(&self) -> Vec<CarrierCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CarrierApi for CarrierMock {
    async fn acquire_token(&self) -> Result<AuthToken, AuthError> {
        self.calls.lock().unwrap().push(CarrierCall::AcquireToken);

        if self.fail_auth {
            return Err(AuthError::UnexpectedStatus(StatusCode::UNAUTHORIZED));
        }

        let mut issued_tokens = self.issued_tokens.lock().unwrap();
        *issued_tokens += 1;

        Ok(AuthToken::new(format!("mock-token-{}", issued_tokens)))
    }

    async fn query_tracking(
        &self,
        query: &TrackingQuery,
        token: &AuthToken,
    ) -> Result<CarrierResponse, TrackingError> {
        self.calls.lock().unwrap().push(CarrierCall::QueryTracking {
            query: query.clone(),
            token: token.as_str().to_string(),
        });

        if self.fail_tracking {
            return Err(TrackingError::UnexpectedStatus(StatusCode::BAD_REQUEST));
        }

        Ok(CarrierResponse::from(self.response.clone()))
    }
}
