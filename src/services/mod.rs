mod tracking_service;
pub(crate) use tracking_service::*;

#[cfg(test)]
pub(crate) mod carrier_mock;
