use crate::{QueryKind, TrackingQuery};
use serde_json::{json, Value};

const SINGLE_TRACKING_PATH: &str = "/track/v1/trackingnumbers";
const MASTER_TRACKING_PATH: &str = "/track/v1/associatedshipments";
const MULTI_PIECE_SHIPMENT: &str = "MPS";

pub(crate) fn tracking_path(kind: QueryKind) -> &'static str {
    match kind {
        QueryKind::Master => MASTER_TRACKING_PATH,
        QueryKind::Single => SINGLE_TRACKING_PATH,
    }
}

pub(crate) fn tracking_request_body(query: &TrackingQuery) -> Value {
    let tracking_number_info = json!({
        "trackingNumber": query.number().as_str(),
    });

    match query.kind() {
        QueryKind::Master => json!({
            "includeDetailedScans": true,
            "associatedType": MULTI_PIECE_SHIPMENT,
            "masterTrackingNumberInfo": {
                "trackingNumberInfo": tracking_number_info,
            },
        }),
        QueryKind::Single => json!({
            "includeDetailedScans": true,
            "trackingInfo": [
                { "trackingNumberInfo": tracking_number_info },
            ],
        }),
    }
}
