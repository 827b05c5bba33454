use crate::services::{parse_query, TrackingRequestError, TrackingService};
use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::http::StatusCode;
use actix_web::web::{Data, Json, JsonConfig};
use actix_web::{HttpResponse, ResponseError};
use carrier_client::{CarrierResponse, QueryKind, TrackingQuery};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{error, warn};
use tracking_results::{build_report, normalize, StatusRemarks, REPORT_CONTENT_TYPE};

type TrackRequestBody = Map<String, Value>;

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
}

impl ResponseError for TrackingRequestError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.user_message(),
        })
    }
}

/// Body extraction failures are reported the same way as a missing tracking number.
pub(crate) fn json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|error, _req| {
        warn!(%error, "Unable to parse tracking request body");
        TrackingRequestError::MalformedInput.into()
    })
}

async fn fetch_tracking(
    service: &TrackingService,
    kind: QueryKind,
    body: &TrackRequestBody,
) -> Result<(TrackingQuery, CarrierResponse), TrackingRequestError> {
    let tracking_number = body.get(kind.input_field()).and_then(Value::as_str);

    let query = match parse_query(kind, tracking_number) {
        Ok(query) => query,
        Err(error) => {
            warn!(%kind, field = kind.input_field(), "Tracking number is missing");
            return Err(error);
        }
    };

    match service.fetch(&query).await {
        Ok(response) => Ok((query, response)),
        Err(error) => {
            error!(?error, %kind, tracking_number = %query.number(), "Tracking request failed");
            Err(error)
        }
    }
}

pub(crate) async fn get_tracking(
    service: Data<TrackingService>,
    kind: Data<QueryKind>,
    body: Json<TrackRequestBody>,
) -> Result<HttpResponse, TrackingRequestError> {
    let (_, response) = fetch_tracking(&service, *kind.get_ref(), &body).await?;

    Ok(HttpResponse::Ok().json(response))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RowView {
    index: usize,
    is_queried: bool,
    tracking_id: String,
    location: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TrackingRows {
    tracking_number: String,
    rows: Vec<RowView>,
}

pub(crate) async fn get_tracking_rows(
    service: Data<TrackingService>,
    kind: Data<QueryKind>,
    remarks: Data<StatusRemarks>,
    body: Json<TrackRequestBody>,
) -> Result<HttpResponse, TrackingRequestError> {
    let (query, response) = fetch_tracking(&service, *kind.get_ref(), &body).await?;

    let rows = normalize(&response, *remarks.get_ref())
        .into_iter()
        .enumerate()
        .map(|(i, row)| RowView {
            index: i + 1,
            is_queried: row.tracking_id == query.number().as_str(),
            tracking_id: row.tracking_id,
            location: row.location,
        })
        .collect();

    Ok(HttpResponse::Ok().json(TrackingRows {
        tracking_number: query.number().to_string(),
        rows,
    }))
}

pub(crate) async fn download_tracking_report(
    service: Data<TrackingService>,
    kind: Data<QueryKind>,
    body: Json<TrackRequestBody>,
) -> Result<HttpResponse, TrackingRequestError> {
    let (query, response) = fetch_tracking(&service, *kind.get_ref(), &body).await?;

    let report = build_report(&response, query.kind(), query.number()).map_err(|error| {
        error!(?error, tracking_number = %query.number(), "Unable to build tracking report");
        TrackingRequestError::from(error)
    })?;

    Ok(HttpResponse::Ok()
        .content_type(REPORT_CONTENT_TYPE)
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(report.filename)],
        })
        .body(report.content))
}
