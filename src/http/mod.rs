mod health;
mod track;


use actix_web::web::{self, Data};
use actix_web::Scope;
use carrier_client::QueryKind;

pub(crate) use health::liveness_check;
pub(crate) use track::{download_tracking_report, get_tracking, get_tracking_rows, json_config};

fn tracking_scope(path: &str, kind: QueryKind) -> Scope {
    web::scope(path)
        .app_data(Data::new(kind))
        .route("", web::post().to(get_tracking))
        .route("/rows", web::post().to(get_tracking_rows))
        .route("/report", web::post().to(download_tracking_report))
}

/// Routes for both query kinds. Expects `Data<TrackingService>` and
/// `Data<StatusRemarks>` to be registered on the app.
pub(crate) fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(tracking_scope("/api/track-single", QueryKind::Single))
        .service(tracking_scope("/api/track", QueryKind::Master))
        .route("/health", web::get().to(liveness_check));
}
