use crate::config::Config;
use crate::services::TrackingService;
use actix_rt::signal::unix;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use carrier_client::FedexClient;
use futures_lite::FutureExt;
use std::io::{Error, ErrorKind};
use std::sync::Arc;
use tracing::{error, info};

mod config;
mod http;
mod services;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[actix_rt::main]
async fn main() -> std::io::Result<()> {
    let mut terminate = unix::signal(unix::SignalKind::terminate())?;
    let mut interrupt = unix::signal(unix::SignalKind::interrupt())?;

    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::from_env().map_err(|error| {
        error!(%error, "Missing or invalid environment variable");
        Error::new(ErrorKind::InvalidInput, error)
    })?;

    info!(version = VERSION, ?config, "Starting application...");

    let fedex_client = FedexClient::create(&config.fedex_api_endpoint, config.fedex_credentials())
        .map_err(|error| {
            error!(?error, "Unable to initialize FedEx client");
            Error::new(ErrorKind::Other, error)
        })?;

    let tracking_service = Arc::new(TrackingService::new(Arc::new(fedex_client)));
    let status_remarks = config.status_remarks();

    let server = HttpServer::new({
        move || {
            App::new()
                .app_data(Data::from(Arc::clone(&tracking_service)))
                .app_data(Data::new(status_remarks))
                .configure(http::configure)
        }
    })
    .shutdown_timeout(config.shutdown_timeout)
    .bind(&config.bind_address)?
    .run();

    let server_handle = server.handle();

    actix_rt::spawn({
        async move {
            if let Err(error) = server.await {
                error!(?error, "Error on http server");
            }
        }
    });

    info!(bind_address = %config.bind_address, "Application started");

    interrupt.recv().or(terminate.recv()).await;

    info!("Received shutdown signal. Shutting down gracefully...");

    server_handle.stop(true).await;

    Ok(())
}
