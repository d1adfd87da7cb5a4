use crate::config::config::Config;
use crate::models::response::{DataResponse, ErrorResponse};
use crate::repository::database::Database;
use crate::repository::store::MatchStore;
use actix_web::{get, web, App, HttpResponse, HttpServer, Responder, Result};
use log::info;
use serde_json::json;
use std::io;

mod config;
mod controller;
mod models;
mod repository;
mod service;
mod tournament;
mod util;

#[get("/health")]
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(DataResponse::success(json!({
        "message": "Everything is working as expected"
    })))
}

async fn not_found() -> Result<HttpResponse> {
    Ok(HttpResponse::NotFound().json(ErrorResponse::failed("Resource not found")))
}

pub struct AppState {
    store: Box<dyn MatchStore>,
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    let config = Config::init().map_err(|e| {
        eprintln!("invalid configuration: {e}");
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;
    log4rs::init_file(&config.log_config, Default::default()).map_err(|e| {
        eprintln!("log config file {} could not be loaded: {e}", config.log_config);
        io::Error::new(io::ErrorKind::NotFound, e)
    })?;

    let db = Database::new(&config).map_err(io::Error::other)?;
    db.init_schema().await.map_err(io::Error::other)?;
    info!(
        "schema ready, listening on {}:{}",
        config.server_host, config.server_port
    );

    let app_data = web::Data::new(AppState {
        store: Box::new(db),
    });

    HttpServer::new(move || {
        App::new()
            .app_data(app_data.clone())
            .configure(controller::handler::config)
            .service(health_check)
            .default_service(web::route().to(not_found))
            .wrap(actix_web::middleware::Logger::default())
    })
    .bind((config.server_host.as_str(), config.server_port))?
    .run()
    .await
}
