use crate::models::match_report::ReportMatchSchema;
use crate::models::player::RegisterPlayerSchema;
use crate::models::response::ErrorResponse;
use crate::service::tournament::{
    count_players_service, delete_matches_service, delete_players_service, list_matches_service,
    list_players_service, pairings_service, register_player_service, report_match_service,
    standings_service,
};
use crate::AppState;
use actix_web::web::{Data, Json};
use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::{delete, get, post, web, HttpRequest, HttpResponse, Responder};
use log::debug;

#[post("/players")]
async fn register_player_handler(
    data: Data<AppState>,
    new_player: Json<RegisterPlayerSchema>,
) -> impl Responder {
    register_player_service(data, new_player).await
}

#[get("/players")]
async fn list_players_handler(data: Data<AppState>) -> impl Responder {
    list_players_service(data).await
}

#[get("/players/count")]
async fn count_players_handler(data: Data<AppState>) -> impl Responder {
    count_players_service(data).await
}

#[delete("/players")]
async fn delete_players_handler(data: Data<AppState>) -> impl Responder {
    delete_players_service(data).await
}

#[post("/matches")]
async fn report_match_handler(
    data: Data<AppState>,
    report: Json<ReportMatchSchema>,
) -> impl Responder {
    report_match_service(data, report).await
}

#[get("/matches")]
async fn list_matches_handler(data: Data<AppState>) -> impl Responder {
    list_matches_service(data).await
}

#[delete("/matches")]
async fn delete_matches_handler(data: Data<AppState>) -> impl Responder {
    delete_matches_service(data).await
}

#[get("/standings")]
async fn standings_handler(data: Data<AppState>) -> impl Responder {
    standings_service(data).await
}

#[get("/pairings")]
async fn pairings_handler(data: Data<AppState>) -> impl Responder {
    pairings_service(data).await
}

/// Answers unreadable request bodies with the same JSON envelope as every other failure.
fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!("rejected request body for {}: {err}", req.path());
    let response = HttpResponse::BadRequest().json(ErrorResponse::failed(err.to_string()));
    InternalError::from_response(err, response).into()
}

pub fn config(conf: &mut web::ServiceConfig) {
    let scope = web::scope("/api/v1")
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(count_players_handler)
        .service(register_player_handler)
        .service(list_players_handler)
        .service(delete_players_handler)
        .service(report_match_handler)
        .service(list_matches_handler)
        .service(delete_matches_handler)
        .service(standings_handler)
        .service(pairings_handler);

    conf.service(scope);
}

#[cfg(test)]
#[path = "handler_tests.rs"]
mod handler_tests;
