use crate::models::match_report::ReportMatchSchema;
use crate::models::player::RegisterPlayerSchema;
use crate::models::response::{DataResponse, ErrorResponse};
use crate::repository::store::StoreError;
use crate::tournament::{compute_pairings, compute_standings};
use crate::util::sanitize::clean_name;
use crate::AppState;
use actix_web::web::{Data, Json};
use actix_web::HttpResponse;
use log::{error, warn};
use serde_json::json;
use validator::{Validate, ValidationErrors};

fn validation_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|field| field.iter())
        .map(|e| match &e.message {
            Some(message) => message.to_string(),
            None => e.code.to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn store_failure(function: &str, err: StoreError) -> HttpResponse {
    match err {
        StoreError::UnknownPlayer { .. } => {
            HttpResponse::NotFound().json(ErrorResponse::failed(err.to_string()))
        }
        StoreError::SelfMatch(_) => {
            HttpResponse::BadRequest().json(ErrorResponse::failed(err.to_string()))
        }
        StoreError::PlayersInUse => {
            HttpResponse::Conflict().json(ErrorResponse::failed(err.to_string()))
        }
        StoreError::PoolBuildError(_) | StoreError::PoolError(_) | StoreError::QueryError(_) => {
            error!("An error occurred in the {function} function. The error: {err}");
            HttpResponse::InternalServerError().json(ErrorResponse::failed("An error occurred"))
        }
    }
}

pub async fn register_player_service(
    data: Data<AppState>,
    new_player: Json<RegisterPlayerSchema>,
) -> HttpResponse {
    let request = RegisterPlayerSchema {
        name: clean_name(&new_player.name),
    };
    if let Err(errors) = request.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse::failed(validation_message(&errors)));
    }

    match data.store.register_player(&request.name).await {
        Ok(player) => HttpResponse::Created().json(DataResponse::success(json!({ "player": player }))),
        Err(err) => store_failure("register_player_service", err),
    }
}

pub async fn list_players_service(data: Data<AppState>) -> HttpResponse {
    match data.store.list_players().await {
        Ok(players) => HttpResponse::Ok().json(DataResponse::success(json!({ "players": players }))),
        Err(err) => store_failure("list_players_service", err),
    }
}

pub async fn count_players_service(data: Data<AppState>) -> HttpResponse {
    match data.store.count_players().await {
        Ok(count) => HttpResponse::Ok().json(DataResponse::success(json!({ "count": count }))),
        Err(err) => store_failure("count_players_service", err),
    }
}

pub async fn delete_players_service(data: Data<AppState>) -> HttpResponse {
    match data.store.clear_players().await {
        Ok(deleted) => HttpResponse::Ok().json(DataResponse::success(json!({ "deleted": deleted }))),
        Err(err) => store_failure("delete_players_service", err),
    }
}

pub async fn report_match_service(
    data: Data<AppState>,
    report: Json<ReportMatchSchema>,
) -> HttpResponse {
    let report = report.into_inner();
    match data
        .store
        .record_match(report.winner_id, report.loser_id)
        .await
    {
        Ok(recorded) => HttpResponse::Created().json(DataResponse::success(json!({ "match": recorded }))),
        Err(err) => store_failure("report_match_service", err),
    }
}

pub async fn list_matches_service(data: Data<AppState>) -> HttpResponse {
    match data.store.list_matches().await {
        Ok(matches) => HttpResponse::Ok().json(DataResponse::success(json!({ "matches": matches }))),
        Err(err) => store_failure("list_matches_service", err),
    }
}

pub async fn delete_matches_service(data: Data<AppState>) -> HttpResponse {
    match data.store.clear_matches().await {
        Ok(deleted) => HttpResponse::Ok().json(DataResponse::success(json!({ "deleted": deleted }))),
        Err(err) => store_failure("delete_matches_service", err),
    }
}

pub async fn standings_service(data: Data<AppState>) -> HttpResponse {
    match data.store.snapshot().await {
        Ok(snapshot) => {
            let standings = compute_standings(&snapshot.players, &snapshot.matches);
            HttpResponse::Ok().json(DataResponse::success(json!({ "standings": standings })))
        }
        Err(err) => store_failure("standings_service", err),
    }
}

pub async fn pairings_service(data: Data<AppState>) -> HttpResponse {
    let snapshot = match data.store.snapshot().await {
        Ok(snapshot) => snapshot,
        Err(err) => return store_failure("pairings_service", err),
    };

    let standings = compute_standings(&snapshot.players, &snapshot.matches);
    match compute_pairings(&standings) {
        Ok(pairings) => HttpResponse::Ok().json(DataResponse::success(json!({ "pairings": pairings }))),
        Err(err) => {
            warn!("refused to pair the next round: {err}");
            HttpResponse::Conflict().json(ErrorResponse::failed(err.to_string()))
        }
    }
}
