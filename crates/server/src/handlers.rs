use actix_web::{
    http::StatusCode,
    web::{self, Data, Json, Query},
    HttpResponse, Responder,
};

use crate::core::leaderboard::GameFilter;
use crate::protocol::{ApiInfo, HealthResponse, ScoresQuery, SubmitScoreRequest};
use crate::response::{json_message, SERVER_ERROR_MESSAGE};
use crate::types::GameId;
use crate::AppState;

/// `GET /api/scores?game=`
pub async fn list_scores(state: Data<AppState>, query: Query<ScoresQuery>) -> impl Responder {
    let filter = GameFilter::parse(query.game.as_deref());
    let store = state.store.clone();
    match web::block(move || store.leaderboard(filter)).await {
        Ok(Ok(records)) => HttpResponse::Ok().json(records),
        Ok(Err(e)) => {
            tracing::error!("leaderboard query failed: {e:#}");
            json_message(StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MESSAGE)
        }
        Err(e) => {
            tracing::error!("leaderboard task failed: {e}");
            json_message(StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MESSAGE)
        }
    }
}

/// `POST /api/scores`
pub async fn submit_score(state: Data<AppState>, body: Json<SubmitScoreRequest>) -> impl Responder {
    let new_score = match body.validate() {
        Ok(new_score) => new_score,
        Err(e) => {
            tracing::debug!("rejected score submission: {e}");
            return json_message(StatusCode::BAD_REQUEST, e.to_string());
        }
    };

    let store = state.store.clone();
    match web::block(move || store.insert(&new_score)).await {
        Ok(Ok(record)) => {
            tracing::info!(
                id = record.id,
                game = %record.game,
                score = record.score,
                "score recorded"
            );
            HttpResponse::Created().json(record)
        }
        Ok(Err(e)) => {
            tracing::error!("saving score failed: {e:#}");
            json_message(StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MESSAGE)
        }
        Err(e) => {
            tracing::error!("saving score task failed: {e}");
            json_message(StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MESSAGE)
        }
    }
}

/// `GET /health`
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// `GET /`
pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(ApiInfo {
        message: "game scores API is running".to_string(),
        games: GameId::ALL.to_vec(),
    })
}

pub async fn not_found() -> impl Responder {
    json_message(StatusCode::NOT_FOUND, "not found")
}
