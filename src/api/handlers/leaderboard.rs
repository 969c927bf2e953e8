use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use log::debug;
use std::sync::Arc;

use crate::api::models::{SubmitResultRequest, SuccessResponse};
use crate::domain::{GameResult, PlayerRecord};
use crate::errors::ApiError;
use super::AppState;

pub async fn get_leaderboard(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PlayerRecord>>, ApiError> {
    let board = state.store.load().map_err(ApiError::Read)?;
    Ok(Json(board.top(state.config.leaderboard.top_limit)))
}

pub async fn submit_result(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SubmitResultRequest>, JsonRejection>,
) -> Result<Json<SuccessResponse>, ApiError> {
    // Unparseable bodies carry no usable fields
    let request = payload.map(|Json(body)| body).unwrap_or_default();
    let (player_name, result) = validate_submission(request)?;

    state
        .store
        .update(|board| board.record(&player_name, result))
        .map_err(ApiError::Update)?;

    debug!("Recorded {} for {}", result, player_name);
    Ok(Json(SuccessResponse::ok()))
}

pub async fn reset_leaderboard(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SuccessResponse>, ApiError> {
    state.store.reset().map_err(ApiError::Reset)?;
    Ok(Json(SuccessResponse::ok()))
}

fn validate_submission(request: SubmitResultRequest) -> Result<(String, GameResult), ApiError> {
    let player_name = request.player_name.filter(|name| !name.is_empty());
    let result = request.result.filter(|result| !result.is_empty());

    match (player_name, result) {
        (Some(name), Some(result)) => {
            let result = result.parse().map_err(|_| ApiError::InvalidResult)?;
            Ok((name, result))
        }
        _ => Err(ApiError::MissingFields),
    }
}
