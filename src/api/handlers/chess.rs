use axum::{extract::State, response::Json};
use log::error;
use std::sync::Arc;

use super::AppState;
use crate::api::models::ChessProfileResponse;
use crate::errors::ApiError;

pub async fn get_chess_profile(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ChessProfileResponse>, ApiError> {
    match state.profiles.chess(None).await {
        Ok(summary) => Ok(Json(summary.into())),
        Err(e) => {
            error!("Chess.com fetch failed: {}", e);
            Err(ApiError::internal("Failed to fetch Chess.com profile"))
        }
    }
}
