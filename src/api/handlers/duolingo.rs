use axum::{
    extract::{Query, State},
    response::Json,
};
use log::error;
use std::sync::Arc;

use super::{AppState, DuolingoParams};
use crate::domain::DuolingoSummary;
use crate::errors::ApiError;

pub async fn get_duolingo_profile(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DuolingoParams>,
) -> Result<Json<DuolingoSummary>, ApiError> {
    match state.profiles.duolingo(params.username()).await {
        Ok(summary) => Ok(Json(summary)),
        Err(e) => {
            error!("Duolingo fetch failed: {}", e);
            Err(ApiError::internal("Failed to fetch Duolingo data").with_details(e.to_string()))
        }
    }
}
