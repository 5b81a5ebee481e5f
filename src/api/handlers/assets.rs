use axum::{extract::State, response::Json};
use log::error;
use std::sync::Arc;

use super::AppState;
use crate::errors::ApiError;
use crate::services::assets::list_skill_icons;

pub async fn get_skill_icons(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<String>>, ApiError> {
    list_skill_icons(&state.config.assets.skill_icons_dir)
        .await
        .map(Json)
        .map_err(|e| {
            error!("Skill icon listing failed: {:?}", e);
            ApiError::internal("Failed to load skill icons")
        })
}
