use axum::{extract::State, response::Json};
use log::{error, warn};
use std::sync::Arc;

use super::AppState;
use crate::domain::LeetCodeSummary;
use crate::errors::{ApiError, UpstreamError};

const FETCH_FAILED: &str = "Failed to fetch LeetCode profile";
const USER_NOT_FOUND: &str = "User not found or API returned unexpected data";

pub async fn get_leetcode_profile(
    State(state): State<Arc<AppState>>,
) -> Result<Json<LeetCodeSummary>, ApiError> {
    state
        .profiles
        .leetcode(None)
        .await
        .map(Json)
        .map_err(to_api_error)
}

/// Status failures get a bare message, a missing user is a 404, and
/// everything else carries the underlying message
fn to_api_error(err: UpstreamError) -> ApiError {
    match err {
        UpstreamError::Status { .. } => {
            error!("LeetCode fetch failed: {}", err);
            ApiError::internal(FETCH_FAILED)
        }
        UpstreamError::NotFound(_) => {
            warn!("LeetCode lookup: {}", err);
            ApiError::not_found(USER_NOT_FOUND)
        }
        other => {
            error!("LeetCode fetch failed: {}", other);
            ApiError::internal(format!("{}: {}", FETCH_FAILED, other))
        }
    }
}
