use axum::{routing::get, Router};
use std::sync::Arc;

use crate::api::handlers::{
    assets::get_skill_icons, chess::get_chess_profile, duolingo::get_duolingo_profile,
    leetcode::get_leetcode_profile, AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/chess", get(get_chess_profile))
        .route("/api/duolingo", get(get_duolingo_profile))
        .route("/api/leetcode", get(get_leetcode_profile))
        .route("/api/skill-icons", get(get_skill_icons))
        .with_state(state)
}
