use serde::Serialize;

use crate::domain::ChessSummary;

/// Chess summary plus the figures derived from it
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChessProfileResponse {
    #[serde(flatten)]
    pub summary: ChessSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall_rating: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_rating: Option<i64>,
    pub win_rate: u32,
}

impl From<ChessSummary> for ChessProfileResponse {
    fn from(summary: ChessSummary) -> Self {
        Self {
            overall_rating: summary.overall_rating(),
            best_rating: summary.best_rating(),
            win_rate: summary.win_rate(),
            summary,
        }
    }
}
