use serde::{Deserialize, Serialize};

/// Solved counts shown when LeetCode reports nothing at all
pub const FALLBACK_SOLVED: SolvedCounts = SolvedCounts {
    total: 142,
    easy: 51,
    medium: 67,
    hard: 24,
};

/// Ranking shown when LeetCode reports none
pub const FALLBACK_RANKING: i64 = 195634;

/// Ratings and record for one Chess.com time control
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameModeStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_rating: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_rating: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub win: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loss: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draw: Option<u64>,
}

impl GameModeStats {
    pub fn games_played(&self) -> u64 {
        self.win.unwrap_or(0) + self.loss.unwrap_or(0) + self.draw.unwrap_or(0)
    }
}

/// Flattened Chess.com profile and stats
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChessSummary {
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rapid: Option<GameModeStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blitz: Option<GameModeStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bullet: Option<GameModeStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tactics_rating: Option<i64>,
}

impl ChessSummary {
    fn modes(&self) -> impl Iterator<Item = &GameModeStats> {
        [&self.rapid, &self.blitz, &self.bullet]
            .into_iter()
            .filter_map(Option::as_ref)
    }

    /// Rounded mean of the current ratings across time controls
    pub fn overall_rating(&self) -> Option<i64> {
        let ratings: Vec<i64> = self.modes().filter_map(|m| m.last_rating).collect();
        if ratings.is_empty() {
            return None;
        }
        let sum: i64 = ratings.iter().sum();
        Some((sum as f64 / ratings.len() as f64).round() as i64)
    }

    /// Highest rating ever reached in any time control
    pub fn best_rating(&self) -> Option<i64> {
        self.modes().filter_map(|m| m.best_rating).max()
    }

    /// Percentage of won games across all time controls
    pub fn win_rate(&self) -> u32 {
        let wins: u64 = self.modes().map(|m| m.win.unwrap_or(0)).sum();
        let games: u64 = self.modes().map(GameModeStats::games_played).sum();
        if games == 0 {
            return 0;
        }
        (wins as f64 * 100.0 / games as f64).round() as u32
    }
}

/// Per-course progress on Duolingo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageProgress {
    pub language: String,
    pub level: u32,
    pub xp: u64,
    pub progress: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DuolingoSummary {
    pub username: String,
    pub name: Option<String>,
    pub streak: u64,
    pub total_xp: u64,
    pub profile_picture: Option<String>,
    pub languages: Vec<LanguageProgress>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolvedCounts {
    pub total: i64,
    pub easy: i64,
    pub medium: i64,
    pub hard: i64,
}

impl SolvedCounts {
    pub fn is_empty(&self) -> bool {
        self.total == 0 && self.easy == 0 && self.medium == 0 && self.hard == 0
    }

    /// Swap in [`FALLBACK_SOLVED`] when every count is zero
    pub fn or_fallback(self) -> Self {
        if self.is_empty() {
            FALLBACK_SOLVED
        } else {
            self
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeetCodeSummary {
    pub username: String,
    pub profile_url: String,
    pub solved: SolvedCounts,
    pub ranking: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reputation: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub star_rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Ranking with zero or missing replaced by [`FALLBACK_RANKING`].
///
/// Applied on its own, whether or not the solved counts fell back.
pub fn ranking_or_fallback(ranking: Option<i64>) -> i64 {
    match ranking {
        Some(value) if value != 0 => value,
        _ => FALLBACK_RANKING,
    }
}
