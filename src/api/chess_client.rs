use log::info;
use reqwest::header::HeaderMap;
use serde::Deserialize;

use crate::domain::{ChessSummary, GameModeStats};
use crate::errors::UpstreamError;
use crate::http::UpstreamClient;

#[derive(Debug, Deserialize)]
struct PlayerProfile {
    username: String,
    name: Option<String>,
    avatar: Option<String>,
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PlayerStats {
    chess_rapid: Option<ModeStats>,
    chess_blitz: Option<ModeStats>,
    chess_bullet: Option<ModeStats>,
    tactics: Option<TacticsStats>,
}

#[derive(Debug, Deserialize)]
struct ModeStats {
    last: Option<RatingEntry>,
    best: Option<RatingEntry>,
    record: Option<Record>,
}

#[derive(Debug, Deserialize)]
struct RatingEntry {
    rating: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct Record {
    win: Option<u64>,
    loss: Option<u64>,
    draw: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct TacticsStats {
    highest: Option<RatingEntry>,
}

/// Chess.com public API client
#[derive(Clone)]
pub struct ChessClient {
    client: UpstreamClient,
    api_url: String,
}

impl ChessClient {
    pub fn new(client: UpstreamClient, api_url: &str) -> Self {
        Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch profile then stats and flatten them into one summary
    pub async fn fetch_summary(&self, username: &str) -> Result<ChessSummary, UpstreamError> {
        info!("Fetching Chess.com profile for {}", username);

        let profile: PlayerProfile = self
            .client
            .get_json(&self.build_profile_url(username), HeaderMap::new())
            .await?;
        let stats: PlayerStats = self
            .client
            .get_json(&self.build_stats_url(username), HeaderMap::new())
            .await?;

        Ok(Self::summarize(profile, stats))
    }

    fn summarize(profile: PlayerProfile, stats: PlayerStats) -> ChessSummary {
        ChessSummary {
            username: profile.username,
            name: profile.name,
            avatar: profile.avatar,
            url: profile.url,
            rapid: stats.chess_rapid.map(Self::flatten_mode),
            blitz: stats.chess_blitz.map(Self::flatten_mode),
            bullet: stats.chess_bullet.map(Self::flatten_mode),
            tactics_rating: stats
                .tactics
                .and_then(|t| t.highest)
                .and_then(|h| h.rating),
        }
    }

    fn flatten_mode(mode: ModeStats) -> GameModeStats {
        let record = mode.record;
        GameModeStats {
            last_rating: mode.last.and_then(|r| r.rating),
            best_rating: mode.best.and_then(|r| r.rating),
            win: record.as_ref().and_then(|r| r.win),
            loss: record.as_ref().and_then(|r| r.loss),
            draw: record.as_ref().and_then(|r| r.draw),
        }
    }

    // --- Helper Methods ---

    fn build_profile_url(&self, username: &str) -> String {
        format!("{}/player/{}", self.api_url, urlencoding::encode(username))
    }

    fn build_stats_url(&self, username: &str) -> String {
        format!("{}/stats", self.build_profile_url(username))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_summarize_selects_nested_fields() {
        let profile: PlayerProfile = serde_json::from_value(json!({
            "username": "someplayer",
            "name": "Some Player",
            "avatar": "https://images.chesscomfiles.com/avatar.png",
            "url": "https://www.chess.com/member/someplayer",
            "followers": 12,
            "country": "https://api.chess.com/pub/country/PL"
        }))
        .unwrap();
        let stats: PlayerStats = serde_json::from_value(json!({
            "chess_rapid": {
                "last": { "rating": 1510, "date": 1700000000, "rd": 45 },
                "best": { "rating": 1602, "date": 1690000000, "game": "https://www.chess.com/game/live/1" },
                "record": { "win": 120, "loss": 80, "draw": 10 }
            },
            "chess_blitz": {
                "last": { "rating": 1320 },
                "record": { "win": 5, "loss": 7, "draw": 0 }
            },
            "tactics": {
                "highest": { "rating": 2100, "date": 1680000000 },
                "lowest": { "rating": 400, "date": 1600000000 }
            },
            "fide": 0
        }))
        .unwrap();

        let summary = ChessClient::summarize(profile, stats);

        assert_eq!(summary.username, "someplayer");
        assert_eq!(
            summary.rapid,
            Some(GameModeStats {
                last_rating: Some(1510),
                best_rating: Some(1602),
                win: Some(120),
                loss: Some(80),
                draw: Some(10),
            })
        );
        let blitz = summary.blitz.unwrap();
        assert_eq!(blitz.best_rating, None);
        assert_eq!(blitz.win, Some(5));
        assert_eq!(summary.bullet, None);
        assert_eq!(summary.tactics_rating, Some(2100));
    }

    #[test]
    fn test_urls_encode_username() {
        let client = ChessClient::new(
            UpstreamClient::new("test", None).unwrap(),
            "https://api.chess.com/pub/",
        );
        assert_eq!(
            client.build_stats_url("a b"),
            "https://api.chess.com/pub/player/a%20b/stats"
        );
    }
}
