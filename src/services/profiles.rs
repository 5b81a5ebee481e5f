use anyhow::Result;

use crate::api::{ChessClient, DuolingoClient, LeetCodeClient};
use crate::config::{AppConfig, ProfileSettings};
use crate::domain::{ChessSummary, DuolingoSummary, LeetCodeSummary};
use crate::errors::UpstreamError;
use crate::http::UpstreamClient;

/// Entry point to the three profile aggregators
pub struct ProfileService {
    chess: ChessClient,
    duolingo: DuolingoClient,
    leetcode: LeetCodeClient,
    profiles: ProfileSettings,
}

impl ProfileService {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let upstream = &config.upstream;
        let client = UpstreamClient::new(&upstream.user_agent, upstream.timeout_secs)?;

        Ok(Self {
            chess: ChessClient::new(client.clone(), &upstream.chess_api_url),
            duolingo: DuolingoClient::new(
                client.clone(),
                &upstream.duolingo_api_url,
                &upstream.browser_user_agent,
            ),
            leetcode: LeetCodeClient::new(
                client,
                &upstream.leetcode_graphql_url,
                &upstream.leetcode_base_url,
            ),
            profiles: config.profiles.clone(),
        })
    }

    pub async fn chess(&self, username: Option<&str>) -> Result<ChessSummary, UpstreamError> {
        let username = username.unwrap_or(self.profiles.chess_username.as_str());
        self.chess.fetch_summary(username).await
    }

    pub async fn duolingo(&self, username: Option<&str>) -> Result<DuolingoSummary, UpstreamError> {
        let username = username.unwrap_or(self.profiles.duolingo_username.as_str());
        self.duolingo.fetch_summary(username).await
    }

    pub async fn leetcode(&self, username: Option<&str>) -> Result<LeetCodeSummary, UpstreamError> {
        let username = username.unwrap_or(self.profiles.leetcode_username.as_str());
        self.leetcode.fetch_summary(username).await
    }
}
