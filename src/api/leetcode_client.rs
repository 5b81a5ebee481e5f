use log::info;
use reqwest::header::{HeaderMap, HeaderValue, REFERER};
use serde::Serialize;
use serde_json::Value;

use crate::api::parsers;
use crate::domain::LeetCodeSummary;
use crate::errors::UpstreamError;
use crate::http::UpstreamClient;

/// GraphQL query sent verbatim to LeetCode
pub const PROFILE_QUERY: &str = r#"
    query getUserProfile($username: String!) {
      matchedUser(username: $username) {
        username
        submitStats: submitStatsGlobal {
          acSubmissionNum {
            difficulty
            count
            submissions
          }
        }
        profile {
          ranking
          reputation
          starRating
          userAvatar
        }
      }
    }
"#;

#[derive(Debug, Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: Variables<'a>,
}

#[derive(Debug, Serialize)]
struct Variables<'a> {
    username: &'a str,
}

/// LeetCode GraphQL client
#[derive(Clone)]
pub struct LeetCodeClient {
    client: UpstreamClient,
    graphql_url: String,
    base_url: String,
}

impl LeetCodeClient {
    pub fn new(client: UpstreamClient, graphql_url: &str, base_url: &str) -> Self {
        Self {
            client,
            graphql_url: graphql_url.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn fetch_summary(&self, username: &str) -> Result<LeetCodeSummary, UpstreamError> {
        info!("Fetching LeetCode profile for {}", username);

        let request = GraphQlRequest {
            query: PROFILE_QUERY,
            variables: Variables { username },
        };
        let payload: Value = self
            .client
            .post_json(&self.graphql_url, &request, self.build_headers())
            .await?;

        parsers::leetcode::parse_profile(&payload, username, self.build_profile_url(username))
    }

    // --- Helper Methods ---

    fn build_profile_url(&self, username: &str) -> String {
        format!("{}/u/{}/", self.base_url, urlencoding::encode(username))
    }

    /// LeetCode rejects GraphQL calls that do not come from its own pages
    fn build_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Ok(referer) = HeaderValue::from_str(&self.base_url) {
            headers.insert(REFERER, referer);
        }
        headers
    }
}
