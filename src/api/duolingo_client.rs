use log::info;
use reqwest::header::{CACHE_CONTROL, HeaderMap, HeaderValue, USER_AGENT};
use serde::Deserialize;

use crate::domain::{DuolingoSummary, LanguageProgress, level_for_xp};
use crate::errors::UpstreamError;
use crate::http::UpstreamClient;

#[derive(Debug, Deserialize)]
struct UsersResponse {
    users: Vec<DuolingoUser>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DuolingoUser {
    username: String,
    name: Option<String>,
    streak: Option<u64>,
    total_xp: Option<u64>,
    picture: Option<String>,
    courses: Vec<Course>,
}

#[derive(Debug, Deserialize)]
struct Course {
    title: String,
    xp: Option<u64>,
}

/// Client for Duolingo's unofficial users endpoint
#[derive(Clone)]
pub struct DuolingoClient {
    client: UpstreamClient,
    api_url: String,
    browser_user_agent: String,
}

impl DuolingoClient {
    pub fn new(client: UpstreamClient, api_url: &str, browser_user_agent: &str) -> Self {
        Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            browser_user_agent: browser_user_agent.to_string(),
        }
    }

    pub async fn fetch_summary(&self, username: &str) -> Result<DuolingoSummary, UpstreamError> {
        info!("Fetching Duolingo profile for {}", username);

        let url = self.build_users_url(username);
        let response: UsersResponse = self.client.get_json(&url, self.build_headers()).await?;

        let user = response.users.into_iter().next().ok_or_else(|| {
            UpstreamError::not_found(format!("No Duolingo user named {}", username))
        })?;

        Ok(Self::summarize(user))
    }

    fn summarize(user: DuolingoUser) -> DuolingoSummary {
        let languages = user
            .courses
            .into_iter()
            .map(|course| {
                let xp = course.xp.unwrap_or(0);
                let level = level_for_xp(xp);
                LanguageProgress {
                    language: course.title,
                    level: level.level,
                    xp,
                    progress: level.progress,
                }
            })
            .collect();

        DuolingoSummary {
            username: user.username,
            name: user.name,
            streak: user.streak.unwrap_or(0),
            total_xp: user.total_xp.unwrap_or(0),
            profile_picture: user.picture.as_deref().map(avatar_url),
            languages,
        }
    }

    // --- Helper Methods ---

    fn build_users_url(&self, username: &str) -> String {
        format!(
            "{}/users?username={}",
            self.api_url,
            urlencoding::encode(username)
        )
    }

    fn build_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Ok(agent) = HeaderValue::from_str(&self.browser_user_agent) {
            headers.insert(USER_AGENT, agent);
        }
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));
        headers
    }
}

/// Upstream pictures are protocol-relative and need a size suffix
fn avatar_url(picture: &str) -> String {
    let absolute = match picture.strip_prefix("//") {
        Some(rest) => format!("https://{}", rest),
        None => picture.to_string(),
    };
    format!("{}/xlarge", absolute.trim_end_matches('/'))
}
