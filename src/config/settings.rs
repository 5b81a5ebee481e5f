use std::env;
use std::path::PathBuf;

use log::warn;

/// Accounts shown on the portfolio
#[derive(Debug, Clone)]
pub struct ProfileSettings {
    pub chess_username: String,
    pub duolingo_username: String,
    pub leetcode_username: String,
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            chess_username: "hikaru".to_string(),
            duolingo_username: "luis".to_string(),
            leetcode_username: "lee215".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpstreamSettings {
    pub chess_api_url: String,
    pub duolingo_api_url: String,
    pub leetcode_graphql_url: String,
    pub leetcode_base_url: String,
    pub user_agent: String,
    /// Duolingo blocks requests that do not look like a desktop browser
    pub browser_user_agent: String,
    pub timeout_secs: Option<u64>,
}

impl Default for UpstreamSettings {
    fn default() -> Self {
        Self {
            chess_api_url: "https://api.chess.com/pub".to_string(),
            duolingo_api_url: "https://www.duolingo.com/2017-06-30".to_string(),
            leetcode_graphql_url: "https://leetcode.com/graphql".to_string(),
            leetcode_base_url: "https://leetcode.com".to_string(),
            user_agent: "PortfolioBackend/1.0".to_string(),
            browser_user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36"
                .to_string(),
            timeout_secs: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AssetSettings {
    pub skill_icons_dir: PathBuf,
}

impl Default for AssetSettings {
    fn default() -> Self {
        Self {
            skill_icons_dir: PathBuf::from("public/skill-icons"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub profiles: ProfileSettings,
    pub upstream: UpstreamSettings,
    pub assets: AssetSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by whatever is set in the environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; empty values count as unset
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::new();

        let profiles = &mut config.profiles;
        override_with(&mut profiles.chess_username, get("CHESS_USERNAME"));
        override_with(&mut profiles.duolingo_username, get("DUOLINGO_USERNAME"));
        override_with(&mut profiles.leetcode_username, get("LEETCODE_USERNAME"));

        let upstream = &mut config.upstream;
        override_with(&mut upstream.chess_api_url, get("CHESS_API_URL"));
        override_with(&mut upstream.duolingo_api_url, get("DUOLINGO_API_URL"));
        override_with(&mut upstream.leetcode_graphql_url, get("LEETCODE_GRAPHQL_URL"));
        override_with(&mut upstream.leetcode_base_url, get("LEETCODE_BASE_URL"));

        if let Some(raw) = get("UPSTREAM_TIMEOUT_SECS") {
            match raw.trim().parse::<u64>() {
                Ok(secs) => upstream.timeout_secs = Some(secs),
                Err(_) => warn!("Ignoring invalid UPSTREAM_TIMEOUT_SECS value: {}", raw),
            }
        }

        if let Some(dir) = get("SKILL_ICONS_DIR") {
            config.assets.skill_icons_dir = PathBuf::from(dir);
        }

        config
    }
}

fn override_with(target: &mut String, value: Option<String>) {
    if let Some(value) = value {
        *target = value;
    }
}
