use anyhow::Result;
use serde::Deserialize;

use crate::config::settings::AppConfig;
use crate::services::ProfileService;

pub mod assets;
pub mod chess;
pub mod duolingo;
pub mod leetcode;

pub struct AppState {
    pub profiles: ProfileService,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self> {
        let profiles = ProfileService::new(&config)?;
        Ok(Self { profiles, config })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct DuolingoParams {
    pub username: Option<String>,
}

impl DuolingoParams {
    /// Requested username, with a blank value treated as absent
    pub fn username(&self) -> Option<&str> {
        self.username
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}
