pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod http;
pub mod services;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;
use log::info;

use crate::api::models::ChessProfileResponse;
use crate::cli::{Command, Source};
use crate::config::settings::AppConfig;
use crate::services::{ProfileService, ServerService};

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::from_env();
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_fetch(source: Source, username: Option<&str>) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    let json = runtime.block_on(async {
        let config = AppConfig::from_env();
        let service = ProfileService::new(&config)?;
        info!("Fetching {:?} profile", source);

        let json = match source {
            Source::Chess => {
                let response = ChessProfileResponse::from(service.chess(username).await?);
                serde_json::to_string_pretty(&response)?
            }
            Source::Duolingo => serde_json::to_string_pretty(&service.duolingo(username).await?)?,
            Source::Leetcode => serde_json::to_string_pretty(&service.leetcode(username).await?)?,
        };
        anyhow::Ok(json)
    })?;

    println!("{}", json);
    Ok(())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}
