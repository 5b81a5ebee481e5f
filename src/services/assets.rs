use anyhow::{Context, Result};
use log::info;
use std::path::Path;
use tokio::fs;

/// File names of the skill icons, sorted, hidden files and subdirectories skipped
pub async fn list_skill_icons(dir: &Path) -> Result<Vec<String>> {
    let mut entries = fs::read_dir(dir)
        .await
        .with_context(|| format!("Failed to read icon directory {}", dir.display()))?;

    let mut icons = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        if !entry.file_type().await?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }
        icons.push(name);
    }
    icons.sort();

    info!("Found {} skill icons in {}", icons.len(), dir.display());
    Ok(icons)
}
