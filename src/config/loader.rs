use crate::config::Config;
use crate::utils::debug_with_context;
use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use tokio::fs;

pub const THEME_ENV: &str = "POWERLINE_PROMPT_THEME";

/// Load configuration with priority: Env vars > Config file > Defaults
pub async fn load_config(config_path: Option<PathBuf>) -> Result<Config> {
    let mut config = if let Some(path) = config_path {
        load_config_file(&path).await?
    } else {
        load_config_from_default_locations().await
    };

    apply_env_overrides(&mut config);

    Ok(config)
}

async fn load_config_from_default_locations() -> Config {
    for path in config_search_paths() {
        if !path.exists() {
            continue;
        }
        match load_config_file(&path).await {
            Ok(config) => {
                debug_with_context("config", &format!("Loaded {}", path.display()));
                return config;
            }
            Err(e) => {
                eprintln!("Warning: Failed to load config from {}: {:#}", path.display(), e);
            }
        }
    }

    Config::default()
}

/// Paths searched for a config file, in priority order.
pub fn config_search_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(".powerline-prompt.json")];

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("powerline-prompt").join("config.json"));
    }
    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".config").join("powerline-prompt").join("config.json"));
    }
    paths.dedup();

    paths
}

pub async fn load_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_config(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

pub fn parse_config(content: &str) -> Result<Config> {
    Ok(serde_json::from_str(content)?)
}

fn apply_env_overrides(config: &mut Config) {
    if let Ok(theme) = env::var(THEME_ENV) {
        config.theme = theme;
    }
}
