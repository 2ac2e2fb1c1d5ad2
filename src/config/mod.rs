use crate::error::{PaginationError, PaginationResult};
use crate::pagination::PageSize;
use crate::tui::layout::{MaxHeight, MIN_LIST_HEIGHT};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Application configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Initial items per page
    pub page_size: PageSize,

    /// Height limit of the list
    pub max_height: MaxHeight,

    /// Number of demo items to generate
    pub items: usize,

    /// Title shown on the list border
    pub title: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: PageSize::default(),
            max_height: MaxHeight::default(),
            items: 250,
            title: None,
        }
    }
}

impl Config {
    /// Initialize configuration from defaults, configuration files and environment
    pub async fn init() -> Result<Self> {
        debug!("Initializing configuration");

        let mut config = Self::default();

        if let Some(file_config) = Self::load_from_file().await? {
            config.merge_with(file_config);
        }

        config.load_from_env();

        Ok(config)
    }

    /// Configuration file locations, highest priority first
    pub fn config_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from("./.pagelist.json"),
            PathBuf::from("./pagelist.json"),
        ];

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("pagelist").join("pagelist.json"));
        }

        paths
    }

    /// Log file written while the terminal UI owns the screen
    pub fn log_file_path() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("pagelist")
            .join("logs")
            .join("pagelist.log")
    }

    /// Load the first configuration file found, if any
    pub async fn load_from_file() -> Result<Option<Self>> {
        for path in Self::config_paths() {
            if path.exists() {
                return Self::load_from_path(&path).await.map(Some);
            }
        }
        Ok(None)
    }

    /// Load configuration from a JSON file
    pub async fn load_from_path(path: &Path) -> Result<Self> {
        debug!("Loading configuration from: {}", path.display());
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Invalid configuration in {}", path.display()))?;
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(&mut self) {
        self.apply_env(|key| std::env::var(key).ok());
    }

    /// Apply `PAGELIST_*` variables resolved through `lookup`. Invalid values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup("PAGELIST_PAGE_SIZE") {
            match raw.trim().parse::<usize>() {
                Ok(size) => match PageSize::try_from(size) {
                    Ok(page_size) => self.page_size = page_size,
                    Err(e) => warn!("Ignoring PAGELIST_PAGE_SIZE: {}", e),
                },
                Err(_) => warn!("Ignoring PAGELIST_PAGE_SIZE: not a number: {}", raw),
            }
        }

        if let Some(raw) = lookup("PAGELIST_MAX_HEIGHT") {
            match raw.parse::<MaxHeight>() {
                Ok(max_height) => self.max_height = max_height,
                Err(e) => warn!("Ignoring PAGELIST_MAX_HEIGHT: {}", e),
            }
        }

        if let Some(raw) = lookup("PAGELIST_ITEMS") {
            match raw.trim().parse() {
                Ok(items) => self.items = items,
                Err(_) => warn!("Ignoring PAGELIST_ITEMS: not a number: {}", raw),
            }
        }

        if let Some(title) = lookup("PAGELIST_TITLE") {
            self.title = Some(title);
        }
    }

    /// Merge another configuration into this one
    pub fn merge_with(&mut self, other: Self) {
        let defaults = Self::default();

        if other.page_size != defaults.page_size {
            self.page_size = other.page_size;
        }
        if other.max_height != defaults.max_height {
            self.max_height = other.max_height;
        }
        if other.items != defaults.items {
            self.items = other.items;
        }
        if other.title.is_some() {
            self.title = other.title;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> PaginationResult<()> {
        if let MaxHeight::Lines(lines) = self.max_height {
            if lines < MIN_LIST_HEIGHT {
                return Err(PaginationError::InvalidMaxHeight(format!(
                    "{} lines cannot fit the list border and pager (minimum {})",
                    lines, MIN_LIST_HEIGHT
                )));
            }
        }
        Ok(())
    }
}
