use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pagelist::config::Config;
use pagelist::pagination::PageSize;
use pagelist::tui::{self, layout::MaxHeight};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::pages::PagesCommand;

/// Browse a list one page at a time in the terminal
#[derive(Parser, Debug)]
#[command(
    name = "pagelist",
    version,
    about = "Browse a list one page at a time in the terminal",
    long_about = r#"pagelist shows a bounded-height list with first/previous/next/last controls,
numbered page buttons and a page-size selector.

Examples:
  pagelist                          # Browse 250 generated items
  pagelist --file Cargo.lock        # Browse the lines of a file
  pagelist --page-size 50 -m 60%    # Start with 50 items per page, 60% of the screen
  pagelist pages 20 10              # Print the page selector: 1 … 9 10 11 … 20"#
)]
pub struct Cli {
    /// Enable debug logging (the interactive browser logs to a file)
    #[arg(short = 'd', long = "debug", global = true)]
    pub debug: bool,

    /// Number of generated items when no file is given
    #[arg(short = 'n', long = "items")]
    pub items: Option<usize>,

    /// Items per page (10, 20, 50 or 100)
    #[arg(short = 'p', long = "page-size", value_parser = parse_page_size)]
    pub page_size: Option<PageSize>,

    /// List height as a percentage ("80%") or in lines ("25")
    #[arg(short = 'm', long = "max-height")]
    pub max_height: Option<MaxHeight>,

    /// Browse the lines of this file instead of generated items
    #[arg(short = 'f', long = "file")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the compressed page selector for TOTAL pages
    Pages(PagesCommand),
}

fn parse_page_size(raw: &str) -> Result<PageSize, String> {
    let size: usize = raw
        .parse()
        .map_err(|_| format!("'{}' is not a number", raw))?;
    PageSize::try_from(size).map_err(|e| e.to_string())
}

impl Cli {
    /// Whether the list browser will take over the terminal
    pub fn is_interactive(&self) -> bool {
        self.command.is_none()
    }

    pub async fn execute(self) -> Result<()> {
        if let Some(Commands::Pages(cmd)) = &self.command {
            return cmd.execute();
        }

        let config = self.resolve_config(Config::init().await?);
        config.validate()?;
        debug!(?config, "Configuration initialized");

        let items = match &self.file {
            Some(path) => read_lines(path).await?,
            None => generate_items(config.items),
        };

        info!("Starting interactive mode");
        tui::run(&config, items).await
    }

    /// Command line flags take precedence over files and environment
    fn resolve_config(&self, mut config: Config) -> Config {
        if let Some(items) = self.items {
            config.items = items;
        }
        if let Some(page_size) = self.page_size {
            config.page_size = page_size;
        }
        if let Some(max_height) = self.max_height {
            config.max_height = max_height;
        }
        if let Some(path) = &self.file {
            config.title.get_or_insert_with(|| path.display().to_string());
        }
        config
    }
}

fn generate_items(count: usize) -> Vec<String> {
    let width = count.to_string().len();
    (1..=count)
        .map(|i| format!("Item {:0width$}", i, width = width))
        .collect()
}

async fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(content.lines().map(str::to_string).collect())
}
