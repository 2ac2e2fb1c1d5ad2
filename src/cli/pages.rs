use anyhow::Result;
use clap::Args;
use pagelist::pagination::{compress, format_labels};
use tracing::debug;

/// Print the page selector for a page count, e.g. `1 … 9 10 11 … 20`
#[derive(Args, Debug)]
pub struct PagesCommand {
    /// Total number of pages
    pub total: usize,

    /// Current page (1-based)
    #[arg(default_value_t = 1)]
    pub current: usize,
}

impl PagesCommand {
    pub fn render(&self) -> String {
        format_labels(&compress(self.total, self.current))
    }

    pub fn execute(&self) -> Result<()> {
        debug!(total = self.total, current = self.current, "Compressing page range");
        println!("{}", self.render());
        Ok(())
    }
}
