use crate::config::Config;
use crate::pagination::PaginationEvent;
use crate::tui::{
    components::{Component, PaginatedList},
    events::Event,
    keys::KeyMap,
    layout::centered_rect,
    styles::Theme,
    Frame,
};
use anyhow::Result;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::debug;

/// How long a status message stays before the hint line returns
const STATUS_TIMEOUT: Duration = Duration::from_secs(3);

/// Main application state and controller
pub struct App {
    /// Whether the application should quit
    pub should_quit: bool,

    /// Current application dimensions
    pub size: Rect,

    /// Key mappings for the application
    pub key_map: KeyMap,

    /// The list being browsed
    pub list: PaginatedList<String>,

    /// Current theme for styling
    pub theme: Theme,

    /// Status message to display
    pub status_message: Option<String>,

    /// When the status message was set
    status_set_at: Option<Instant>,

    /// Lifetime of a status message, checked on every tick
    pub status_timeout: Duration,

    /// Show help overlay
    pub show_help: bool,

    /// Event receiver for internal communication
    event_receiver: mpsc::UnboundedReceiver<Event>,
}

impl App {
    /// Create a new application instance over `items`
    pub fn new(config: &Config, items: Vec<String>) -> Self {
        let (event_sender, event_receiver) = mpsc::unbounded_channel();

        let mut list = PaginatedList::new(items)
            .with_page_size(config.page_size)
            .with_max_height(config.max_height);
        if let Some(title) = &config.title {
            list = list.with_title(title.clone());
        }

        list.on_pagination_event(move |event| {
            let message = match event {
                PaginationEvent::PageChanged { new_page, .. } => {
                    format!("Moved to page {}", new_page + 1)
                }
                PaginationEvent::PageSizeChanged {
                    new_size,
                    new_total_pages,
                    ..
                } => format!("Showing {} items per page ({} pages)", new_size, new_total_pages),
            };
            // Receiver is dropped only on shutdown
            let _ = event_sender.send(Event::StatusMessage(message));
        });

        Self {
            should_quit: false,
            size: Rect::default(),
            key_map: KeyMap::default(),
            list,
            theme: Theme::default(),
            status_message: None,
            status_set_at: None,
            status_timeout: STATUS_TIMEOUT,
            show_help: false,
            event_receiver,
        }
    }

    /// Handle incoming events
    pub async fn handle_event(&mut self, event: Event) -> Result<bool> {
        match event {
            Event::Key(key_event) => {
                if self.key_map.should_quit(&key_event) {
                    self.should_quit = true;
                    return Ok(true);
                }

                if self.key_map.should_show_help(&key_event) {
                    self.show_help = !self.show_help;
                    return Ok(false);
                }

                self.list.handle_key_event(key_event).await?;
            }

            Event::Mouse(mouse_event) => {
                self.list.handle_mouse_event(mouse_event).await?;
            }

            Event::Resize(width, height) => {
                self.size = Rect::new(0, 0, width, height);
            }

            Event::Tick => self.expire_status(),

            Event::StatusMessage(message) => self.set_status(message),
        }

        // Pagination callbacks report through the channel
        while let Ok(internal_event) = self.event_receiver.try_recv() {
            if let Event::StatusMessage(message) = internal_event {
                debug!("{}", message);
                self.set_status(message);
            }
        }

        Ok(self.should_quit)
    }

    fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_set_at = Some(Instant::now());
    }

    /// Drop the status message once it has been shown for `status_timeout`
    fn expire_status(&mut self) {
        if let Some(set_at) = self.status_set_at {
            if set_at.elapsed() >= self.status_timeout {
                self.status_message = None;
                self.status_set_at = None;
            }
        }
    }

    /// Render the application UI
    pub fn render(&mut self, frame: &mut Frame) {
        self.size = frame.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),    // List
                Constraint::Length(1), // Status bar
            ])
            .split(frame.size());

        self.list.render(frame, chunks[0], &self.theme);
        self.render_status_bar(frame, chunks[1]);

        if self.show_help {
            self.render_help_overlay(frame);
        }
    }

    /// Render the status bar
    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let status_text = match &self.status_message {
            Some(message) => message.clone(),
            None => "Press ? for help | q to quit".to_string(),
        };

        let status_paragraph = Paragraph::new(status_text).style(self.theme.status_bar_style());

        frame.render_widget(status_paragraph, area);
    }

    /// Render help overlay
    fn render_help_overlay(&self, frame: &mut Frame) {
        let help_area = centered_rect(60, 60, frame.size());

        let help_block = Block::default()
            .borders(Borders::ALL)
            .title("Help")
            .style(self.theme.help_style());

        let help_paragraph = Paragraph::new(self.key_map.help_text())
            .block(help_block)
            .style(self.theme.base_style());

        frame.render_widget(Clear, help_area);
        frame.render_widget(help_paragraph, help_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};

    fn app(count: usize) -> App {
        let items = (1..=count).map(|i| format!("Item {}", i)).collect();
        App::new(&Config::default(), items)
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[tokio::test]
    async fn test_navigation_updates_status() {
        let mut app = app(95);
        assert!(!app.handle_event(key(KeyCode::Right)).await.unwrap());
        assert_eq!(app.list.controller().current_page(), 1);
        assert_eq!(app.status_message.as_deref(), Some("Moved to page 2"));

        app.handle_event(key(KeyCode::Char('s'))).await.unwrap();
        assert_eq!(
            app.status_message.as_deref(),
            Some("Showing 20 items per page (5 pages)")
        );
        assert_eq!(app.list.controller().current_page(), 1);
    }

    #[tokio::test]
    async fn test_status_message_expires_on_tick() {
        let mut app = app(95);
        app.handle_event(key(KeyCode::Right)).await.unwrap();

        app.handle_event(Event::Tick).await.unwrap();
        assert_eq!(app.status_message.as_deref(), Some("Moved to page 2"));

        app.status_timeout = Duration::ZERO;
        app.handle_event(Event::Tick).await.unwrap();
        assert_eq!(app.status_message, None);

        app.handle_event(Event::StatusMessage("Saved".to_string()))
            .await
            .unwrap();
        assert_eq!(app.status_message.as_deref(), Some("Saved"));
        app.handle_event(Event::Tick).await.unwrap();
        assert_eq!(app.status_message, None);
    }

    #[tokio::test]
    async fn test_quit_and_help() {
        let mut app = app(5);
        app.handle_event(key(KeyCode::Char('?'))).await.unwrap();
        assert!(app.show_help);

        assert!(app.handle_event(key(KeyCode::Char('q'))).await.unwrap());
        assert!(app.should_quit);
    }

    #[test]
    fn test_render_with_help_overlay() {
        let mut app = app(30);
        app.show_help = true;

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
        assert_eq!(app.size, Rect::new(0, 0, 80, 24));
        assert_eq!(app.list.size().height, 23);
    }
}
