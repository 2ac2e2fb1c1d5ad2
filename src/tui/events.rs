use crossterm::event::{Event as CrosstermEvent, KeyEvent, MouseEvent};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::timeout;
use anyhow::Result;

/// Application events
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Keyboard input event
    Key(KeyEvent),

    /// Mouse input event
    Mouse(MouseEvent),

    /// Terminal resize event
    Resize(u16, u16),

    /// Periodic tick event
    Tick,

    /// Status message event
    StatusMessage(String),
}

impl Event {
    /// Convert crossterm events to application events
    pub fn from_crossterm(event: CrosstermEvent) -> Option<Self> {
        match event {
            CrosstermEvent::Key(key_event) => Some(Event::Key(key_event)),
            CrosstermEvent::Mouse(mouse_event) => Some(Event::Mouse(mouse_event)),
            CrosstermEvent::Resize(width, height) => Some(Event::Resize(width, height)),
            CrosstermEvent::FocusGained | CrosstermEvent::FocusLost | CrosstermEvent::Paste(_) => {
                None
            }
        }
    }
}

/// Event handler for managing input events
pub struct EventHandler {
    /// Event receiver channel
    receiver: mpsc::UnboundedReceiver<Event>,

    /// Event sender channel
    sender: mpsc::UnboundedSender<Event>,

    /// How long to wait for terminal input before emitting a tick
    poll_interval: Duration,
}

impl EventHandler {
    /// Create a new event handler
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();

        Self {
            receiver,
            sender,
            poll_interval: Duration::from_millis(100),
        }
    }

    /// Get the next event
    pub async fn next(&mut self) -> Option<Event> {
        // Internal events first so status updates are not starved by input
        if let Ok(event) = self.receiver.try_recv() {
            return Some(event);
        }

        let poll_interval = self.poll_interval;
        let polled = timeout(
            poll_interval * 2,
            tokio::task::spawn_blocking(move || -> std::io::Result<Option<CrosstermEvent>> {
                if crossterm::event::poll(poll_interval)? {
                    crossterm::event::read().map(Some)
                } else {
                    Ok(None)
                }
            }),
        )
        .await;

        if let Ok(Ok(Ok(Some(crossterm_event)))) = polled {
            if let Some(event) = Event::from_crossterm(crossterm_event) {
                return Some(event);
            }
        }

        // Return tick event if no other events
        Some(Event::Tick)
    }

    /// Send an internal event
    pub fn send(&self, event: Event) -> Result<()> {
        self.sender.send(event)?;
        Ok(())
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
