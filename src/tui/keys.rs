use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Actions reachable from the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Help,
    FirstPage,
    PreviousPage,
    NextPage,
    LastPage,
    LargerPageSize,
    SmallerPageSize,
    ScrollUp,
    ScrollDown,
}

/// Key binding configuration
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub keys: Vec<KeyCode>,
    pub modifiers: KeyModifiers,
    pub description: String,
}

impl KeyBinding {
    pub fn new(keys: &[KeyCode], modifiers: KeyModifiers, description: &str) -> Self {
        Self {
            keys: keys.to_vec(),
            modifiers,
            description: description.to_string(),
        }
    }

    /// Shift is folded into the character itself (`G` vs `g`), so it is not compared
    pub fn matches(&self, event: &KeyEvent) -> bool {
        self.keys.contains(&event.code)
            && event.modifiers.difference(KeyModifiers::SHIFT) == self.modifiers
    }
}

/// Application key mappings
#[derive(Debug, Clone)]
pub struct KeyMap {
    bindings: Vec<(KeyAction, KeyBinding)>,
}

impl Default for KeyMap {
    fn default() -> Self {
        use crossterm::event::KeyCode::{Char, Down, End, Home, Left, Right, Up};
        let none = KeyModifiers::NONE;

        Self {
            bindings: vec![
                (
                    KeyAction::Quit,
                    KeyBinding::new(&[Char('c')], KeyModifiers::CONTROL, "Ctrl+C  quit"),
                ),
                (KeyAction::Quit, KeyBinding::new(&[Char('q')], none, "q       quit")),
                (
                    KeyAction::Help,
                    KeyBinding::new(&[Char('?')], none, "?       show/hide help"),
                ),
                (
                    KeyAction::FirstPage,
                    KeyBinding::new(&[Home, Char('g')], none, "Home/g  first page"),
                ),
                (
                    KeyAction::PreviousPage,
                    KeyBinding::new(&[Left, Char('h')], none, "Left/h  previous page"),
                ),
                (
                    KeyAction::NextPage,
                    KeyBinding::new(&[Right, Char('l')], none, "Right/l next page"),
                ),
                (
                    KeyAction::LastPage,
                    KeyBinding::new(&[End, Char('G')], none, "End/G   last page"),
                ),
                (
                    KeyAction::LargerPageSize,
                    KeyBinding::new(&[Char('s')], none, "s       larger page size"),
                ),
                (
                    KeyAction::SmallerPageSize,
                    KeyBinding::new(&[Char('S')], none, "S       smaller page size"),
                ),
                (
                    KeyAction::ScrollUp,
                    KeyBinding::new(&[Up, Char('k')], none, "Up/k    scroll up"),
                ),
                (
                    KeyAction::ScrollDown,
                    KeyBinding::new(&[Down, Char('j')], none, "Down/j  scroll down"),
                ),
            ],
        }
    }
}

impl KeyMap {
    /// Resolve a key event to an action
    pub fn action(&self, event: &KeyEvent) -> Option<KeyAction> {
        self.bindings
            .iter()
            .find(|(_, binding)| binding.matches(event))
            .map(|(action, _)| *action)
    }

    /// Check if the event should quit the application
    pub fn should_quit(&self, event: &KeyEvent) -> bool {
        self.action(event) == Some(KeyAction::Quit)
    }

    /// Check if the event should show help
    pub fn should_show_help(&self, event: &KeyEvent) -> bool {
        self.action(event) == Some(KeyAction::Help)
    }

    /// Get help text for all key bindings
    pub fn help_text(&self) -> String {
        self.bindings
            .iter()
            .map(|(_, binding)| binding.description.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
