//! Interactive trait for components that handle keyboard input
//!
//! The App routes keys through its global handlers first; whatever is left
//! goes to the component that owns input at the moment.

use crossterm::event::KeyEvent;

/// Result of handling a key event
///
/// Tells the App whether the component consumed the event or
/// if it should bubble up for global handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// Event was consumed by the component
    Yes,
    /// Event was not handled, should bubble up
    No,
}

impl Handled {
    /// Check if the event was handled
    pub fn was_handled(self) -> bool {
        self == Self::Yes
    }
}

/// Trait for components that handle keyboard input
///
/// ```text
/// KeyEvent
///    │
///    ▼
/// App (global handlers: Enter, Esc, F2, F3)
///    │
///    │ if not handled
///    ▼
/// Component (via Interactive trait)
///    │
///    │ returns Handled::Yes or Handled::No
///    ▼
/// App (traced, then dropped)
/// ```
pub trait Interactive {
    /// Handle a key event
    ///
    /// Returns `Handled::Yes` if the component consumed the event,
    /// `Handled::No` if it should bubble up to the App.
    fn handle_key(&mut self, key: KeyEvent) -> Handled;

    /// Hint text for the status bar while this component has input
    fn focus_hint(&self) -> Option<&'static str> {
        None
    }
}
