//! Component contracts for the TUI
//!
//! - [`Interactive`] - Components that handle keyboard input

mod interactive;

pub use interactive::{Handled, Interactive};
