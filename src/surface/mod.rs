//! Display surface boundary
//!
//! This module defines the contract between the timer core and whatever
//! renders it, plus the crossterm terminal implementation and its key
//! input task.

pub mod input;
pub mod terminal;

use crate::state::IntervalKind;

// Re-export main types
pub use input::read_key_events;
pub use terminal::TerminalSurface;

/// Color tag attached to title updates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleColor {
    Work,
    Break,
    LongBreak,
    Neutral,
}

impl From<IntervalKind> for TitleColor {
    fn from(kind: IntervalKind) -> Self {
        match kind {
            IntervalKind::Work => TitleColor::Work,
            IntervalKind::ShortBreak => TitleColor::Break,
            IntervalKind::LongBreak => TitleColor::LongBreak,
        }
    }
}

/// Passive sink for everything the timer wants shown.
///
/// Implementations are called on every countdown step and must never fail
/// into the core; render problems are theirs to log and swallow.
pub trait DisplaySurface {
    /// Update the interval title and its color
    fn show_title(&mut self, text: &str, color: TitleColor);

    /// Update the `MM:SS` clock text
    fn show_time(&mut self, text: &str);

    /// Update the completed-session checkmark row
    fn show_checkmarks(&mut self, text: &str);
}
