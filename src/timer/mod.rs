//! Countdown timer module
//!
//! This module contains the timer state machine, the event vocabulary of
//! the main loop, and the tick scheduling boundary.

pub mod controller;
pub mod events;
pub mod scheduler;

// Re-export main types
pub use controller::{format_clock, TimerController};
pub use events::TimerEvent;
pub use scheduler::{TickScheduler, TokioTickScheduler};
