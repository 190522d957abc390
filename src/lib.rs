//! Tomato Timer - a terminal Pomodoro countdown timer
//!
//! This library contains the timer state machine, the work/break cycle
//! logic, and the terminal display surface it renders through.

pub mod config;
pub mod state;
pub mod surface;
pub mod timer;
pub mod utils;

// Re-export commonly used types
pub use config::{Config, IntervalConfig};
pub use state::{IntervalKind, TimerSession};
pub use surface::{DisplaySurface, TerminalSurface, TitleColor};
pub use timer::{TimerController, TimerEvent, TokioTickScheduler};
pub use utils::signals::shutdown_signal;
