//! Timer session state

use chrono::{DateTime, Local};

/// Countdown state for one run of the program.
///
/// `remaining_seconds` is `Some` only while a countdown is active; the
/// interval type itself is never stored here, it is derived from
/// `repetitions` when an interval starts.
#[derive(Debug, Clone)]
pub struct TimerSession {
    /// Intervals started since the last reset
    pub repetitions: u32,
    /// True while a countdown (work or break) is active
    pub running: bool,
    /// Seconds left in the current interval
    pub remaining_seconds: Option<u64>,
    started_at: DateTime<Local>,
}

impl TimerSession {
    /// Create an idle session with no completed intervals
    pub fn new() -> Self {
        Self {
            repetitions: 0,
            running: false,
            remaining_seconds: None,
            started_at: Local::now(),
        }
    }

    /// Check if a countdown is active
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Seconds left in the current interval, if one is active
    pub fn remaining_seconds(&self) -> Option<u64> {
        if self.running {
            self.remaining_seconds
        } else {
            None
        }
    }

    /// Enter the next interval with its full duration on the clock
    pub fn begin_interval(&mut self, duration_secs: u64) {
        self.repetitions += 1;
        self.running = true;
        self.remaining_seconds = Some(duration_secs);
    }

    /// Take one second off the active countdown, returning the new remainder
    pub fn tick_down(&mut self) -> Option<u64> {
        let remaining = self.remaining_seconds?.saturating_sub(1);
        self.remaining_seconds = Some(remaining);
        Some(remaining)
    }

    /// Leave the running state once the countdown reaches zero
    pub fn finish_interval(&mut self) {
        self.running = false;
        self.remaining_seconds = None;
    }

    /// Return to the idle state and forget all completed intervals
    pub fn reset(&mut self) {
        self.repetitions = 0;
        self.running = false;
        self.remaining_seconds = None;
    }

    /// Work sessions completed so far; every other interval is work
    pub fn completed_work_sessions(&self) -> u32 {
        self.repetitions / 2
    }

    /// Wall-clock duration of this session as a formatted string
    pub fn session_duration(&self) -> String {
        let seconds = (Local::now() - self.started_at).num_seconds().max(0) as u64;
        let hours = seconds / 3600;
        let minutes = (seconds % 3600) / 60;
        let secs = seconds % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, secs)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, secs)
        } else {
            format!("{}s", secs)
        }
    }
}

impl Default for TimerSession {
    fn default() -> Self {
        Self::new()
    }
}
