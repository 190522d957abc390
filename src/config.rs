//! Configuration and CLI argument handling

use anyhow::bail;
use clap::Parser;

/// Default work interval length in minutes
pub const WORK_MIN: u64 = 25;
/// Default short break length in minutes
pub const SHORT_BREAK_MIN: u64 = 5;
/// Default long break length in minutes
pub const LONG_BREAK_MIN: u64 = 20;

/// CLI argument parsing structure
#[derive(Parser)]
#[command(name = "tomato-timer")]
#[command(about = "A state-machine driven Pomodoro countdown timer for the terminal")]
#[command(version = "1.0.0")]
pub struct Config {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

/// Interval lengths in minutes, fixed once the program starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalConfig {
    pub work_min: u64,
    pub short_break_min: u64,
    pub long_break_min: u64,
}

impl IntervalConfig {
    /// Reject non-positive interval lengths before the timer starts
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.work_min == 0 || self.short_break_min == 0 || self.long_break_min == 0 {
            bail!(
                "Interval lengths must be positive: work={}min, short break={}min, long break={}min",
                self.work_min,
                self.short_break_min,
                self.long_break_min
            );
        }
        Ok(())
    }
}

impl Default for IntervalConfig {
    fn default() -> Self {
        Self {
            work_min: WORK_MIN,
            short_break_min: SHORT_BREAK_MIN,
            long_break_min: LONG_BREAK_MIN,
        }
    }
}
