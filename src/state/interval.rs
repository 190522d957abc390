//! Interval classification

use crate::config::IntervalConfig;

/// The three interval types of the work/break cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalKind {
    Work,
    ShortBreak,
    LongBreak,
}

impl IntervalKind {
    /// Classify the interval for a 1-based repetition count.
    ///
    /// Every even repetition is a break, and every eighth repetition the
    /// break is a long one. The type is always derived from the count,
    /// never stored.
    pub fn for_repetition(repetition: u32) -> Self {
        if repetition % 8 == 0 {
            IntervalKind::LongBreak
        } else if repetition % 2 == 0 {
            IntervalKind::ShortBreak
        } else {
            IntervalKind::Work
        }
    }

    /// Interval length in seconds under the given configuration
    pub fn duration_secs(&self, intervals: &IntervalConfig) -> u64 {
        let minutes = match self {
            IntervalKind::Work => intervals.work_min,
            IntervalKind::ShortBreak => intervals.short_break_min,
            IntervalKind::LongBreak => intervals.long_break_min,
        };
        minutes * 60
    }

    /// Title shown on the display surface while this interval runs
    pub fn title(&self) -> &'static str {
        match self {
            IntervalKind::Work => "Work",
            IntervalKind::ShortBreak => "Break",
            IntervalKind::LongBreak => "Long Break",
        }
    }
}
