//! Events drained by the main select loop

/// Everything that can wake the timer up.
///
/// Button events arrive from the input layer, ticks from the scheduler.
/// `Quit` is consumed by the event loop itself and never reaches the
/// controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// Start button pressed
    StartPressed,
    /// Reset button pressed
    ResetPressed,
    /// One-second countdown step; the generation ties it to the countdown
    /// that scheduled it
    Tick { generation: u64 },
    /// Quit requested from the input layer
    Quit,
}
