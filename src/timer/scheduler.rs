//! Tick scheduling

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::AbortHandle;

use super::events::TimerEvent;

/// How the controller asks for its next countdown step.
///
/// The production implementation defers to the tokio runtime; tests drive
/// a hand-rolled implementation to advance virtual time deterministically.
pub trait TickScheduler {
    /// Opaque identifier for one scheduled tick, used only to cancel it
    type Handle;

    /// Deliver a `Tick { generation }` event after the given delay
    fn schedule_tick(&mut self, delay: Duration, generation: u64) -> Self::Handle;

    /// Cancel a scheduled tick that has not fired yet
    fn cancel_tick(&mut self, handle: Self::Handle);
}

/// Scheduler that sleeps on the tokio runtime and sends the tick back
/// into the event channel
pub struct TokioTickScheduler {
    events: UnboundedSender<TimerEvent>,
}

impl TokioTickScheduler {
    /// Create a scheduler delivering ticks into the given channel
    pub fn new(events: UnboundedSender<TimerEvent>) -> Self {
        Self { events }
    }
}

impl TickScheduler for TokioTickScheduler {
    type Handle = AbortHandle;

    fn schedule_tick(&mut self, delay: Duration, generation: u64) -> AbortHandle {
        let events = self.events.clone();
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // The receiver only closes on shutdown, so a failed send is fine
            let _ = events.send(TimerEvent::Tick { generation });
        });
        task.abort_handle()
    }

    fn cancel_tick(&mut self, handle: AbortHandle) {
        handle.abort();
    }
}
