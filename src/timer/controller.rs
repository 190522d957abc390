//! Countdown state machine

use std::time::Duration;

use tracing::{debug, info};

use crate::config::IntervalConfig;
use crate::state::{IntervalKind, TimerSession};
use crate::surface::{DisplaySurface, TitleColor};

use super::events::TimerEvent;
use super::scheduler::TickScheduler;

/// Title shown while no countdown is active
const NEUTRAL_TITLE: &str = "Timer";
/// One glyph per completed work session
const CHECK_MARK: &str = "✔";
/// Wall-clock delay between countdown steps
const TICK_DELAY: Duration = Duration::from_secs(1);

/// Format a second count as a two-digit `MM:SS` clock string
pub fn format_clock(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// The timer state machine.
///
/// Owns the session state and drives the work/break cycle: classify the
/// next interval, count it down one scheduled tick at a time, and push
/// every visible change to the display surface. All methods run on the
/// event-loop thread and nothing in here blocks; the one-second gaps live
/// in the scheduler.
pub struct TimerController<S: TickScheduler, D: DisplaySurface> {
    intervals: IntervalConfig,
    scheduler: S,
    surface: D,
    session: TimerSession,
    pending_tick: Option<S::Handle>,
    generation: u64,
}

impl<S: TickScheduler, D: DisplaySurface> TimerController<S, D> {
    /// Create an idle controller
    pub fn new(intervals: IntervalConfig, scheduler: S, surface: D) -> Self {
        Self {
            intervals,
            scheduler,
            surface,
            session: TimerSession::new(),
            pending_tick: None,
            generation: 0,
        }
    }

    /// Dispatch one event from the main loop
    pub fn handle_event(&mut self, event: TimerEvent) {
        match event {
            TimerEvent::StartPressed => self.start_timer(),
            TimerEvent::ResetPressed => self.reset_timer(),
            TimerEvent::Tick { generation } => self.tick(generation),
            // Quit is consumed by the event loop before dispatch
            TimerEvent::Quit => {}
        }
    }

    /// Begin the next interval, unless a countdown is already active
    pub fn start_timer(&mut self) {
        if self.session.is_running() {
            debug!("Start ignored - a countdown is already running");
            return;
        }

        self.generation += 1;
        // Classification uses the repetition count after the increment
        let next_repetition = self.session.repetitions + 1;
        let kind = IntervalKind::for_repetition(next_repetition);
        let duration = kind.duration_secs(&self.intervals);
        self.session.begin_interval(duration);

        info!(
            "Starting {} interval (repetition {}, {} seconds)",
            kind.title(),
            next_repetition,
            duration
        );

        self.surface.show_title(kind.title(), kind.into());
        self.surface.show_time(&format_clock(duration));
        self.pending_tick = Some(self.scheduler.schedule_tick(TICK_DELAY, self.generation));
    }

    /// Cancel any running countdown and return to the idle display
    pub fn reset_timer(&mut self) {
        if let Some(handle) = self.pending_tick.take() {
            self.scheduler.cancel_tick(handle);
        }
        // A tick already sitting in the event queue carries the old
        // generation and is discarded on arrival
        self.generation += 1;

        self.session.reset();
        self.surface.show_title(NEUTRAL_TITLE, TitleColor::Neutral);
        self.surface.show_time("00:00");
        self.surface.show_checkmarks("");
        info!("Timer reset");
    }

    fn tick(&mut self, generation: u64) {
        if generation != self.generation {
            debug!(
                "Discarding stale tick (generation {}, current {})",
                generation, self.generation
            );
            return;
        }
        self.pending_tick = None;

        let Some(remaining) = self.session.tick_down() else {
            return;
        };
        self.surface.show_time(&format_clock(remaining));

        if remaining > 0 {
            self.pending_tick = Some(self.scheduler.schedule_tick(TICK_DELAY, self.generation));
        } else {
            self.session.finish_interval();
            let marks = CHECK_MARK.repeat(self.session.completed_work_sessions() as usize);
            self.surface.show_checkmarks(&marks);
            info!(
                "Interval complete ({} work sessions so far)",
                self.session.completed_work_sessions()
            );
            // Chain straight into the next interval. This re-entry is one
            // level deep: the session is idle again, so start_timer cannot
            // recurse further.
            self.start_timer();
        }
    }

    /// Read-only view of the session state
    pub fn session(&self) -> &TimerSession {
        &self.session
    }

    /// Tear down the controller, handing back the final session state
    pub fn finish(self) -> TimerSession {
        self.session
    }
}
