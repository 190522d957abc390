//! Tomato Timer - a terminal Pomodoro countdown timer
//!
//! This is the main entry point for the tomato-timer application.

use tokio::sync::mpsc;
use tracing::info;

use tomato_timer::{
    config::{Config, IntervalConfig},
    surface::{read_key_events, TerminalSurface},
    timer::{TimerController, TimerEvent, TokioTickScheduler},
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr so they can be redirected away from the display
    tracing_subscriber::fmt()
        .with_env_filter(format!("tomato_timer={}", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    let intervals = IntervalConfig::default();
    intervals.validate()?;

    info!("Starting tomato-timer v1.0.0");
    info!(
        "Intervals: work={}min, short break={}min, long break={}min",
        intervals.work_min, intervals.short_break_min, intervals.long_break_min
    );

    let (events_tx, mut events_rx) = mpsc::unbounded_channel();

    let surface = TerminalSurface::new()?;
    let scheduler = TokioTickScheduler::new(events_tx.clone());
    let mut controller = TimerController::new(intervals, scheduler, surface);

    // Key input runs as its own task and only ever sends events; the
    // controller is touched exclusively from the loop below
    tokio::spawn(read_key_events(events_tx));

    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            maybe_event = events_rx.recv() => match maybe_event {
                Some(TimerEvent::Quit) | None => {
                    info!("Quit requested");
                    break;
                }
                Some(event) => controller.handle_event(event),
            },
            _ = &mut shutdown => break,
        }
    }

    // Dropping the surface restores the terminal before the summary prints
    let session = controller.finish();
    info!(
        "Session over after {}, {} work sessions completed",
        session.session_duration(),
        session.completed_work_sessions()
    );

    Ok(())
}
