//! Keyboard input task

use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, warn};

use crate::timer::TimerEvent;

/// Forward key presses to the event loop until the stream or channel closes.
///
/// `s`/`Enter` start the timer, `r` resets it, `q`/`Esc` quit. Raw mode
/// swallows the usual SIGINT, so Ctrl-C arrives here as a key event and is
/// treated as quit too.
pub async fn read_key_events(events: UnboundedSender<TimerEvent>) {
    let mut stream = EventStream::new();

    while let Some(event) = stream.next().await {
        match event {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                let mapped = match key.code {
                    KeyCode::Char('s') | KeyCode::Enter => Some(TimerEvent::StartPressed),
                    KeyCode::Char('r') => Some(TimerEvent::ResetPressed),
                    KeyCode::Char('q') | KeyCode::Esc => Some(TimerEvent::Quit),
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        Some(TimerEvent::Quit)
                    }
                    _ => None,
                };

                if let Some(event) = mapped {
                    debug!("Key press mapped to {:?}", event);
                    if events.send(event).is_err() {
                        break;
                    }
                }
            }
            Ok(_) => {}
            Err(e) => {
                warn!("Failed to read terminal input: {}", e);
                break;
            }
        }
    }
}
