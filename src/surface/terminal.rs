//! Terminal rendering via crossterm

use std::fs;
use std::io::{self, Stdout, Write};

use anyhow::Context;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use tracing::warn;

use super::{DisplaySurface, TitleColor};

/// Decorative banner drawn above the clock; a missing file is non-fatal
const BANNER_PATH: &str = "assets/tomato.txt";

// Tomato palette
const GREEN: Color = Color::Rgb { r: 0x9b, g: 0xde, b: 0xac };
const PINK: Color = Color::Rgb { r: 0xe2, g: 0x97, b: 0x9c };
const RED: Color = Color::Rgb { r: 0xe7, g: 0x30, b: 0x5b };

/// Crossterm-backed display surface.
///
/// Caches the current title/time/checkmark texts and redraws the whole
/// frame on any change. Raw mode and the alternate screen are entered on
/// construction and restored on drop.
pub struct TerminalSurface {
    stdout: Stdout,
    banner: Vec<String>,
    title: String,
    title_color: TitleColor,
    time: String,
    checkmarks: String,
}

impl TerminalSurface {
    /// Enter raw mode and draw the idle frame
    pub fn new() -> anyhow::Result<Self> {
        terminal::enable_raw_mode().context("failed to enable raw terminal mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, Hide)
            .context("failed to enter the alternate screen")?;

        let banner = match fs::read_to_string(BANNER_PATH) {
            Ok(art) => art.lines().map(str::to_owned).collect(),
            Err(e) => {
                warn!("{} not found, running without the banner: {}", BANNER_PATH, e);
                Vec::new()
            }
        };

        let mut surface = Self {
            stdout,
            banner,
            title: "Timer".to_string(),
            title_color: TitleColor::Neutral,
            time: "00:00".to_string(),
            checkmarks: String::new(),
        };
        surface.redraw();
        Ok(surface)
    }

    fn redraw(&mut self) {
        if let Err(e) = self.draw_frame() {
            warn!("Failed to redraw display: {}", e);
        }
    }

    fn draw_frame(&mut self) -> io::Result<()> {
        queue!(self.stdout, Clear(ClearType::All))?;

        let mut row = 0u16;
        for line in &self.banner {
            queue!(
                self.stdout,
                MoveTo(0, row),
                SetForegroundColor(RED),
                Print(line),
                ResetColor
            )?;
            row += 1;
        }
        row += 1;

        queue!(
            self.stdout,
            MoveTo(0, row),
            SetForegroundColor(terminal_color(self.title_color)),
            Print(&self.title),
            ResetColor
        )?;
        queue!(self.stdout, MoveTo(0, row + 2), Print(&self.time))?;
        queue!(
            self.stdout,
            MoveTo(0, row + 4),
            SetForegroundColor(GREEN),
            Print(&self.checkmarks),
            ResetColor
        )?;
        queue!(
            self.stdout,
            MoveTo(0, row + 6),
            SetForegroundColor(Color::DarkGrey),
            Print("[s] start  [r] reset  [q] quit"),
            ResetColor
        )?;

        self.stdout.flush()
    }
}

fn terminal_color(color: TitleColor) -> Color {
    match color {
        TitleColor::Work | TitleColor::Neutral => GREEN,
        TitleColor::Break => PINK,
        TitleColor::LongBreak => RED,
    }
}

impl DisplaySurface for TerminalSurface {
    fn show_title(&mut self, text: &str, color: TitleColor) {
        self.title = text.to_string();
        self.title_color = color;
        self.redraw();
    }

    fn show_time(&mut self, text: &str) {
        self.time = text.to_string();
        self.redraw();
    }

    fn show_checkmarks(&mut self, text: &str) {
        self.checkmarks = text.to_string();
        self.redraw();
    }
}

impl Drop for TerminalSurface {
    fn drop(&mut self) {
        let _ = execute!(self.stdout, Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
