//! Console spinner shown while an article downloads. Purely cosmetic.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::cursor::MoveToColumn;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use rand::seq::IndexedRandom;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinnerStyle {
    Dots,
    Line,
    Moon,
    Earth,
    BouncingBall,
    Weather,
}

impl SpinnerStyle {
    pub const ALL: [SpinnerStyle; 6] = [
        SpinnerStyle::Dots,
        SpinnerStyle::Line,
        SpinnerStyle::Moon,
        SpinnerStyle::Earth,
        SpinnerStyle::BouncingBall,
        SpinnerStyle::Weather,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "dots" => Some(SpinnerStyle::Dots),
            "line" => Some(SpinnerStyle::Line),
            "moon" => Some(SpinnerStyle::Moon),
            "earth" => Some(SpinnerStyle::Earth),
            "bouncingBall" => Some(SpinnerStyle::BouncingBall),
            "weather" => Some(SpinnerStyle::Weather),
            _ => None,
        }
    }

    /// Resolves a config value: a named style, or `random` (also the
    /// fallback for unknown names) for a per-session pick.
    pub fn pick(name: &str) -> Self {
        if name != "random" {
            if let Some(style) = Self::from_name(name) {
                return style;
            }
            tracing::debug!(name, "unknown spinner style, picking at random");
        }
        Self::ALL
            .choose(&mut rand::rng())
            .copied()
            .unwrap_or(SpinnerStyle::Dots)
    }

    fn frames(self) -> &'static [&'static str] {
        match self {
            SpinnerStyle::Dots => &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"],
            SpinnerStyle::Line => &["-", "\\", "|", "/"],
            SpinnerStyle::Moon => &["🌑", "🌒", "🌓", "🌔", "🌕", "🌖", "🌗", "🌘"],
            SpinnerStyle::Earth => &["🌍", "🌎", "🌏"],
            SpinnerStyle::BouncingBall => &[
                "( ●    )",
                "(  ●   )",
                "(   ●  )",
                "(    ● )",
                "(     ●)",
                "(    ● )",
                "(   ●  )",
                "(  ●   )",
                "( ●    )",
                "(●     )",
            ],
            SpinnerStyle::Weather => &[
                "☀️", "☀️", "🌤", "⛅", "🌥", "☁️", "🌧", "⛈", "🌧", "☁️", "🌥", "⛅", "🌤",
            ],
        }
    }

    fn interval(self) -> Duration {
        match self {
            SpinnerStyle::Line => Duration::from_millis(130),
            SpinnerStyle::Earth => Duration::from_millis(180),
            SpinnerStyle::Weather => Duration::from_millis(100),
            _ => Duration::from_millis(80),
        }
    }
}

/// A running spinner. Repaints one stderr line from a background task
/// until [`Spinner::finish`] clears it.
pub struct Spinner {
    task: JoinHandle<()>,
}

impl Spinner {
    pub fn start(style: SpinnerStyle, message: &str) -> Self {
        let message = message.to_string();
        let frames = style.frames();
        let interval = style.interval();

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            let mut frame = 0usize;
            loop {
                ticker.tick().await;
                eprint!("\r{} {}", frames[frame % frames.len()], message);
                let _ = io::stderr().flush();
                frame += 1;
            }
        });

        Self { task }
    }

    pub async fn finish(self) {
        self.task.abort();
        let _ = self.task.await;
        let _ = execute!(io::stderr(), MoveToColumn(0), Clear(ClearType::CurrentLine));
    }
}
