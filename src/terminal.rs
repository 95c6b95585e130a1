//! Terminal side effects: size query, cursor, console blanking, hooks.
//!
//! Everything here is best effort. A missing `setterm` or a failing hook
//! is logged and otherwise ignored; the cards still get drawn.

use std::io::{self, Write};
use std::process::{Command, Stdio};

use crossterm::{cursor, execute};

use crate::constants::{FALLBACK_COLUMNS, FALLBACK_LINES};
use crate::models::Grid;
use crate::ui::ansi::RESET;

/// Current terminal size, or 24×80 when it cannot be queried.
pub fn grid_size() -> Grid {
    let (columns, lines) = match crossterm::terminal::size() {
        Ok((columns, lines)) if columns > 0 && lines > 0 => (columns, lines),
        Ok(_) => (FALLBACK_COLUMNS, FALLBACK_LINES),
        Err(e) => {
            tracing::debug!(error = %e, "terminal size unavailable, using fallback");
            (FALLBACK_COLUMNS, FALLBACK_LINES)
        }
    };
    Grid::new(usize::from(lines), usize::from(columns))
}

/// Console blanking transitions driven through `setterm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Blanking {
    /// Wake the screen and keep it on while cards are showing.
    Wake,
    /// Blank now; nothing to show.
    Force,
    /// Hand blanking back to the console default on exit.
    Restore,
}

impl Blanking {
    /// `setterm` argument sets for this transition, run in order.
    fn setterm_args(self) -> &'static [&'static [&'static str]] {
        match self {
            Blanking::Wake => &[&["--blank=poke"], &["--blank", "0"]],
            Blanking::Force => &[&["--blank=force"]],
            Blanking::Restore => &[&["--blank", "1"], &["--blank=poke"]],
        }
    }
}

pub fn set_blanking(blanking: Blanking) {
    for args in blanking.setterm_args() {
        let status = Command::new("setterm")
            .args(["--term", "linux"])
            .args(*args)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .status();
        if let Err(e) = status {
            tracing::debug!(?args, error = %e, "setterm failed");
        }
    }
}

/// Run a configured shell-free hook such as `sudo /usr/local/bin/dim`.
pub fn run_hook(command: Option<&str>) {
    let Some(command) = command else {
        return;
    };
    let Some((program, args)) = split_command(command) else {
        return;
    };
    match Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .status()
    {
        Ok(status) if !status.success() => {
            tracing::warn!(%command, %status, "hook exited unsuccessfully");
        }
        Ok(_) => tracing::debug!(%command, "hook ran"),
        Err(e) => tracing::warn!(%command, error = %e, "hook could not be started"),
    }
}

/// Split a command line on whitespace into program and arguments.
fn split_command(command: &str) -> Option<(&str, Vec<&str>)> {
    let mut parts = command.split_whitespace();
    let program = parts.next()?;
    Some((program, parts.collect()))
}

pub fn hide_cursor() -> io::Result<()> {
    execute!(io::stdout(), cursor::Hide)
}

/// Show the cursor and drop any lingering style.
pub fn restore() -> io::Result<()> {
    let mut stdout = io::stdout();
    stdout.write_all(RESET.as_bytes())?;
    execute!(stdout, cursor::Show)
}

/// Write a composed frame and flush it in one go.
pub fn write_frame(frame: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(frame.as_bytes())?;
    stdout.flush()
}
