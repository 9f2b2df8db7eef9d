//! Terminal state management and cleanup.
//!
//! Responsibilities:
//! - Enter raw mode and the alternate screen, optionally capturing the mouse.
//! - Restore the terminal on drop, including during panics.
//!
//! Invariants:
//! - Drop implementation must not panic.

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};

/// Guard that owns the raw-mode terminal session.
pub struct TerminalGuard {
    no_mouse: bool,
}

impl TerminalGuard {
    /// Switch the terminal into TUI mode and return a guard that undoes it.
    pub fn enter(no_mouse: bool) -> std::io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = std::io::stdout();
        if no_mouse {
            execute!(stdout, EnterAlternateScreen)?;
        } else {
            execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        }
        Ok(Self { no_mouse })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Errors are ignored: we may be unwinding.
        let _ = disable_raw_mode();
        let mut stdout = std::io::stdout();
        if self.no_mouse {
            let _ = execute!(stdout, LeaveAlternateScreen);
        } else {
            let _ = execute!(stdout, LeaveAlternateScreen, DisableMouseCapture);
        }
    }
}
