/// Terminal setup and teardown - raw mode, alternate screen and mouse capture
use std::io::stdout;

use anyhow::Result;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use ratatui::DefaultTerminal;

/// Take over the terminal. Pair every call with [`restore`].
pub fn init() -> Result<DefaultTerminal> {
    let terminal = ratatui::try_init()?;
    if let Err(e) = crossterm::execute!(stdout(), EnableMouseCapture) {
        ratatui::restore();
        return Err(e.into());
    }
    Ok(terminal)
}

pub fn restore() {
    // Best effort: we are usually on the way out already.
    let _ = crossterm::execute!(stdout(), DisableMouseCapture);
    ratatui::restore();
}
