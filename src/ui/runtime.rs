use anyhow::Context;
use std::time::Duration;

use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// App tick interval. Banner countdowns are measured in these.
pub const TICK_MS: u64 = 250;

pub fn run(app: &mut App) -> anyhow::Result<()> {
    let (mut terminal, guard) = setup_terminal().context("failed to set up the terminal")?;
    let tick_rate = Duration::from_millis(TICK_MS);
    let events = EventHandler::new(tick_rate);

    loop {
        terminal
            .draw(|frame| draw(frame, app))
            .context("failed to draw a frame")?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            // ratatui re-measures the terminal on the next draw.
            Ok(AppEvent::Resize(_, _)) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
