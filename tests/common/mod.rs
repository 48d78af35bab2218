//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

use lapwatch_engine::{App, TICK_PERIOD};
use lapwatch_tui::{apply_event, draw};

pub const SCREEN_WIDTH: u16 = 60;
pub const SCREEN_HEIGHT: u16 = 20;

/// Simulate a key press and return whether the app wants to quit.
pub fn press(app: &mut App, code: KeyCode) -> bool {
    apply_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
}

/// Sleep (on a paused clock) until exactly `ticks` more ticks have fired,
/// assuming the previous sample was taken mid-period.
pub async fn advance_ticks(ticks: u32) {
    tokio::time::sleep(TICK_PERIOD * ticks).await;
}

/// Sleep half a period so later samples fall between tick boundaries.
pub async fn offset_half_period() {
    tokio::time::sleep(TICK_PERIOD / 2).await;
}

pub fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

pub fn render_screen(app: &mut App) -> String {
    render_screen_sized(app, SCREEN_WIDTH, SCREEN_HEIGHT)
}

pub fn render_screen_sized(app: &mut App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
    terminal.draw(|frame| draw(frame, app)).expect("draw");
    buffer_text(terminal.backend().buffer())
}
