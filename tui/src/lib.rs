//! TUI rendering for Lapwatch using ratatui.
//!
//! One screen, top to bottom: title bar, large digit display, lap list,
//! controls row, key-hint bar.

mod digits;
mod input;
mod theme;

pub use input::{InputPump, apply_event, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette, styles};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, BorderType, Borders, Padding, Paragraph, Scrollbar, ScrollbarOrientation,
        ScrollbarState,
    },
};
use unicode_width::UnicodeWidthStr;

use lapwatch_engine::App;
use lapwatch_types::{HundredthsStyle, StopwatchState};

use self::digits::DIGIT_ROWS;

pub const TITLE: &str = "StopWatch";

const TITLE_HEIGHT: u16 = 2;
const DISPLAY_HEIGHT: u16 = DIGIT_ROWS + 2;
const CONTROLS_HEIGHT: u16 = 3;
const HINTS_HEIGHT: u16 = 1;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &mut App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);
    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TITLE_HEIGHT),    // Title bar
            Constraint::Length(DISPLAY_HEIGHT),  // Digits
            Constraint::Min(3),                  // Laps
            Constraint::Length(CONTROLS_HEIGHT), // Buttons
            Constraint::Length(HINTS_HEIGHT),    // Key hints
        ])
        .split(frame.area());

    let state = app.state();
    draw_title_bar(frame, chunks[0], &palette);
    draw_digits(
        frame,
        chunks[1],
        &state,
        app.hundredths_style(),
        &palette,
        &glyphs,
    );
    let lap_scroll_max = draw_laps(
        frame,
        chunks[2],
        &state,
        app.lap_scroll(),
        app.hundredths_style(),
        &palette,
        &glyphs,
    );
    draw_controls(frame, chunks[3], state.is_running(), &palette, &glyphs);
    draw_key_hints(frame, chunks[4], &palette, &glyphs);
    drop(state);

    app.update_lap_scroll_max(lap_scroll_max);
}

fn draw_title_bar(frame: &mut Frame, area: Rect, palette: &Palette) {
    let title = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(TITLE, styles::title(palette)),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(palette.bg_border)),
    );
    frame.render_widget(title, area);
}

fn draw_digits(
    frame: &mut Frame,
    area: Rect,
    state: &StopwatchState,
    style: HundredthsStyle,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let split = state.split();
    let seconds = split.seconds.to_string();
    let hundredths = format!(".{}", split.hundredths_text(style));
    let digit_style = styles::digits(palette);
    let hundredths_style = Style::default()
        .fg(palette.text_secondary)
        .add_modifier(Modifier::BOLD);

    let big_width = digits::width(&seconds) as u16;
    let small_width = hundredths.width() as u16;
    let total_width = big_width + 1 + small_width;

    // Too small for the block font: plain text on the middle row.
    if area.height < DIGIT_ROWS || area.width < total_width {
        let line = Line::from(vec![
            Span::styled(seconds, digit_style),
            Span::styled(hundredths, hundredths_style),
        ]);
        let row = Rect {
            y: area.y + area.height / 2,
            height: area.height.min(1),
            ..area
        };
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), row);
        return;
    }

    let x = area.x + (area.width - total_width) / 2;
    let y = area.y + (area.height - DIGIT_ROWS) / 2;

    let rows: Vec<Line> = digits::render(&seconds, glyphs.block)
        .into_iter()
        .map(|row| Line::from(Span::styled(row, digit_style)))
        .collect();
    frame.render_widget(
        Paragraph::new(rows),
        Rect::new(x, y, big_width, DIGIT_ROWS),
    );

    // Hundredths sit on the baseline, after a one-cell gap.
    frame.render_widget(
        Paragraph::new(Span::styled(hundredths, hundredths_style)),
        Rect::new(x + big_width + 1, y + DIGIT_ROWS - 1, small_width, 1),
    );
}

fn draw_laps(
    frame: &mut Frame,
    area: Rect,
    state: &StopwatchState,
    scroll: usize,
    style: HundredthsStyle,
    palette: &Palette,
    glyphs: &Glyphs,
) -> usize {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.bg_border))
        .padding(Padding::horizontal(1))
        .title(Span::styled(" Laps ", Style::default().fg(palette.text_muted)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let total = state.lap_count();
    if total == 0 {
        let empty = Paragraph::new(Line::from(vec![
            Span::styled("Press ", styles::key_hint(palette)),
            Span::styled("l", styles::key_highlight(palette)),
            Span::styled(" to record a lap", styles::key_hint(palette)),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(empty, inner);
        return 0;
    }

    let visible = inner.height as usize;
    let max_scroll = total.saturating_sub(visible);
    let scroll = scroll.min(max_scroll);

    let lines: Vec<Line> = state
        .laps()
        .enumerate()
        .skip(scroll)
        .take(visible)
        .map(|(index, lap)| {
            let lap_style = if index == 0 {
                styles::lap_newest(palette)
            } else {
                styles::lap(palette)
            };
            Line::from(Span::styled(lap.label(style), lap_style))
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);

    // Only render scrollbar when content exceeds viewport
    if max_scroll > 0 {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some(glyphs.arrow_up))
            .end_symbol(Some(glyphs.arrow_down))
            .track_symbol(Some(glyphs.track))
            .thumb_symbol(glyphs.thumb)
            .style(Style::default().fg(palette.text_muted));

        let mut scrollbar_state = ScrollbarState::new(max_scroll).position(scroll);

        frame.render_stateful_widget(
            scrollbar,
            area.inner(Margin {
                vertical: 1,
                horizontal: 0,
            }),
            &mut scrollbar_state,
        );
    }

    max_scroll
}

fn draw_controls(
    frame: &mut Frame,
    area: Rect,
    running: bool,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let (toggle_icon, toggle_label) = if running {
        (glyphs.paused, "Pause")
    } else {
        (glyphs.running, "Start")
    };

    let buttons = [
        (glyphs.reset, "Reset", "r", palette.red),
        (toggle_icon, toggle_label, "space", palette.green),
        (glyphs.lap, "Lap", "l", palette.accent),
    ];

    for ((icon, label, key, color), column) in buttons.into_iter().zip(columns.iter()) {
        let button = Paragraph::new(Line::from(vec![
            Span::styled(
                format!("{icon} {label} "),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("[{key}]"), styles::key_hint(palette)),
        ]))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color))
                .style(Style::default().bg(palette.bg_panel)),
        );
        frame.render_widget(button, *column);
    }
}

fn draw_key_hints(frame: &mut Frame, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let key = styles::key_highlight(palette);
    let hint = styles::key_hint(palette);
    let sep = Span::styled(format!(" {} ", glyphs.separator), hint);

    let hints = Paragraph::new(Line::from(vec![
        Span::styled(format!("{}{}", glyphs.arrow_up, glyphs.arrow_down), key),
        Span::styled(" scroll laps", hint),
        sep.clone(),
        Span::styled("g", key),
        Span::styled(" newest", hint),
        sep,
        Span::styled("q", key),
        Span::styled(" quit", hint),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(hints, area);
}
