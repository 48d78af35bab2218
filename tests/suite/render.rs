//! Full-screen render checks against ratatui's test backend.

use crossterm::event::KeyCode;

use lapwatch_engine::{App, AppConfig, DisplayConfig, LapwatchConfig};
use lapwatch_tui::TITLE;
use lapwatch_types::HundredthsStyle;

use crate::common::{
    advance_ticks, offset_half_period, press, render_screen, render_screen_sized,
};

fn app_with(ascii_only: bool, high_contrast: bool, hundredths: HundredthsStyle) -> App {
    let config = LapwatchConfig {
        app: Some(AppConfig {
            ascii_only,
            high_contrast,
        }),
        display: Some(DisplayConfig { hundredths }),
    };
    App::new(Some(&config))
}

/// Run the stopwatch for `ticks` ticks, then pause.
async fn run_for(app: &mut App, ticks: u32) {
    press(app, KeyCode::Char(' '));
    offset_half_period().await;
    advance_ticks(ticks).await;
    press(app, KeyCode::Char(' '));
}

#[tokio::test(start_paused = true)]
async fn unpadded_hundredths_follow_the_seconds() {
    let mut app = app_with(false, false, HundredthsStyle::Unpadded);
    run_for(&mut app, 305).await;
    press(&mut app, KeyCode::Char('l'));

    let screen = render_screen(&mut app);
    assert!(screen.contains(TITLE));
    assert!(screen.contains(".5"));
    assert!(screen.contains("1 LAP : 3.5"));
}

#[tokio::test(start_paused = true)]
async fn padded_hundredths_use_two_digits() {
    let mut app = app_with(false, false, HundredthsStyle::Padded);
    run_for(&mut app, 305).await;
    press(&mut app, KeyCode::Char('l'));

    let screen = render_screen(&mut app);
    assert!(screen.contains(".05"));
    assert!(screen.contains("1 LAP : 3.05"));
}

#[tokio::test(start_paused = true)]
async fn narrow_screen_uses_plain_digits() {
    let mut app = app_with(false, false, HundredthsStyle::Padded);
    run_for(&mut app, 305).await;

    let screen = render_screen_sized(&mut app, 8, 20);
    assert!(screen.contains("3.05"));
}

#[tokio::test(start_paused = true)]
async fn ascii_mode_draws_block_digits_with_hashes() {
    let mut app = app_with(true, false, HundredthsStyle::Unpadded);
    run_for(&mut app, 800).await;

    // Top row of an 8 in the block font.
    let screen = render_screen(&mut app);
    assert!(screen.contains("######"));
    assert!(screen.contains("##  ##"));
}

#[tokio::test(start_paused = true)]
async fn toggle_label_tracks_running_state() {
    let mut app = App::new(None);
    assert!(render_screen(&mut app).contains("Start"));

    press(&mut app, KeyCode::Char(' '));
    assert!(render_screen(&mut app).contains("Pause"));

    press(&mut app, KeyCode::Char(' '));
    assert!(render_screen(&mut app).contains("Start"));
}

#[test]
fn high_contrast_renders_same_text() {
    let standard = render_screen(&mut app_with(false, false, HundredthsStyle::Unpadded));
    let contrast = render_screen(&mut app_with(false, true, HundredthsStyle::Unpadded));
    assert_eq!(standard, contrast);
}

#[test]
fn lap_list_shows_newest_at_top() {
    let mut app = App::new(None);
    for _ in 0..3 {
        press(&mut app, KeyCode::Char('l'));
    }
    let screen = render_screen(&mut app);
    let third = screen.find("3 LAP").expect("lap 3");
    let second = screen.find("2 LAP").expect("lap 2");
    let first = screen.find("1 LAP").expect("lap 1");
    assert!(third < second && second < first);
}

#[test]
fn down_does_nothing_when_every_lap_fits() {
    let mut app = App::new(None);
    for _ in 0..3 {
        press(&mut app, KeyCode::Char('l'));
    }
    let before = render_screen(&mut app);

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    assert_eq!(app.lap_scroll(), 0);
    assert_eq!(render_screen(&mut app), before);
}

#[test]
fn up_from_bottom_of_long_list_moves_immediately() {
    let mut app = App::new(None);
    for _ in 0..30 {
        press(&mut app, KeyCode::Char('l'));
    }
    render_screen(&mut app);

    for _ in 0..40 {
        press(&mut app, KeyCode::Down);
    }
    let bottom = render_screen(&mut app);
    assert!(bottom.contains("1 LAP"));
    assert!(!bottom.contains("6 LAP"));

    press(&mut app, KeyCode::Up);
    let scrolled = render_screen(&mut app);
    assert_ne!(scrolled, bottom);
    assert!(scrolled.contains("6 LAP"));
}
