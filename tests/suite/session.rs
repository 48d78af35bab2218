//! End-to-end stopwatch sessions driven through key bindings.

use crossterm::event::KeyCode;

use lapwatch_engine::App;
use lapwatch_types::{Centis, HundredthsStyle};

use crate::common::{advance_ticks, offset_half_period, press};

fn elapsed(app: &App) -> u64 {
    app.state().elapsed().get()
}

#[tokio::test(start_paused = true)]
async fn start_lap_pause_reset() {
    let mut app = App::new(None);

    press(&mut app, KeyCode::Char(' '));
    assert!(app.is_running());
    offset_half_period().await;

    advance_ticks(123).await;
    app.tick();
    press(&mut app, KeyCode::Char('l'));

    advance_ticks(333).await;
    app.tick();
    press(&mut app, KeyCode::Char('l'));

    assert_eq!(
        app.state().lap_labels(HundredthsStyle::Unpadded),
        vec!["2 LAP : 4.56", "1 LAP : 1.23"]
    );
    assert!(app.is_running(), "laps must not stop the timer");

    press(&mut app, KeyCode::Char(' '));
    assert!(!app.is_running());
    assert_eq!(elapsed(&app), 456);

    advance_ticks(100).await;
    app.tick();
    assert_eq!(elapsed(&app), 456, "paused timer must not advance");

    press(&mut app, KeyCode::Char('r'));
    let state = app.state();
    assert_eq!(state.elapsed(), Centis::ZERO);
    assert!(!state.is_running());
    assert_eq!(state.lap_count(), 0);
    assert_eq!(state.next_lap_number(), 1);
}

#[tokio::test(start_paused = true)]
async fn pause_keeps_ticks_that_fired_before_it() {
    let mut app = App::new(None);
    press(&mut app, KeyCode::Char(' '));
    offset_half_period().await;
    advance_ticks(3).await;

    // No frame ran in between; pause still accounts for the fired ticks.
    press(&mut app, KeyCode::Char(' '));
    assert_eq!(elapsed(&app), 3);
}

#[tokio::test(start_paused = true)]
async fn reset_while_running_stops_the_clock() {
    let mut app = App::new(None);
    press(&mut app, KeyCode::Char(' '));
    offset_half_period().await;
    advance_ticks(10).await;
    app.tick();

    press(&mut app, KeyCode::Char('r'));
    assert!(!app.is_running());
    assert!(!app.stopwatch().has_tick_source());

    advance_ticks(10).await;
    app.tick();
    assert_eq!(elapsed(&app), 0);
}

#[tokio::test(start_paused = true)]
async fn restart_after_reset_counts_from_zero() {
    let mut app = App::new(None);
    press(&mut app, KeyCode::Char(' '));
    offset_half_period().await;
    advance_ticks(40).await;
    press(&mut app, KeyCode::Char('r'));

    press(&mut app, KeyCode::Char(' '));
    offset_half_period().await;
    advance_ticks(7).await;
    app.tick();
    assert_eq!(elapsed(&app), 7);
}

#[tokio::test(start_paused = true)]
async fn subscriber_observes_frames() {
    let mut app = App::new(None);
    let mut rx = app.subscribe();

    press(&mut app, KeyCode::Char(' '));
    offset_half_period().await;
    advance_ticks(2).await;
    app.tick();

    assert!(rx.has_changed().expect("stopwatch alive"));
    let seen = rx.borrow_and_update().clone();
    assert!(seen.is_running());
    assert_eq!(seen.elapsed().get(), 2);
}

#[test]
fn quit_key_requests_quit() {
    let mut app = App::new(None);
    assert!(!press(&mut app, KeyCode::Char('l')));
    assert!(press(&mut app, KeyCode::Char('q')));
    assert!(app.should_quit());
}
