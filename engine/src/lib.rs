//! Core engine for Lapwatch - stopwatch state holder, clock driver and app state.
//!
//! This crate contains the App state machine without TUI dependencies.

mod clock;
mod config;
mod stopwatch;

pub use clock::{TICK_PERIOD, TickSource};
pub use config::{AppConfig, ConfigError, DisplayConfig, LapwatchConfig, config_path};
pub use stopwatch::Stopwatch;

pub use lapwatch_types::{
    Centis, HundredthsStyle, LapRecord, SplitTime, StopwatchState, UiOptions,
};

use tokio::sync::watch;
use tracing::debug;

/// Presentation state owned by the app but not part of the stopwatch.
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewState {
    /// Index of the first visible lap (0 = newest).
    pub lap_scroll: usize,
    /// Largest scroll offset the lap viewport can show, reported by the
    /// renderer. `None` until the first frame is drawn.
    pub lap_scroll_max: Option<usize>,
    pub ui_options: UiOptions,
    pub hundredths: HundredthsStyle,
}

/// Application state: the stopwatch plus view state and the quit flag.
#[derive(Debug, Default)]
pub struct App {
    stopwatch: Stopwatch,
    view: ViewState,
    should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(config: Option<&LapwatchConfig>) -> Self {
        let view = ViewState {
            lap_scroll: 0,
            lap_scroll_max: None,
            ui_options: config.map(LapwatchConfig::ui_options).unwrap_or_default(),
            hundredths: config
                .map(LapwatchConfig::hundredths_style)
                .unwrap_or_default(),
        };
        debug!(
            hundredths = view.hundredths.as_str(),
            ascii_only = view.ui_options.ascii_only,
            high_contrast = view.ui_options.high_contrast,
            "App configured"
        );
        Self {
            stopwatch: Stopwatch::new(),
            view,
            should_quit: false,
        }
    }

    /// Advance per-frame state. Applies pending clock ticks.
    pub fn tick(&mut self) {
        self.stopwatch.process_ticks();
    }

    #[must_use]
    pub fn stopwatch(&self) -> &Stopwatch {
        &self.stopwatch
    }

    #[must_use]
    pub fn state(&self) -> watch::Ref<'_, StopwatchState> {
        self.stopwatch.state()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<StopwatchState> {
        self.stopwatch.subscribe()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.stopwatch.is_running()
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.view.ui_options
    }

    #[must_use]
    pub fn hundredths_style(&self) -> HundredthsStyle {
        self.view.hundredths
    }

    #[must_use]
    pub fn lap_scroll(&self) -> usize {
        self.view.lap_scroll
    }

    // ---- intents ----

    pub fn toggle(&mut self) {
        self.stopwatch.toggle();
    }

    pub fn reset(&mut self) {
        self.stopwatch.reset();
        self.view.lap_scroll = 0;
    }

    pub fn record_lap(&mut self) {
        self.stopwatch.record_lap_time();
        self.view.lap_scroll = 0;
    }

    pub fn scroll_laps_up(&mut self) {
        self.view.lap_scroll = self.view.lap_scroll.saturating_sub(1);
    }

    pub fn scroll_laps_down(&mut self) {
        self.view.lap_scroll = (self.view.lap_scroll + 1).min(self.lap_scroll_limit());
    }

    /// Record how far the lap list can scroll at the current viewport size.
    pub fn update_lap_scroll_max(&mut self, max: usize) {
        self.view.lap_scroll_max = Some(max);
        self.view.lap_scroll = self.view.lap_scroll.min(max);
    }

    fn lap_scroll_limit(&self) -> usize {
        let last = self.stopwatch.state().lap_count().saturating_sub(1);
        self.view.lap_scroll_max.map_or(last, |max| max.min(last))
    }

    pub fn scroll_laps_top(&mut self) {
        self.view.lap_scroll = 0;
    }

    pub fn request_quit(&mut self) {
        debug!("Quit requested");
        self.should_quit = true;
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
