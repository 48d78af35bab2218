//! Elapsed-time units and their seconds/hundredths split.

use std::fmt;

use serde::Deserialize;

/// Number of ticks (hundredths of a second) in one second.
pub const CENTIS_PER_SECOND: u64 = 100;

/// Elapsed time measured in hundredths of a second.
///
/// One tick of the clock driver is exactly one `Centis`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Centis(u64);

impl Centis {
    pub const ZERO: Self = Self(0);

    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    #[must_use]
    pub const fn seconds(self) -> u64 {
        self.0 / CENTIS_PER_SECOND
    }

    #[must_use]
    pub const fn hundredths(self) -> u8 {
        (self.0 % CENTIS_PER_SECOND) as u8
    }

    #[must_use]
    pub const fn split(self) -> SplitTime {
        SplitTime {
            seconds: self.seconds(),
            hundredths: self.hundredths(),
        }
    }

    /// Advance by `ticks`, saturating at `u64::MAX`.
    #[must_use]
    pub const fn advanced(self, ticks: u64) -> Self {
        Self(self.0.saturating_add(ticks))
    }
}

/// How the hundredths part is rendered after the decimal point.
///
/// ```toml
/// [display]
/// hundredths = "padded"
/// ```
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HundredthsStyle {
    /// Bare integer: 305 centis renders as `3.5`.
    #[default]
    Unpadded,
    /// Two digits: 305 centis renders as `3.05`.
    Padded,
}

impl HundredthsStyle {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unpadded => "unpadded",
            Self::Padded => "padded",
        }
    }
}

/// Elapsed time split into whole seconds and the hundredths remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SplitTime {
    pub seconds: u64,
    pub hundredths: u8,
}

impl SplitTime {
    #[must_use]
    pub fn hundredths_text(self, style: HundredthsStyle) -> String {
        match style {
            HundredthsStyle::Unpadded => self.hundredths.to_string(),
            HundredthsStyle::Padded => format!("{:02}", self.hundredths),
        }
    }

    #[must_use]
    pub fn render(self, style: HundredthsStyle) -> String {
        format!("{}.{}", self.seconds, self.hundredths_text(style))
    }
}

impl fmt::Display for SplitTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(HundredthsStyle::Unpadded))
    }
}
