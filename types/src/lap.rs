use std::fmt;

use crate::time::{HundredthsStyle, SplitTime};

/// A recorded lap: its 1-based number and the elapsed time when it was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LapRecord {
    pub number: u32,
    pub time: SplitTime,
}

impl LapRecord {
    #[must_use]
    pub const fn new(number: u32, time: SplitTime) -> Self {
        Self { number, time }
    }

    /// Renders as `"<number> LAP : <seconds>.<hundredths>"`.
    #[must_use]
    pub fn label(&self, style: HundredthsStyle) -> String {
        format!("{} LAP : {}", self.number, self.time.render(style))
    }
}

impl fmt::Display for LapRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label(HundredthsStyle::Unpadded))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Centis;

    #[test]
    fn display_matches_lap_format() {
        let lap = LapRecord::new(1, Centis::new(123).split());
        assert_eq!(lap.to_string(), "1 LAP : 1.23");
    }

    #[test]
    fn label_honours_style() {
        let lap = LapRecord::new(12, Centis::new(1004).split());
        assert_eq!(lap.label(HundredthsStyle::Unpadded), "12 LAP : 10.4");
        assert_eq!(lap.label(HundredthsStyle::Padded), "12 LAP : 10.04");
    }
}
