//! Block font for the large seconds display.
//!
//! Each glyph is 3x5 font pixels; every pixel is drawn two cells wide so the
//! digits keep a roughly square aspect in a terminal.

use unicode_width::UnicodeWidthStr;

pub const DIGIT_ROWS: u16 = 5;

const PIXEL_WIDTH: usize = 2;
const GLYPH_PIXELS: usize = 3;
const GAP: usize = 1;

static FONT: [[&str; DIGIT_ROWS as usize]; 10] = [
    ["###", "# #", "# #", "# #", "###"],
    ["  #", "  #", "  #", "  #", "  #"],
    ["###", "  #", "###", "#  ", "###"],
    ["###", "  #", "###", "  #", "###"],
    ["# #", "# #", "###", "  #", "  #"],
    ["###", "#  ", "###", "  #", "###"],
    ["###", "#  ", "###", "# #", "###"],
    ["###", "  #", "  #", "  #", "  #"],
    ["###", "# #", "###", "# #", "###"],
    ["###", "# #", "###", "  #", "###"],
];

fn font_glyph(c: char) -> Option<&'static [&'static str; DIGIT_ROWS as usize]> {
    c.to_digit(10).map(|d| &FONT[d as usize])
}

/// Width in cells of `text` rendered in the block font. Non-digits are skipped.
#[must_use]
pub fn width(text: &str) -> usize {
    let count = text.chars().filter(char::is_ascii_digit).count();
    if count == 0 {
        return 0;
    }
    count * GLYPH_PIXELS * PIXEL_WIDTH + (count - 1) * GAP
}

/// Render `text` as `DIGIT_ROWS` lines, drawing filled pixels with `block`.
///
/// `block` must be a single-cell glyph.
#[must_use]
pub fn render(text: &str, block: &str) -> Vec<String> {
    debug_assert_eq!(block.width(), 1, "block glyph must be one cell wide");
    let glyphs: Vec<_> = text.chars().filter_map(font_glyph).collect();

    (0..DIGIT_ROWS as usize)
        .map(|row| {
            let mut line = String::new();
            for (i, glyph) in glyphs.iter().enumerate() {
                if i > 0 {
                    line.push_str(&" ".repeat(GAP));
                }
                for pixel in glyph[row].chars() {
                    let cell = if pixel == '#' { block } else { " " };
                    line.push_str(&cell.repeat(PIXEL_WIDTH));
                }
            }
            line
        })
        .collect()
}
