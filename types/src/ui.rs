//! UI option types shared by the engine (ownership) and tui (rendering).

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UiOptions {
    /// ASCII glyphs and block font instead of Unicode.
    pub ascii_only: bool,
    pub high_contrast: bool,
}
