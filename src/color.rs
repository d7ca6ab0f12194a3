//! A cell/region color.
//!
//! Colors are plain small integers; the system imposes no upper bound on
//! how many distinct colors a board may use (the CLI's `--colors` flag
//! picks `K` at board-generation time). Terminal rendering of a color
//! lives in `render.rs`, since it depends on a 16-entry palette that's a
//! rendering concern, not a data-model one.

use std::fmt;

/// Kept as a newtype (rather than a bare `u8`) so board and graph code
/// can't accidentally mix up colors with node ids or coordinates.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Color {
    pub tag: u8,
}

impl Color {
    pub fn new(tag: u8) -> Color {
        Color { tag }
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Color({})", self.tag)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.tag)
    }
}
