//! Two levels per braille glyph.
//!
//! The first level of each pair fills the left dot column from the bottom,
//! the second fills the right one. An odd trailing level is paired with an
//! empty column.

use crate::core::constants::{DOT_GLYPHS, DOT_LEVELS};

#[inline]
fn glyph(a: u8, b: u8) -> char {
    let top = DOT_LEVELS - 1;
    DOT_GLYPHS[usize::from(a).min(top)][usize::from(b).min(top)]
}

#[must_use]
pub fn render_dots(levels: &[u8]) -> String {
    let mut out = String::with_capacity(levels.len().div_ceil(2) * '⣿'.len_utf8());
    out.extend(levels.chunks(2).map(|pair| match *pair {
        [a, b] => glyph(a, b),
        [a] => glyph(a, 0),
        _ => unreachable!("chunks(2) yields one or two levels"),
    }));
    out
}
