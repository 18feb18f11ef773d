//! A collection of constants.

/// Block style quantizes into 8 levels
pub const BLOCK_LEVELS: usize = 8;
/// Dot style quantizes into 5 levels: 0..=4 dots per braille column
pub const DOT_LEVELS: usize = 5;

/// Braille has 2 horizontal dots, so one glyph carries two samples
pub const BRAILLE_HORIZONTAL_RESOLUTION: usize = 2;

/// One-eighth block up to full block, lowest level first.
pub const BLOCK_GLYPHS: [char; BLOCK_LEVELS] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Rows are the left column height, columns the right column height.
///
/// The empty cell is an ASCII space rather than U+2800.
pub const DOT_GLYPHS: [[char; DOT_LEVELS]; DOT_LEVELS] = [
    [' ', '⢀', '⢠', '⢰', '⢸'],
    ['⡀', '⣀', '⣠', '⣰', '⣸'],
    ['⡄', '⣄', '⣤', '⣴', '⣼'],
    ['⡆', '⣆', '⣦', '⣶', '⣾'],
    ['⡇', '⣇', '⣧', '⣷', '⣿'],
];

/// Terminal width used when the real one can't be queried.
pub const FALLBACK_TERMINAL_WIDTH: u16 = 80;
