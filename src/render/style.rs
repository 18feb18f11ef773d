//! Closed set of rendering styles.

use std::{fmt, str::FromStr};

use crate::{
    core::constants::{BLOCK_LEVELS, BRAILLE_HORIZONTAL_RESOLUTION, DOT_LEVELS},
    render::{blocks::render_blocks, dots::render_dots},
};

/// Level count + level-to-glyph mapping.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Style {
    /// `▁▂▃▄▅▆▇█`, one sample per glyph.
    #[default]
    Blocks,
    /// Braille columns, two samples per glyph.
    Dots,
}

impl Style {
    pub const ALL: [Self; 2] = [Self::Blocks, Self::Dots];

    /// Number of quantization levels.
    #[inline]
    #[must_use]
    pub const fn levels(self) -> usize {
        match self {
            Self::Blocks => BLOCK_LEVELS,
            Self::Dots => DOT_LEVELS,
        }
    }

    #[inline]
    #[must_use]
    pub const fn samples_per_char(self) -> usize {
        match self {
            Self::Blocks => 1,
            Self::Dots => BRAILLE_HORIZONTAL_RESOLUTION,
        }
    }

    /// Output width in chars for `samples` inputs.
    #[inline]
    #[must_use]
    pub const fn chars_for(self, samples: usize) -> usize {
        samples.div_ceil(self.samples_per_char())
    }

    /// Levels must already be in `0..self.levels()`; larger ones render as
    /// the top glyph.
    #[must_use]
    pub fn render(self, levels: &[u8]) -> String {
        match self {
            Self::Blocks => render_blocks(levels),
            Self::Dots => render_dots(levels),
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Blocks => "blocks",
            Self::Dots => "dots",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown style '{0}' (expected `blocks` or `dots`)")]
pub struct UnknownStyle(pub String);

impl FromStr for Style {
    type Err = UnknownStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "blocks" | "block" => Ok(Self::Blocks),
            "dots" | "dot" | "braille" => Ok(Self::Dots),
            _ => Err(UnknownStyle(s.to_owned())),
        }
    }
}
