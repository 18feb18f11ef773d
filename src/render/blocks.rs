use crate::core::constants::{BLOCK_GLYPHS, BLOCK_LEVELS};

/// One block glyph per level.
#[must_use]
pub fn render_blocks(levels: &[u8]) -> String {
    let mut out = String::with_capacity(levels.len() * '█'.len_utf8());
    out.extend(
        levels
            .iter()
            .map(|&l| BLOCK_GLYPHS[usize::from(l).min(BLOCK_LEVELS - 1)]),
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp() {
        assert_eq!(render_blocks(&[0, 1, 2, 3, 4, 5, 6, 7]), "▁▂▃▄▅▆▇█");
        assert_eq!(render_blocks(&[]), "");
    }

    #[test]
    fn three_bytes_per_glyph() {
        let s = render_blocks(&[7, 0, 3]);
        assert_eq!(s.len(), 9);
        assert_eq!(s.chars().count(), 3);
    }
}
