//! Quantize + glyph rendering pipeline.

pub mod blocks;
pub mod dots;
pub mod quantize;
pub mod style;

pub use blocks::render_blocks;
pub use dots::render_dots;
pub use quantize::quantize;
pub use style::{Style, UnknownStyle};

use crate::core::{bounds::min_max, config::Config, number::Sample};

/// Render `values` under `config`.
///
/// Empty input short-circuits to an empty string before any range or
/// style work happens.
#[must_use]
pub fn render<T: Sample>(values: &[T], config: &Config<T>) -> String {
    if values.is_empty() {
        return String::new();
    }
    // non-empty, so inference always yields a range
    let Some(range) = config.range.or_else(|| min_max(values)) else {
        return String::new();
    };

    let levels = quantize(values, range, config.style.levels());
    tracing::trace!(
        samples = values.len(),
        style = %config.style,
        explicit_range = config.range.is_some(),
        "rendering sparkline"
    );
    config.style.render(&levels)
}
