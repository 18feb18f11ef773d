//! Public-facing crate root – re-exports + one-shot helper.
//!
//! ```
//! use sparkline::{SparkOption, sparkline};
//!
//! assert_eq!(sparkline(&[1, 2, 3, 4, 5, 6, 7, 8], []), "▁▂▃▄▅▆▇█");
//! assert_eq!(sparkline(&[0, 1, 2, 3, 4, 5, 6, 7], [SparkOption::dots()]), " ⣀⣤⣾");
//! ```

pub mod cli;
pub mod core;
pub mod render;

pub use crate::core::{
    config::{Config, ConfigBuilder, SparkOption},
    constants::{BLOCK_GLYPHS, DOT_GLYPHS},
    data::{ParseSamplesError, read_samples},
    error::{ConfigError, SparkError},
    number::Sample,
};

pub use render::{Style, UnknownStyle, quantize, render};

/// Render `values` as a sparkline, applying `options` in order to the
/// default configuration (block style, inferred range).
///
/// Never fails; an empty slice yields an empty string.
pub fn sparkline<T, I>(values: &[T], options: I) -> String
where
    T: Sample,
    I: IntoIterator<Item = SparkOption<T>>,
{
    render(values, &Config::from_options(options))
}
