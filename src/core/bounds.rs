//! Range helpers: sample extrema + terminal width plumbing.

use terminal_size::{Width, terminal_size};

use crate::{
    core::{constants::FALLBACK_TERMINAL_WIDTH, number::Sample},
    render::Style,
};

/// Inclusive `(min, max)` over `values` in a single pass.
///
/// Returns `None` for an empty slice. Incomparable values (`NaN`) never
/// become extrema unless every value is incomparable.
#[must_use]
pub fn min_max<T: Sample>(values: &[T]) -> Option<(T, T)> {
    let seed = values
        .iter()
        .position(|v| v.partial_cmp(v).is_some())
        .unwrap_or(0);
    let (&first, rest) = values.get(seed..)?.split_first()?;
    let (mut low, mut high) = (first, first);

    for &v in rest {
        if v < low {
            low = v;
        }
        if v > high {
            high = v;
        }
    }
    Some((low, high))
}

/// Current terminal width in columns (80 fallback).
#[inline]
#[must_use]
pub fn terminal_width() -> usize {
    usize::from(terminal_size().map_or(FALLBACK_TERMINAL_WIDTH, |(Width(w), _)| w))
}

/// How many samples fit into `columns` characters with `style`.
#[inline]
#[must_use]
pub fn fit_samples(columns: usize, style: Style) -> usize {
    columns * style.samples_per_char()
}

/// Tail of `values` that fits into `columns` characters.
#[must_use]
pub fn fit_tail<T>(values: &[T], columns: usize, style: Style) -> &[T] {
    let cap = fit_samples(columns, style);
    &values[values.len().saturating_sub(cap)..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extrema_of_mixed_series() {
        assert_eq!(min_max(&[3, -1, 7, 7, 0]), Some((-1, 7)));
        assert_eq!(min_max(&[2.5_f32]), Some((2.5, 2.5)));
        assert_eq!(min_max::<u8>(&[]), None);
    }

    #[test]
    fn nan_does_not_become_an_extremum() {
        let (lo, hi) = min_max(&[1.0, f64::NAN, 4.0]).unwrap();
        assert_eq!((lo, hi), (1.0, 4.0));

        let (lo, hi) = min_max(&[f64::NAN, 1.0, 4.0]).unwrap();
        assert_eq!((lo, hi), (1.0, 4.0));

        let (lo, hi) = min_max(&[f32::NAN, f32::NAN]).unwrap();
        assert!(lo.is_nan() && hi.is_nan());
    }

    #[test]
    fn tail_keeps_most_recent_samples() {
        let data: Vec<u32> = (0..10).collect();
        assert_eq!(fit_tail(&data, 3, Style::Blocks), &[7, 8, 9]);
        assert_eq!(fit_tail(&data, 3, Style::Dots), &[4, 5, 6, 7, 8, 9]);
        assert_eq!(fit_tail(&data, 40, Style::Blocks).len(), 10);
    }
}
