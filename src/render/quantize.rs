//! Samples to discrete levels.
//!
//! `level = floor((L - 1) * (v - min) / (max - min))`, computed in `f64`
//! from exact per-type differences. Results are clamped into `[0, L - 1]`,
//! so samples outside an explicit range saturate at the lowest/highest
//! glyph instead of indexing past the glyph table. A zero-span range maps
//! everything to level 0.

use crate::core::number::Sample;

/// One level per sample, each in `0..levels`.
///
/// `levels` must be in `1..=256`.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn quantize<T: Sample>(values: &[T], (min, max): (T, T), levels: usize) -> Vec<u8> {
    debug_assert!((1..=256).contains(&levels), "level count out of u8 range");

    // a span wider than f64::MAX is measured in halves
    let full = max.diff_f64(min);
    let (span, diff) = if full.is_infinite() {
        (max.half_diff_f64(min), T::half_diff_f64 as fn(T, T) -> f64)
    } else {
        (full, T::diff_f64 as fn(T, T) -> f64)
    };

    if span == 0.0 {
        return vec![0; values.len()];
    }

    #[allow(clippy::cast_precision_loss)]
    let top = (levels - 1) as f64;
    values
        .iter()
        .map(|&v| {
            let d = diff(v, min);
            let mut r = top * d / span;
            if r.is_infinite() {
                // top * d overflowed; divide first
                r = d / span * top;
            }
            // NaN falls through clamp and casts to 0
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let level = r.floor().clamp(0.0, top) as u8;
            level
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_span_hits_every_block_level() {
        let v: Vec<u8> = (1..=8).collect();
        assert_eq!(quantize(&v, (1, 8), 8), vec![0, 1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn five_levels_floor() {
        let v: Vec<i32> = (0..8).collect();
        assert_eq!(quantize(&v, (0, 7), 5), vec![0, 0, 1, 1, 2, 2, 3, 4]);
    }

    #[test]
    fn zero_span_is_all_zero() {
        assert_eq!(quantize(&[3.0_f32; 4], (3.0, 3.0), 8), vec![0; 4]);
        assert_eq!(quantize(&[9_u64, 12], (5, 5), 5), vec![0, 0]);
    }

    #[test]
    fn out_of_range_samples_are_clamped() {
        assert_eq!(quantize(&[-10, 0, 50, 1000], (0, 100), 8), vec![0, 0, 3, 7]);
        // unsigned values below min would wrap if subtracted in T
        assert_eq!(quantize(&[1_u8, 255], (10, 20), 8), vec![0, 7]);
    }

    #[test]
    fn reversed_range_is_clamped() {
        // span is negative: in-between values land on positive levels
        assert_eq!(quantize(&[10, 5, 0], (10, 0), 5), vec![0, 2, 4]);
        assert_eq!(quantize(&[20], (10, 0), 5), vec![0]);
    }

    #[test]
    fn large_integers_keep_low_bits() {
        let base = 1_i64 << 60;
        let v: Vec<i64> = (0..8).map(|k| base + k).collect();
        assert_eq!(quantize(&v, (base, base + 7), 8), vec![0, 1, 2, 3, 4, 5, 6, 7]);

        let ts: Vec<u64> = (0..8).map(|k| 1_700_000_000_000_000_000 + k * 100).collect();
        assert_eq!(quantize(&ts, (ts[0], ts[7]), 8), vec![0, 1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn huge_floats_do_not_overflow() {
        assert_eq!(quantize(&[0.0, 5e307, 1e308], (0.0, 1e308), 8), vec![0, 3, 7]);
        assert_eq!(
            quantize(&[-f64::MAX, 0.0, f64::MAX], (-f64::MAX, f64::MAX), 8),
            vec![0, 3, 7]
        );
    }

    #[test]
    fn nan_sample_is_level_zero() {
        assert_eq!(quantize(&[0.0, f64::NAN, 1.0], (0.0, 1.0), 8), vec![0, 0, 7]);
    }
}
