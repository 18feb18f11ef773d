//! Closed set of numeric element types a sparkline accepts.

/// A sample that can be ordered and measured against another sample.
///
/// Implemented for every primitive integer and float. The trait is the
/// only bound the pipeline needs, so calls stay monomorphized with no
/// boxing in the per-sample loop.
pub trait Sample: Copy + PartialOrd {
    /// `self - origin` as `f64`.
    ///
    /// Integers subtract exactly before widening, so large values (e.g.
    /// nanosecond timestamps) keep their low bits and unsigned values
    /// below `origin` come out negative instead of wrapping. Floats may
    /// overflow to infinity.
    fn diff_f64(self, origin: Self) -> f64;

    /// Half of `self - origin`, finite for any finite pair.
    #[inline]
    fn half_diff_f64(self, origin: Self) -> f64 {
        0.5 * self.diff_f64(origin)
    }
}

macro_rules! impl_sample_signed {
    ($($t:ty),* $(,)?) => {
        $(
            impl Sample for $t {
                #[inline]
                #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
                fn diff_f64(self, origin: Self) -> f64 {
                    (self as i128 - origin as i128) as f64
                }
            }
        )*
    };
}

macro_rules! impl_sample_unsigned {
    ($($t:ty),* $(,)?) => {
        $(
            impl Sample for $t {
                #[inline]
                #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
                fn diff_f64(self, origin: Self) -> f64 {
                    if self >= origin {
                        (self - origin) as f64
                    } else {
                        -((origin - self) as f64)
                    }
                }
            }
        )*
    };
}

impl_sample_signed!(i8, i16, i32, i64, isize);
impl_sample_unsigned!(u8, u16, u32, u64, u128, usize);

impl Sample for i128 {
    #[inline]
    #[allow(clippy::cast_precision_loss)]
    fn diff_f64(self, origin: Self) -> f64 {
        self.checked_sub(origin)
            .map_or_else(|| self as f64 - origin as f64, |d| d as f64)
    }
}

impl Sample for f32 {
    #[inline]
    fn diff_f64(self, origin: Self) -> f64 {
        f64::from(self) - f64::from(origin)
    }
}

impl Sample for f64 {
    #[inline]
    fn diff_f64(self, origin: Self) -> f64 {
        self - origin
    }

    #[inline]
    fn half_diff_f64(self, origin: Self) -> f64 {
        0.5 * self - 0.5 * origin
    }
}
