//! Per-call configuration: option values + fluent builder.

use std::ops::RangeInclusive;

use crate::render::Style;

/// One configuration mutation. Applied in order; for each kind the last
/// one wins.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SparkOption<T> {
    /// Select the rendering style.
    Style(Style),
    /// Quantize against `min..=max` instead of the inferred extrema.
    Range { min: T, max: T },
}

impl<T> SparkOption<T> {
    /// Braille dot style, two samples per glyph.
    #[inline]
    #[must_use]
    pub const fn dots() -> Self {
        Self::Style(Style::Dots)
    }

    /// Block style, one sample per glyph. This is the default.
    #[inline]
    #[must_use]
    pub const fn blocks() -> Self {
        Self::Style(Style::Blocks)
    }

    /// Explicit range; bypasses min/max inference.
    #[inline]
    #[must_use]
    pub const fn with_range(min: T, max: T) -> Self {
        Self::Range { min, max }
    }
}

/// Immutable parameters handed to the renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config<T> {
    pub style: Style,
    pub range: Option<(T, T)>,
}

impl<T> Default for Config<T> {
    fn default() -> Self {
        Self {
            style: Style::default(),
            range: None,
        }
    }
}

impl<T> Config<T> {
    #[inline]
    #[must_use]
    pub fn builder() -> ConfigBuilder<T> {
        ConfigBuilder::new()
    }

    /// Default configuration with `options` applied in order.
    pub fn from_options<I>(options: I) -> Self
    where
        I: IntoIterator<Item = SparkOption<T>>,
    {
        Self::builder().options(options).build()
    }
}

/// Fluent builder; starts from the default configuration.
#[derive(Debug)]
pub struct ConfigBuilder<T> {
    style: Option<Style>,
    range: Option<(T, T)>,
}

impl<T> Default for ConfigBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ConfigBuilder<T> {
    pub(crate) fn new() -> Self {
        Self {
            style: None,
            range: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn style(mut self, s: Style) -> Self {
        self.style = Some(s);
        self
    }
    #[inline]
    #[must_use]
    pub fn range(mut self, r: RangeInclusive<T>) -> Self {
        self.range = Some(r.into_inner());
        self
    }
    #[inline]
    #[must_use]
    pub fn range_opt(mut self, r: Option<(T, T)>) -> Self {
        if let Some(r) = r {
            self.range = Some(r);
        }
        self
    }

    /// Apply a single option on top of what is already set.
    #[inline]
    #[must_use]
    pub fn apply(self, opt: SparkOption<T>) -> Self {
        match opt {
            SparkOption::Style(s) => self.style(s),
            SparkOption::Range { min, max } => self.range(min..=max),
        }
    }

    #[must_use]
    pub fn options<I>(self, opts: I) -> Self
    where
        I: IntoIterator<Item = SparkOption<T>>,
    {
        opts.into_iter().fold(self, Self::apply)
    }

    /// Never fails: ranges are not validated, the quantizer clamps.
    pub fn build(self) -> Config<T> {
        Config {
            style: self.style.unwrap_or_default(),
            range: self.range,
        }
    }
}

impl<T> From<ConfigBuilder<T>> for Config<T> {
    fn from(b: ConfigBuilder<T>) -> Self {
        b.build()
    }
}
