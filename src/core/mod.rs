//! Aggregates the numeric, configuration and ingestion layer.

pub mod bounds;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod number;
pub mod rng;

// re-export frequently-used items for convenience
pub use bounds::{fit_tail, min_max};
pub use config::{Config, ConfigBuilder, SparkOption};
pub use constants::{BLOCK_GLYPHS, BLOCK_LEVELS, DOT_GLYPHS, DOT_LEVELS};
pub use data::ParseSamplesError;
pub use error::{ConfigError, SparkError};
pub use number::Sample;
