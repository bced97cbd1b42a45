//! cheap-stats - Descriptive statistics over an immutable sample set
//!
//! A [`SampleContext`] is built once from at least [`MIN_SAMPLES`] values and
//! then answers cheap, read-only queries:
//!
//! - **Summary**: total, mean, population variance, std, min/max, quartiles, median
//! - **ECDF**: empirical CDF via binary search over the sorted samples
//! - **Moments**: raw, central and standardized moments of any real order,
//!   skewness and Pearson median skewness
//! - **Densities**: normal PDF and a Gaussian KDE with a robust bandwidth
//!
//! [`StatsHandle`] wraps a context for foreign-language bindings, with an
//! explicit `destroy` and integer [`ErrorCode`]s.

pub mod config;
pub mod context;
pub mod density;
pub mod error;
pub mod handle;
pub mod moments;
pub mod rank;
pub mod sort;
pub mod summary;

pub use config::{StatsConfig, MIN_SAMPLES};
pub use context::SampleContext;
pub use error::{ConfigError, ErrorCode, StatsError, StatsResult};
pub use handle::StatsHandle;
pub use summary::{FiveNumberSummary, SummaryStats};

// Setup UniFFI when the feature is enabled
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
