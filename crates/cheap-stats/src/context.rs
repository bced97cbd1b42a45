//! The sample context: an immutable, query-ready view of one sample set
//!
//! Construction copies the samples twice (insertion order and sorted), then
//! computes the summary scalars. Every query afterwards is a pure function of
//! that state, so a context can be shared between threads without locking.
//!
//! ```
//! use cheap_stats::SampleContext;
//!
//! let samples = [7.0, 4.0, 1.0, 5.0, 3.0, 10.0, 6.0, 2.0, 8.0, 9.0];
//! let stats = SampleContext::new(&samples).unwrap();
//!
//! assert_eq!(stats.mean(), 5.5);
//! assert_eq!(stats.median(), 6.0);
//! assert_eq!(stats.cdf(10.0), 1.0);
//! ```

use std::mem;

use crate::config::StatsConfig;
use crate::density;
use crate::error::{StatsError, StatsResult};
use crate::moments;
use crate::rank;
use crate::sort::comb_sort;
use crate::summary::{FiveNumberSummary, SummaryStats};

/// Immutable statistics context built from a sample set
#[derive(Debug, Clone)]
pub struct SampleContext {
    /// Samples in insertion order
    raw: Vec<f64>,
    /// Samples in non-decreasing order
    sorted: Vec<f64>,
    /// Precomputed scalars
    summary: SummaryStats,
    /// Parameters used at construction
    config: StatsConfig,
}

/// Copy `src` into a freshly allocated vector, reporting allocation failure.
fn copy_samples(src: &[f64]) -> StatsResult<Vec<f64>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(src.len())
        .map_err(|_| StatsError::OutOfMemory {
            requested: src.len() as u64,
        })?;
    buf.extend_from_slice(src);
    Ok(buf)
}

impl SampleContext {
    /// Build a context with the default configuration.
    ///
    /// Fails with [`StatsError::TooFewSamples`] for fewer than
    /// [`MIN_SAMPLES`](crate::MIN_SAMPLES) samples and with
    /// [`StatsError::InvalidArgument`] if any sample is NaN or infinite.
    pub fn new(samples: &[f64]) -> StatsResult<Self> {
        Self::with_config(samples, &StatsConfig::default())
    }

    /// Build a context with an explicit configuration.
    pub fn with_config(samples: &[f64], config: &StatsConfig) -> StatsResult<Self> {
        config.validate()?;

        if samples.len() < config.min_samples {
            tracing::warn!(
                count = samples.len(),
                min = config.min_samples,
                "Rejected sample set: too few samples"
            );
            return Err(StatsError::TooFewSamples {
                count: samples.len() as u64,
                min: config.min_samples as u64,
            });
        }

        if let Some(idx) = samples.iter().position(|x| !x.is_finite()) {
            tracing::warn!(index = idx, "Rejected sample set: non-finite value");
            return Err(StatsError::invalid_argument(format!(
                "sample {} is not a finite number ({})",
                idx, samples[idx]
            )));
        }

        let raw = copy_samples(samples)?;
        let mut sorted = copy_samples(samples)?;
        comb_sort(&mut sorted);

        let summary = SummaryStats::compute(&raw, &sorted);

        tracing::debug!(
            count = summary.count,
            mean = summary.mean,
            std = summary.std,
            "Built sample context"
        );

        Ok(Self {
            raw,
            sorted,
            summary,
            config: *config,
        })
    }

    // --- Accessors ---

    /// Number of samples
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Always false: a context holds at least `min_samples` values
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Samples in the order they were supplied
    pub fn raw(&self) -> &[f64] {
        &self.raw
    }

    /// Samples in non-decreasing order
    pub fn sorted(&self) -> &[f64] {
        &self.sorted
    }

    /// Configuration the context was built with
    pub fn config(&self) -> &StatsConfig {
        &self.config
    }

    /// All precomputed scalars
    pub fn summary(&self) -> &SummaryStats {
        &self.summary
    }

    pub fn total(&self) -> f64 {
        self.summary.total
    }

    pub fn mean(&self) -> f64 {
        self.summary.mean
    }

    pub fn min(&self) -> f64 {
        self.summary.min
    }

    pub fn max(&self) -> f64 {
        self.summary.max
    }

    pub fn q1(&self) -> f64 {
        self.summary.q1
    }

    pub fn q3(&self) -> f64 {
        self.summary.q3
    }

    pub fn median(&self) -> f64 {
        self.summary.median
    }

    /// Population variance
    pub fn variance(&self) -> f64 {
        self.summary.variance
    }

    pub fn std(&self) -> f64 {
        self.summary.std
    }

    /// Interquartile range (q3 - q1)
    pub fn iqr(&self) -> f64 {
        self.summary.iqr()
    }

    /// Range (max - min)
    pub fn range(&self) -> f64 {
        self.summary.range()
    }

    pub fn five_number_summary(&self) -> FiveNumberSummary {
        self.summary.five_number_summary()
    }

    /// Bytes owned by this context, including both sample copies
    pub fn memory_footprint(&self) -> usize {
        let samples = self.raw.capacity() + self.sorted.capacity();
        mem::size_of::<Self>() + mem::size_of::<f64>() * samples
    }

    // --- Distribution queries ---

    /// Empirical CDF at `v`.
    ///
    /// See [`rank`](crate::rank) for how ties are resolved. `cdf(max) == 1.0`
    /// and any value below the minimum yields 0.0. A NaN query has no rank and
    /// returns whichever midpoint the search probes first; [`StatsHandle`]
    /// rejects it instead.
    ///
    /// [`StatsHandle`]: crate::StatsHandle
    pub fn cdf(&self, v: f64) -> f64 {
        rank::cdf(&self.sorted, v)
    }

    /// Normal density with the sample mean and std at `v`, divided by `total`.
    ///
    /// **Caution:** the division by the sample total means this is not a
    /// probability density unless the samples sum to 1. It is kept for
    /// compatibility and is probably a defect; multiply by [`total`](Self::total)
    /// to recover the plain normal density.
    pub fn normal_pdf(&self, v: f64) -> f64 {
        density::normal_pdf(self.summary.mean, self.summary.std, self.summary.total, v)
    }

    /// KDE bandwidth `f * min(std, iqr) * n^(-1/5)`
    pub fn kde_bandwidth(&self) -> f64 {
        let sigma = density::robust_sigma(self.summary.std, self.summary.iqr());
        density::bandwidth(self.config.bandwidth_factor, sigma, self.len())
    }

    /// Gaussian kernel density estimate at `v`
    ///
    /// When at least half the samples share the central value, `q3 - q1` is
    /// zero, so the bandwidth is zero and the estimate is NaN everywhere.
    pub fn estimated_pdf(&self, v: f64) -> f64 {
        density::kde(&self.sorted, self.kde_bandwidth(), v)
    }

    // --- Moments ---

    /// Raw moment of order `k`
    pub fn moment(&self, k: f64) -> f64 {
        moments::raw_moment(&self.sorted, k)
    }

    /// Central moment of order `k` about the mean
    pub fn central_moment(&self, k: f64) -> f64 {
        moments::central_moment(&self.sorted, k, self.summary.mean)
    }

    /// Standardized moment of order `k`
    pub fn std_moment(&self, k: f64) -> f64 {
        moments::standardized_moment(&self.sorted, k, self.summary.mean, self.summary.std)
    }

    pub fn skewness(&self) -> f64 {
        moments::skewness(&self.sorted, self.summary.mean, self.summary.std)
    }

    /// Pearson median skewness `3 (mean - median) / (std + epsilon)`
    pub fn pearson_skewness(&self) -> f64 {
        moments::pearson_skewness(
            self.summary.mean,
            self.summary.median,
            self.summary.std,
            self.config.skew_epsilon,
        )
    }

    // --- Standardization ---

    /// Z-score of `v`: `(v - mean) / (std + epsilon)`
    pub fn z_score(&self, v: f64) -> f64 {
        (v - self.summary.mean) / (self.summary.std + self.config.skew_epsilon)
    }

    /// Z-scores of every sample, in insertion order
    pub fn z_scores(&self) -> Vec<f64> {
        self.raw.iter().map(|&x| self.z_score(x)).collect()
    }
}
