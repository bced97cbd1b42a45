//! Handle-based surface for foreign-language bindings.
//!
//! Bindings hold a [`StatsHandle`] instead of a [`SampleContext`] so that an
//! explicit `destroy` can release the samples before the host object is
//! collected. Every call on a destroyed handle fails with
//! [`StatsError::InvalidArgument`] rather than touching freed state, and a
//! second `destroy` is reported the same way.

use std::sync::{Arc, PoisonError, RwLock};

use crate::config::StatsConfig;
use crate::context::SampleContext;
use crate::error::{StatsError, StatsResult};
use crate::summary::SummaryStats;

/// Thread-safe owner of a sample context.
///
/// This is the main entry point for binding code.
#[derive(Debug)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Object))]
pub struct StatsHandle {
    context: RwLock<Option<SampleContext>>,
}

/// Private helpers (not exported via UniFFI).
impl StatsHandle {
    fn from_context(context: SampleContext) -> Arc<Self> {
        Arc::new(Self {
            context: RwLock::new(Some(context)),
        })
    }

    /// Run `f` against the live context.
    fn with_context<T>(&self, f: impl FnOnce(&SampleContext) -> T) -> StatsResult<T> {
        let guard = self.context.read().unwrap_or_else(PoisonError::into_inner);
        guard
            .as_ref()
            .map(f)
            .ok_or_else(|| StatsError::invalid_argument("stats handle has been destroyed"))
    }

    /// Reject NaN query arguments; the rank search has no answer for them.
    fn check_query(name: &str, v: f64) -> StatsResult<f64> {
        if v.is_nan() {
            return Err(StatsError::invalid_argument(format!("{} must not be NaN", name)));
        }
        Ok(v)
    }

    /// Borrow-free access for Rust callers that want the full context.
    pub fn snapshot(&self) -> StatsResult<SampleContext> {
        self.with_context(SampleContext::clone)
    }
}

#[cfg_attr(feature = "uniffi", uniffi::export)]
impl StatsHandle {
    /// Build a handle over a copy of `samples`.
    #[cfg_attr(feature = "uniffi", uniffi::constructor)]
    pub fn create(samples: Vec<f64>) -> Result<Arc<Self>, StatsError> {
        SampleContext::new(&samples).map(Self::from_context)
    }

    /// Build a handle with configuration parsed from a TOML string.
    #[cfg_attr(feature = "uniffi", uniffi::constructor)]
    pub fn create_with_config(
        samples: Vec<f64>,
        config_toml: String,
    ) -> Result<Arc<Self>, StatsError> {
        let config = StatsConfig::from_toml_str(&config_toml)?;
        SampleContext::with_config(&samples, &config).map(Self::from_context)
    }

    /// Release the samples. Fails if the handle was already destroyed.
    pub fn destroy(&self) -> Result<(), StatsError> {
        let mut guard = self.context.write().unwrap_or_else(PoisonError::into_inner);
        match guard.take() {
            Some(context) => {
                tracing::debug!(count = context.len(), "Destroyed stats handle");
                Ok(())
            }
            None => Err(StatsError::invalid_argument(
                "stats handle has already been destroyed",
            )),
        }
    }

    /// Whether `destroy` has not been called yet.
    pub fn is_alive(&self) -> bool {
        self.context
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    // --- Accessors ---

    pub fn count(&self) -> Result<u64, StatsError> {
        self.with_context(|c| c.len() as u64)
    }

    pub fn summary(&self) -> Result<SummaryStats, StatsError> {
        self.with_context(|c| *c.summary())
    }

    pub fn total(&self) -> Result<f64, StatsError> {
        self.with_context(SampleContext::total)
    }

    pub fn mean(&self) -> Result<f64, StatsError> {
        self.with_context(SampleContext::mean)
    }

    pub fn min(&self) -> Result<f64, StatsError> {
        self.with_context(SampleContext::min)
    }

    pub fn max(&self) -> Result<f64, StatsError> {
        self.with_context(SampleContext::max)
    }

    pub fn q1(&self) -> Result<f64, StatsError> {
        self.with_context(SampleContext::q1)
    }

    pub fn q3(&self) -> Result<f64, StatsError> {
        self.with_context(SampleContext::q3)
    }

    pub fn median(&self) -> Result<f64, StatsError> {
        self.with_context(SampleContext::median)
    }

    pub fn variance(&self) -> Result<f64, StatsError> {
        self.with_context(SampleContext::variance)
    }

    pub fn std(&self) -> Result<f64, StatsError> {
        self.with_context(SampleContext::std)
    }

    /// Bytes held by the context.
    pub fn memory_footprint(&self) -> Result<u64, StatsError> {
        self.with_context(|c| c.memory_footprint() as u64)
    }

    // --- Queries ---

    pub fn cdf(&self, v: f64) -> Result<f64, StatsError> {
        let v = Self::check_query("query value", v)?;
        self.with_context(|c| c.cdf(v))
    }

    pub fn normal_pdf(&self, v: f64) -> Result<f64, StatsError> {
        let v = Self::check_query("query value", v)?;
        self.with_context(|c| c.normal_pdf(v))
    }

    pub fn estimated_pdf(&self, v: f64) -> Result<f64, StatsError> {
        let v = Self::check_query("query value", v)?;
        self.with_context(|c| c.estimated_pdf(v))
    }

    pub fn moment(&self, k: f64) -> Result<f64, StatsError> {
        let k = Self::check_query("moment order", k)?;
        self.with_context(|c| c.moment(k))
    }

    pub fn central_moment(&self, k: f64) -> Result<f64, StatsError> {
        let k = Self::check_query("moment order", k)?;
        self.with_context(|c| c.central_moment(k))
    }

    pub fn std_moment(&self, k: f64) -> Result<f64, StatsError> {
        let k = Self::check_query("moment order", k)?;
        self.with_context(|c| c.std_moment(k))
    }

    pub fn skewness(&self) -> Result<f64, StatsError> {
        self.with_context(SampleContext::skewness)
    }

    pub fn pearson_skewness(&self) -> Result<f64, StatsError> {
        self.with_context(SampleContext::pearson_skewness)
    }

    pub fn z_score(&self, v: f64) -> Result<f64, StatsError> {
        let v = Self::check_query("query value", v)?;
        self.with_context(|c| c.z_score(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn samples() -> Vec<f64> {
        vec![7.0, 4.0, 1.0, 5.0, 3.0, 10.0, 6.0, 2.0, 8.0, 9.0]
    }

    #[test]
    fn test_create_and_query() {
        let handle = StatsHandle::create(samples()).unwrap();

        assert!(handle.is_alive());
        assert_eq!(handle.count().unwrap(), 10);
        assert_eq!(handle.mean().unwrap(), 5.5);
        assert_eq!(handle.cdf(5.5).unwrap(), 0.4);
        assert_eq!(handle.summary().unwrap().median, 6.0);
    }

    #[test]
    fn test_create_reports_error_codes() {
        let err = StatsHandle::create(vec![1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(err.code(), ErrorCode::TooFewSamples);
        assert_eq!(err.code().as_i32(), 2);

        let mut bad = samples();
        bad[0] = f64::NAN;
        let err = StatsHandle::create(bad).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidArgument);
    }

    #[test]
    fn test_create_with_config() {
        let handle =
            StatsHandle::create_with_config(samples(), "bandwidth_factor = 1.8".to_string())
                .unwrap();
        let base = StatsHandle::create(samples()).unwrap();

        let wide = handle.snapshot().unwrap().kde_bandwidth();
        let narrow = base.snapshot().unwrap().kde_bandwidth();
        assert!((wide - 2.0 * narrow).abs() < 1e-12);

        let err = StatsHandle::create_with_config(samples(), "min_samples = 3".to_string())
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidConfig);
    }

    #[test]
    fn test_destroy_then_query_fails() {
        let handle = StatsHandle::create(samples()).unwrap();
        assert!(handle.memory_footprint().unwrap() > 0);

        handle.destroy().unwrap();

        assert!(!handle.is_alive());
        assert_eq!(
            handle.memory_footprint().unwrap_err().code(),
            ErrorCode::InvalidArgument
        );
        assert_eq!(handle.mean().unwrap_err().code(), ErrorCode::InvalidArgument);
        assert_eq!(handle.cdf(1.0).unwrap_err().code(), ErrorCode::InvalidArgument);
        assert_eq!(
            handle.skewness().unwrap_err().code(),
            ErrorCode::InvalidArgument
        );
    }

    #[test]
    fn test_double_destroy_is_an_error() {
        let handle = StatsHandle::create(samples()).unwrap();
        handle.destroy().unwrap();

        let err = handle.destroy().unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidArgument);
    }

    #[test]
    fn test_queries_match_context() {
        let handle = StatsHandle::create(samples()).unwrap();
        let context = SampleContext::new(&samples()).unwrap();

        assert_eq!(handle.normal_pdf(4.0).unwrap(), context.normal_pdf(4.0));
        assert_eq!(handle.estimated_pdf(4.0).unwrap(), context.estimated_pdf(4.0));
        assert_eq!(handle.moment(2.0).unwrap(), context.moment(2.0));
        assert_eq!(handle.central_moment(2.0).unwrap(), context.central_moment(2.0));
        assert_eq!(handle.std_moment(3.0).unwrap(), context.std_moment(3.0));
        assert_eq!(handle.pearson_skewness().unwrap(), context.pearson_skewness());
        assert_eq!(handle.z_score(9.0).unwrap(), context.z_score(9.0));
    }

    #[test]
    fn test_nan_query_rejected() {
        let handle = StatsHandle::create(samples()).unwrap();

        let err = handle.cdf(f64::NAN).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidArgument);
        assert!(err.to_string().contains("NaN"));
        assert!(handle.estimated_pdf(f64::NAN).is_err());
        assert!(handle.moment(f64::NAN).is_err());
        assert!(handle.z_score(f64::NAN).is_err());

        // Infinite queries still have well-defined answers
        assert_eq!(handle.cdf(f64::INFINITY).unwrap(), 1.0);
        assert_eq!(handle.cdf(f64::NEG_INFINITY).unwrap(), 0.0);
    }

    #[test]
    fn test_degenerate_kde_passes_through() {
        let mut data = vec![2.0; 8];
        data.insert(0, 1.0);
        data.push(3.0);
        let handle = StatsHandle::create(data).unwrap();
        assert!(handle.estimated_pdf(2.0).unwrap().is_nan());
    }
}
