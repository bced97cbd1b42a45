//! Summary statistics computed once per sample set
//!
//! Provides the aggregate scalars every query builds on:
//! - Total, mean, population variance, standard deviation
//! - Min, max
//! - Index-picked quartiles and median (no interpolation)

use serde::{Deserialize, Serialize};

/// Summary scalars for a sample set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct SummaryStats {
    /// Number of samples
    pub count: u64,
    /// Sum of all samples
    pub total: f64,
    /// Mean (total / count)
    pub mean: f64,
    /// Smallest sample
    pub min: f64,
    /// Largest sample
    pub max: f64,
    /// First quartile, `sorted[count / 4]`
    pub q1: f64,
    /// Third quartile, `sorted[3 * count / 4]`
    pub q3: f64,
    /// Median, `sorted[count / 2]`
    pub median: f64,
    /// Population variance (divisor `count`)
    pub variance: f64,
    /// Standard deviation
    pub std: f64,
}

impl SummaryStats {
    /// Compute the summary from the raw samples and their sorted copy.
    ///
    /// Both slices must hold the same non-empty multiset.
    pub fn compute(raw: &[f64], sorted: &[f64]) -> Self {
        debug_assert_eq!(raw.len(), sorted.len());
        let n = sorted.len();

        let total = sum(raw);
        let mean = total / n as f64;
        let variance = population_variance(raw, mean);

        Self {
            count: n as u64,
            total,
            mean,
            min: sorted[0],
            max: sorted[n - 1],
            q1: sorted[n / 4],
            q3: sorted[(3 * n) / 4],
            median: sorted[n / 2],
            variance,
            std: variance.sqrt(),
        }
    }

    /// Interquartile range (q3 - q1)
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    /// Range (max - min)
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Min, quartiles, median and max as a [`FiveNumberSummary`]
    pub fn five_number_summary(&self) -> FiveNumberSummary {
        FiveNumberSummary {
            min: self.min,
            q1: self.q1,
            median: self.median,
            q3: self.q3,
            max: self.max,
        }
    }
}

/// Five number summary statistics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FiveNumberSummary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl FiveNumberSummary {
    /// Get the interquartile range
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    /// Lower fence for outlier detection (Q1 - 1.5 * IQR)
    pub fn lower_fence(&self) -> f64 {
        self.q1 - 1.5 * self.iqr()
    }

    /// Upper fence for outlier detection (Q3 + 1.5 * IQR)
    pub fn upper_fence(&self) -> f64 {
        self.q3 + 1.5 * self.iqr()
    }

    /// Whether `x` falls outside the Tukey fences
    pub fn is_outlier(&self, x: f64) -> bool {
        x < self.lower_fence() || x > self.upper_fence()
    }
}

/// Linear sum in slice order
fn sum(values: &[f64]) -> f64 {
    values.iter().fold(0.0, |acc, &x| acc + x)
}

/// Mean squared deviation from `mean`
fn population_variance(values: &[f64], mean: f64) -> f64 {
    let squares = values.iter().fold(0.0, |acc, &x| {
        let d = x - mean;
        acc + d * d
    });
    squares / values.len() as f64
}
