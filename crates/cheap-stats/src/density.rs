//! Parametric and kernel density estimates
//!
//! - **Normal PDF**: Gaussian density with the sample mean and std, divided by
//!   the sample total (see [`normal_pdf`])
//! - **Gaussian KDE**: average of standard-normal kernels centred on each
//!   sample, with a Silverman-style bandwidth capped by the IQR

/// √(2π)
const SQRT_TAU: f64 = 2.506_628_274_631_000_2;

/// Standard normal kernel `φ(x) = exp(-x²/2) / √(2π)`
pub fn gaussian_kernel(x: f64) -> f64 {
    (-(x * x) / 2.0).exp() / SQRT_TAU
}

/// Normal density at `v`, divided by `total`.
///
/// The result is `N(v; mean, std) / total`, which is only a density when the
/// samples sum to 1. The scaling is kept for compatibility with existing
/// callers and is most likely a defect in the original formula; use
/// `normal_pdf(..) * total` for the plain density.
pub fn normal_pdf(mean: f64, std: f64, total: f64, v: f64) -> f64 {
    let t = (v - mean) / std;
    ((-0.5 * (t * t)).exp() / (std * SQRT_TAU)) / total
}

/// Robust spread: the smaller of `std` and the interquartile range
pub fn robust_sigma(std: f64, iqr: f64) -> f64 {
    if iqr > std {
        std
    } else {
        iqr
    }
}

/// Bandwidth `h = factor * sigma * n^(-1/5)`
pub fn bandwidth(factor: f64, sigma: f64, n: usize) -> f64 {
    (factor * sigma) / (n as f64).powf(1.0 / 5.0)
}

/// Gaussian KDE at `v` with bandwidth `h`: `Σ φ((v - xᵢ) / h) / (n h)`
///
/// A zero bandwidth (all samples within one quartile) gives NaN or infinity.
pub fn kde(values: &[f64], h: f64, v: f64) -> f64 {
    let s = values
        .iter()
        .fold(0.0, |acc, &x| acc + gaussian_kernel((v - x) / h));
    s / (values.len() as f64 * h)
}
