//! Raw, central and standardized moments
//!
//! The order `k` is any real number. Fractional orders of negative samples
//! and negative orders of zero samples follow `f64::powf` (NaN or infinity);
//! no validation is done here.

/// Raw moment `E[X^k] = (1/n) Σ xᵢ^k`
pub fn raw_moment(values: &[f64], k: f64) -> f64 {
    let s = values.iter().fold(0.0, |acc, &x| acc + x.powf(k));
    s / values.len() as f64
}

/// Central moment `E[(X - μ)^k] = (1/n) Σ (xᵢ - μ)^k`
pub fn central_moment(values: &[f64], k: f64, mean: f64) -> f64 {
    let s = values.iter().fold(0.0, |acc, &x| acc + (x - mean).powf(k));
    s / values.len() as f64
}

/// Standardized moment `central_moment(k) / std^k`
///
/// A zero `std` yields NaN or infinity.
pub fn standardized_moment(values: &[f64], k: f64, mean: f64, std: f64) -> f64 {
    central_moment(values, k, mean) / std.powf(k)
}

/// Skewness: the standardized moment of order 3
pub fn skewness(values: &[f64], mean: f64, std: f64) -> f64 {
    standardized_moment(values, 3.0, mean, std)
}

/// Pearson median skewness `3 (mean - median) / (std + epsilon)`
pub fn pearson_skewness(mean: f64, median: f64, std: f64, epsilon: f64) -> f64 {
    (3.0 * (mean - median)) / (std + epsilon)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MEAN: f64 = 5.5;

    fn one_to_ten() -> Vec<f64> {
        (1..=10).map(|x| x as f64).collect()
    }

    fn std() -> f64 {
        8.25f64.sqrt()
    }

    #[test]
    fn test_raw_moments() {
        let data = one_to_ten();
        assert!((raw_moment(&data, 0.0) - 1.0).abs() < 1e-12);
        assert!((raw_moment(&data, 1.0) - MEAN).abs() < 1e-12);
        assert!((raw_moment(&data, 2.0) - 38.5).abs() < 1e-12);
    }

    #[test]
    fn test_fractional_order() {
        let data = vec![4.0; 10];
        assert!((raw_moment(&data, 0.5) - 2.0).abs() < 1e-12);
        assert!((raw_moment(&data, -1.0) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_central_moments() {
        let data = one_to_ten();
        assert!(central_moment(&data, 1.0, MEAN).abs() < 1e-12);
        assert!((central_moment(&data, 2.0, MEAN) - 8.25).abs() < 1e-12);
        assert!(central_moment(&data, 3.0, MEAN).abs() < 1e-12);
    }

    #[test]
    fn test_accumulator_starts_at_zero() {
        // Repeated calls must not carry state between evaluations
        let data = one_to_ten();
        let a = raw_moment(&data, 3.0);
        let b = raw_moment(&data, 3.0);
        assert_eq!(a, b);
        assert_eq!(raw_moment(&[0.0; 10], 2.0), 0.0);
        assert_eq!(central_moment(&[3.0; 10], 2.0, 3.0), 0.0);
    }

    #[test]
    fn test_standardized_moments() {
        let data = one_to_ten();
        assert!((standardized_moment(&data, 2.0, MEAN, std()) - 1.0).abs() < 1e-12);
        assert!((standardized_moment(&data, 4.0, MEAN, std()) - 1.775_757_575_757_575_6).abs() < 1e-9);
    }

    #[test]
    fn test_skewness_of_symmetric_data() {
        let data = one_to_ten();
        assert!(skewness(&data, MEAN, std()).abs() < 1e-12);
    }

    #[test]
    fn test_skewness_sign() {
        let mut right_tail = vec![1.0; 9];
        right_tail.push(100.0);
        let mean = right_tail.iter().sum::<f64>() / 10.0;
        let var = right_tail.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / 10.0;
        assert!(skewness(&right_tail, mean, var.sqrt()) > 0.0);
    }

    #[test]
    fn test_pearson_skewness() {
        let p = pearson_skewness(MEAN, 6.0, std(), 1e-15);
        assert!((p - (-0.522_232_967_867_093_4)).abs() < 1e-9);

        // Zero spread stays finite thanks to epsilon
        assert_eq!(pearson_skewness(2.0, 2.0, 0.0, 1e-15), 0.0);
        assert!(pearson_skewness(2.0, 1.0, 0.0, 1e-15).is_finite());
    }
}
