//! Rank lookup and empirical CDF over a sorted sample
//!
//! The rank of a query value is the index at which a plain binary search over
//! the sorted samples converges. Queries at or above the maximum short-circuit
//! to the sample count, so the CDF of the maximum is exactly 1.0.
//!
//! # Tie handling
//!
//! The search stops at the first probed index holding an exact match, so for a
//! run of duplicates it returns whichever member of the run the midpoints hit
//! first. That index is deterministic for a given sorted slice but is neither
//! the lowest nor the highest of the run. For a value present exactly once the
//! rank is its 0-based position, i.e. the number of samples strictly below it.
//! Values between two samples converge to a neighbouring position, and values
//! below the minimum always rank 0.

/// Rank of `v` within `sorted`, in `0..=sorted.len()`.
///
/// `sorted` must be non-decreasing. An empty slice ranks everything at 0.
pub fn rank_of(sorted: &[f64], v: f64) -> usize {
    let n = sorted.len();
    if n == 0 {
        return 0;
    }

    if v >= sorted[n - 1] {
        return n;
    }

    // Signed bounds: `right` may step to -1 when v is below the minimum.
    let mut left: isize = 0;
    let mut right: isize = n as isize - 1;

    loop {
        let mid = (left + right) / 2;

        if right <= left {
            return mid as usize;
        }

        let probe = sorted[mid as usize];
        if probe < v {
            left = mid + 1;
        } else if probe > v {
            right = mid - 1;
        } else {
            return mid as usize;
        }
    }
}

/// Empirical CDF of `v`: `rank_of(sorted, v) / n`, or 0.0 for an empty slice.
pub fn cdf(sorted: &[f64], v: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    rank_of(sorted, v) as f64 / sorted.len() as f64
}
