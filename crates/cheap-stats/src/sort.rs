//! In-place comb sort ("combsort11")
//!
//! Comb sort compares elements a shrinking gap apart, which moves small values
//! stranded near the end ("turtles") forward quickly. The gap shrinks by 10/13
//! each pass, and a gap of 9 or 10 is replaced by 11, which avoids the slow
//! tail that those gaps produce.
//!
//! Average case is well below O(n²) for the sample sizes this crate targets;
//! there is no O(n log n) guarantee. The sort is not stable.

/// Next gap after `gap`: shrink by 10/13, snap 9 and 10 to 11, never below 1.
fn shrink(gap: usize) -> usize {
    match gap * 10 / 13 {
        9 | 10 => 11,
        0 => 1,
        g => g,
    }
}

/// Sort `values` ascending in place.
///
/// Values must be totally ordered by `>`; callers reject NaN beforehand.
pub fn comb_sort(values: &mut [f64]) {
    let n = values.len();
    if n < 2 {
        return;
    }

    let mut gap = n;
    let mut swapped = true;

    while gap > 1 || swapped {
        gap = shrink(gap);
        swapped = false;

        for i in 0..n - gap {
            if values[i] > values[i + gap] {
                values.swap(i, i + gap);
                swapped = true;
            }
        }
    }
}
