//! Index helpers shared by the core and the addons.

/// Clamp `value` into `[min, max]`. When `min > max` the lower bound wins.
#[inline]
pub fn get_in_range(value: f64, min: f64, max: f64) -> f64 {
    value.min(max).max(min)
}

/// Wrap a (possibly negative or out-of-range) slide index into `[0, slides_count)`.
///
/// Uses floored modulo so `-1` maps to the last slide. A zero slide count or a
/// non-finite index yields `0`.
pub fn normalize_slide_index(index: f64, slides_count: usize) -> f64 {
    if slides_count == 0 || !index.is_finite() {
        return 0.0;
    }
    let count = slides_count as f64;
    let wrapped = index.rem_euclid(count);
    // rem_euclid may round up to `count` for tiny negative inputs
    if wrapped >= count {
        0.0
    } else {
        wrapped
    }
}

/// Sign of `v` as -1, 0 or 1. Unlike `f64::signum`, zero and NaN map to 0.
#[inline]
pub fn sign(v: f64) -> f64 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_stays_in_range() {
        for n in 1..8usize {
            for i in -30..30 {
                let r = normalize_slide_index(i as f64, n);
                assert!(r >= 0.0 && r < n as f64, "i={i} n={n} r={r}");
            }
        }
    }

    #[test]
    fn normalize_wraps_negative_and_overflow() {
        assert_eq!(normalize_slide_index(-1.0, 5), 4.0);
        assert_eq!(normalize_slide_index(-7.0, 5), 3.0);
        assert_eq!(normalize_slide_index(5.0, 5), 0.0);
        assert_eq!(normalize_slide_index(12.0, 5), 2.0);
        assert_eq!(normalize_slide_index(-0.5, 5), 4.5);
    }

    #[test]
    fn normalize_zero_count_is_zero() {
        assert_eq!(normalize_slide_index(3.0, 0), 0.0);
        assert_eq!(normalize_slide_index(f64::NAN, 4), 0.0);
    }

    #[test]
    fn range_clamps() {
        assert_eq!(get_in_range(7.0, 0.0, 4.0), 4.0);
        assert_eq!(get_in_range(-2.0, 0.0, 4.0), 0.0);
        assert_eq!(get_in_range(2.0, 0.0, 4.0), 2.0);
        assert_eq!(get_in_range(2.0, 0.0, -1.0), 0.0);
    }

    #[test]
    fn sign_of_zero_is_zero() {
        assert_eq!(sign(0.0), 0.0);
        assert_eq!(sign(-0.0), 0.0);
        assert_eq!(sign(-3.2), -1.0);
        assert_eq!(sign(0.1), 1.0);
    }
}
