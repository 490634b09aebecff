/// Fraction of `total_bytes` covered by `bytes_downloaded`, clamped to `0.0..=1.0`.
///
/// Returns `None` when the total is unknown or zero: progress is never
/// guessed.
pub fn progress_fraction(bytes_downloaded: u64, total_bytes: Option<u64>) -> Option<f32> {
    match total_bytes {
        Some(total) if total > 0 => {
            Some((bytes_downloaded as f64 / total as f64).clamp(0.0, 1.0) as f32)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn unknown_total_has_no_progress() {
        assert_eq!(progress_fraction(1024, None), None);
        assert_eq!(progress_fraction(0, Some(0)), None);
    }

    #[test]
    fn halfway() {
        assert_eq!(progress_fraction(50, Some(100)), Some(0.5));
    }

    #[test]
    fn overshoot_is_clamped() {
        // servers occasionally lie about Content-Length
        assert_eq!(progress_fraction(150, Some(100)), Some(1.0));
    }

    proptest! {
        #[test]
        fn always_within_unit_interval(bytes in any::<u64>(), total in 1..u64::MAX) {
            let p = progress_fraction(bytes, Some(total)).unwrap();
            prop_assert!((0.0..=1.0).contains(&p));
        }

        #[test]
        fn monotonic_in_bytes(a in 0..1_000_000u64, b in 0..1_000_000u64, total in 1..1_000_000u64) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(progress_fraction(lo, Some(total)) <= progress_fraction(hi, Some(total)));
        }
    }
}
