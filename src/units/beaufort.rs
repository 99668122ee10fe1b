//! Beaufort scale bucketing.
//!
//! Thresholds are domain calibration carried over verbatim; do not round
//! or simplify them.

/// Upper km/h threshold of each Beaufort bucket, ascending.
/// A speed below `BEAUFORT_THRESHOLDS_KMH[i]` (and at or above the
/// previous threshold) is force `i`; anything at or above the last
/// threshold is force 12.
pub const BEAUFORT_THRESHOLDS_KMH: [f64; 13] = [
    1.1, 5.5, 11.9, 19.7, 28.7, 38.8, 49.9, 61.8, 74.6, 88.1, 102.4, 117.4, 143.0,
];

/// Midpoint used when unbucketing force 12 (open-ended interval).
pub const BEAUFORT_FORCE_12_KMH: f64 = 130.0;

/// Map a wind speed in km/h to a Beaufort force 0–12.
/// Negative input saturates to force 0.
pub fn bucket_beaufort(speed_kmh: f64) -> u8 {
    BEAUFORT_THRESHOLDS_KMH
        .iter()
        .position(|threshold| speed_kmh < *threshold)
        .unwrap_or(12) as u8
}

/// Map a Beaufort force back to a representative km/h speed.
///
/// Returns the midpoint of the force's threshold interval, with force 0
/// pinned to 0 and force 12 pinned to [`BEAUFORT_FORCE_12_KMH`]. This is
/// a lossy approximation, not a true inverse of [`bucket_beaufort`].
pub fn unbucket_beaufort(force: u8) -> f64 {
    match force {
        0 => 0.0,
        f if f >= 12 => BEAUFORT_FORCE_12_KMH,
        f => {
            let index = f as usize;
            (BEAUFORT_THRESHOLDS_KMH[index - 1] + BEAUFORT_THRESHOLDS_KMH[index]) / 2.0
        }
    }
}

/// Descriptive name of a Beaufort force.
pub fn beaufort_label(force: u8) -> &'static str {
    match force {
        0 => "Calm",
        1 => "Light air",
        2 => "Light breeze",
        3 => "Gentle breeze",
        4 => "Moderate breeze",
        5 => "Fresh breeze",
        6 => "Strong breeze",
        7 => "Near gale",
        8 => "Gale",
        9 => "Strong gale",
        10 => "Storm",
        11 => "Violent storm",
        _ => "Hurricane",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_endpoints() {
        assert_eq!(bucket_beaufort(0.0), 0);
        assert_eq!(bucket_beaufort(200.0), 12);
        assert_eq!(bucket_beaufort(-3.0), 0);
    }

    #[test]
    fn test_bucket_boundaries() {
        // Below the first threshold is calm
        assert_eq!(bucket_beaufort(1.0), 0);
        // At a threshold the next force starts
        assert_eq!(bucket_beaufort(1.1), 1);
        assert_eq!(bucket_beaufort(5.4), 1);
        assert_eq!(bucket_beaufort(5.5), 2);
        assert_eq!(bucket_beaufort(117.4), 12);
        assert_eq!(bucket_beaufort(143.0), 12);
    }

    /// Monotonicity: the bucket is non-decreasing in the input.
    #[test]
    fn test_bucket_is_monotonic() {
        let mut previous = 0;
        let mut speed = 0.0;
        while speed < 160.0 {
            let force = bucket_beaufort(speed);
            assert!(force >= previous, "force dropped at {} km/h", speed);
            previous = force;
            speed += 0.25;
        }
    }

    #[test]
    fn test_unbucket_midpoints() {
        assert_eq!(unbucket_beaufort(0), 0.0);
        assert_eq!(unbucket_beaufort(1), (1.1 + 5.5) / 2.0);
        assert_eq!(unbucket_beaufort(6), (38.8 + 49.9) / 2.0);
        assert_eq!(unbucket_beaufort(12), 130.0);
        // Out-of-scale forces clamp to the hurricane midpoint
        assert_eq!(unbucket_beaufort(14), 130.0);
    }

    /// Unbucketed speeds re-bucket to the same force (the lossy inverse
    /// stays inside its own bucket).
    #[test]
    fn test_unbucket_stays_in_bucket() {
        for force in 0u8..=12 {
            assert_eq!(bucket_beaufort(unbucket_beaufort(force)), force);
        }
    }

    #[test]
    fn test_labels_cover_scale() {
        assert_eq!(beaufort_label(0), "Calm");
        assert_eq!(beaufort_label(12), "Hurricane");
    }
}
