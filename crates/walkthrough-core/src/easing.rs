//! Easing curves for camera flights.

use serde::{Deserialize, Serialize};

/// Remapping of linear progress in `[0, 1]` to eased progress in `[0, 1]`.
///
/// Every variant is monotonically non-decreasing and maps `0 -> 0` and `1 -> 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Symmetric cubic ease-in-out: accelerate, then decelerate.
    #[default]
    InOutCubic,
    /// Cubic ease-out: start fast, settle slowly.
    OutCubic,
    /// No easing.
    Linear,
}

impl Easing {
    /// Applies the curve. Input outside `[0, 1]` is clamped first.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::InOutCubic => ease_in_out_cubic(t),
            Easing::OutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::Linear => t,
        }
    }
}

/// `4t³` below the midpoint, `1 - (2 - 2t)³ / 2` above it.
///
/// Both branches meet at exactly `0.5` for `t = 0.5`.
pub fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const ALL: [Easing; 3] = [Easing::InOutCubic, Easing::OutCubic, Easing::Linear];

    #[test]
    fn test_endpoints() {
        for easing in ALL {
            assert_eq!(easing.apply(0.0), 0.0, "{easing:?}");
            assert_eq!(easing.apply(1.0), 1.0, "{easing:?}");
        }
    }

    #[test]
    fn test_in_out_cubic_midpoint_is_exact() {
        assert_eq!(ease_in_out_cubic(0.5), 0.5);
        assert_eq!(ease_in_out_cubic(0.25), 0.0625);
        assert_eq!(ease_in_out_cubic(0.75), 0.9375);
    }

    #[test]
    fn test_out_of_range_input_is_clamped() {
        assert_eq!(Easing::InOutCubic.apply(-3.0), 0.0);
        assert_eq!(Easing::InOutCubic.apply(7.0), 1.0);
    }

    #[test]
    fn test_dense_samples_are_monotone() {
        for easing in ALL {
            let mut prev = 0.0;
            for i in 0..=10_000 {
                let value = easing.apply(i as f32 / 10_000.0);
                assert!(value >= prev, "{easing:?} decreased at sample {i}");
                assert!((0.0..=1.0).contains(&value));
                prev = value;
            }
        }
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Easing::InOutCubic).unwrap();
        assert_eq!(json, r#""in_out_cubic""#);
        let parsed: Easing = serde_json::from_str(r#""out_cubic""#).unwrap();
        assert_eq!(parsed, Easing::OutCubic);
    }

    proptest! {
        #[test]
        fn eased_progress_is_monotone(a in 0.0f32..=1.0, b in 0.0f32..=1.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            for easing in ALL {
                prop_assert!(easing.apply(lo) <= easing.apply(hi));
            }
        }

        #[test]
        fn eased_progress_stays_in_unit_range(t in -2.0f32..3.0) {
            for easing in ALL {
                let value = easing.apply(t);
                prop_assert!((0.0..=1.0).contains(&value));
            }
        }
    }
}
