//! Easing curves
//!
//! `OutExpo` matches the usual web definition: `1 - 2^(-10t)`, pinned to 1 at t = 1.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    #[default]
    OutExpo,
}

impl Easing {
    /// Map progress `t` (clamped to `[0, 1]`) onto the curve
    #[inline]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::OutExpo => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2f64.powf(-10.0 * t)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_expo_endpoints() {
        assert_eq!(Easing::OutExpo.apply(0.0), 0.0);
        assert_eq!(Easing::OutExpo.apply(1.0), 1.0);
        assert_eq!(Easing::OutExpo.apply(2.0), 1.0);
        assert_eq!(Easing::OutExpo.apply(-1.0), 0.0);
    }

    #[test]
    fn out_expo_is_monotonic_and_front_loaded() {
        let mut prev = 0.0;
        for i in 1..=100 {
            let v = Easing::OutExpo.apply(i as f64 / 100.0);
            assert!(v >= prev);
            prev = v;
        }
        // Decelerating: most of the travel happens in the first half.
        assert!(Easing::OutExpo.apply(0.5) > 0.95);
    }

    #[test]
    fn linear_is_identity_inside_unit_range() {
        assert_eq!(Easing::Linear.apply(0.25), 0.25);
        assert_eq!(Easing::Linear.apply(1.5), 1.0);
    }
}
