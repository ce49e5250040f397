use crate::core::Easing;

/// Elapsed fraction of `duration_ms`, clamped to `[0, 1]`. A zero-length tween is
/// always complete.
#[inline]
pub fn progress(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return 1.0;
    }
    (elapsed_ms / duration_ms).clamp(0.0, 1.0)
}

/// Lands exactly on `to` at `t >= 1`, so finished tweens hold their end values.
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    if t >= 1.0 {
        return to;
    }
    from + (to - from) * t
}

/// Timing shared by every property of one animation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub started_at_ms: f64,
    pub duration_ms: f64,
    pub easing: Easing,
}

impl Tween {
    pub fn new(started_at_ms: f64, duration_ms: f64, easing: Easing) -> Self {
        Self { started_at_ms, duration_ms, easing }
    }

    /// Frames may carry a timestamp slightly older than the spawn time; that counts as 0.
    pub fn elapsed(&self, now_ms: f64) -> f64 {
        (now_ms - self.started_at_ms).max(0.0)
    }

    pub fn eased(&self, now_ms: f64) -> f64 {
        self.easing.apply(progress(self.elapsed(now_ms), self.duration_ms))
    }

    pub fn is_complete(&self, now_ms: f64) -> bool {
        self.elapsed(now_ms) >= self.duration_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_clamps_and_handles_zero_duration() {
        assert_eq!(progress(-10.0, 100.0), 0.0);
        assert_eq!(progress(50.0, 100.0), 0.5);
        assert_eq!(progress(150.0, 100.0), 1.0);
        assert_eq!(progress(0.0, 0.0), 1.0);
    }

    #[test]
    fn tween_ignores_frames_from_before_start() {
        let tween = Tween::new(1_000.0, 1_500.0, Easing::Linear);
        assert_eq!(tween.eased(990.0), 0.0);
        assert!(!tween.is_complete(2_499.0));
        assert!(tween.is_complete(2_500.0));
        assert_eq!(tween.eased(1_750.0), 0.5);
    }
}
