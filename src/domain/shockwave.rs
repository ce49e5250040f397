//! Expanding ring drawn behind a burst (off by default)

use serde::{Deserialize, Serialize};

use crate::animation::tween::{lerp, progress};
use crate::core::{Easing, Rng};

use super::config::IntRange;
use super::particle::Point;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShockwaveConfig {
    pub enabled: bool,
    pub color: String,
    pub start_radius: f64,
    /// Final ring radius
    pub radius: IntRange,
    /// Radius and line-width tween length
    pub duration_ms: IntRange,
    pub line_width: f64,
    pub alpha: f64,
    /// Alpha fades to zero linearly over this window
    pub fade_ms: IntRange,
}

impl Default for ShockwaveConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            color: "#F00".to_string(),
            start_radius: 0.1,
            radius: IntRange::new(80, 160),
            duration_ms: IntRange::new(1200, 1800),
            line_width: 6.0,
            alpha: 0.5,
            fade_ms: IntRange::new(600, 800),
        }
    }
}

impl ShockwaveConfig {
    pub fn validate(&self) -> Result<(), String> {
        if !self.enabled {
            return Ok(());
        }
        if self.radius.min > self.radius.max || self.radius.min < 0 {
            return Err("shockwave.radius must be an ordered, non-negative range".to_string());
        }
        if self.duration_ms.min > self.duration_ms.max || self.duration_ms.min <= 0 {
            return Err("shockwave.duration_ms must be an ordered, positive range".to_string());
        }
        if self.fade_ms.min > self.fade_ms.max || self.fade_ms.min <= 0 {
            return Err("shockwave.fade_ms must be an ordered, positive range".to_string());
        }
        if !(0.0..=1.0).contains(&self.alpha) {
            return Err(format!("shockwave.alpha {} must lie in [0, 1]", self.alpha));
        }
        Ok(())
    }
}

/// Live ring state. Radius and line width follow the burst's easing over the ring's
/// own duration, alpha fades linearly over a shorter window.
#[derive(Clone, Debug, PartialEq)]
pub struct Shockwave {
    pub center: Point,
    pub color: String,
    pub radius: f64,
    pub line_width: f64,
    pub alpha: f64,
    pub start_radius: f64,
    pub end_radius: f64,
    pub start_line_width: f64,
    pub start_alpha: f64,
    pub duration_ms: f64,
    pub fade_ms: f64,
}

impl Shockwave {
    pub fn spawn(center: Point, config: &ShockwaveConfig, rng: &mut Rng) -> Self {
        Self {
            center,
            color: config.color.clone(),
            radius: config.start_radius,
            line_width: config.line_width,
            alpha: config.alpha,
            start_radius: config.start_radius,
            end_radius: rng.random_int(config.radius.min, config.radius.max) as f64,
            start_line_width: config.line_width,
            start_alpha: config.alpha,
            duration_ms: rng.random_int(config.duration_ms.min, config.duration_ms.max) as f64,
            fade_ms: rng.random_int(config.fade_ms.min, config.fade_ms.max) as f64,
        }
    }

    pub(crate) fn sample(&mut self, elapsed_ms: f64, easing: Easing) {
        let t = easing.apply(progress(elapsed_ms, self.duration_ms));
        self.radius = lerp(self.start_radius, self.end_radius, t);
        self.line_width = lerp(self.start_line_width, 0.0, t);
        let fade = Easing::Linear.apply(progress(elapsed_ms, self.fade_ms));
        self.alpha = lerp(self.start_alpha, 0.0, fade);
    }

    pub(crate) fn is_complete(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.duration_ms.max(self.fade_ms)
    }
}
