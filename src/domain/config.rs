use serde::{Deserialize, Serialize};

use crate::core::Easing;
use crate::dom::filter::FilterPolicy;

use super::shockwave::ShockwaveConfig;

pub const DEFAULT_CANVAS_SELECTOR: &str = ".explosion";
pub const DEFAULT_PARTICLE_COUNT: u32 = 30;
pub const DEFAULT_COLORS: [&str; 4] = ["#FF1461", "#18FF92", "#5A87FF", "#FBF38C"];
pub const DEFAULT_END_RADIUS: f64 = 0.1;
pub const DEFAULT_CANVAS_SCALE: f64 = 2.0;
pub const DEFAULT_RESIZE_DEBOUNCE_MS: u32 = 500;

/// Inclusive integer range used for every randomized quantity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntRange {
    pub min: i32,
    pub max: i32,
}

impl IntRange {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min as f64 && value <= self.max as f64
    }

    fn check(&self, name: &str) -> Result<(), String> {
        if self.min > self.max {
            return Err(format!("{name}: min {} exceeds max {}", self.min, self.max));
        }
        Ok(())
    }

    fn check_non_negative(&self, name: &str) -> Result<(), String> {
        self.check(name)?;
        if self.min < 0 {
            return Err(format!("{name}: min {} must not be negative", self.min));
        }
        Ok(())
    }
}

/// Everything tunable about the effect. Every field has a default, so a JSON object
/// only needs the keys it overrides.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplosionConfig {
    /// CSS selector of the overlay canvas
    pub canvas_selector: String,
    pub particle_count: u32,
    pub colors: Vec<String>,
    /// Spawn radius in CSS px
    pub radius: IntRange,
    /// Travel distance magnitude; direction sign is random
    pub distance: IntRange,
    pub duration_ms: IntRange,
    /// Radius every particle shrinks to
    pub end_radius: f64,
    pub easing: Easing,
    pub filter: FilterPolicy,
    /// Element ids that never trigger, nor do their descendants
    pub blocked_ids: Vec<String>,
    /// Classes that mark an element as interactive (ancestor walk only)
    pub blocked_classes: Vec<String>,
    /// Document events that can start a burst
    pub trigger_events: Vec<String>,
    /// Backing-store multiplier over the CSS viewport
    pub canvas_scale: f64,
    pub resize_debounce_ms: u32,
    /// Stop the frame loop once no burst is left
    pub idle_when_empty: bool,
    pub shockwave: ShockwaveConfig,
    /// Fixed RNG seed; entropy-seeded when absent
    pub seed: Option<u32>,
}

impl Default for ExplosionConfig {
    fn default() -> Self {
        Self {
            canvas_selector: DEFAULT_CANVAS_SELECTOR.to_string(),
            particle_count: DEFAULT_PARTICLE_COUNT,
            colors: DEFAULT_COLORS.iter().map(|c| c.to_string()).collect(),
            radius: IntRange::new(16, 32),
            distance: IntRange::new(50, 180),
            duration_ms: IntRange::new(1200, 1800),
            end_radius: DEFAULT_END_RADIUS,
            easing: Easing::OutExpo,
            filter: FilterPolicy::AncestorWalk,
            blocked_ids: vec!["sidebar".to_string(), "toggle-sidebar".to_string()],
            blocked_classes: vec!["router-link".to_string()],
            trigger_events: vec!["mousedown".to_string()],
            canvas_scale: DEFAULT_CANVAS_SCALE,
            resize_debounce_ms: DEFAULT_RESIZE_DEBOUNCE_MS,
            idle_when_empty: true,
            shockwave: ShockwaveConfig::default(),
            seed: None,
        }
    }
}

impl ExplosionConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: ExplosionConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.canvas_selector.trim().is_empty() {
            return Err("canvas_selector must not be empty".to_string());
        }
        if self.particle_count == 0 {
            return Err("particle_count must be at least 1".to_string());
        }
        if self.colors.is_empty() {
            return Err("colors must contain at least one entry".to_string());
        }
        self.radius.check_non_negative("radius")?;
        self.distance.check_non_negative("distance")?;
        self.duration_ms.check("duration_ms")?;
        if self.duration_ms.min <= 0 {
            return Err("duration_ms: min must be positive".to_string());
        }
        if !(self.end_radius.is_finite() && self.end_radius >= 0.0) {
            return Err(format!("end_radius {} must be a non-negative number", self.end_radius));
        }
        if !(self.canvas_scale.is_finite() && self.canvas_scale > 0.0) {
            return Err(format!("canvas_scale {} must be positive", self.canvas_scale));
        }
        if self.trigger_events.is_empty() {
            return Err("trigger_events must name at least one event".to_string());
        }
        self.shockwave.validate()
    }
}
