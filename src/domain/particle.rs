use crate::core::Rng;

use super::config::ExplosionConfig;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl std::ops::Sub for Point {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

/// One dot of a burst. `x`, `y` and `radius` are the live values the burst
/// overwrites every tick; the `start_*` / `end_*` fields never change.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: String,
    pub start: Point,
    pub start_radius: f64,
    pub end: Point,
    pub end_radius: f64,
    /// Direction in whole degrees, `[0, 360)`
    pub angle_deg: i32,
    /// Signed travel distance
    pub distance: f64,
}

impl Particle {
    pub fn spawn(origin: Point, config: &ExplosionConfig, rng: &mut Rng) -> Self {
        let color = rng
            .pick(&config.colors)
            .cloned()
            .unwrap_or_else(|| super::config::DEFAULT_COLORS[0].to_string());
        let radius = rng.random_int(config.radius.min, config.radius.max) as f64;
        let angle_deg = rng.random_int(0, 359);
        let distance = rng.random_int(config.distance.min, config.distance.max) as f64 * rng.sign();
        let end = end_position(origin, angle_deg, distance);

        Self {
            x: origin.x,
            y: origin.y,
            radius,
            color,
            start: origin,
            start_radius: radius,
            end,
            end_radius: config.end_radius,
            angle_deg,
            distance,
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// `origin + distance * (cos θ, sin θ)`
pub fn end_position(origin: Point, angle_deg: i32, distance: f64) -> Point {
    let angle = (angle_deg as f64).to_radians();
    Point::new(origin.x + distance * angle.cos(), origin.y + distance * angle.sin())
}
