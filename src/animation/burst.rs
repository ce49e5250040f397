//! One batch of particles spawned by a single accepted pointer-down

use crate::core::Rng;
use crate::dom::canvas::Surface;
use crate::domain::{ExplosionConfig, Particle, Point, Shockwave};

use super::tween::{lerp, Tween};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BurstState {
    Running,
    /// The final frame has been drawn; drop the burst.
    Finished,
}

#[derive(Clone, Debug)]
pub struct Burst {
    tween: Tween,
    particles: Vec<Particle>,
    shockwave: Option<Shockwave>,
}

impl Burst {
    pub fn spawn(origin: Point, now_ms: f64, config: &ExplosionConfig, rng: &mut Rng) -> Self {
        let particles = (0..config.particle_count)
            .map(|_| Particle::spawn(origin, config, rng))
            .collect();
        let duration_ms = rng.random_int(config.duration_ms.min, config.duration_ms.max) as f64;
        let shockwave = config
            .shockwave
            .enabled
            .then(|| Shockwave::spawn(origin, &config.shockwave, rng));

        Self {
            tween: Tween::new(now_ms, duration_ms, config.easing),
            particles,
            shockwave,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn duration_ms(&self) -> f64 {
        self.tween.duration_ms
    }

    /// Advance every particle to `now_ms`, then draw the ring and each particle. The
    /// burst finishes once both the particles and the ring have run their course.
    pub fn tick<S: Surface>(&mut self, now_ms: f64, surface: &mut S) -> Result<BurstState, String> {
        let t = self.tween.eased(now_ms);
        for p in &mut self.particles {
            p.x = lerp(p.start.x, p.end.x, t);
            p.y = lerp(p.start.y, p.end.y, t);
            p.radius = lerp(p.start_radius, p.end_radius, t);
        }
        let elapsed = self.tween.elapsed(now_ms);
        if let Some(ring) = &mut self.shockwave {
            ring.sample(elapsed, self.tween.easing);
        }

        if let Some(ring) = &self.shockwave {
            surface.stroke_circle(ring.center, ring.radius, ring.line_width, &ring.color, ring.alpha)?;
        }
        for p in &self.particles {
            surface.fill_circle(p.position(), p.radius, &p.color)?;
        }

        let ring_done = self.shockwave.as_ref().map_or(true, |ring| ring.is_complete(elapsed));
        Ok(if self.tween.is_complete(now_ms) && ring_done {
            BurstState::Finished
        } else {
            BurstState::Running
        })
    }
}
