//! Explosion controller
//!
//! Owns the surface, the live bursts and the render loop. The host (the wasm layer or a
//! test) feeds it pointer-downs, animation frames and settled viewport sizes; it never
//! reaches for the DOM itself.

use crate::animation::{Burst, LoopState, RenderLoop};
use crate::core::Rng;
use crate::dom::canvas::{CanvasSize, Surface};
use crate::dom::filter::{InteractivityFilter, TargetNode};
use crate::dom::pointer::PointerSample;
use crate::domain::{ExplosionConfig, Point};

#[path = "pointer/pointer_down.rs"]
mod pointer_down;
#[path = "frame/frame.rs"]
mod frame;
#[path = "resize/resize.rs"]
mod resize;

/// Result of one pointer-down
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerOutcome {
    /// Filtered out as a click on something interactive
    Rejected,
    /// A burst was spawned at `origin`. `resumed` is set when the render loop was idle
    /// and the host must schedule a frame.
    Spawned { origin: Point, resumed: bool },
}

pub struct ExplosionCore<S: Surface> {
    config: ExplosionConfig,
    filter: InteractivityFilter,
    surface: S,
    rng: Rng,
    bursts: Vec<Burst>,
    render_loop: RenderLoop,
    last_pointer: Point,
    size: Option<CanvasSize>,
    sizing_passes: u32,
}

impl<S: Surface> ExplosionCore<S> {
    pub fn new(config: ExplosionConfig, surface: S) -> Result<Self, String> {
        config.validate()?;
        let rng = config.seed.map(Rng::new).unwrap_or_else(Rng::from_entropy);
        Ok(Self {
            filter: InteractivityFilter::from_config(&config),
            config,
            surface,
            rng,
            bursts: Vec::new(),
            render_loop: RenderLoop::new(),
            last_pointer: Point::default(),
            size: None,
            sizing_passes: 0,
        })
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn bursts(&self) -> &[Burst] {
        &self.bursts
    }

    pub fn live_particles(&self) -> usize {
        self.bursts.iter().map(|b| b.particles().len()).sum()
    }

    pub fn loop_state(&self) -> LoopState {
        self.render_loop.state()
    }

    pub fn frames_rendered(&self) -> u64 {
        self.render_loop.frames()
    }

    /// Last resolved pointer position, canvas-relative
    pub fn last_pointer(&self) -> Point {
        self.last_pointer
    }

    /// Sizing passes applied since creation
    pub fn sizing_passes(&self) -> u32 {
        self.sizing_passes
    }

    /// Size applied by the most recent sizing pass
    pub fn size(&self) -> Option<CanvasSize> {
        self.size
    }

    /// Filter, resolve coordinates and spawn a burst for one pointer-down.
    pub fn pointer_down<T: TargetNode>(
        &mut self,
        target: Option<&T>,
        sample: &PointerSample,
        canvas_origin: Point,
        now_ms: f64,
    ) -> PointerOutcome {
        pointer_down::pointer_down(self, target, sample, canvas_origin, now_ms)
    }

    /// Spawn a burst at a canvas-relative point and wake the loop. Returns `true` when
    /// the loop was idle.
    pub fn spawn_burst(&mut self, origin: Point, now_ms: f64) -> bool {
        pointer_down::spawn_burst(self, origin, now_ms)
    }

    /// Clear and redraw one frame. Returns `false` once the loop has gone idle and no
    /// further frame is needed.
    pub fn frame(&mut self, now_ms: f64) -> bool {
        frame::frame(self, now_ms)
    }

    /// Stop the loop without touching live bursts, e.g. when the host could not
    /// schedule a frame.
    pub fn pause(&mut self) {
        self.render_loop.pause();
    }

    /// One sizing pass for the given CSS viewport.
    pub fn resize(&mut self, viewport_width: f64, viewport_height: f64) -> Result<CanvasSize, String> {
        resize::resize(self, viewport_width, viewport_height)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
