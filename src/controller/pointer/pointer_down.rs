use crate::animation::Burst;
use crate::dom::canvas::Surface;
use crate::dom::filter::TargetNode;
use crate::dom::pointer::{self, PointerSample};
use crate::domain::Point;

use super::{ExplosionCore, PointerOutcome};

pub(super) fn pointer_down<S: Surface, T: TargetNode>(
    core: &mut ExplosionCore<S>,
    target: Option<&T>,
    sample: &PointerSample,
    canvas_origin: Point,
    now_ms: f64,
) -> PointerOutcome {
    if !core.filter.accepts(target) {
        return PointerOutcome::Rejected;
    }

    let origin = pointer::resolve(sample, canvas_origin, core.last_pointer);
    core.last_pointer = origin;
    let resumed = spawn_burst(core, origin, now_ms);
    PointerOutcome::Spawned { origin, resumed }
}

pub(super) fn spawn_burst<S: Surface>(core: &mut ExplosionCore<S>, origin: Point, now_ms: f64) -> bool {
    let resumed = core.render_loop.play();
    let burst = Burst::spawn(origin, now_ms, &core.config, &mut core.rng);
    core.bursts.push(burst);
    resumed
}
