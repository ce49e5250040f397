use crate::animation::BurstState;
use crate::dom::canvas::Surface;

use super::ExplosionCore;

pub(super) fn frame<S: Surface>(core: &mut ExplosionCore<S>, now_ms: f64) -> bool {
    if !core.render_loop.is_active() {
        return false;
    }

    // Clear before any burst draws.
    if let Err(e) = core.surface.clear() {
        console_error!("explosion: clear failed: {e}");
    }
    core.render_loop.count_frame();

    if core.bursts.is_empty() && core.config.idle_when_empty {
        core.render_loop.pause();
        return false;
    }

    let surface = &mut core.surface;
    core.bursts.retain_mut(|burst| match burst.tick(now_ms, surface) {
        Ok(BurstState::Running) => true,
        Ok(BurstState::Finished) => false,
        Err(e) => {
            console_error!("explosion: draw failed, dropping burst: {e}");
            false
        }
    });

    true
}
