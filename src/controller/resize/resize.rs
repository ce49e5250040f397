use crate::dom::canvas::{CanvasSize, Surface};

use super::ExplosionCore;

pub(super) fn resize<S: Surface>(
    core: &mut ExplosionCore<S>,
    viewport_width: f64,
    viewport_height: f64,
) -> Result<CanvasSize, String> {
    let size = CanvasSize::for_viewport(viewport_width, viewport_height, core.config.canvas_scale);
    core.surface.apply_size(&size)?;
    core.size = Some(size);
    core.sizing_passes += 1;
    Ok(size)
}
