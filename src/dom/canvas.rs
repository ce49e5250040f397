use crate::domain::Point;

/// Backing-store and CSS dimensions for one sizing pass
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasSize {
    pub backing_width: u32,
    pub backing_height: u32,
    pub css_width: f64,
    pub css_height: f64,
    pub scale: f64,
}

impl CanvasSize {
    pub fn for_viewport(width: f64, height: f64, scale: f64) -> Self {
        let width = width.max(0.0);
        let height = height.max(0.0);
        Self {
            backing_width: (width * scale).round() as u32,
            backing_height: (height * scale).round() as u32,
            css_width: width,
            css_height: height,
            scale,
        }
    }
}

/// Drawing target for bursts. Coordinates are CSS px; the implementation owns the
/// scale transform.
pub trait Surface {
    /// Resize the backing store and set the transform to exactly `size.scale`.
    fn apply_size(&mut self, size: &CanvasSize) -> Result<(), String>;
    /// Wipe the whole backing store.
    fn clear(&mut self) -> Result<(), String>;
    fn fill_circle(&mut self, center: Point, radius: f64, color: &str) -> Result<(), String>;
    /// Stroke at `alpha`, restoring full opacity afterwards.
    fn stroke_circle(
        &mut self,
        center: Point,
        radius: f64,
        line_width: f64,
        color: &str,
        alpha: f64,
    ) -> Result<(), String>;
}
