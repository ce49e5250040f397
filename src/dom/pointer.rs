use crate::domain::Point;

/// Raw coordinates carried by a pointer-down event
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
    /// `clientX/clientY` on the event itself (mouse and pointer events)
    pub client: Option<(f64, f64)>,
    /// `touches[0].clientX/clientY` (touch events)
    pub first_touch: Option<(f64, f64)>,
}

impl PointerSample {
    pub fn mouse(x: f64, y: f64) -> Self {
        Self { client: Some((x, y)), first_touch: None }
    }

    pub fn touch(x: f64, y: f64) -> Self {
        Self { client: None, first_touch: Some((x, y)) }
    }

    pub fn is_empty(&self) -> bool {
        self.client.is_none() && self.first_touch.is_none()
    }
}

/// Canvas-relative point for `sample`. Mouse coordinates win over touch; an event with
/// neither leaves the pointer at `previous`.
pub fn resolve(sample: &PointerSample, canvas_origin: Point, previous: Point) -> Point {
    match sample.client.or(sample.first_touch) {
        Some((x, y)) => Point::new(x, y) - canvas_origin,
        None => previous,
    }
}
