use super::*;
use crate::dom::filter::fake::FakeNode;
use crate::dom::filter::FilterPolicy;
use crate::domain::IntRange;

#[derive(Debug, Clone, PartialEq)]
enum Op {
    Size(CanvasSize),
    Clear,
    Fill { center: Point, radius: f64, color: String },
    Stroke { radius: f64, alpha: f64 },
}

#[derive(Default)]
struct RecordingSurface {
    ops: Vec<Op>,
    transform: f64,
    fail_draws: bool,
}

impl RecordingSurface {
    fn take(&mut self) -> Vec<Op> {
        std::mem::take(&mut self.ops)
    }
}

impl Surface for RecordingSurface {
    fn apply_size(&mut self, size: &CanvasSize) -> Result<(), String> {
        self.transform = size.scale;
        self.ops.push(Op::Size(*size));
        Ok(())
    }

    fn clear(&mut self) -> Result<(), String> {
        self.ops.push(Op::Clear);
        Ok(())
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: &str) -> Result<(), String> {
        if self.fail_draws {
            return Err("arc: IndexSizeError".to_string());
        }
        self.ops.push(Op::Fill { center, radius, color: color.to_string() });
        Ok(())
    }

    fn stroke_circle(
        &mut self,
        _center: Point,
        radius: f64,
        _line_width: f64,
        _color: &str,
        alpha: f64,
    ) -> Result<(), String> {
        self.ops.push(Op::Stroke { radius, alpha });
        Ok(())
    }
}

fn core_with(config: ExplosionConfig) -> ExplosionCore<RecordingSurface> {
    ExplosionCore::new(config, RecordingSurface::default()).expect("valid config")
}

fn seeded() -> ExplosionConfig {
    ExplosionConfig { seed: Some(1234), ..ExplosionConfig::default() }
}

fn plain_target() -> FakeNode {
    FakeNode::root().child("BODY").child("DIV")
}

#[test]
fn click_on_plain_target_spawns_thirty_particles_and_wakes_loop() {
    let mut core = core_with(seeded());
    assert_eq!(core.loop_state(), LoopState::Idle);

    let target = plain_target();
    let outcome = core.pointer_down(
        Some(&target),
        &PointerSample::mouse(100.0, 100.0),
        Point::new(0.0, 8.0),
        0.0,
    );

    assert_eq!(
        outcome,
        PointerOutcome::Spawned { origin: Point::new(100.0, 92.0), resumed: true }
    );
    assert_eq!(core.loop_state(), LoopState::Active);
    assert_eq!(core.bursts().len(), 1);
    assert_eq!(core.live_particles(), 30);
    for p in core.bursts()[0].particles() {
        assert_eq!(p.position(), Point::new(100.0, 92.0));
    }
}

#[test]
fn second_click_does_not_ask_for_another_frame_loop() {
    let mut core = core_with(seeded());
    let target = plain_target();
    core.pointer_down(Some(&target), &PointerSample::mouse(1.0, 1.0), Point::default(), 0.0);
    let second = core.pointer_down(Some(&target), &PointerSample::mouse(2.0, 2.0), Point::default(), 10.0);
    assert!(matches!(second, PointerOutcome::Spawned { resumed: false, .. }));
    assert_eq!(core.bursts().len(), 2);
}

#[test]
fn touch_sample_resolves_against_canvas_offset() {
    let mut core = core_with(seeded());
    let outcome = core.pointer_down(
        Some(&plain_target()),
        &PointerSample::touch(50.0, 60.0),
        Point::new(10.0, 20.0),
        0.0,
    );
    assert!(matches!(outcome, PointerOutcome::Spawned { origin, .. } if origin == Point::new(40.0, 40.0)));
}

#[test]
fn coordinate_free_event_reuses_last_pointer() {
    let mut core = core_with(seeded());
    let target = plain_target();
    core.pointer_down(Some(&target), &PointerSample::mouse(30.0, 40.0), Point::default(), 0.0);
    let outcome = core.pointer_down(Some(&target), &PointerSample::default(), Point::new(500.0, 500.0), 5.0);
    assert!(matches!(outcome, PointerOutcome::Spawned { origin, .. } if origin == Point::new(30.0, 40.0)));
}

#[test]
fn click_inside_link_is_rejected_and_leaves_state_alone() {
    let mut core = core_with(seeded());
    let link = FakeNode::root().child("BODY").child_with("A", "", &[], &[("href", "/")]);
    let icon = link.child("I");
    let outcome = core.pointer_down(Some(&icon), &PointerSample::mouse(5.0, 5.0), Point::default(), 0.0);
    assert_eq!(outcome, PointerOutcome::Rejected);
    assert!(core.bursts().is_empty());
    assert_eq!(core.loop_state(), LoopState::Idle);
    assert_eq!(core.last_pointer(), Point::default());
}

#[test]
fn shallow_policy_lets_nested_link_content_through() {
    let mut core = core_with(ExplosionConfig { filter: FilterPolicy::Shallow, ..seeded() });
    let link = FakeNode::root().child("BODY").child("A");
    let outcome = core.pointer_down(Some(&link.child("I")), &PointerSample::mouse(5.0, 5.0), Point::default(), 0.0);
    assert!(matches!(outcome, PointerOutcome::Spawned { .. }));
}

#[test]
fn frame_clears_before_drawing_each_particle() {
    let mut core = core_with(seeded());
    core.spawn_burst(Point::new(50.0, 50.0), 0.0);
    core.surface_mut().take();

    assert!(core.frame(16.0));
    let ops = core.surface_mut().take();
    assert_eq!(ops.first(), Some(&Op::Clear));
    let fills = ops.iter().filter(|op| matches!(op, Op::Fill { .. })).count();
    assert_eq!(fills, 30);
    assert_eq!(ops.iter().filter(|op| **op == Op::Clear).count(), 1);
}

#[test]
fn particles_travel_and_shrink_to_the_floor() {
    let mut core = core_with(seeded());
    core.spawn_burst(Point::new(0.0, 0.0), 0.0);
    let duration = core.bursts()[0].duration_ms();
    assert!((1200.0..=1800.0).contains(&duration));
    let expected: Vec<(Point, String)> = core.bursts()[0]
        .particles()
        .iter()
        .map(|p| (p.end, p.color.clone()))
        .collect();

    core.frame(duration);
    let fills: Vec<Op> = core
        .surface_mut()
        .take()
        .into_iter()
        .filter(|op| matches!(op, Op::Fill { .. }))
        .collect();
    assert_eq!(fills.len(), expected.len());
    for (op, (end, color)) in fills.iter().zip(&expected) {
        let Op::Fill { center, radius, color: drawn } = op else { unreachable!() };
        assert_eq!(center, end);
        assert!(*radius <= 0.1);
        assert_eq!(drawn, color);
    }
    // Final state drawn, burst dropped.
    assert!(core.bursts().is_empty());
}

#[test]
fn mid_flight_radius_is_between_spawn_and_floor() {
    let mut core = core_with(seeded());
    core.spawn_burst(Point::new(0.0, 0.0), 0.0);
    let starts: Vec<f64> = core.bursts()[0].particles().iter().map(|p| p.start_radius).collect();
    core.frame(100.0);
    for (p, start) in core.bursts()[0].particles().iter().zip(starts) {
        assert!(p.radius < start && p.radius > 0.1);
    }
}

#[test]
fn loop_goes_idle_one_frame_after_the_last_burst() {
    let mut core = core_with(seeded());
    core.spawn_burst(Point::new(0.0, 0.0), 0.0);
    assert!(core.frame(5_000.0));
    assert!(core.bursts().is_empty());
    assert_eq!(core.loop_state(), LoopState::Active);

    core.surface_mut().take();
    assert!(!core.frame(5_016.0));
    assert_eq!(core.surface_mut().take(), vec![Op::Clear]);
    assert_eq!(core.loop_state(), LoopState::Idle);
    assert!(!core.frame(5_032.0));
    assert!(core.surface_mut().take().is_empty());
}

#[test]
fn loop_keeps_running_when_idle_is_disabled() {
    let mut core = core_with(ExplosionConfig { idle_when_empty: false, ..seeded() });
    core.spawn_burst(Point::new(0.0, 0.0), 0.0);
    for i in 0..10 {
        assert!(core.frame(3_000.0 + i as f64 * 16.0));
    }
    assert_eq!(core.loop_state(), LoopState::Active);
    assert_eq!(core.frames_rendered(), 10);
}

#[test]
fn failing_draw_drops_only_that_burst() {
    let mut core = core_with(seeded());
    core.spawn_burst(Point::new(0.0, 0.0), 0.0);
    core.surface_mut().fail_draws = true;
    assert!(core.frame(16.0));
    assert!(core.bursts().is_empty());
}

#[test]
fn overlapping_bursts_share_one_clear_per_frame() {
    let mut core = core_with(seeded());
    core.spawn_burst(Point::new(0.0, 0.0), 0.0);
    core.spawn_burst(Point::new(300.0, 300.0), 200.0);
    core.surface_mut().take();
    core.frame(400.0);
    let ops = core.surface_mut().take();
    assert_eq!(ops.iter().filter(|op| **op == Op::Clear).count(), 1);
    assert_eq!(ops.iter().filter(|op| matches!(op, Op::Fill { .. })).count(), 60);
}

#[test]
fn shockwave_strokes_a_fading_ring() {
    let mut config = seeded();
    config.shockwave.enabled = true;
    let mut core = core_with(config);
    core.spawn_burst(Point::new(0.0, 0.0), 0.0);
    core.surface_mut().take();
    core.frame(16.0);
    let ops = core.surface_mut().take();
    let ring = ops.iter().find_map(|op| match op {
        Op::Stroke { radius, alpha } => Some((*radius, *alpha)),
        _ => None,
    });
    let (radius, alpha) = ring.expect("ring drawn");
    assert!(radius > 0.1);
    assert!(alpha < 0.5 && alpha > 0.0);
}

#[test]
fn ring_outliving_particles_keeps_the_burst_alive() {
    let mut config = seeded();
    config.duration_ms = IntRange::new(1200, 1200);
    config.shockwave.enabled = true;
    config.shockwave.duration_ms = IntRange::new(3000, 3000);
    let mut core = core_with(config);
    core.spawn_burst(Point::new(0.0, 0.0), 0.0);

    core.frame(1500.0);
    assert_eq!(core.bursts().len(), 1);
    // Particles already sit at their end state.
    for p in core.bursts()[0].particles() {
        assert_eq!(p.position(), p.end);
    }

    core.frame(3000.0);
    assert!(core.bursts().is_empty());
}

#[test]
fn resize_sets_double_backing_store_without_compounding() {
    let mut core = core_with(seeded());
    for pass in 1..=3 {
        let size = core.resize(800.0, 600.0).expect("resize");
        assert_eq!((size.backing_width, size.backing_height), (1600, 1200));
        assert_eq!((size.css_width, size.css_height), (800.0, 600.0));
        assert_eq!(core.sizing_passes(), pass);
    }
    assert_eq!(core.surface().transform, 2.0);
    assert_eq!(core.size().map(|s| s.backing_width), Some(1600));
}

#[test]
fn invalid_config_is_refused() {
    let config = ExplosionConfig { particle_count: 0, ..ExplosionConfig::default() };
    assert!(ExplosionCore::new(config, RecordingSurface::default()).is_err());
}
