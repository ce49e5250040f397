pub mod burst;
pub mod render_loop;
pub mod tween;

pub use burst::{Burst, BurstState};
pub use render_loop::{LoopState, RenderLoop};
pub use tween::Tween;
