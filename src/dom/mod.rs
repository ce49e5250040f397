pub mod canvas;
pub mod debounce;
pub mod filter;
pub mod pointer;

pub use canvas::{CanvasSize, Surface};
pub use debounce::{Debounce, Timers};
pub use filter::{FilterPolicy, InteractivityFilter, TargetNode};
pub use pointer::PointerSample;
