#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    /// No frames requested
    Idle,
    /// Clearing and redrawing every frame
    Active,
}

/// The persistent clear-and-redraw loop. It only tracks state; the host decides how
/// frames get scheduled.
#[derive(Clone, Debug)]
pub struct RenderLoop {
    state: LoopState,
    frames: u64,
}

impl RenderLoop {
    pub fn new() -> Self {
        Self { state: LoopState::Idle, frames: 0 }
    }

    /// Returns `true` when this call woke the loop, so the caller must schedule a frame.
    pub fn play(&mut self) -> bool {
        let woke = self.state == LoopState::Idle;
        self.state = LoopState::Active;
        woke
    }

    pub fn pause(&mut self) {
        self.state = LoopState::Idle;
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == LoopState::Active
    }

    pub(crate) fn count_frame(&mut self) {
        self.frames += 1;
    }

    /// Frames rendered since creation
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Default for RenderLoop {
    fn default() -> Self {
        Self::new()
    }
}
