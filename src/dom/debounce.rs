//! Coalesce bursts of events into one trailing call

/// Host timer API (`setTimeout` / `clearTimeout` in the browser).
pub trait Timers {
    type Handle: Copy;

    fn set_timeout(&mut self, delay_ms: u32) -> Result<Self::Handle, String>;
    fn clear_timeout(&mut self, handle: Self::Handle);
}

/// Each `trigger` cancels the pending timer and arms a new one, so only the last
/// trigger in a quiet window reaches `fire`.
#[derive(Clone, Debug)]
pub struct Debounce<H> {
    wait_ms: u32,
    pending: Option<H>,
}

impl<H: Copy> Debounce<H> {
    pub fn new(wait_ms: u32) -> Self {
        Self { wait_ms, pending: None }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn trigger<T: Timers<Handle = H>>(&mut self, timers: &mut T) -> Result<(), String> {
        if let Some(handle) = self.pending.take() {
            timers.clear_timeout(handle);
        }
        self.pending = Some(timers.set_timeout(self.wait_ms)?);
        Ok(())
    }

    /// Call from the timer callback. Returns `true` when the debounced work should run.
    pub fn fire(&mut self) -> bool {
        self.pending.take().is_some()
    }
}
