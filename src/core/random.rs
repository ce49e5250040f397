//! Random source for burst geometry
//!
//! Xorshift32, same generator the engine uses for its world RNG. Integer draws are
//! inclusive on both ends: `random_int(16, 32)` can return 16 and 32.

/// Xorshift32 random number generator
#[inline]
fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

const DEFAULT_SEED: u32 = 12345;

#[derive(Clone, Debug)]
pub struct Rng {
    state: u32,
}

impl Rng {
    /// Xorshift has a fixed point at 0, so a zero seed falls back to the default.
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { DEFAULT_SEED } else { seed },
        }
    }

    /// Seed from `Math.random()` on wasm32, from the system clock elsewhere.
    pub fn from_entropy() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Self::new((js_sys::Math::random() * u32::MAX as f64) as u32)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let nanos = std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.subsec_nanos())
                .unwrap_or(DEFAULT_SEED);
            Self::new(nanos)
        }
    }

    pub fn next_u32(&mut self) -> u32 {
        xorshift32(&mut self.state)
    }

    /// Uniform in `[0, 1)`
    pub fn next_f64(&mut self) -> f64 {
        self.next_u32() as f64 / (u32::MAX as f64 + 1.0)
    }

    /// Uniform integer in `[min, max]`. Swapped bounds are reordered.
    pub fn random_int(&mut self, min: i32, max: i32) -> i32 {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        let span = (hi as i64 - lo as i64 + 1) as f64;
        let offset = (self.next_f64() * span).floor() as i64;
        (lo as i64 + offset) as i32
    }

    /// `-1.0` or `1.0` with equal odds
    pub fn sign(&mut self) -> f64 {
        if self.random_int(0, 1) == 0 { -1.0 } else { 1.0 }
    }

    /// Uniform pick from a non-empty slice
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let idx = self.random_int(0, items.len() as i32 - 1) as usize;
        items.get(idx)
    }
}

impl Default for Rng {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}
