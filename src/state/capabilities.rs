//! Capabilities - Seams Between the Selector and Its Environment
//!
//! The selector never touches a window, a clock, or a global RNG directly.
//! Randomness, spin animation and viewport size are injected through these
//! traits so the draw logic runs the same in tests and in the app.

use rand::Rng;
use rand::rngs::ThreadRng;

/// A spin the animation layer must play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpinRequest {
    /// Segment the wheel must stop on
    pub index: usize,
    /// Number of segments at the time of the draw
    pub pool_size: usize,
}

/// Plays spin animations
///
/// After `start_spin`, the implementation must eventually cause exactly one
/// `Selector::on_spin_complete` call. There is no cancellation.
pub trait AnimationDriver {
    fn start_spin(&mut self, request: SpinRequest);
}

/// Chooses the index for a draw
pub trait IndexPicker {
    /// Pick an index in `[0, len)`. Never called with `len == 0`.
    fn pick(&mut self, len: usize) -> usize;
}

/// Uniform picker backed by a `rand` generator
#[derive(Debug, Clone, Default)]
pub struct UniformPicker<R = ThreadRng> {
    rng: R,
}

impl<R: Rng> UniformPicker<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> IndexPicker for UniformPicker<R> {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// Window dimensions in logical pixels
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Reports the current viewport size
pub trait ViewportProvider {
    fn current_size(&self) -> Viewport;
}

impl ViewportProvider for Viewport {
    fn current_size(&self) -> Viewport {
        *self
    }
}
