//! Transition cue: the page-flip sound played on every accepted turn.
//!
//! The navigator only sees the [`TransitionCue`] capability. The real audio
//! backend lives in `tui::audio`; tests substitute a mock or a no-op.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use rand::Rng;

/// Length of the synthesized flip.
pub const FLIP_DURATION: Duration = Duration::from_millis(150);
/// Peak amplitude of the raw noise before output gain.
pub const FLIP_AMPLITUDE: f32 = 0.3;
/// Output gain applied by the default backend.
pub const DEFAULT_GAIN: f32 = 0.2;

/// Fire-and-forget sound effect. Implementations must never panic or block
/// on audio output; failure degrades to silence.
#[cfg_attr(test, mockall::automock)]
pub trait TransitionCue: Send {
    fn play(&self);
}

/// Cue that does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentCue;

impl TransitionCue for SilentCue {
    fn play(&self) {}
}

// ============================================================================
// Sound switch
// ============================================================================

/// User-toggleable sound flag, shared between the UI and the cue.
#[derive(Debug, Clone)]
pub struct SoundSwitch(Arc<AtomicBool>);

impl SoundSwitch {
    pub fn new(enabled: bool) -> Self {
        Self(Arc::new(AtomicBool::new(enabled)))
    }

    pub fn is_enabled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.0.store(enabled, Ordering::Relaxed);
    }

    /// Flip the flag and return the new state.
    pub fn toggle(&self) -> bool {
        !self.0.fetch_xor(true, Ordering::Relaxed)
    }
}

impl Default for SoundSwitch {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Wraps a cue so it only plays while the switch is on.
pub struct GatedCue<C> {
    inner: C,
    switch: SoundSwitch,
}

impl<C: TransitionCue> GatedCue<C> {
    pub fn new(inner: C, switch: SoundSwitch) -> Self {
        Self { inner, switch }
    }

    pub fn switch(&self) -> &SoundSwitch {
        &self.switch
    }
}

impl<C: TransitionCue> TransitionCue for GatedCue<C> {
    fn play(&self) {
        if self.switch.is_enabled() {
            self.inner.play();
        }
    }
}

// ============================================================================
// Synthesis
// ============================================================================

/// Mono samples for one flip at `sample_rate`: uniform noise under a linear
/// decay envelope, peaking at [`FLIP_AMPLITUDE`].
pub fn synthesize_flip<R: Rng + ?Sized>(sample_rate: u32, rng: &mut R) -> Vec<f32> {
    let len = (u64::from(sample_rate) * FLIP_DURATION.as_millis() as u64 / 1000) as usize;
    (0..len)
        .map(|i| {
            let envelope = 1.0 - i as f32 / len as f32;
            rng.gen_range(-1.0f32..1.0) * envelope * FLIP_AMPLITUDE
        })
        .collect()
}
