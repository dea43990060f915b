//! Per-gesture session state
//!
//! A session lives from gesture Began to Ended/Cancelled. The platform
//! reports cumulative translation since gesture start; the interpreter works
//! in incremental deltas, so the session remembers the last cumulative value.

/// Ephemeral state for one pan gesture
#[derive(Debug, Clone, Copy, Default)]
pub struct GestureSession {
    /// Cumulative horizontal translation reported at the last touch-move
    pub cumulative_translation: f32,
}

impl GestureSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume a new cumulative translation, returning the delta since the
    /// previous touch-move
    pub fn advance(&mut self, translation_x: f32) -> f32 {
        let delta = translation_x - self.cumulative_translation;
        self.cumulative_translation = translation_x;
        delta
    }
}
