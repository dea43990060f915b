//! In-flight open/close transition state
//!
//! Animations are fire-and-continue: starting a new one replaces the current
//! target, and the superseded animation's completion side effects must never
//! run. Supersession is detected with a generation counter owned by the
//! model; a completion only fires if its generation is still current.

/// Which resting state the animation is heading toward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationKind {
    /// Settling into the fully-open resting state (`offset = max_panel_width`)
    Open,
    /// Settling into the fully-closed resting state (`offset = 0`)
    Close,
}

/// An in-flight transition toward a resting state
#[derive(Debug, Clone, Copy)]
pub struct Animation {
    pub kind: AnimationKind,
    /// Center offset when the animation started
    pub from_offset: f32,
    /// Total duration in seconds, derived from distance and velocity
    pub duration: f32,
    /// Seconds elapsed so far, advanced by frame ticks
    pub elapsed: f32,
    /// Generation this animation belongs to; stale generations skip their
    /// completion side effects
    pub generation: u64,
}

impl Animation {
    pub fn new(kind: AnimationKind, from_offset: f32, duration: f32, generation: u64) -> Self {
        Self {
            kind,
            from_offset,
            duration,
            elapsed: 0.0,
            generation,
        }
    }

    /// Linear progress in `[0, 1]`. Zero-length animations complete on the
    /// first tick.
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// Duration of a transition covering `distance` points at `velocity`
/// points/second. Linear in distance, independent of direction.
pub fn animation_duration(distance: f32, velocity: f32) -> f32 {
    if velocity <= 0.0 {
        return 0.0;
    }
    distance.abs() / velocity
}
