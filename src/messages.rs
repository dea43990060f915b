//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

/// Pan/tap gesture messages, as recognized by the input adapter
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureMsg {
    /// Pan gesture started from the owned screen edge
    Began,
    /// Touch moved; carries the cumulative horizontal translation since
    /// gesture start (platform convention)
    Changed { translation_x: f32 },
    /// Touch lifted; settle into the nearest resting state
    Ended,
    /// Gesture cancelled by the platform; treated like Ended
    Cancelled,
    /// Single tap on the center surface (closes the panel when open)
    Tap,
}

/// Programmatic panel operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelMsg {
    /// Animate to the fully-open resting state
    Open,
    /// Animate to the fully-closed resting state
    Close,
    /// Attach the panel view behind the center surface
    Load,
    /// Detach the panel view
    Unload,
}

/// Animation frame messages from the platform frame clock
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimMsg {
    /// Advance the in-flight animation by `dt` seconds
    Tick { dt: f32 },
}

/// Top-level message type
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Msg {
    /// Gesture messages (pan phases, taps)
    Gesture(GestureMsg),
    /// Panel messages (open/close, load/unload)
    Panel(PanelMsg),
    /// Animation messages (frame ticks)
    Anim(AnimMsg),
}

// Convenience constructors for common messages
impl Msg {
    /// Create a pan-changed message with cumulative translation
    pub fn pan_changed(translation_x: f32) -> Self {
        Msg::Gesture(GestureMsg::Changed { translation_x })
    }

    /// Create an animation tick message
    pub fn tick(dt: f32) -> Self {
        Msg::Anim(AnimMsg::Tick { dt })
    }
}
