//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.
//! The controller executes them against the injected collaborators in the
//! order they were emitted; ordering matters (the panel must be attached
//! before the first visible movement is applied).

use crate::host::{Rect, ZOrder};

/// A side effect requested by an update
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cmd {
    /// Attach the panel surface at the given frame and z-order
    AttachPanel { frame: Rect, z: ZOrder },
    /// Detach the panel surface
    DetachPanel,
    /// Move the center surface to this horizontal displacement
    ApplyCenterOffset(f32),
    /// Apply this alpha to the dimming overlay
    ApplyDim(f32),
    /// Emit a fire-and-forget analytics event
    Track {
        metric: &'static str,
        status: &'static str,
    },
    /// Run the armed close-settle callback, if any
    Settle,
    /// Broadcast the content-refresh notification to external listeners
    BroadcastRefresh,
}
