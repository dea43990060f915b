//! Capability interfaces for platform glue
//!
//! The interaction core never touches a real view hierarchy. It talks to the
//! platform through these traits so the state machine is testable without a
//! UI toolkit: a `ViewHost` that attaches/detaches surfaces and applies
//! offset/dim values, an `Analytics` sink for fire-and-forget tracking, and
//! a `RefreshBus` that broadcasts the close-settle notification to whoever
//! is listening.

use serde::{Deserialize, Serialize};

/// Analytics event name emitted when the panel opens
pub const TRACK_METRIC_PANEL_OPEN: &str = "action.profile";
/// Analytics status emitted when the panel opens
pub const TRACK_STATUS_PANEL_OPEN: &str = "mybooking";
/// Notification broadcast when a close animation settles; listeners may
/// refresh stale content
pub const REFRESH_NOTIFICATION: &str = "OnAskToRefresh";

/// Opaque handle to a content surface supplied by the host application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SurfaceId(pub u32);

/// Rectangle in screen points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Where a surface is inserted relative to its siblings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZOrder {
    /// In front of existing siblings
    Front,
    /// Behind existing siblings (the panel sits behind the center surface)
    Back,
}

/// View hierarchy operations the controller needs from the platform
pub trait ViewHost {
    /// Attach a surface's root view at the given frame and z-order
    fn attach(&mut self, surface: SurfaceId, frame: Rect, z: ZOrder);
    /// Detach a surface's root view from the hierarchy
    fn detach(&mut self, surface: SurfaceId);
    /// Move the center surface to the given horizontal displacement
    fn apply_center_offset(&mut self, offset: f32);
    /// Set the alpha of the dimming overlay atop the center surface
    fn apply_dim(&mut self, alpha: f32);
}

/// Fire-and-forget analytics collaborator
pub trait Analytics {
    fn track(&mut self, metric: &str, status: &str);
}

/// Synchronous best-effort notification broadcast; zero or more listeners,
/// no acknowledgment
pub trait RefreshBus {
    fn broadcast(&mut self, event: &str);
}

/// No-op analytics sink for hosts that do not track anything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAnalytics;

impl Analytics for NullAnalytics {
    fn track(&mut self, _metric: &str, _status: &str) {}
}

/// No-op bus for hosts with no refresh listeners
#[derive(Debug, Clone, Copy, Default)]
pub struct NullBus;

impl RefreshBus for NullBus {
    fn broadcast(&mut self, _event: &str) {}
}
