//! Panel interaction model - the complete state of the controller
//!
//! Pure state following the Elm Architecture pattern: no I/O and no
//! collaborator calls live here. All mutation flows through `update`.

pub mod animation;
pub mod geometry;
pub mod gesture;

pub use animation::{animation_duration, Animation, AnimationKind};
pub use geometry::{
    DeviceClass, PanelGeometry, ScreenMetrics, COMPACT_WIDTH_FRACTION, REGULAR_WIDTH_FRACTION,
    VELOCITY_WIDTH_FACTOR,
};
pub use gesture::GestureSession;

use serde::{Deserialize, Serialize};

/// Dimming overlay alpha when the panel is fully closed
pub const ALPHA_MIN: f32 = 0.0;
/// Dimming overlay alpha when the panel is fully open
pub const ALPHA_MAX: f32 = 0.6;

/// Which side panel is currently displayed (attached to the hierarchy)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PanelSide {
    /// No panel displayed; center surface at rest
    None,
    /// Left panel displayed behind the center surface
    Left,
    /// Reserved: no right-side panel is implemented
    Right,
}

/// Screen edge the drag-to-reveal gesture currently activates from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScreenEdge {
    Left,
    Right,
}

/// The complete interaction state
#[derive(Debug, Clone)]
pub struct PanelModel {
    /// Derived panel configuration (max travel, velocity)
    pub geometry: PanelGeometry,
    /// Height used when sizing the panel view on attach
    pub view_height: f32,
    /// Which panel side is displayed; attached to the hierarchy iff not None
    pub side: PanelSide,
    /// Horizontal displacement of the center surface in `[0, max_panel_width]`.
    /// Single source of truth for "how open" the panel is.
    pub center_offset: f32,
    /// Edge the pan gesture activates from; flipped only on natural
    /// animation completion, never mid-gesture
    pub edge_ownership: ScreenEdge,
    /// Live pan gesture session, if one is in progress
    pub gesture: Option<GestureSession>,
    /// In-flight open/close transition, if any
    pub animation: Option<Animation>,
    /// Monotonically increasing counter; the latest open/close/gesture
    /// request wins, stale completions compare against this and skip their
    /// side effects
    pub generation: u64,
}

impl PanelModel {
    pub fn new(geometry: PanelGeometry, view_height: f32) -> Self {
        Self {
            geometry,
            view_height,
            side: PanelSide::None,
            center_offset: 0.0,
            edge_ownership: ScreenEdge::Left,
            gesture: None,
            animation: None,
            generation: 0,
        }
    }

    /// Dimming overlay alpha, a pure function of (side, offset, max width)
    pub fn dim_alpha(&self) -> f32 {
        if self.side == PanelSide::Left {
            ALPHA_MAX * self.visible_fraction()
        } else {
            ALPHA_MIN
        }
    }

    /// Fraction of the panel currently visible, in `[0, 1]`
    pub fn visible_fraction(&self) -> f32 {
        if self.side == PanelSide::Left && self.geometry.max_panel_width > 0.0 {
            self.center_offset / self.geometry.max_panel_width
        } else {
            0.0
        }
    }

    pub fn is_open(&self) -> bool {
        self.side == PanelSide::Left && self.center_offset >= self.geometry.max_panel_width
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Bump the generation counter, superseding any in-flight completion
    pub fn next_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }
}
