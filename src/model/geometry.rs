//! Screen metrics and derived panel geometry
//!
//! Geometry is computed once at controller construction from the current
//! screen metrics. Rotation re-layout is out of scope; the host's autosizing
//! keeps views consistent afterwards.

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

/// Fraction of screen width the panel may occupy on phone-class devices
pub const COMPACT_WIDTH_FRACTION: f32 = 0.85;
/// Fraction of screen width the panel may occupy on larger devices
pub const REGULAR_WIDTH_FRACTION: f32 = 0.30;
/// Animation velocity as a multiple of screen width (points per second)
pub const VELOCITY_WIDTH_FACTOR: f32 = 2.5;

/// Device size class, decides how wide the panel is allowed to get
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceClass {
    /// Phone-class devices (panel covers most of the screen)
    Compact,
    /// Tablet-class and larger devices (panel stays narrow)
    Regular,
}

impl DeviceClass {
    /// Panel width as a fraction of screen width for this class
    pub fn panel_width_fraction(&self) -> f32 {
        match self {
            DeviceClass::Compact => COMPACT_WIDTH_FRACTION,
            DeviceClass::Regular => REGULAR_WIDTH_FRACTION,
        }
    }
}

/// Screen dimensions and device class, queried once at construction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenMetrics {
    /// Screen width in points
    pub width: f32,
    /// Screen height in points
    pub height: f32,
    /// Device size class
    pub device_class: DeviceClass,
}

impl ScreenMetrics {
    pub fn new(width: f32, height: f32, device_class: DeviceClass) -> Self {
        Self {
            width,
            height,
            device_class,
        }
    }
}

/// Derived panel configuration: how far the center surface can travel and
/// how fast transitions run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelGeometry {
    /// Maximum horizontal displacement of the center surface (panel width)
    pub max_panel_width: f32,
    /// Transition speed in points per second
    pub animation_velocity: f32,
}

impl PanelGeometry {
    /// Build geometry directly from known values
    pub fn new(max_panel_width: f32, animation_velocity: f32) -> Self {
        Self {
            max_panel_width,
            animation_velocity,
        }
    }

    /// Derive geometry from screen metrics
    ///
    /// This is the only fatal condition in the crate: a screen without a
    /// usable width cannot host the interaction at all.
    pub fn from_screen(metrics: &ScreenMetrics) -> Result<Self> {
        ensure!(
            metrics.width.is_finite() && metrics.width > 0.0,
            "invalid screen width: {}",
            metrics.width
        );
        Ok(Self {
            max_panel_width: metrics.width * metrics.device_class.panel_width_fraction(),
            animation_velocity: metrics.width * VELOCITY_WIDTH_FACTOR,
        })
    }
}
