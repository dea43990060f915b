//! Slide-out side panel interaction core
//!
//! This crate provides the state machine behind a touchscreen slide-out
//! panel: a center content surface can be dragged or tapped to reveal a
//! panel anchored to the left edge, with synchronized dimming,
//! velocity-based animation timing, and edge-gesture recognition. It
//! follows the Elm Architecture pattern: messages flow through a pure
//! `update` over a `PanelModel`, and the resulting commands are executed
//! against injected platform collaborators (view host, analytics, refresh
//! bus) by the `PanelController`.

pub mod commands;
pub mod controller;
pub mod host;
pub mod input;
pub mod messages;
pub mod model;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use controller::PanelController;
pub use host::{Analytics, Rect, RefreshBus, SurfaceId, ViewHost, ZOrder};
pub use input::GestureRecognizer;
pub use messages::Msg;
pub use model::{PanelGeometry, PanelModel, PanelSide, ScreenEdge, ScreenMetrics};
