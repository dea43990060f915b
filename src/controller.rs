//! Panel controller - owns the model and the platform collaborators
//!
//! The controller is the single owner of all shared mutable state. It runs
//! on the UI thread: every public operation dispatches a message through
//! `update` and executes the returned commands against the injected
//! collaborators in order. There is no other writer.

use anyhow::{ensure, Result};
use tracing::info;

use crate::commands::Cmd;
use crate::host::{Analytics, Rect, RefreshBus, SurfaceId, ViewHost, ZOrder, REFRESH_NOTIFICATION};
use crate::messages::{GestureMsg, Msg, PanelMsg};
use crate::model::{PanelGeometry, PanelModel, PanelSide, ScreenEdge, ScreenMetrics};
use crate::update::update;

/// Callback invoked once when a close animation settles naturally
pub type SettleCallback = Box<dyn FnOnce() + 'static>;

/// Slide-out panel controller
///
/// Construction takes ownership of attaching and detaching the two content
/// surfaces. Geometry is derived once from the supplied screen metrics and
/// not re-queried afterwards.
pub struct PanelController<H, A, B> {
    /// Interaction state; public so hosts and tests can inspect it
    pub model: PanelModel,
    metrics: ScreenMetrics,
    center: SurfaceId,
    panel: SurfaceId,
    host: H,
    analytics: A,
    bus: B,
    on_settled: Option<(u64, SettleCallback)>,
}

impl<H, A, B> PanelController<H, A, B>
where
    H: ViewHost,
    A: Analytics,
    B: RefreshBus,
{
    /// Create a controller, deriving geometry from the screen metrics
    ///
    /// Fails only when the metrics cannot yield a usable geometry; this is
    /// the single fatal condition in the crate.
    pub fn new(
        center: SurfaceId,
        panel: SurfaceId,
        metrics: ScreenMetrics,
        host: H,
        analytics: A,
        bus: B,
    ) -> Result<Self> {
        let geometry = PanelGeometry::from_screen(&metrics)?;
        Self::with_geometry(center, panel, metrics, geometry, host, analytics, bus)
    }

    /// Create a controller with explicit geometry, bypassing derivation
    pub fn with_geometry(
        center: SurfaceId,
        panel: SurfaceId,
        metrics: ScreenMetrics,
        geometry: PanelGeometry,
        host: H,
        analytics: A,
        bus: B,
    ) -> Result<Self> {
        ensure!(
            geometry.max_panel_width > 0.0 && geometry.max_panel_width.is_finite(),
            "invalid panel width: {}",
            geometry.max_panel_width
        );

        let mut controller = Self {
            model: PanelModel::new(geometry, metrics.height),
            metrics,
            center,
            panel,
            host,
            analytics,
            bus,
            on_settled: None,
        };
        controller.attach_center();
        info!(
            max_panel_width = geometry.max_panel_width,
            animation_velocity = geometry.animation_velocity,
            "panel controller ready"
        );
        Ok(controller)
    }

    // === Public operations ===

    /// Animate the panel to fully open
    pub fn open(&mut self) {
        // A superseded close must not fire a stale settle callback later
        self.on_settled = None;
        self.apply(Msg::Panel(PanelMsg::Open));
    }

    /// Animate the panel to fully closed
    pub fn close(&mut self) {
        self.on_settled = None;
        self.apply(Msg::Panel(PanelMsg::Close));
    }

    /// Animate the panel to fully closed, invoking `on_settled` once if the
    /// animation runs to natural completion
    pub fn close_with(&mut self, on_settled: impl FnOnce() + 'static) {
        self.on_settled = None;
        self.apply(Msg::Panel(PanelMsg::Close));
        // Armed for this close's generation only: a superseding animation or
        // gesture bumps the generation, so the callback can never match a
        // settle that belongs to a different close
        self.on_settled = Some((self.model.generation, Box::new(on_settled)));
    }

    /// Replace the center content surface
    pub fn set_center_content(&mut self, surface: SurfaceId) {
        self.host.detach(self.center);
        self.center = surface;
        self.attach_center();
    }

    /// Hot-swap the panel content surface
    ///
    /// If the panel is currently displayed the old content is unloaded
    /// before the new one loads; the unload/reload cycle is visible unless
    /// the host suppresses it.
    pub fn set_panel_content(&mut self, surface: SurfaceId) {
        let reload = self.model.side == PanelSide::Left;
        if reload {
            self.apply(Msg::Panel(PanelMsg::Unload));
        }
        self.panel = surface;
        if reload {
            self.apply(Msg::Panel(PanelMsg::Load));
            self.host.apply_dim(self.model.dim_alpha());
        }
    }

    // === Gesture entry points (post-recognition) ===

    pub fn pan_began(&mut self) {
        self.apply(Msg::Gesture(GestureMsg::Began));
    }

    pub fn pan_changed(&mut self, translation_x: f32) {
        self.apply(Msg::Gesture(GestureMsg::Changed { translation_x }));
    }

    pub fn pan_ended(&mut self) {
        self.apply(Msg::Gesture(GestureMsg::Ended));
    }

    pub fn pan_cancelled(&mut self) {
        self.apply(Msg::Gesture(GestureMsg::Cancelled));
    }

    pub fn tap(&mut self) {
        self.apply(Msg::Gesture(GestureMsg::Tap));
    }

    /// Advance the in-flight animation by `dt` seconds (frame clock)
    pub fn advance(&mut self, dt: f32) {
        self.apply(Msg::tick(dt));
    }

    /// Dispatch a message through the update function and execute the
    /// resulting commands
    pub fn apply(&mut self, msg: Msg) {
        let cmds = update(&mut self.model, msg);
        self.exec(cmds);
    }

    // === Accessors ===

    pub fn center_offset(&self) -> f32 {
        self.model.center_offset
    }

    pub fn panel_side(&self) -> PanelSide {
        self.model.side
    }

    pub fn edge_ownership(&self) -> ScreenEdge {
        self.model.edge_ownership
    }

    pub fn dim_alpha(&self) -> f32 {
        self.model.dim_alpha()
    }

    pub fn is_animating(&self) -> bool {
        self.model.is_animating()
    }

    pub fn screen_metrics(&self) -> ScreenMetrics {
        self.metrics
    }

    // === Internals ===

    fn attach_center(&mut self) {
        let frame = Rect::new(
            self.model.center_offset,
            0.0,
            self.metrics.width,
            self.metrics.height,
        );
        self.host.attach(self.center, frame, ZOrder::Front);
        self.host.apply_center_offset(self.model.center_offset);
        self.host.apply_dim(self.model.dim_alpha());
    }

    fn exec(&mut self, cmds: Vec<Cmd>) {
        for cmd in cmds {
            match cmd {
                Cmd::AttachPanel { frame, z } => self.host.attach(self.panel, frame, z),
                Cmd::DetachPanel => self.host.detach(self.panel),
                Cmd::ApplyCenterOffset(offset) => self.host.apply_center_offset(offset),
                Cmd::ApplyDim(alpha) => self.host.apply_dim(alpha),
                Cmd::Track { metric, status } => self.analytics.track(metric, status),
                Cmd::Settle => {
                    if let Some((generation, callback)) = self.on_settled.take() {
                        if generation == self.model.generation {
                            callback();
                        }
                    }
                }
                Cmd::BroadcastRefresh => self.bus.broadcast(REFRESH_NOTIFICATION),
            }
        }
    }
}
