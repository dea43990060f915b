//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use sidepanel::host::{Analytics, Rect, RefreshBus, SurfaceId, ViewHost, ZOrder};
use sidepanel::model::{DeviceClass, PanelGeometry, ScreenMetrics};
use sidepanel::PanelController;

pub const CENTER: SurfaceId = SurfaceId(1);
pub const PANEL: SurfaceId = SurfaceId(2);

/// Everything the fake view host was asked to do, in order
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    Attach {
        surface: SurfaceId,
        frame: Rect,
        z: ZOrder,
    },
    Detach {
        surface: SurfaceId,
    },
    CenterOffset(f32),
    Dim(f32),
}

/// Recording fake of the platform view hierarchy
#[derive(Debug, Clone, Default)]
pub struct RecordingHost {
    pub events: Rc<RefCell<Vec<HostEvent>>>,
}

impl ViewHost for RecordingHost {
    fn attach(&mut self, surface: SurfaceId, frame: Rect, z: ZOrder) {
        self.events
            .borrow_mut()
            .push(HostEvent::Attach { surface, frame, z });
    }

    fn detach(&mut self, surface: SurfaceId) {
        self.events.borrow_mut().push(HostEvent::Detach { surface });
    }

    fn apply_center_offset(&mut self, offset: f32) {
        self.events.borrow_mut().push(HostEvent::CenterOffset(offset));
    }

    fn apply_dim(&mut self, alpha: f32) {
        self.events.borrow_mut().push(HostEvent::Dim(alpha));
    }
}

/// Recording fake of the analytics collaborator
#[derive(Debug, Clone, Default)]
pub struct RecordingAnalytics {
    pub events: Rc<RefCell<Vec<(String, String)>>>,
}

impl Analytics for RecordingAnalytics {
    fn track(&mut self, metric: &str, status: &str) {
        self.events
            .borrow_mut()
            .push((metric.to_string(), status.to_string()));
    }
}

/// Recording fake of the notification bus
#[derive(Debug, Clone, Default)]
pub struct RecordingBus {
    pub events: Rc<RefCell<Vec<String>>>,
}

impl RefreshBus for RecordingBus {
    fn broadcast(&mut self, event: &str) {
        self.events.borrow_mut().push(event.to_string());
    }
}

pub type TestController = PanelController<RecordingHost, RecordingAnalytics, RecordingBus>;

/// A controller wired to recording fakes, with handles kept for assertions
pub struct Harness {
    pub controller: TestController,
    pub host_events: Rc<RefCell<Vec<HostEvent>>>,
    pub analytics_events: Rc<RefCell<Vec<(String, String)>>>,
    pub bus_events: Rc<RefCell<Vec<String>>>,
}

/// Controller with the canonical test geometry: panel width 280 at
/// 700 points/second on a 400x800 screen
pub fn harness() -> Harness {
    harness_with_geometry(PanelGeometry::new(280.0, 700.0))
}

pub fn harness_with_geometry(geometry: PanelGeometry) -> Harness {
    let host = RecordingHost::default();
    let analytics = RecordingAnalytics::default();
    let bus = RecordingBus::default();
    let host_events = host.events.clone();
    let analytics_events = analytics.events.clone();
    let bus_events = bus.events.clone();

    let metrics = ScreenMetrics::new(400.0, 800.0, DeviceClass::Compact);
    let controller =
        PanelController::with_geometry(CENTER, PANEL, metrics, geometry, host, analytics, bus)
            .expect("valid test geometry");

    Harness {
        controller,
        host_events,
        analytics_events,
        bus_events,
    }
}

impl Harness {
    /// Run frame ticks until the current animation settles
    pub fn settle(&mut self) {
        for _ in 0..256 {
            if !self.controller.is_animating() {
                return;
            }
            self.controller.advance(0.016);
        }
        panic!("animation did not settle");
    }

    /// Forget everything recorded so far
    pub fn clear_recordings(&mut self) {
        self.host_events.borrow_mut().clear();
        self.analytics_events.borrow_mut().clear();
        self.bus_events.borrow_mut().clear();
    }

    /// Number of attach events recorded for the panel surface
    pub fn panel_attach_count(&self) -> usize {
        self.host_events
            .borrow()
            .iter()
            .filter(|e| matches!(e, HostEvent::Attach { surface, .. } if *surface == PANEL))
            .count()
    }

    /// Number of detach events recorded for the panel surface
    pub fn panel_detach_count(&self) -> usize {
        self.host_events
            .borrow()
            .iter()
            .filter(|e| matches!(e, HostEvent::Detach { surface } if *surface == PANEL))
            .count()
    }

    /// Drag from rest: begin a pan and move to the given translation
    pub fn drag_to(&mut self, translation_x: f32) {
        self.controller.pan_began();
        self.controller.pan_changed(translation_x);
    }
}
