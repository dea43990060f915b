//! Touch input adapter: raw platform touches to gesture messages
//!
//! Owns the recognition gates the interaction core relies on: the pan
//! gesture begins only from the currently-owned screen edge, both
//! recognizers only receive touches landing within the center surface
//! bounds, and only one touch is tracked at a time. Recognition is
//! non-exclusive - the host may run other recognizers over the same
//! touches.

use winit::dpi::PhysicalPosition;
use winit::event::TouchPhase;

use crate::messages::{GestureMsg, Msg};
use crate::model::{PanelModel, ScreenEdge};

/// Width of the screen-edge activation strip in points
pub const EDGE_ACTIVATION_WIDTH: f32 = 20.0;
/// Maximum travel for a touch to still count as a tap
pub const TAP_SLOP: f32 = 10.0;

/// The touch currently being tracked
#[derive(Debug, Clone, Copy)]
struct ActiveTouch {
    finger: u64,
    start_x: f32,
    /// Whether this touch passed the edge gate and drives the pan gesture
    pan: bool,
    /// Largest horizontal travel seen, for tap disqualification
    max_travel: f32,
}

/// Edge-gated pan and tap recognizer
#[derive(Debug)]
pub struct GestureRecognizer {
    screen_width: f32,
    active: Option<ActiveTouch>,
}

impl GestureRecognizer {
    pub fn new(screen_width: f32) -> Self {
        Self {
            screen_width,
            active: None,
        }
    }

    /// Feed one touch event; returns the recognized gesture message, if any
    pub fn handle_touch(
        &mut self,
        model: &PanelModel,
        phase: TouchPhase,
        position: PhysicalPosition<f64>,
        finger: u64,
    ) -> Option<Msg> {
        let x = position.x as f32;
        match phase {
            TouchPhase::Started => self.touch_started(model, x, finger),
            TouchPhase::Moved => self.touch_moved(x, finger),
            TouchPhase::Ended => self.touch_ended(x, finger),
            TouchPhase::Cancelled => self.touch_cancelled(finger),
        }
    }

    fn touch_started(&mut self, model: &PanelModel, x: f32, finger: u64) -> Option<Msg> {
        if self.active.is_some() {
            // Single-touch recognizers: a second finger is ignored
            return None;
        }
        if !self.center_contains(model, x) {
            return None;
        }

        let pan = self.in_active_edge(model, x);
        self.active = Some(ActiveTouch {
            finger,
            start_x: x,
            pan,
            max_travel: 0.0,
        });
        pan.then_some(Msg::Gesture(GestureMsg::Began))
    }

    fn touch_moved(&mut self, x: f32, finger: u64) -> Option<Msg> {
        let touch = self.active.as_mut().filter(|t| t.finger == finger)?;
        let translation = x - touch.start_x;
        touch.max_travel = touch.max_travel.max(translation.abs());
        touch
            .pan
            .then_some(Msg::Gesture(GestureMsg::Changed {
                translation_x: translation,
            }))
    }

    fn touch_ended(&mut self, x: f32, finger: u64) -> Option<Msg> {
        let touch = self.active.take_if(|t| t.finger == finger)?;
        if touch.pan {
            return Some(Msg::Gesture(GestureMsg::Ended));
        }
        let travel = touch.max_travel.max((x - touch.start_x).abs());
        (travel <= TAP_SLOP).then_some(Msg::Gesture(GestureMsg::Tap))
    }

    fn touch_cancelled(&mut self, finger: u64) -> Option<Msg> {
        let touch = self.active.take_if(|t| t.finger == finger)?;
        touch.pan.then_some(Msg::Gesture(GestureMsg::Cancelled))
    }

    /// Touches only count when they land on the center surface, which spans
    /// `[center_offset, center_offset + screen_width)`; touches on the
    /// revealed panel to its left do not drive these recognizers
    fn center_contains(&self, model: &PanelModel, x: f32) -> bool {
        x >= model.center_offset && x < model.center_offset + self.screen_width
    }

    /// Edge activation strip for the pan gesture, per current edge ownership
    fn in_active_edge(&self, model: &PanelModel, x: f32) -> bool {
        match model.edge_ownership {
            ScreenEdge::Left => x <= EDGE_ACTIVATION_WIDTH,
            ScreenEdge::Right => x >= self.screen_width - EDGE_ACTIVATION_WIDTH,
        }
    }
}
