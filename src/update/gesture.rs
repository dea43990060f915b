//! Gesture interpreter: raw drag deltas and taps to bounded position
//! updates and end-of-gesture decisions

use tracing::trace;

use crate::commands::Cmd;
use crate::messages::GestureMsg;
use crate::model::{GestureSession, PanelModel, PanelSide};

use super::{animation, panel};

/// Handle pan/tap gesture messages
pub fn update_gesture(model: &mut PanelModel, msg: GestureMsg) -> Vec<Cmd> {
    match msg {
        GestureMsg::Began => {
            // The gesture takes over from any in-flight animation; bumping
            // the generation keeps the stale completion from firing.
            model.next_generation();
            model.animation = None;
            model.gesture = Some(GestureSession::new());
            Vec::new()
        }

        GestureMsg::Changed { translation_x } => {
            let Some(session) = model.gesture.as_mut() else {
                // Changed without Began: nothing to interpret against
                return Vec::new();
            };
            let delta = session.advance(translation_x);
            let proposed = model.center_offset + delta;
            trace!(delta, proposed, "pan changed");

            let mut cmds = Vec::new();
            let accepted = authorize_offset(model, proposed, &mut cmds);
            model.center_offset = accepted;
            cmds.push(Cmd::ApplyCenterOffset(accepted));
            cmds.push(panel::adjust_dim(model));
            cmds
        }

        GestureMsg::Ended | GestureMsg::Cancelled => {
            model.gesture = None;
            settle_from_position(model)
        }

        GestureMsg::Tap => {
            if model.side == PanelSide::Left {
                animation::animate_close(model)
            } else {
                Vec::new()
            }
        }
    }
}

/// Validate a proposed center offset against the travel bounds
///
/// The two stages are deliberately separate and must stay that way: the
/// first clamps overshoot on both ends, the second compares the *unclamped*
/// proposal against the current offset so that the first positive crossing
/// loads the panel and an at-rest center can never travel past closed.
fn authorize_offset(model: &mut PanelModel, proposed: f32, cmds: &mut Vec<Cmd>) -> f32 {
    let max = model.geometry.max_panel_width;

    let mut accepted = proposed;
    if proposed > max {
        accepted = max;
    } else if proposed < 0.0 {
        accepted = 0.0;
    }

    if model.center_offset <= 0.0 && proposed > 0.0 {
        // Panel enters view: attach before the movement is applied
        cmds.extend(panel::load_panel(model));
    } else if model.center_offset >= 0.0 && proposed < 0.0 {
        accepted = 0.0;
    }

    accepted
}

/// End-of-gesture decision: snap to the nearest resting state
///
/// Purely positional (no velocity): at or below half travel closes,
/// above half opens. With no side displayed the only consistent resting
/// state is closed (covers a cancel before the panel ever loaded).
fn settle_from_position(model: &mut PanelModel) -> Vec<Cmd> {
    if model.side == PanelSide::Left {
        if model.center_offset <= model.geometry.max_panel_width / 2.0 {
            animation::animate_close(model)
        } else {
            animation::animate_open(model)
        }
    } else {
        animation::animate_close(model)
    }
}
