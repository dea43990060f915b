//! Visibility state: panel load/unload against the view hierarchy and the
//! dimming overlay that tracks it
//!
//! The panel view is attached iff `side != None`. Loading happens the
//! instant the center offset first becomes positive, before any visible
//! movement is applied, so the panel never pops in behind a moving center
//! surface.

use tracing::debug;

use crate::commands::Cmd;
use crate::host::{Rect, ZOrder};
use crate::messages::PanelMsg;
use crate::model::{PanelModel, PanelSide};

use super::animation;

/// Handle programmatic panel messages
pub fn update_panel(model: &mut PanelModel, msg: PanelMsg) -> Vec<Cmd> {
    match msg {
        PanelMsg::Open => animation::animate_open(model),
        PanelMsg::Close => animation::animate_close(model),
        PanelMsg::Load => load_panel(model),
        PanelMsg::Unload => unload_panel(model),
    }
}

/// Attach the panel view behind the center surface, sized to
/// `(max_panel_width, view_height)`
///
/// No-op if the left panel is already loaded. If a different side were ever
/// displayed it is unloaded first; only the left side exists today.
pub fn load_panel(model: &mut PanelModel) -> Vec<Cmd> {
    let mut cmds = Vec::new();
    match model.side {
        PanelSide::Left => return cmds,
        PanelSide::None => {}
        PanelSide::Right => cmds.extend(unload_panel(model)),
    }

    debug!("loading left panel");
    model.side = PanelSide::Left;
    cmds.push(Cmd::AttachPanel {
        frame: Rect::new(0.0, 0.0, model.geometry.max_panel_width, model.view_height),
        z: ZOrder::Back,
    });
    cmds
}

/// Detach the panel view from the hierarchy
pub fn unload_panel(model: &mut PanelModel) -> Vec<Cmd> {
    if model.side == PanelSide::None {
        return Vec::new();
    }
    debug!("unloading panel");
    model.side = PanelSide::None;
    vec![Cmd::DetachPanel]
}

/// Recompute the dim alpha from the current state and apply it
pub fn adjust_dim(model: &PanelModel) -> Cmd {
    Cmd::ApplyDim(model.dim_alpha())
}
