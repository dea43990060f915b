//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions. Each update takes
//! the model and a message and returns the side-effect commands to run, in
//! order.

pub mod animation;
pub mod gesture;
pub mod panel;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::PanelModel;

pub use animation::{animate_close, animate_open, update_animation};
pub use gesture::update_gesture;
pub use panel::{adjust_dim, load_panel, unload_panel, update_panel};

/// Main update function - dispatches to sub-handlers
pub fn update(model: &mut PanelModel, msg: Msg) -> Vec<Cmd> {
    match msg {
        Msg::Gesture(m) => gesture::update_gesture(model, m),
        Msg::Panel(m) => panel::update_panel(model, m),
        Msg::Anim(m) => animation::update_animation(model, m),
    }
}
