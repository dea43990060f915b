//! Animator: velocity-timed settling into the open or closed resting state
//!
//! Starting an animation only records the target and duration; motion is
//! driven by `AnimMsg::Tick` from the platform frame clock. A new animate
//! call always wins - it replaces the in-flight animation and bumps the
//! model generation, so the superseded completion never runs its side
//! effects.

use tracing::{debug, info};

use crate::commands::Cmd;
use crate::host::{TRACK_METRIC_PANEL_OPEN, TRACK_STATUS_PANEL_OPEN};
use crate::messages::AnimMsg;
use crate::model::{animation_duration, Animation, AnimationKind, PanelModel, ScreenEdge};

use super::panel;

/// Handle animation frame messages
pub fn update_animation(model: &mut PanelModel, msg: AnimMsg) -> Vec<Cmd> {
    match msg {
        AnimMsg::Tick { dt } => tick(model, dt),
    }
}

/// Begin animating toward the fully-open resting state
///
/// The panel is loaded and the dim target applied eagerly, before the first
/// frame, so the transition starts visually consistent. The analytics event
/// fires here and is not on the correctness path.
pub fn animate_open(model: &mut PanelModel) -> Vec<Cmd> {
    let mut cmds = vec![Cmd::Track {
        metric: TRACK_METRIC_PANEL_OPEN,
        status: TRACK_STATUS_PANEL_OPEN,
    }];

    let distance = model.geometry.max_panel_width - model.center_offset;
    cmds.extend(panel::load_panel(model));
    cmds.push(panel::adjust_dim(model));

    let generation = model.next_generation();
    let duration = animation_duration(distance, model.geometry.animation_velocity);
    debug!(distance, duration, "open animation started");
    model.animation = Some(Animation::new(
        AnimationKind::Open,
        model.center_offset,
        duration,
        generation,
    ));
    cmds
}

/// Begin animating toward the fully-closed resting state
pub fn animate_close(model: &mut PanelModel) -> Vec<Cmd> {
    let distance = model.center_offset;
    let generation = model.next_generation();
    let duration = animation_duration(distance, model.geometry.animation_velocity);
    debug!(distance, duration, "close animation started");
    model.animation = Some(Animation::new(
        AnimationKind::Close,
        model.center_offset,
        duration,
        generation,
    ));
    Vec::new()
}

/// Advance the in-flight animation by `dt` seconds
///
/// Interpolates the center offset toward the target and re-derives the dim
/// alpha each frame. On natural completion (still the current generation)
/// the resting-state side effects run; a stale completion is dropped.
fn tick(model: &mut PanelModel, dt: f32) -> Vec<Cmd> {
    let Some(anim) = model.animation.as_mut() else {
        return Vec::new();
    };
    anim.elapsed += dt;
    let progress = anim.progress();
    let kind = anim.kind;
    let from_offset = anim.from_offset;
    let generation = anim.generation;
    let finished = anim.is_finished();

    let target = match kind {
        AnimationKind::Open => model.geometry.max_panel_width,
        AnimationKind::Close => 0.0,
    };
    model.center_offset = from_offset + (target - from_offset) * progress;

    let mut cmds = vec![Cmd::ApplyCenterOffset(model.center_offset)];

    if !finished {
        cmds.push(panel::adjust_dim(model));
        return cmds;
    }

    model.animation = None;
    if generation != model.generation {
        // Superseded mid-flight; the winning request owns the side effects.
        debug!(generation, current = model.generation, "stale completion dropped");
        cmds.push(panel::adjust_dim(model));
        return cmds;
    }

    match kind {
        AnimationKind::Open => {
            model.edge_ownership = ScreenEdge::Right;
            cmds.push(panel::adjust_dim(model));
            info!("panel open settled");
        }
        AnimationKind::Close => {
            cmds.extend(panel::unload_panel(model));
            cmds.push(panel::adjust_dim(model));
            cmds.push(Cmd::Settle);
            model.edge_ownership = ScreenEdge::Left;
            cmds.push(Cmd::BroadcastRefresh);
            info!("panel close settled");
        }
    }
    cmds
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PanelGeometry, PanelSide};

    fn test_model() -> PanelModel {
        PanelModel::new(PanelGeometry::new(280.0, 700.0), 800.0)
    }

    fn run_to_completion(model: &mut PanelModel) -> Vec<Cmd> {
        let mut last = Vec::new();
        for _ in 0..256 {
            if model.animation.is_none() {
                break;
            }
            last = tick(model, 0.016);
        }
        last
    }

    #[test]
    fn test_open_loads_panel_before_first_frame() {
        let mut model = test_model();
        let cmds = animate_open(&mut model);
        assert_eq!(model.side, PanelSide::Left);
        assert!(matches!(cmds[0], Cmd::Track { .. }));
        assert!(matches!(cmds[1], Cmd::AttachPanel { .. }));
    }

    #[test]
    fn test_open_completion_flips_edge_ownership() {
        let mut model = test_model();
        animate_open(&mut model);
        run_to_completion(&mut model);
        assert_eq!(model.edge_ownership, ScreenEdge::Right);
        assert_eq!(model.center_offset, 280.0);
        assert_eq!(model.side, PanelSide::Left);
    }

    #[test]
    fn test_close_completion_unloads_and_broadcasts() {
        let mut model = test_model();
        animate_open(&mut model);
        run_to_completion(&mut model);
        animate_close(&mut model);
        let cmds = run_to_completion(&mut model);
        assert_eq!(model.side, PanelSide::None);
        assert_eq!(model.edge_ownership, ScreenEdge::Left);
        assert!(cmds.contains(&Cmd::DetachPanel));
        assert!(cmds.contains(&Cmd::Settle));
        assert!(cmds.contains(&Cmd::BroadcastRefresh));
    }

    #[test]
    fn test_stale_completion_is_dropped() {
        let mut model = test_model();
        animate_open(&mut model);
        // Supersede by bumping the generation without replacing the animation
        model.next_generation();
        let cmds = run_to_completion(&mut model);
        assert_eq!(model.edge_ownership, ScreenEdge::Left);
        assert!(!cmds.contains(&Cmd::BroadcastRefresh));
    }
}
