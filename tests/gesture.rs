//! Tests for gesture interpretation: clamping, threshold crossing, and
//! end-of-gesture settling

mod common;

use common::harness;
use sidepanel::model::{PanelSide, ScreenEdge, ALPHA_MAX};

// ============================================================================
// Clamp invariant
// ============================================================================

#[test]
fn test_offset_stays_in_bounds_for_any_delta_sequence() {
    let mut h = harness();
    h.controller.pan_began();

    // Cumulative translations wander far outside the travel range
    let translations = [50.0, 550.0, -400.0, 120.0, 10_000.0, -10_000.0, 140.0];
    for t in translations {
        h.controller.pan_changed(t);
        let offset = h.controller.center_offset();
        assert!(
            (0.0..=280.0).contains(&offset),
            "offset {} escaped [0, 280]",
            offset
        );
    }
}

#[test]
fn test_overscroll_past_closed_is_pinned_at_rest() {
    let mut h = harness();
    h.controller.pan_began();
    h.controller.pan_changed(-80.0);
    assert_eq!(h.controller.center_offset(), 0.0);
    assert_eq!(h.controller.panel_side(), PanelSide::None);
}

// ============================================================================
// Dim consistency
// ============================================================================

#[test]
fn test_dim_follows_offset_while_dragging() {
    let mut h = harness();
    h.controller.pan_began();

    for translation in [10.0, 70.0, 140.0, 280.0] {
        h.controller.pan_changed(translation);
        let expected = ALPHA_MAX * h.controller.center_offset() / 280.0;
        assert!((h.controller.dim_alpha() - expected).abs() < 1e-6);
    }
}

#[test]
fn test_dim_is_zero_with_no_panel_displayed() {
    let h = harness();
    assert_eq!(h.controller.dim_alpha(), 0.0);
}

// ============================================================================
// Panel load on threshold crossing
// ============================================================================

#[test]
fn test_panel_loads_exactly_once_per_reveal() {
    let mut h = harness();
    h.clear_recordings();

    h.controller.pan_began();
    h.controller.pan_changed(1.0);
    h.controller.pan_changed(60.0);
    h.controller.pan_changed(200.0);

    assert_eq!(h.controller.panel_side(), PanelSide::Left);
    assert_eq!(h.panel_attach_count(), 1);
}

#[test]
fn test_full_drag_cycle_pairs_load_with_unload() {
    let mut h = harness();
    h.clear_recordings();

    h.drag_to(100.0);
    h.controller.pan_ended();
    h.settle();

    assert_eq!(h.panel_attach_count(), 1);
    assert_eq!(h.panel_detach_count(), 1);
    assert_eq!(h.controller.panel_side(), PanelSide::None);
}

// ============================================================================
// Threshold snap on release
// ============================================================================

#[test]
fn test_release_just_below_half_settles_closed() {
    let mut h = harness();
    h.drag_to(139.0);
    h.controller.pan_ended();
    h.settle();

    assert_eq!(h.controller.center_offset(), 0.0);
    assert_eq!(h.controller.panel_side(), PanelSide::None);
}

#[test]
fn test_release_just_above_half_settles_open() {
    let mut h = harness();
    h.drag_to(141.0);
    h.controller.pan_ended();
    h.settle();

    assert_eq!(h.controller.center_offset(), 280.0);
    assert_eq!(h.controller.panel_side(), PanelSide::Left);
}

#[test]
fn test_release_exactly_at_half_settles_closed() {
    let mut h = harness();
    h.drag_to(140.0);
    h.controller.pan_ended();
    h.settle();

    assert_eq!(h.controller.center_offset(), 0.0);
}

// ============================================================================
// Defensive normalization
// ============================================================================

#[test]
fn test_cancel_before_panel_loaded_normalizes_to_closed() {
    let mut h = harness();
    h.controller.pan_began();
    // No movement ever went positive, so no panel side is displayed
    h.controller.pan_cancelled();
    h.settle();

    assert_eq!(h.controller.center_offset(), 0.0);
    assert_eq!(h.controller.panel_side(), PanelSide::None);
    assert_eq!(h.controller.edge_ownership(), ScreenEdge::Left);
}

#[test]
fn test_cancel_mid_drag_settles_like_release() {
    let mut h = harness();
    h.drag_to(200.0);
    h.controller.pan_cancelled();
    h.settle();

    assert_eq!(h.controller.center_offset(), 280.0);
    assert_eq!(h.controller.panel_side(), PanelSide::Left);
}

// ============================================================================
// Tap
// ============================================================================

#[test]
fn test_tap_closes_open_panel() {
    let mut h = harness();
    h.controller.open();
    h.settle();
    assert_eq!(h.controller.panel_side(), PanelSide::Left);

    h.controller.tap();
    h.settle();
    assert_eq!(h.controller.panel_side(), PanelSide::None);
    assert_eq!(h.controller.center_offset(), 0.0);
}

#[test]
fn test_tap_while_closed_is_noop() {
    let mut h = harness();
    h.clear_recordings();
    h.controller.tap();

    assert!(!h.controller.is_animating());
    assert!(h.host_events.borrow().is_empty());
    assert!(h.bus_events.borrow().is_empty());
}

// ============================================================================
// Edge ownership
// ============================================================================

#[test]
fn test_edge_ownership_never_flips_mid_gesture() {
    let mut h = harness();
    h.controller.pan_began();
    h.controller.pan_changed(280.0);
    // Fully dragged open, but no animation completed yet
    assert_eq!(h.controller.edge_ownership(), ScreenEdge::Left);

    h.controller.pan_ended();
    h.settle();
    assert_eq!(h.controller.edge_ownership(), ScreenEdge::Right);
}
