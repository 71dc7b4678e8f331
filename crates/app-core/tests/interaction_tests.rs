// Host-side tests for the smoothed interaction state.

use app_core::constants::{BASE_SPIN, SCALE_FRACTION_DESKTOP, SCALE_FRACTION_MOBILE};
use app_core::{InteractionState, Viewport};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn desktop() -> Viewport {
    Viewport::new(1440.0, 900.0)
}

#[test]
fn hover_factor_stays_in_unit_interval_for_any_pointer_path() {
    let vp = desktop();
    let mut state = InteractionState::new(vp);
    let mut rng = StdRng::seed_from_u64(3);
    for frame in 0..500 {
        state.set_pointer(Vec2::new(
            rng.gen::<f32>() * 3000.0 - 800.0,
            rng.gen::<f32>() * 2000.0 - 500.0,
        ));
        state.advance(vp);
        assert!(
            (0.0..=1.0).contains(&state.hover_factor),
            "hover factor escaped [0,1] at frame {frame}: {}",
            state.hover_factor
        );
    }
}

#[test]
fn parked_far_away_decays_below_threshold() {
    let vp = desktop();
    let mut state = InteractionState::new(vp);
    state.hover_factor = 1.0;
    state.set_pointer(Vec2::new(0.0, 0.0)); // far left, well outside the trigger radius
    for _ in 0..120 {
        state.advance(vp);
    }
    assert!(
        state.hover_factor < 0.01,
        "hover factor did not decay: {}",
        state.hover_factor
    );
}

#[test]
fn parked_on_the_focal_center_saturates() {
    let vp = desktop();
    let mut state = InteractionState::new(vp);
    state.set_pointer(vp.focal_center());
    for _ in 0..100 {
        state.advance(vp);
    }
    assert!(
        state.hover_factor > 0.95,
        "hover factor did not saturate: {}",
        state.hover_factor
    );
}

#[test]
fn breakpoint_flips_the_focal_center_mode() {
    let narrow = Viewport::new(767.0, 900.0);
    assert!(narrow.is_mobile());
    assert_eq!(narrow.focal_center(), Vec2::new(767.0 * 0.5, 450.0));

    let wide = Viewport::new(769.0, 900.0);
    assert!(!wide.is_mobile());
    assert_eq!(wide.focal_center(), Vec2::new(769.0 * 0.75, 450.0));
}

#[test]
fn base_scale_uses_the_shorter_viewport_edge() {
    let wide = desktop();
    assert_eq!(wide.base_scale(), 900.0 * SCALE_FRACTION_DESKTOP);

    let tall = Viewport::new(400.0, 800.0);
    assert_eq!(tall.base_scale(), 400.0 * SCALE_FRACTION_MOBILE);
}

#[test]
fn hover_boosts_the_spin_rate() {
    let vp = desktop();

    let mut idle = InteractionState::new(vp);
    idle.advance(vp);
    let idle_step = idle.auto_rotation_y;
    assert!((idle_step - BASE_SPIN).abs() < 1e-6);

    let mut hot = InteractionState::new(vp);
    hot.hover_factor = 1.0;
    hot.set_pointer(vp.focal_center());
    hot.advance(vp);
    assert!(
        hot.auto_rotation_y > idle_step * 2.0,
        "full hover should spin visibly faster"
    );
}

#[test]
fn no_pointer_means_no_tilt() {
    let vp = desktop();
    let mut state = InteractionState::new(vp);
    for _ in 0..50 {
        state.advance(vp);
    }
    assert_eq!(state.mouse_rotation_x, 0.0);
    assert_eq!(state.mouse_rotation_y, 0.0);
    assert!(state.auto_rotation_y > 0.0, "auto spin still runs");
    assert!(!state.is_hovering());
}

#[test]
fn pointer_tilt_follows_the_offset_direction() {
    let vp = desktop();
    let center = vp.focal_center();
    let mut state = InteractionState::new(vp);
    // Below and to the left of the focal center.
    state.set_pointer(center + Vec2::new(-300.0, 200.0));
    for _ in 0..200 {
        state.advance(vp);
    }
    assert!(state.mouse_rotation_x > 0.0, "downward offset tilts forward");
    assert!(state.mouse_rotation_y < 0.0, "leftward offset pans left");
}
