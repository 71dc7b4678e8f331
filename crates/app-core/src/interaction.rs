use glam::Vec2;
use std::f32::consts::FRAC_PI_2;

use crate::constants::{
    BASE_SPIN, FOCAL_X_FRACTION, HOVER_SPIN_BOOST, HOVER_TRIGGER_FACTOR, MOBILE_BREAKPOINT,
    SCALE_FRACTION_DESKTOP, SCALE_FRACTION_MOBILE, SMOOTHING, TIME_STEP,
};

/// Viewport size in pixels, sampled fresh at the top of each frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_mobile(&self) -> bool {
        self.width < MOBILE_BREAKPOINT
    }

    /// Where the object sits: centered on mobile, pushed right on desktop
    /// where it acts as a backdrop behind the page content.
    pub fn focal_center(&self) -> Vec2 {
        let cx = if self.is_mobile() {
            self.width * 0.5
        } else {
            self.width * FOCAL_X_FRACTION
        };
        Vec2::new(cx, self.height * 0.5)
    }

    pub fn base_scale(&self) -> f32 {
        let k = if self.is_mobile() {
            SCALE_FRACTION_MOBILE
        } else {
            SCALE_FRACTION_DESKTOP
        };
        self.width.min(self.height) * k
    }
}

/// Smoothed per-frame interaction state. One instance lives for the whole
/// animation; nothing outside the frame step mutates it except the pointer
/// handler, which only stages the latest sample.
///
/// All rates are per-frame at the reference refresh cadence, so `advance`
/// takes no dt.
#[derive(Clone, Debug)]
pub struct InteractionState {
    pub hover_factor: f32,
    pub auto_rotation_y: f32,
    pub mouse_rotation_x: f32,
    pub mouse_rotation_y: f32,
    pub time: f32,
    /// `None` until the first pointer sample ever arrives.
    pub pointer: Option<Vec2>,
    pub viewport: Viewport,
}

impl InteractionState {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            hover_factor: 0.0,
            auto_rotation_y: 0.0,
            mouse_rotation_x: 0.0,
            mouse_rotation_y: 0.0,
            time: 0.0,
            pointer: None,
            viewport,
        }
    }

    /// Stage the latest pointer sample. Last value wins; the frame step reads
    /// whatever is current when it runs.
    pub fn set_pointer(&mut self, pos: Vec2) {
        self.pointer = Some(pos);
    }

    /// Proximity trigger: pointer within the object's visual radius plus a
    /// generous buffer.
    pub fn is_hovering(&self) -> bool {
        match self.pointer {
            Some(p) => {
                let center = self.viewport.focal_center();
                p.distance(center) < self.viewport.base_scale() * HOVER_TRIGGER_FACTOR
            }
            None => false,
        }
    }

    /// Advance one frame: smooth the hover factor toward the trigger state,
    /// spin, lean toward the pointer, advance the wave clock.
    pub fn advance(&mut self, viewport: Viewport) {
        self.viewport = viewport;

        let target = if self.is_hovering() { 1.0 } else { 0.0 };
        // Convex blend toward 0 or 1: the factor can never leave [0, 1].
        self.hover_factor += (target - self.hover_factor) * SMOOTHING;

        self.auto_rotation_y += BASE_SPIN + HOVER_SPIN_BOOST * self.hover_factor;

        let (tilt, pan) = match self.pointer {
            Some(p) => {
                let center = viewport.focal_center();
                (
                    (p.y - center.y) / viewport.height * FRAC_PI_2,
                    (p.x - center.x) / viewport.width * FRAC_PI_2,
                )
            }
            None => (0.0, 0.0),
        };
        self.mouse_rotation_x += (tilt - self.mouse_rotation_x) * SMOOTHING;
        self.mouse_rotation_y += (pan - self.mouse_rotation_y) * SMOOTHING;

        self.time += TIME_STEP;
    }

    /// Effective (pitch, yaw) consumed by the transform pipeline.
    pub fn rotation(&self) -> (f32, f32) {
        (
            self.mouse_rotation_x,
            self.auto_rotation_y + self.mouse_rotation_y,
        )
    }
}
