use glam::Vec3;
use rand::Rng;

use crate::constants::{
    CORE_JITTER, GLITCH_AMPLITUDE, GLITCH_PROBABILITY, MAGNET_DISPLACEMENT, MAGNET_RANGE,
    TWITCH_AMPLITUDE, WAVE_AMPLITUDE, WAVE_FREQUENCY, WAVE_SPEED, WAVE_Z_PHASE,
};

/// One-frame screen-space glitch: a single axis gets thrown sideways. Never
/// stored on the point; it exists only for the frame that rolled it.
#[derive(Clone, Copy, Debug)]
pub struct Glitch {
    pub vertical: bool,
    pub offset: f32,
}

/// Linear falloff of the pointer's pull on a shell point, clipped at zero
/// outside the magnet range.
#[inline]
pub fn magnet_strength(distance_px: f32) -> f32 {
    (1.0 - distance_px / MAGNET_RANGE).max(0.0)
}

/// Scalar displacement for a shell point: three traveling waves over the
/// origin axes (the z axis runs phase-shifted) plus twitch noise plus the
/// magnet swell. Everything scales with the hover factor so the resting
/// field is still.
pub fn shell_displacement(
    origin: Vec3,
    time: f32,
    hover: f32,
    magnet: f32,
    rng: &mut impl Rng,
) -> f32 {
    let phase = time * WAVE_SPEED;
    let wave = (origin.x * WAVE_FREQUENCY + phase).sin()
        + (origin.y * WAVE_FREQUENCY + phase).cos()
        + (origin.z * WAVE_FREQUENCY * WAVE_Z_PHASE + phase).sin();
    let twitch = (rng.gen::<f32>() - 0.5) * TWITCH_AMPLITUDE;
    (wave * WAVE_AMPLITUDE + twitch + magnet * MAGNET_DISPLACEMENT) * hover
}

/// Roll the per-frame glitch for a shell point. Gated on being inside magnet
/// range; the offset lands on one randomly chosen screen axis.
pub fn roll_glitch(magnet: f32, hover: f32, rng: &mut impl Rng) -> Option<Glitch> {
    if magnet <= 0.0 || rng.gen::<f32>() >= GLITCH_PROBABILITY {
        return None;
    }
    Some(Glitch {
        vertical: rng.gen::<bool>(),
        offset: (rng.gen::<f32>() - 0.5) * 2.0 * GLITCH_AMPLITUDE * magnet * hover,
    })
}

/// Independent per-axis jitter for core points.
pub fn core_jitter(hover: f32, rng: &mut impl Rng) -> Vec3 {
    let amplitude = CORE_JITTER * hover;
    Vec3::new(
        (rng.gen::<f32>() - 0.5) * amplitude,
        (rng.gen::<f32>() - 0.5) * amplitude,
        (rng.gen::<f32>() - 0.5) * amplitude,
    )
}
