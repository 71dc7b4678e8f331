use glam::Vec3;
use rand::Rng;

use crate::constants::{CORE_RADIUS_MAX, CORE_RADIUS_MIN};

/// Which part of the energized form a point belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    Shell,
    Core,
}

/// Immutable particle: spawn position inside the cube, destination in the
/// energized form, and the layer controlling its color/physics treatment.
/// Per-frame render data lives in `ProjectedPoint`, never here.
#[derive(Clone, Copy, Debug)]
pub struct Point {
    pub origin: Vec3,
    pub target: Vec3,
    pub layer: Layer,
}

/// Build the full particle set once at startup. The RNG is injected so a
/// fixed seed reproduces the exact same field under test.
pub fn generate(
    count: usize,
    cube_size: f32,
    core_probability: f32,
    rng: &mut impl Rng,
) -> Vec<Point> {
    let mut points = Vec::with_capacity(count);
    for _ in 0..count {
        let origin = Vec3::new(
            (rng.gen::<f32>() - 0.5) * cube_size,
            (rng.gen::<f32>() - 0.5) * cube_size,
            (rng.gen::<f32>() - 0.5) * cube_size,
        );
        let (layer, target) = if rng.gen::<f32>() < core_probability {
            (Layer::Core, core_target(cube_size, rng))
        } else {
            (Layer::Shell, shell_target(origin, cube_size))
        };
        points.push(Point {
            origin,
            target,
            layer,
        });
    }
    let core_count = points.iter().filter(|p| p.layer == Layer::Core).count();
    log::debug!("generated {} points ({} core)", points.len(), core_count);
    points
}

/// Project a spawn position onto the shell sphere. A near-zero origin has no
/// direction to normalize, so fall back to a fixed axis; the target must stay
/// finite for the lifetime of the point.
pub fn shell_target(origin: Vec3, cube_size: f32) -> Vec3 {
    let length = origin.length();
    if length < 1e-4 {
        return Vec3::Y * cube_size;
    }
    origin / length * cube_size
}

/// Sample a point in the loosely packed core ball: uniform sphere direction
/// (inclination through acos so it is area-uniform, not pole-clustered) at a
/// radius drawn from the core band.
pub fn core_target(cube_size: f32, rng: &mut impl Rng) -> Vec3 {
    let azimuth = rng.gen::<f32>() * std::f32::consts::TAU;
    let inclination = (2.0 * rng.gen::<f32>() - 1.0).acos();
    let radius =
        cube_size * (CORE_RADIUS_MIN + rng.gen::<f32>() * (CORE_RADIUS_MAX - CORE_RADIUS_MIN));
    Vec3::new(
        radius * inclination.sin() * azimuth.cos(),
        radius * inclination.sin() * azimuth.sin(),
        radius * inclination.cos(),
    )
}
