use glam::{Vec2, Vec3};
use rand::Rng;

use crate::cloud::{Layer, Point};
use crate::constants::{
    ALPHA_FAR, ALPHA_NEAR, CORE_HOT_TIER, CORE_MID_TIER, CORE_RADIUS_MAX, ENERGIZED_THRESHOLD,
    MAGNET_PULL, PERSPECTIVE, SHELL_ENERGY_FREQUENCY, SHELL_ENERGY_SPEED, SIZE_BASE,
    SIZE_HOVER_BOOST, SIZE_MIN, SPARK_PROBABILITY,
};
use crate::interaction::InteractionState;
use crate::physics;

/// Screen-space result of projecting one particle. Rebuilt every frame into
/// a reused buffer; nothing here outlives the draw pass.
#[derive(Clone, Copy, Debug)]
pub struct ProjectedPoint {
    pub x: f32,
    pub y: f32,
    /// Normalized depth in [0, 1]; 0 is nearest.
    pub depth: f32,
    pub color: [u8; 3],
    pub alpha: f32,
    pub size: f32,
    /// Glow tier; 0 draws without a halo.
    pub glow: u8,
}

struct Projection {
    x: f32,
    y: f32,
    scale: f32,
    world_z: f32,
}

/// Yaw about Y first, then pitch about X. The order sets the look and must
/// not change.
fn rotate(p: Vec3, yaw: f32, pitch: f32) -> Vec3 {
    let (sin_y, cos_y) = yaw.sin_cos();
    let x1 = p.x * cos_y - p.z * sin_y;
    let z1 = p.z * cos_y + p.x * sin_y;
    let (sin_x, cos_x) = pitch.sin_cos();
    let y2 = p.y * cos_x - z1 * sin_x;
    let z2 = z1 * cos_x + p.y * sin_x;
    Vec3::new(x1, y2, z2)
}

fn project(p: Vec3, center: Vec2, base_scale: f32, cube_size: f32) -> Projection {
    let world = p * (base_scale * 2.0 / cube_size);
    let scale = PERSPECTIVE / (PERSPECTIVE + world.z);
    Projection {
        x: center.x + world.x * scale,
        y: center.y + world.y * scale,
        scale,
        world_z: world.z,
    }
}

/// Run the full per-frame pipeline: lerp toward the energized form, rotate,
/// perturb, project, color. Writes one projected point per particle into
/// `out` (cleared first). `rng` drives the frame-local effects only and is
/// separate from the generation RNG.
pub fn project_points(
    points: &[Point],
    state: &InteractionState,
    cube_size: f32,
    rng: &mut impl Rng,
    out: &mut Vec<ProjectedPoint>,
) {
    out.clear();
    out.reserve(points.len());

    let center = state.viewport.focal_center();
    let base_scale = state.viewport.base_scale();
    let (pitch, yaw) = state.rotation();
    let hover = state.hover_factor;
    let energized = hover > ENERGIZED_THRESHOLD;

    for point in points {
        let local = point.origin.lerp(point.target, hover);
        let mut pos = rotate(local, yaw, pitch);

        let mut magnet = 0.0;
        let mut glitch = None;
        if energized {
            match point.layer {
                Layer::Core => pos += physics::core_jitter(hover, rng),
                Layer::Shell => {
                    // Magnet strength comes from the un-perturbed screen
                    // position, estimated before any displacement lands.
                    if let Some(p) = state.pointer {
                        let estimate = project(pos, center, base_scale, cube_size);
                        magnet =
                            physics::magnet_strength(Vec2::new(estimate.x, estimate.y).distance(p));
                    }
                    let displacement =
                        physics::shell_displacement(point.origin, state.time, hover, magnet, rng);
                    pos *= 1.0 + displacement / cube_size;
                    glitch = physics::roll_glitch(magnet, hover, rng);
                }
            }
        }

        let proj = project(pos, center, base_scale, cube_size);
        let (mut x, mut y) = (proj.x, proj.y);
        // Pointer pull and glitch act in pointer (pixel) space, after the
        // perspective divide.
        if magnet > 0.0 {
            if let Some(p) = state.pointer {
                x += (p.x - x) * MAGNET_PULL * magnet * hover;
                y += (p.y - y) * MAGNET_PULL * magnet * hover;
            }
        }
        if let Some(g) = glitch {
            if g.vertical {
                y += g.offset;
            } else {
                x += g.offset;
            }
        }

        let depth = ((proj.world_z + base_scale) / (2.0 * base_scale)).clamp(0.0, 1.0);
        let alpha = ALPHA_NEAR - (ALPHA_NEAR - ALPHA_FAR) * depth;
        let size = ((SIZE_BASE + SIZE_HOVER_BOOST * hover) * proj.scale).max(SIZE_MIN);
        let (color, glow) =
            color_for(point, local, cube_size, state.time, hover, glitch.is_some(), rng);

        out.push(ProjectedPoint {
            x,
            y,
            depth,
            color,
            alpha,
            size,
            glow,
        });
    }
}

/// Resting points are a shimmering neutral gray; the energized palette fades
/// in linearly with the hover factor.
fn color_for(
    point: &Point,
    local: Vec3,
    cube_size: f32,
    time: f32,
    hover: f32,
    glitching: bool,
    rng: &mut impl Rng,
) -> ([u8; 3], u8) {
    let shade = 140.0 + rng.gen::<f32>() * 60.0;
    let neutral = [shade, shade, shade];
    if hover <= ENERGIZED_THRESHOLD {
        return (to_rgb(neutral), 0);
    }
    let (energized, glow) = if glitching {
        ([210.0, 245.0, 255.0], 1)
    } else {
        match point.layer {
            Layer::Core => core_color(local, cube_size),
            Layer::Shell => shell_color(point.origin, time, rng),
        }
    };
    let mixed = [
        neutral[0] + (energized[0] - neutral[0]) * hover,
        neutral[1] + (energized[1] - neutral[1]) * hover,
        neutral[2] + (energized[2] - neutral[2]) * hover,
    ];
    (to_rgb(mixed), glow)
}

/// Hot-white in the middle of the ball, cooling to red at its edge.
fn core_color(local: Vec3, cube_size: f32) -> ([f32; 3], u8) {
    let tier = local.length() / (cube_size * CORE_RADIUS_MAX);
    if tier < CORE_HOT_TIER {
        ([255.0, 240.0, 200.0], 2)
    } else if tier < CORE_MID_TIER {
        ([255.0, 150.0, 60.0], 1)
    } else {
        ([220.0, 60.0, 40.0], 0)
    }
}

/// Blue-cyan energy wave running over the shell, with rare one-frame sparks.
fn shell_color(origin: Vec3, time: f32, rng: &mut impl Rng) -> ([f32; 3], u8) {
    if rng.gen::<f32>() < SPARK_PROBABILITY {
        return ([235.0, 250.0, 255.0], 1);
    }
    let energy = 0.5
        + 0.5
            * ((origin.x + origin.y + origin.z) * SHELL_ENERGY_FREQUENCY
                + time * SHELL_ENERGY_SPEED)
                .sin();
    (
        [40.0 + 60.0 * energy, 120.0 + 80.0 * energy, 220.0 + 35.0 * energy],
        0,
    )
}

#[inline]
fn to_rgb(c: [f32; 3]) -> [u8; 3] {
    [c[0] as u8, c[1] as u8, c[2] as u8]
}
