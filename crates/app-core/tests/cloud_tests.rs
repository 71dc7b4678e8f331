// Host-side tests for particle generation invariants.

use app_core::cloud::{self, Layer};
use app_core::constants::{CORE_RADIUS_MAX, CORE_RADIUS_MIN};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

const CUBE: f32 = 1000.0;

#[test]
fn generates_exactly_the_requested_count() {
    let mut rng = StdRng::seed_from_u64(42);
    let points = cloud::generate(850, CUBE, 0.25, &mut rng);
    assert_eq!(points.len(), 850);
}

#[test]
fn origins_stay_inside_the_spawn_cube() {
    let mut rng = StdRng::seed_from_u64(42);
    let points = cloud::generate(2000, CUBE, 0.25, &mut rng);
    let half = CUBE / 2.0;
    for p in &points {
        assert!(
            p.origin.x.abs() <= half && p.origin.y.abs() <= half && p.origin.z.abs() <= half,
            "origin outside cube: {:?}",
            p.origin
        );
    }
}

#[test]
fn shell_targets_sit_on_the_sphere() {
    let mut rng = StdRng::seed_from_u64(11);
    let points = cloud::generate(2000, CUBE, 0.25, &mut rng);
    for p in points.iter().filter(|p| p.layer == Layer::Shell) {
        let r = p.target.length();
        assert!((r - CUBE).abs() < 0.5, "shell target off the sphere: r = {r}");
    }
}

#[test]
fn core_targets_stay_in_the_radius_band() {
    let mut rng = StdRng::seed_from_u64(11);
    let points = cloud::generate(2000, CUBE, 0.25, &mut rng);
    let lo = CORE_RADIUS_MIN * CUBE - 0.5;
    let hi = CORE_RADIUS_MAX * CUBE + 0.5;
    let mut cores = 0;
    for p in points.iter().filter(|p| p.layer == Layer::Core) {
        cores += 1;
        let r = p.target.length();
        assert!(r >= lo && r <= hi, "core target out of band: r = {r}");
    }
    assert!(cores > 0, "expected some core points");
}

#[test]
fn layer_split_is_roughly_a_quarter_core() {
    let mut rng = StdRng::seed_from_u64(7);
    let points = cloud::generate(4000, CUBE, 0.25, &mut rng);
    let core = points.iter().filter(|p| p.layer == Layer::Core).count();
    let fraction = core as f32 / points.len() as f32;
    assert!(
        (0.20..=0.30).contains(&fraction),
        "core fraction drifted: {fraction}"
    );
}

#[test]
fn zero_length_origin_gets_a_finite_fallback_target() {
    let t = cloud::shell_target(Vec3::ZERO, CUBE);
    assert!(t.is_finite(), "fallback target must not be NaN/inf");
    assert!((t.length() - CUBE).abs() < 1e-3);
    // Deterministic: the same degenerate origin always lands the same place.
    assert_eq!(t, cloud::shell_target(Vec3::ZERO, CUBE));
}

#[test]
fn generation_is_reproducible_for_a_fixed_seed() {
    let mut a = StdRng::seed_from_u64(99);
    let mut b = StdRng::seed_from_u64(99);
    let first = cloud::generate(500, CUBE, 0.25, &mut a);
    let second = cloud::generate(500, CUBE, 0.25, &mut b);
    for (p, q) in first.iter().zip(second.iter()) {
        assert_eq!(p.layer, q.layer);
        assert_eq!(p.origin, q.origin);
        assert_eq!(p.target, q.target);
    }
}
