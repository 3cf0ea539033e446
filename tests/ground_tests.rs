//! Ground probe tests
//!
//! Tests for:
//! - Ray / GroundPlane intersection (bounds, direction, double-sidedness)
//! - Nearest-hit selection across several surfaces
//! - GroundProbe distance threshold and lift

use glam::{Vec2, Vec3};

use strider::character::ground::{GroundPlane, GroundProbe, GroundSurface, Ray};

const EPSILON: f32 = 1e-5;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

// ============================================================================
// GroundPlane
// ============================================================================

#[test]
fn plane_hit_from_above() {
    let plane = GroundPlane::default();
    let hit = plane.intersect(&Ray::down(Vec3::new(3.0, 0.1, -2.0))).unwrap();

    assert!(approx_eq(hit.distance, 0.1));
    assert!(approx_eq(hit.point.y, 0.0));
    assert!(approx_eq(hit.point.x, 3.0));
    assert!(approx_eq(hit.point.z, -2.0));
}

#[test]
fn plane_miss_outside_extents() {
    let plane = GroundPlane::new(Vec3::ZERO, 100.0, 100.0);
    assert!(plane.intersect(&Ray::down(Vec3::new(49.0, 1.0, 0.0))).is_some());
    assert!(plane.intersect(&Ray::down(Vec3::new(51.0, 1.0, 0.0))).is_none());
    assert!(plane.intersect(&Ray::down(Vec3::new(0.0, 1.0, -50.5))).is_none());
}

#[test]
fn plane_miss_when_origin_below() {
    let plane = GroundPlane::default();
    assert!(plane.intersect(&Ray::down(Vec3::new(0.0, -0.5, 0.0))).is_none());
}

#[test]
fn plane_is_double_sided() {
    let plane = GroundPlane::default();
    let up = Ray::new(Vec3::new(0.0, -2.0, 0.0), Vec3::Y);
    let hit = plane.intersect(&up).unwrap();
    assert!(approx_eq(hit.distance, 2.0));
}

#[test]
fn plane_parallel_ray_misses() {
    let plane = GroundPlane::default();
    let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::X);
    assert!(plane.intersect(&ray).is_none());
}

#[test]
fn plane_raised_center() {
    let plane = GroundPlane {
        center: Vec3::new(10.0, 0.5, 10.0),
        half_extents: Vec2::splat(1.0),
    };
    assert!(approx_eq(plane.height(), 0.5));
    let hit = plane.intersect(&Ray::down(Vec3::new(10.5, 2.0, 9.5))).unwrap();
    assert!(approx_eq(hit.distance, 1.5));
    assert!(plane.intersect(&Ray::down(Vec3::new(0.0, 2.0, 0.0))).is_none());
}

#[test]
fn surfaces_return_nearest_hit() {
    let floor = GroundPlane::default();
    let step = GroundPlane::new(Vec3::new(0.0, 0.5, 0.0), 2.0, 2.0);
    let surfaces = vec![floor, step];

    let hit = surfaces.intersect(&Ray::down(Vec3::new(0.0, 1.0, 0.0))).unwrap();
    assert!(approx_eq(hit.point.y, 0.5));

    // Off the step only the floor is hit
    let hit = surfaces.intersect(&Ray::down(Vec3::new(5.0, 1.0, 0.0))).unwrap();
    assert!(approx_eq(hit.point.y, 0.0));
}

// ============================================================================
// GroundProbe
// ============================================================================

#[test]
fn probe_within_threshold() {
    let plane = GroundPlane::default();
    let contact = GroundProbe::probe(&plane, Vec3::new(0.0, 0.1, 0.0), 0.15).unwrap();
    assert!(approx_eq(contact.height, 0.0));
    assert!(approx_eq(contact.distance, 0.1));
}

#[test]
fn probe_beyond_threshold_is_airborne() {
    let plane = GroundPlane::default();
    assert!(GroundProbe::probe(&plane, Vec3::new(0.0, 0.3, 0.0), 0.15).is_none());
}

#[test]
fn probe_with_no_surface_is_airborne() {
    let nothing: Vec<GroundPlane> = Vec::new();
    assert!(GroundProbe::probe(&nothing, Vec3::ZERO, 10.0).is_none());
}

#[test]
fn probe_below_applies_lift() {
    let plane = GroundPlane::default();
    let probe = GroundProbe::default();

    // Standing exactly on the surface: ray starts 0.1 above it
    let contact = probe.probe_below(&plane, Vec3::ZERO).unwrap();
    assert!(approx_eq(contact.distance, 0.1));

    // 0.04 above the surface is still within 0.15
    assert!(probe.probe_below(&plane, Vec3::new(0.0, 0.04, 0.0)).is_some());

    // 0.06 above is not
    assert!(probe.probe_below(&plane, Vec3::new(0.0, 0.06, 0.0)).is_none());
}

#[test]
fn probe_through_trait_object() {
    let ground: Box<dyn GroundSurface> = Box::new(GroundPlane::default());
    let probe = GroundProbe::new(0.1, 0.15);
    assert!(probe.probe_below(&*ground, Vec3::ZERO).is_some());
}
