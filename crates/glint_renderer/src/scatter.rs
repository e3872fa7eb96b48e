//! Shading and bounce sampling.
//!
//! Given a hit, produce the light emitted at that surface and the ray for
//! the next bounce. The next direction is a linear blend, weighted by the
//! material's metallic factor, between a roughness-scaled diffuse scatter
//! and a mirror reflection.

use glint_core::Material;
use glint_math::{Ray, Vec3};

use crate::intersect::HitRecord;
use crate::sampler::UnitBallSampler;

/// Offset along the normal for the next ray origin, avoiding immediate
/// self-intersection (shadow acne).
const SURFACE_EPSILON: f32 = 1e-4;

/// One shading result: emitted light plus the continuation ray.
#[derive(Debug, Clone, Copy)]
pub struct Bounce {
    /// Light emitted by the surface at this bounce
    pub emitted: Vec3,
    /// Ray to trace for the next bounce
    pub ray: Ray,
}

/// Shade a hit and sample the next ray.
///
/// The blended direction is intentionally not renormalized; every consumer
/// of the ray handles non-unit directions.
pub fn scatter(
    hit: &HitRecord,
    material: &Material,
    incoming: Vec3,
    sampler: &mut dyn UnitBallSampler,
) -> Bounce {
    let mut diffuse = hit.normal + sampler.in_unit_ball();
    // Catch a near-zero scatter direction before normalizing
    if diffuse.length_squared() < 1e-8 {
        diffuse = hit.normal;
    }
    let diffuse = diffuse.normalize() * material.roughness;
    let mirror = reflect(incoming, hit.normal);

    let direction = diffuse.lerp(mirror, material.metallic);
    let origin = hit.point + hit.normal * SURFACE_EPSILON;

    Bounce {
        emitted: material.emission(),
        ray: Ray::new(origin, direction),
    }
}

/// Reflect a vector about a normal.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}
