//! Ray-primitive intersection.
//!
//! `trace` walks the scene's primitive list and keeps the closest hit. The
//! acceptance test is strict (`0 < t < best`), so when two primitives are
//! exactly equidistant the one earlier in the list wins, deterministically.

use glint_core::{Aabb, Primitive, Scene, Sphere};
use glint_math::{Interval, Ray, Vec3};

/// Record of a ray-scene intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// Distance along the ray, in units of the direction's length
    pub t: f32,
    /// World-space hit position
    pub point: Vec3,
    /// World-space unit normal
    pub normal: Vec3,
    /// Index of the hit primitive in the scene's primitive list
    pub primitive: usize,
}

/// Find the nearest primitive hit by the ray, if any.
pub fn trace(scene: &Scene, ray: &Ray) -> Option<HitRecord> {
    let mut range = Interval::new(0.0, f32::MAX);
    let mut closest = None;

    for (index, primitive) in scene.primitives().iter().enumerate() {
        let candidate = match primitive {
            Primitive::Sphere(sphere) => hit_sphere(sphere, ray, range),
            Primitive::Aabb(aabb) => hit_aabb(aabb, ray, range),
        };
        if let Some(t) = candidate {
            range.max = t;
            closest = Some(index);
        }
    }

    closest.map(|index| resolve(scene, ray, range.max, index))
}

/// Ray-sphere test: solve `a t^2 + b t + c = 0` for the entry point.
///
/// The near root is preferred; when it is not inside the range (the ray
/// starts inside the sphere) the exit point is used instead, mirroring how
/// the slab test treats a ray that starts inside a box.
fn hit_sphere(sphere: &Sphere, ray: &Ray, range: Interval) -> Option<f32> {
    let oc = ray.origin() - sphere.center;
    let a = ray.direction().length_squared();
    let b = 2.0 * oc.dot(ray.direction());
    let c = oc.length_squared() - sphere.radius * sphere.radius;

    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 {
        return None;
    }
    let sqrtd = disc.sqrt();

    let near = (-b - sqrtd) / (2.0 * a);
    if range.surrounds(near) {
        return Some(near);
    }
    let far = (-b + sqrtd) / (2.0 * a);
    range.surrounds(far).then_some(far)
}

/// Ray-box slab test.
///
/// Zero direction components produce IEEE infinities whose comparisons
/// still classify the slab correctly, so there is no special casing.
fn hit_aabb(aabb: &Aabb, ray: &Ray, range: Interval) -> Option<f32> {
    let inv = ray.direction().recip();
    let t0 = (aabb.min - ray.origin()) * inv;
    let t1 = (aabb.max - ray.origin()) * inv;

    let t_near = t0.min(t1).max_element();
    let t_far = t0.max(t1).min_element();

    if t_near > t_far || t_far < 0.0 {
        return None;
    }

    let t = if t_near > 0.0 { t_near } else { t_far };
    range.surrounds(t).then_some(t)
}

/// Fill in world position and normal for the winning primitive.
fn resolve(scene: &Scene, ray: &Ray, t: f32, index: usize) -> HitRecord {
    let point = ray.at(t);
    let normal = match &scene.primitives()[index] {
        Primitive::Sphere(sphere) => (point - sphere.center).normalize(),
        Primitive::Aabb(aabb) => aabb_normal(aabb, point),
    };

    HitRecord {
        t,
        point,
        normal,
        primitive: index,
    }
}

/// Face normal of an axis-aligned box at a surface point.
///
/// The axis whose local coordinate-to-half-extent ratio is largest is the
/// face the point lies on; ties go to X, then Y, then Z.
fn aabb_normal(aabb: &Aabb, point: Vec3) -> Vec3 {
    let local = (point - aabb.center()) / aabb.half_extent();
    let ratios = local.abs();
    let max = ratios.max_element();

    if ratios.x == max {
        Vec3::new(local.x.signum(), 0.0, 0.0)
    } else if ratios.y == max {
        Vec3::new(0.0, local.y.signum(), 0.0)
    } else {
        Vec3::new(0.0, 0.0, local.z.signum())
    }
}
