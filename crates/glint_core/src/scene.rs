//! Scene types for the path tracer.
//!
//! A scene is a read-only catalogue of primitives and materials, built once
//! before rendering starts and never mutated during a trace. Primitives are
//! kept in a single tagged list; the index of a primitive in that list is
//! the index reported by intersection queries.

use glint_math::Vec3;
use thiserror::Error;

/// Errors raised while building a scene.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("primitive {primitive} references material {material}, but only {count} materials exist")]
    MaterialIndex {
        primitive: usize,
        material: usize,
        count: usize,
    },

    #[error("sphere {0} has non-positive radius")]
    DegenerateSphere(usize),

    #[error("box {0} has min not strictly below max on every axis")]
    DegenerateBox(usize),
}

/// Result type for scene building.
pub type SceneResult<T> = Result<T, SceneError>;

/// Surface material with a linear metallic/roughness blend.
///
/// Albedo components are conceptually in [0, 1] but are not clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Base reflected color (RGB)
    pub albedo: Vec3,
    /// Spread of the diffuse scatter direction (0=tight, 1=full)
    pub roughness: f32,
    /// Blend between diffuse scatter and mirror reflection
    pub metallic: f32,
    /// Scale applied to albedo to get emitted light
    pub emission_strength: f32,
}

impl Material {
    /// Create a new material.
    pub fn new(albedo: Vec3, roughness: f32, metallic: f32, emission_strength: f32) -> Self {
        Self {
            albedo,
            roughness,
            metallic,
            emission_strength,
        }
    }

    /// Create a non-emissive material.
    pub fn surface(albedo: Vec3, roughness: f32, metallic: f32) -> Self {
        Self::new(albedo, roughness, metallic, 0.0)
    }

    /// Create a pure emitter (white albedo scaled by strength).
    pub fn emitter(strength: f32) -> Self {
        Self::new(Vec3::ONE, 0.0, 0.0, strength)
    }

    /// Light emitted by this material.
    #[inline]
    pub fn emission(&self) -> Vec3 {
        self.albedo * self.emission_strength
    }

    /// Check if this material emits light.
    pub fn is_emissive(&self) -> bool {
        self.emission_strength > 0.0
    }
}

impl Default for Material {
    fn default() -> Self {
        Self {
            albedo: Vec3::splat(0.5),
            roughness: 0.5,
            metallic: 0.0,
            emission_strength: 0.0,
        }
    }
}

/// A sphere primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    /// Index into the scene's material table
    pub material: usize,
}

/// An axis-aligned box primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
    /// Index into the scene's material table
    pub material: usize,
}

impl Aabb {
    /// Center point of the box.
    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Half extent per axis.
    #[inline]
    pub fn half_extent(&self) -> Vec3 {
        self.max - self.center()
    }
}

/// A scene primitive, carrying its own material index.
///
/// Intersection queries identify the hit primitive by its index in the
/// scene's primitive list, so there is no separate per-kind index space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    Sphere(Sphere),
    Aabb(Aabb),
}

impl Primitive {
    /// Material table index for this primitive.
    #[inline]
    pub fn material(&self) -> usize {
        match self {
            Primitive::Sphere(s) => s.material,
            Primitive::Aabb(b) => b.material,
        }
    }
}

/// A read-only scene: primitives plus the material table they index.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    primitives: Vec<Primitive>,
    materials: Vec<Material>,
}

impl Scene {
    /// Start building a scene.
    pub fn builder() -> SceneBuilder {
        SceneBuilder::new()
    }

    /// All primitives, in insertion order.
    #[inline]
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// The material table.
    #[inline]
    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    /// Check if the scene has no primitives at all.
    ///
    /// Checked over the combined primitive list, so a scene with boxes but
    /// no spheres is not empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Look up the material of a primitive.
    ///
    /// The builder guarantees every material index is in range.
    #[inline]
    pub fn material_of(&self, primitive: &Primitive) -> &Material {
        &self.materials[primitive.material()]
    }
}

/// Builder for [`Scene`] with fail-fast validation.
///
/// `build` rejects out-of-range material indices and degenerate geometry;
/// those are data bugs and must never reach the intersection engine.
#[derive(Debug, Default)]
pub struct SceneBuilder {
    primitives: Vec<Primitive>,
    materials: Vec<Material>,
}

impl SceneBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a material, returning its index in the material table.
    pub fn add_material(&mut self, material: Material) -> usize {
        self.materials.push(material);
        self.materials.len() - 1
    }

    /// Add a sphere referencing a material index.
    pub fn add_sphere(&mut self, center: Vec3, radius: f32, material: usize) -> &mut Self {
        self.primitives.push(Primitive::Sphere(Sphere {
            center,
            radius,
            material,
        }));
        self
    }

    /// Add an axis-aligned box referencing a material index.
    pub fn add_aabb(&mut self, min: Vec3, max: Vec3, material: usize) -> &mut Self {
        self.primitives
            .push(Primitive::Aabb(Aabb { min, max, material }));
        self
    }

    /// Add an already-constructed primitive.
    pub fn add_primitive(&mut self, primitive: Primitive) -> &mut Self {
        self.primitives.push(primitive);
        self
    }

    /// Validate and produce the scene.
    pub fn build(self) -> SceneResult<Scene> {
        let count = self.materials.len();
        for (i, primitive) in self.primitives.iter().enumerate() {
            let material = primitive.material();
            if material >= count {
                return Err(SceneError::MaterialIndex {
                    primitive: i,
                    material,
                    count,
                });
            }

            match primitive {
                Primitive::Sphere(s) => {
                    if s.radius <= 0.0 {
                        return Err(SceneError::DegenerateSphere(i));
                    }
                }
                Primitive::Aabb(b) => {
                    if !(b.min.x < b.max.x && b.min.y < b.max.y && b.min.z < b.max.z) {
                        return Err(SceneError::DegenerateBox(i));
                    }
                }
            }
        }

        log::debug!(
            "Built scene: {} primitives, {} materials",
            self.primitives.len(),
            self.materials.len()
        );

        Ok(Scene {
            primitives: self.primitives,
            materials: self.materials,
        })
    }
}
