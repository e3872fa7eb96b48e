//! JSON scene descriptions.
//!
//! A description mirrors the literal scene tables the renderer consumes:
//! a material list plus sphere and box lists that reference materials by
//! index. Loading funnels through [`SceneBuilder`](crate::SceneBuilder) so
//! file data gets the same validation as scenes built in code.
//!
//! Spheres are listed before boxes in the built scene, matching the
//! description order.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use glint_math::Vec3;

use crate::scene::{Material, Scene, SceneError};

/// Errors that can occur while loading a scene description.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid scene: {0}")]
    Scene(#[from] SceneError),
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Serialized form of a material.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialDesc {
    pub albedo: [f32; 3],
    #[serde(default)]
    pub roughness: f32,
    #[serde(default)]
    pub metallic: f32,
    #[serde(default)]
    pub emission_strength: f32,
}

/// Serialized form of a sphere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SphereDesc {
    pub center: [f32; 3],
    pub radius: f32,
    pub material: usize,
}

/// Serialized form of an axis-aligned box.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AabbDesc {
    pub min: [f32; 3],
    pub max: [f32; 3],
    pub material: usize,
}

/// A complete scene description.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneDescription {
    #[serde(default)]
    pub materials: Vec<MaterialDesc>,
    #[serde(default)]
    pub spheres: Vec<SphereDesc>,
    #[serde(default)]
    pub boxes: Vec<AabbDesc>,
}

impl SceneDescription {
    /// Build a validated scene from this description.
    pub fn into_scene(self) -> LoadResult<Scene> {
        let mut builder = Scene::builder();

        for m in &self.materials {
            builder.add_material(Material::new(
                Vec3::from_array(m.albedo),
                m.roughness,
                m.metallic,
                m.emission_strength,
            ));
        }
        for s in &self.spheres {
            builder.add_sphere(Vec3::from_array(s.center), s.radius, s.material);
        }
        for b in &self.boxes {
            builder.add_aabb(Vec3::from_array(b.min), Vec3::from_array(b.max), b.material);
        }

        let scene = builder.build()?;
        log::info!(
            "Loaded scene description: {} materials, {} spheres, {} boxes",
            self.materials.len(),
            self.spheres.len(),
            self.boxes.len()
        );
        Ok(scene)
    }
}

/// Load a scene from a JSON string.
pub fn load_json_str(json: &str) -> LoadResult<Scene> {
    let desc: SceneDescription = serde_json::from_str(json)?;
    desc.into_scene()
}

/// Load a scene from a JSON file.
pub fn load_json<P: AsRef<Path>>(path: P) -> LoadResult<Scene> {
    let json = std::fs::read_to_string(path)?;
    load_json_str(&json)
}
