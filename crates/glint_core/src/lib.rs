//! Glint Core - Scene data for the path tracer.
//!
//! This crate provides:
//!
//! - **Scene types**: `Scene`, `Primitive`, `Sphere`, `Aabb`, `Material`
//! - **Scene building**: a validating `SceneBuilder`
//! - **Scene descriptions**: JSON loading via serde
//!
//! # Example
//!
//! ```
//! use glint_core::{Material, Scene};
//! use glint_math::Vec3;
//!
//! let mut builder = Scene::builder();
//! let grey = builder.add_material(Material::new(Vec3::splat(0.5), 0.9, 0.1, 0.0));
//! builder.add_sphere(Vec3::ZERO, 1.0, grey);
//! let scene = builder.build().unwrap();
//! assert_eq!(scene.primitives().len(), 1);
//! ```

pub mod description;
pub mod scene;

// Re-export commonly used types
pub use description::{load_json, load_json_str, LoadError, LoadResult};
pub use scene::{Aabb, Material, Primitive, Scene, SceneBuilder, SceneError, SceneResult, Sphere};
