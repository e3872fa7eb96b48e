//! Glint Renderer - CPU path tracing core.
//!
//! For each pixel the camera module produces a world-space ray, the
//! integrator repeatedly intersects it against the scene and scatters it off
//! surfaces, and the resulting radiance folds into a single color. Window
//! creation, input polling, and frame pacing belong to the host; this crate
//! is the tracing math plus small host-facing frame helpers.

mod camera;
mod frame;
mod integrator;
mod intersect;
mod sampler;
mod scatter;

pub use camera::{generate_ray, CameraState, MAX_PITCH};
pub use frame::{render, render_parallel, Accumulator, ImageBuffer};
pub use integrator::{integrate, RenderConfig, RenderMode};
pub use intersect::{trace, HitRecord};
pub use sampler::UnitBallSampler;
pub use scatter::{reflect, scatter, Bounce};

/// Re-export common math types from glint_math
pub use glint_math::{Interval, Ray, Vec3};
