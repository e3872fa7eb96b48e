//! Camera ray generation.
//!
//! The camera is a per-frame value owned by the host: the core never stores
//! position or orientation, it only maps pixel coordinates plus a camera
//! state to a world-space ray.

use glint_math::{EulerRot, Mat3, Ray, Vec3};

/// Pitch limit just shy of straight up/down, keeping the yaw axis stable.
pub const MAX_PITCH: f32 = std::f32::consts::PI * 0.49;

/// Camera position and yaw/pitch orientation for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    pub position: Vec3,
    yaw: f32,
    pitch: f32,
}

impl CameraState {
    /// Camera at `position` looking down -Z.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            yaw: 0.0,
            pitch: 0.0,
        }
    }

    /// Camera with explicit orientation; pitch is clamped.
    pub fn with_angles(position: Vec3, yaw: f32, pitch: f32) -> Self {
        Self {
            position,
            yaw,
            pitch: pitch.clamp(-MAX_PITCH, MAX_PITCH),
        }
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Apply a look delta, clamping pitch to +/-[`MAX_PITCH`].
    pub fn look(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.pitch = (self.pitch + delta_pitch).clamp(-MAX_PITCH, MAX_PITCH);
    }

    /// Yaw-pitch rotation (no roll) from camera space into world space.
    pub fn rotation(&self) -> Mat3 {
        Mat3::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }

    /// View direction, for host movement handling.
    pub fn forward(&self) -> Vec3 {
        self.rotation() * Vec3::NEG_Z
    }

    /// Strafe direction, for host movement handling.
    pub fn right(&self) -> Vec3 {
        self.rotation() * Vec3::X
    }
}

impl Default for CameraState {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

/// Generate the world-space camera ray through pixel (x, y).
///
/// Pixel centers map to normalized device coordinates with row 0 at the top
/// of the image; the camera-space direction through the pixel is
/// (ndc_x, ndc_y, -1), rotated into world space and normalized.
pub fn generate_ray(x: u32, y: u32, width: u32, height: u32, camera: &CameraState) -> Ray {
    let aspect = width as f32 / height as f32;
    let ndc_x = (2.0 * (x as f32 + 0.5) / width as f32 - 1.0) * aspect;
    let ndc_y = 1.0 - 2.0 * (y as f32 + 0.5) / height as f32;

    let direction = camera.rotation() * Vec3::new(ndc_x, ndc_y, -1.0);
    Ray::new(camera.position, direction.normalize())
}
