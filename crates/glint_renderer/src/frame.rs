//! Host-facing frame helpers.
//!
//! Per-pixel integration is pure, so whole frames are embarrassingly
//! parallel: `render_parallel` splits the image into rows under rayon with
//! one seeded generator per row. `Accumulator` keeps a running average of
//! frames for progressive refinement while the camera holds still.

use std::path::Path;

use glint_core::Scene;
use glint_math::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

use crate::camera::{generate_ray, CameraState};
use crate::integrator::{integrate, RenderConfig};
use crate::sampler::UnitBallSampler;

/// Simple image buffer for storing render output.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Vec3>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Vec3::ZERO; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Vec3 {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Vec3) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Convert to 8-bit RGBA bytes.
    ///
    /// Components are clamped to [0, 1] before packing; the integrator
    /// already clamps, this keeps averaged or hand-set buffers safe too.
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity((self.width * self.height * 4) as usize);
        for color in &self.pixels {
            let c = color.clamp(Vec3::ZERO, Vec3::ONE);
            bytes.extend_from_slice(&[
                (255.0 * c.x) as u8,
                (255.0 * c.y) as u8,
                (255.0 * c.z) as u8,
                255,
            ]);
        }
        bytes
    }

    /// Write the buffer as a PNG file.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> image::ImageResult<()> {
        image::save_buffer(
            path,
            &self.to_rgba(),
            self.width,
            self.height,
            image::ColorType::Rgba8,
        )
    }
}

/// Render a frame single-threaded with a caller-supplied sampler.
pub fn render(
    scene: &Scene,
    camera: &CameraState,
    config: &RenderConfig,
    width: u32,
    height: u32,
    sampler: &mut dyn UnitBallSampler,
) -> ImageBuffer {
    let mut image = ImageBuffer::new(width, height);

    for y in 0..height {
        for x in 0..width {
            let ray = generate_ray(x, y, width, height, camera);
            image.set(x, y, integrate(scene, &ray, config, sampler));
        }
    }

    image
}

/// Render a frame with one rayon task per row.
///
/// Each row gets its own generator derived from `seed`, so there is no
/// shared mutable state and a given seed renders the same frame every time.
pub fn render_parallel(
    scene: &Scene,
    camera: &CameraState,
    config: &RenderConfig,
    width: u32,
    height: u32,
    seed: u64,
) -> ImageBuffer {
    let rows: Vec<Vec<Vec3>> = (0..height)
        .into_par_iter()
        .map(|y| {
            let mut rng = StdRng::seed_from_u64(seed ^ (y as u64).wrapping_mul(0x9E3779B97F4A7C15));
            (0..width)
                .map(|x| {
                    let ray = generate_ray(x, y, width, height, camera);
                    integrate(scene, &ray, config, &mut rng)
                })
                .collect()
        })
        .collect();

    let mut image = ImageBuffer::new(width, height);
    for (y, row) in rows.into_iter().enumerate() {
        for (x, color) in row.into_iter().enumerate() {
            image.set(x as u32, y as u32, color);
        }
    }

    log::debug!("Rendered {}x{} frame", width, height);
    image
}

/// Running average of frames for progressive refinement.
///
/// The host feeds in one noisy frame per iteration while the camera holds
/// still, and resolves the average whenever it wants to present.
#[derive(Debug, Clone)]
pub struct Accumulator {
    width: u32,
    height: u32,
    sum: Vec<Vec3>,
    frames: u32,
}

impl Accumulator {
    /// Create an accumulator for frames of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            sum: vec![Vec3::ZERO; (width * height) as usize],
            frames: 0,
        }
    }

    /// Number of frames accumulated so far.
    pub fn frames(&self) -> u32 {
        self.frames
    }

    /// Fold one frame into the running sum.
    pub fn add_frame(&mut self, frame: &ImageBuffer) {
        assert_eq!(
            (frame.width, frame.height),
            (self.width, self.height),
            "accumulated frame size mismatch"
        );
        for (sum, pixel) in self.sum.iter_mut().zip(&frame.pixels) {
            *sum += *pixel;
        }
        self.frames += 1;
    }

    /// Average of all accumulated frames (black when none).
    pub fn resolve(&self) -> ImageBuffer {
        let mut image = ImageBuffer::new(self.width, self.height);
        if self.frames > 0 {
            let scale = 1.0 / self.frames as f32;
            for (out, sum) in image.pixels.iter_mut().zip(&self.sum) {
                *out = *sum * scale;
            }
        }
        image
    }

    /// Drop all accumulated frames, e.g. after the camera moves.
    pub fn reset(&mut self) {
        self.sum.fill(Vec3::ZERO);
        self.frames = 0;
    }
}
