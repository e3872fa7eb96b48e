//! Random direction sampling.
//!
//! The scatter step needs one uniform sample from the unit ball per bounce.
//! The source is a seam so hosts can share, seed, or confine generators as
//! they like, and tests can pin the direction.

use glint_math::Vec3;
use rand::{Rng, RngCore};

/// A uniform sampler over the unit ball.
pub trait UnitBallSampler {
    fn in_unit_ball(&mut self) -> Vec3;
}

/// Every rand generator is a unit-ball sampler via rejection sampling
/// over the cube [-1, 1]^3.
impl<R: RngCore> UnitBallSampler for R {
    fn in_unit_ball(&mut self) -> Vec3 {
        loop {
            let p = Vec3::new(
                self.gen_range(-1.0..1.0),
                self.gen_range(-1.0..1.0),
                self.gen_range(-1.0..1.0),
            );
            if p.length_squared() < 1.0 {
                return p;
            }
        }
    }
}

/// Sampler that always returns the same point, for deterministic tests.
#[cfg(test)]
pub(crate) struct FixedSampler(pub Vec3);

#[cfg(test)]
impl UnitBallSampler for FixedSampler {
    fn in_unit_ball(&mut self) -> Vec3 {
        self.0
    }
}
