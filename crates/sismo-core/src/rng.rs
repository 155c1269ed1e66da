//! Deterministic random number generation utilities.
//!
//! Augmentations draw all of their randomness (gating, noise, cutoff
//! selection) from a [`ChaCha8Rng`] owned by the transform, seeded through
//! [`Seed`]. The same seed reproduces the same augmentation sequence; the
//! generator state advances with every call, so repeated applications of
//! one transform draw fresh values.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A seed for deterministic random number generation.
///
/// # Example
///
/// ```
/// use rand::Rng;
/// use sismo_core::Seed;
///
/// let mut a = Seed::new(42).to_rng();
/// let mut b = Seed::new(42).to_rng();
/// let x: f32 = a.gen_range(0.0..1.0);
/// let y: f32 = b.gen_range(0.0..1.0);
/// assert_eq!(x, y);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Seed(u64);

impl Seed {
    /// Creates a seed with the given value.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Creates a seed from the current system time, for non-reproducible
    /// behavior.
    pub fn from_entropy() -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};
        let duration = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        Self(duration.as_nanos() as u64)
    }

    /// Returns the underlying seed value.
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Creates a random number generator from this seed.
    pub fn to_rng(&self) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.0)
    }

    /// Derives an independent seed from this seed and a key.
    ///
    /// Used to hand each stage of a pipeline its own decorrelated stream
    /// from one master seed.
    pub fn derive(&self, key: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        self.0.hash(&mut hasher);
        key.hash(&mut hasher);
        Self(hasher.finish())
    }
}

impl Default for Seed {
    fn default() -> Self {
        Self::new(0)
    }
}

impl From<u64> for Seed {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl From<Seed> for u64 {
    fn from(seed: Seed) -> Self {
        seed.0
    }
}

/// Draws one pair of independent standard-normal samples via the
/// Box-Muller transform.
#[inline]
pub fn gaussian_pair<R: Rng>(rng: &mut R) -> (f32, f32) {
    // clamp away from zero so ln() stays finite
    let u1: f32 = rng.gen_range(0.0..1.0f32).max(1e-10);
    let u2: f32 = rng.gen_range(0.0..1.0f32);
    let radius = (-2.0 * u1.ln()).sqrt();
    let theta = 2.0 * std::f32::consts::PI * u2;
    (radius * theta.cos(), radius * theta.sin())
}

/// Fills a slice with standard-normal samples.
pub fn fill_gaussian<R: Rng>(rng: &mut R, out: &mut [f32]) {
    let mut i = 0;
    while i + 1 < out.len() {
        let (a, b) = gaussian_pair(rng);
        out[i] = a;
        out[i + 1] = b;
        i += 2;
    }
    if i < out.len() {
        out[i] = gaussian_pair(rng).0;
    }
}
