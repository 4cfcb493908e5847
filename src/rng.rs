// src/rng.rs
//! Random Number Generation for Driving-Noise Samples
//!
//! # Design Philosophy
//!
//! The estimator treats the random source as an external collaborator: it only
//! ever asks for "n independent standard-normal samples". Seeding and
//! reproducibility policy stay with the caller, which is why every entry point
//! takes `&mut R: Rng` instead of owning a generator.
//!
//! Increments are stored as N(0,1) draws; the integrator scales them by
//! `sqrt(Δt)` to obtain Brownian increments, so the same sample sequence can be
//! reinterpreted on any grid spacing.

use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

/// Seed a deterministic RNG (critical for debugging/validation)
pub fn seed_rng_from_u64(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Single standard-normal draw
pub fn get_normal_draw<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    StandardNormal.sample(rng)
}

/// `count` i.i.d. standard-normal samples, one per grid interval
pub fn standard_normals<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Array1<f64> {
    (0..count).map(|_| get_normal_draw(rng)).collect()
}

/// `rows` independent standard-normal sample rows of length `count`
///
/// Each row drives one trajectory in a batch; rows are filled in order, so a
/// seeded generator reproduces the whole batch bit-for-bit.
pub fn standard_normal_rows<R: Rng + ?Sized>(
    rng: &mut R,
    rows: usize,
    count: usize,
) -> Array2<f64> {
    Array2::from_shape_fn((rows, count), |_| get_normal_draw(rng))
}
