//! # sde-order: Strong-Convergence-Order Estimation for SDE Integrators
//!
//! A Rust library for measuring the empirical strong-convergence order of a
//! stochastic differential equation (SDE) integration scheme from a single
//! simulated driving-noise path.
//!
//! ## Key Features
//!
//! - **Consistent path coarsening**: merges fine-grid Wiener and Lévy-area
//!   draws into exact halved-resolution draws of the *same* Brownian path,
//!   never an independent resample
//! - **Richardson extrapolation**: runs any [`integrator::Integrator`] at
//!   three nested resolutions (Δt, 2Δt, 4Δt) and reads the observed order off
//!   the log-ratio of endpoint distances
//! - **Scheme agnostic**: the integrator is a trait object-friendly
//!   collaborator; Euler–Maruyama, Milstein, or anything else plugs in
//! - **Explicit noise policy**: provided-vs-generated noise is a visible
//!   variant choice, with seeding left to the caller
//!
//! ## Quick Start
//!
//! ```rust
//! use ndarray::{array, Array1};
//! use sde_order::convergence::{estimate_rate, Noise};
//! use sde_order::integrator::{Integrator, Trajectory};
//! use sde_order::{rng, SdeResult};
//!
//! /// Toy scheme whose endpoint error scales exactly as Δt.
//! struct FirstOrderScheme;
//!
//! impl Integrator for FirstOrderScheme {
//!     fn integrate(
//!         &self,
//!         rho_0: &Array1<f64>,
//!         times: &Array1<f64>,
//!         _u1s: &Array1<f64>,
//!         _u2s: Option<&Array1<f64>>,
//!     ) -> SdeResult<Trajectory> {
//!         let dt = (times[times.len() - 1] - times[0]) / (times.len() - 1) as f64;
//!         let mut states = vec![rho_0.clone(); times.len()];
//!         if let Some(last) = states.last_mut() {
//!             *last = rho_0 + dt;
//!         }
//!         Ok(Trajectory::new(states))
//!     }
//! }
//!
//! let times = Array1::linspace(0.0, 1.0, 17);
//! let mut rng = rng::seed_rng_from_u64(42);
//! let rate = estimate_rate(
//!     &FirstOrderScheme,
//!     &array![1.0],
//!     &times,
//!     Noise::Generate,
//!     Noise::Generate,
//!     &mut rng,
//! )
//! .unwrap();
//! assert!((rate - 1.0).abs() < 1e-9);
//! ```
//!
//! ## Mathematical Foundation
//!
//! Increments are stored as standard-normal draws scaled by `√Δt` inside the
//! integrator. Two adjacent fine-interval draws merge into the doubled
//! interval's draw via `(a + b)/√2` (Wiener) and
//! `(√3(a - b) + c + d)/(2√2)` (Lévy area), which is exact in law. Because
//! all three resolutions then sample one Brownian realization, endpoint
//! differences isolate discretization error, and for a scheme of strong order
//! `p` the two differences scale by `2^p`.

// Module declarations
pub mod convergence;
pub mod error;
pub mod increments;
pub mod integrator;
pub mod math_utils;
pub mod rng;

// Re-export commonly used types for convenience
pub use error::{SdeError, SdeResult};
