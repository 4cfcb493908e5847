// src/integrator.rs
//! Integrator Collaborator Interface
//!
//! The estimator is agnostic to the numerical scheme: any type that can turn
//! an initial state, a time grid, and per-interval standard-normal draws into
//! a trajectory can be measured. Schemes of strong order above 0.5 consume the
//! Lévy-area draws in `u2s`; lower-order schemes may ignore them.

use crate::error::SdeResult;
use ndarray::Array1;

/// A numerical SDE integration scheme.
pub trait Integrator {
    /// Integrate from `rho_0` across `times`, driven by one standard-normal
    /// Wiener draw per interval (`u1s`) and optional Lévy-area draws (`u2s`).
    ///
    /// The returned trajectory's states align one-to-one with `times`.
    fn integrate(
        &self,
        rho_0: &Array1<f64>,
        times: &Array1<f64>,
        u1s: &Array1<f64>,
        u2s: Option<&Array1<f64>>,
    ) -> SdeResult<Trajectory>;
}

/// Ordered sequence of system states produced by one integration run.
#[derive(Debug, Clone)]
pub struct Trajectory {
    pub states: Vec<Array1<f64>>,
}

impl Trajectory {
    pub fn new(states: Vec<Array1<f64>>) -> Self {
        Trajectory { states }
    }

    /// State at the last grid point, if any state was produced.
    pub fn final_state(&self) -> Option<&Array1<f64>> {
        self.states.last()
    }
}
