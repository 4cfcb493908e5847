// src/increments.rs
//! Consistent Coarsening of Wiener and Lévy-Area Increments
//!
//! # Mathematical Framework
//!
//! Increments are stored as standard-normal draws; the integrator later scales
//! them by `√Δt`. Merging the two draws of adjacent half-intervals into the
//! single draw of the doubled interval must preserve the joint law of the
//! underlying Brownian path:
//!
//! ```text
//! U1'[k] = (U1[2k] + U1[2k+1]) / √2
//! U2'[k] = (√3 (U1[2k] - U1[2k+1]) + U2[2k] + U2[2k+1]) / (2√2)
//! ```
//!
//! With i.i.d. N(0,1) inputs both outputs are again exactly N(0,1), and `U2'`
//! keeps the joint distribution the multiple-Itô (Lévy-area) integral needs
//! over the merged step. The coarse grids therefore sample the *same* path
//! realization, not an independent resample; differences between integrations
//! at nested resolutions isolate discretization error.
//!
//! # Batch Convention
//!
//! The batch form takes a 2-D increment array with one row per independent
//! trajectory and the interval axis as columns. Rows never interact; there is
//! no implicit broadcasting between shapes.
//!
//! # Caveat
//!
//! Even spacing of `times` is assumed, not checked. Interval counts and
//! increment lengths are validated; spacing is the caller's contract.

use crate::error::{validation, SdeResult};
use ndarray::{s, Array, Array1, Array2, ArrayView, ArrayView1, ArrayView2, Dimension};
use std::f64::consts::SQRT_2;

/// Merged Wiener draw for the doubled interval, element-wise over any layout.
fn merged_wiener<D: Dimension>(
    even_u1s: &ArrayView<'_, f64, D>,
    odd_u1s: &ArrayView<'_, f64, D>,
) -> Array<f64, D> {
    (even_u1s + odd_u1s) / SQRT_2
}

/// Merged Lévy-area draw for the doubled interval.
fn merged_levy<D: Dimension>(
    even_u1s: &ArrayView<'_, f64, D>,
    odd_u1s: &ArrayView<'_, f64, D>,
    even_u2s: &ArrayView<'_, f64, D>,
    odd_u2s: &ArrayView<'_, f64, D>,
) -> Array<f64, D> {
    ((even_u1s - odd_u1s) * 3.0_f64.sqrt() + even_u2s + odd_u2s) / (2.0 * SQRT_2)
}

fn validate_refinable(times: &ArrayView1<'_, f64>) -> SdeResult<usize> {
    let intervals = validation::interval_count(times.len())?;
    validation::validate_even_intervals(intervals)?;
    Ok(intervals)
}

/// Double the interval length of a grid of Wiener increments.
///
/// Returns the subsampled times (every other point, starting at index 0) and
/// the merged standard-normal draws for the doubled intervals. Inputs are
/// never mutated.
///
/// # Errors
///
/// `InvalidGrid` if the grid defines fewer than two intervals or an odd
/// number of them; `IncrementCountMismatch` if `u1s` does not carry exactly
/// one sample per interval.
pub fn double_increments(
    times: ArrayView1<'_, f64>,
    u1s: ArrayView1<'_, f64>,
) -> SdeResult<(Array1<f64>, Array1<f64>)> {
    let intervals = validate_refinable(&times)?;
    validation::validate_increment_count("U1s", intervals, u1s.len())?;

    let new_times = times.slice(s![..;2]).to_owned();
    let new_u1s = merged_wiener(&u1s.slice(s![..;2]), &u1s.slice(s![1..;2]));
    Ok((new_times, new_u1s))
}

/// Double the interval length of a grid of Wiener and Lévy-area increments.
///
/// Same contract as [`double_increments`], additionally merging the
/// multiple-Itô draws needed by integrators of strong order above 0.5.
pub fn double_increments_with_levy(
    times: ArrayView1<'_, f64>,
    u1s: ArrayView1<'_, f64>,
    u2s: ArrayView1<'_, f64>,
) -> SdeResult<(Array1<f64>, Array1<f64>, Array1<f64>)> {
    let intervals = validate_refinable(&times)?;
    validation::validate_increment_count("U1s", intervals, u1s.len())?;
    validation::validate_increment_count("U2s", intervals, u2s.len())?;

    let even_u1s = u1s.slice(s![..;2]);
    let odd_u1s = u1s.slice(s![1..;2]);
    let new_times = times.slice(s![..;2]).to_owned();
    let new_u1s = merged_wiener(&even_u1s, &odd_u1s);
    let new_u2s = merged_levy(
        &even_u1s,
        &odd_u1s,
        &u2s.slice(s![..;2]),
        &u2s.slice(s![1..;2]),
    );
    Ok((new_times, new_u1s, new_u2s))
}

/// Batch form: one row per independent trajectory, refined row-wise.
///
/// `u2s` is optional; when omitted only the Wiener draws are merged and the
/// third element of the result is `None`.
pub fn double_increments_batch(
    times: ArrayView1<'_, f64>,
    u1s: ArrayView2<'_, f64>,
    u2s: Option<ArrayView2<'_, f64>>,
) -> SdeResult<(Array1<f64>, Array2<f64>, Option<Array2<f64>>)> {
    let intervals = validate_refinable(&times)?;
    validation::validate_increment_count("U1s", intervals, u1s.ncols())?;
    if let Some(u2s) = &u2s {
        validation::validate_increment_count("U2s", intervals, u2s.ncols())?;
        validation::validate_increment_count("U2s rows", u1s.nrows(), u2s.nrows())?;
    }

    let even_u1s = u1s.slice(s![.., ..;2]);
    let odd_u1s = u1s.slice(s![.., 1..;2]);
    let new_times = times.slice(s![..;2]).to_owned();
    let new_u1s = merged_wiener(&even_u1s, &odd_u1s);
    let new_u2s = u2s.map(|u2s| {
        merged_levy(
            &even_u1s,
            &odd_u1s,
            &u2s.slice(s![.., ..;2]),
            &u2s.slice(s![.., 1..;2]),
        )
    });
    Ok((new_times, new_u1s, new_u2s))
}
