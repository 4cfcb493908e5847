// src/math_utils.rs
use ndarray::{Array1, ArrayView, ArrayView2, Axis, Dimension};

/// L1 norm: sum of absolute values over all scalar components.
///
/// Works for vectors, matrices, and any higher-rank state representation.
pub fn l1_norm<D: Dimension>(values: ArrayView<'_, f64, D>) -> f64 {
    values.iter().map(|v| v.abs()).sum()
}

/// Per-row L1 norms for a batch of states, one row per trajectory.
pub fn l1_norm_rows(values: ArrayView2<'_, f64>) -> Array1<f64> {
    values.map_axis(Axis(1), |row| l1_norm(row))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_l1_norm_vector() {
        assert_eq!(l1_norm(array![3.0, -4.0, 0.0].view()), 7.0);
    }

    #[test]
    fn test_l1_norm_matrix() {
        assert_eq!(l1_norm(array![[1.0, -2.0], [3.0, -4.0]].view()), 10.0);
    }

    #[test]
    fn test_l1_norm_empty() {
        let empty: Array1<f64> = array![];
        assert_eq!(l1_norm(empty.view()), 0.0);
    }

    #[test]
    fn test_l1_norm_rows() {
        let norms = l1_norm_rows(array![[1.0, -2.0], [3.0, -4.0]].view());
        assert_eq!(norms, array![3.0, 7.0]);
    }
}
