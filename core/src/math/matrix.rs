use ndarray::Array2;
use num_complex::Complex64;

pub struct MatrixHelper;

impl MatrixHelper {
    /// Element-wise modulus.
    pub fn magnitude(matrix: &Array2<Complex64>) -> Array2<f64> {
        matrix.mapv(|c| c.norm())
    }

    /// Element-wise argument in `(-π, π]`.
    pub fn phase(matrix: &Array2<Complex64>) -> Array2<f64> {
        matrix.mapv(|c| c.im.atan2(c.re))
    }

    /// Row-major copy, one `Vec` per row.
    pub fn to_rows(matrix: &Array2<f64>) -> Vec<Vec<f64>> {
        matrix.outer_iter().map(|row| row.to_vec()).collect()
    }

    /// Row-major copy of a complex matrix as `(re, im)` pairs.
    pub fn to_pair_rows(matrix: &Array2<Complex64>) -> Vec<Vec<(f64, f64)>> {
        matrix
            .outer_iter()
            .map(|row| row.iter().map(|c| (c.re, c.im)).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn magnitude_and_phase_of_unit_values() {
        let m = array![[Complex64::new(0.0, 2.0), Complex64::new(-3.0, 0.0)]];
        assert_eq!(MatrixHelper::magnitude(&m), array![[2.0, 3.0]]);
        let phase = MatrixHelper::phase(&m);
        assert_eq!(phase[[0, 0]], FRAC_PI_2);
        assert_eq!(phase[[0, 1]], std::f64::consts::PI);
    }

    #[test]
    fn rows_preserve_order() {
        let m = array![[1.0, 2.0], [3.0, 4.0]];
        assert_eq!(
            MatrixHelper::to_rows(&m),
            vec![vec![1.0, 2.0], vec![3.0, 4.0]]
        );
        let c = array![[Complex64::new(1.0, -1.0)]];
        assert_eq!(MatrixHelper::to_pair_rows(&c), vec![vec![(1.0, -1.0)]]);
    }
}
