use crate::prelude::{RefError, RefResult};
use ndarray::Array2;
use num_complex::Complex64;
use std::f64::consts::PI;

/// Morlet center frequency `w` used for every reference map.
pub const MORLET_OMEGA: f64 = 5.0;

/// Kernel support, in multiples of the scale.
const SUPPORT_PER_SCALE: f64 = 10.0;

/// Complex Morlet wavelet sampled at `points` positions centered on zero:
/// `s^-1/2 π^-1/4 e^{iωx} e^{-x²/2}`, `x = (k - (points-1)/2) / s`.
pub fn morlet(points: usize, scale: f64, omega: f64) -> Vec<Complex64> {
    let center = (points as f64 - 1.0) / 2.0;
    let norm = (1.0 / scale).sqrt();
    (0..points)
        .map(|k| {
            let x = (k as f64 - center) / scale;
            let oscillation = Complex64::new(0.0, omega * x).exp();
            let wavelet = oscillation * (-0.5 * x * x).exp() * PI.powf(-0.25);
            wavelet * norm
        })
        .collect()
}

/// Same-length linear convolution, centered on the full convolution.
fn convolve_same(data: &[f64], kernel: &[Complex64]) -> Vec<Complex64> {
    let lead = (kernel.len() - 1) / 2;
    (0..data.len())
        .map(|n| {
            let full_index = n + lead;
            let first = (full_index + 1).saturating_sub(kernel.len());
            let last = full_index.min(data.len() - 1);
            (first..=last)
                .map(|m| kernel[full_index - m] * data[m])
                .sum::<Complex64>()
        })
        .collect()
}

/// Continuous wavelet transform with the Morlet wavelet.
///
/// Row `i` holds the response at `scales[i]`; each row has the signal's
/// length. The kernel spans `min(10·s, N)` samples and is applied as the
/// time-reversed conjugate, i.e. as a correlation with the wavelet.
pub fn cwt_morlet(signal: &[f64], scales: &[f64]) -> RefResult<Array2<Complex64>> {
    if signal.is_empty() {
        return Err(RefError::InvalidInput("cannot transform an empty signal".into()));
    }
    if scales.is_empty() {
        return Err(RefError::InvalidInput("at least one scale is required".into()));
    }

    let mut output = Array2::<Complex64>::zeros((scales.len(), signal.len()));
    for (mut row, &scale) in output.outer_iter_mut().zip(scales) {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(RefError::InvalidInput(format!("invalid scale {}", scale)));
        }
        let points = ((SUPPORT_PER_SCALE * scale) as usize).clamp(1, signal.len());
        let kernel: Vec<Complex64> = morlet(points, scale, MORLET_OMEGA)
            .into_iter()
            .rev()
            .map(|c| c.conj())
            .collect();
        for (cell, value) in row.iter_mut().zip(convolve_same(signal, &kernel)) {
            *cell = value;
        }
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn morlet_peak_is_normalized() {
        let wavelet = morlet(9, 1.0, MORLET_OMEGA);
        assert_abs_diff_eq!(wavelet[4].re, PI.powf(-0.25), epsilon = 1e-15);
        assert_abs_diff_eq!(wavelet[4].im, 0.0, epsilon = 1e-15);
        let wide = morlet(9, 4.0, MORLET_OMEGA);
        assert_abs_diff_eq!(wide[4].re, 0.5 * PI.powf(-0.25), epsilon = 1e-15);
    }

    #[test]
    fn morlet_is_conjugate_symmetric() {
        let wavelet = morlet(8, 2.0, MORLET_OMEGA);
        for k in 0..8 {
            let mirrored = wavelet[7 - k].conj();
            assert_abs_diff_eq!(wavelet[k].re, mirrored.re, epsilon = 1e-15);
            assert_abs_diff_eq!(wavelet[k].im, mirrored.im, epsilon = 1e-15);
        }
    }

    #[test]
    fn convolve_same_centers_the_full_output() {
        // full([1,2,3] * [1,1,1]) = [1,3,6,5,3]; same keeps [3,6,5].
        let kernel = vec![Complex64::new(1.0, 0.0); 3];
        let out = convolve_same(&[1.0, 2.0, 3.0], &kernel);
        let re: Vec<f64> = out.iter().map(|c| c.re).collect();
        assert_eq!(re, vec![3.0, 6.0, 5.0]);

        // Even kernels lean left: full([1,2,3] * [1,1]) = [1,3,5,3] -> [1,3,5].
        let even = vec![Complex64::new(1.0, 0.0); 2];
        let out = convolve_same(&[1.0, 2.0, 3.0], &even);
        let re: Vec<f64> = out.iter().map(|c| c.re).collect();
        assert_eq!(re, vec![1.0, 3.0, 5.0]);
    }

    #[test]
    fn single_sample_signal_scales_by_peak() {
        let map = cwt_morlet(&[1.0], &[1.0]).unwrap();
        assert_eq!(map.dim(), (1, 1));
        assert_abs_diff_eq!(map[[0, 0]].re, PI.powf(-0.25), epsilon = 1e-15);
    }

    #[test]
    fn output_has_one_row_per_scale() {
        let signal: Vec<f64> = (1..=8).map(f64::from).collect();
        let map = cwt_morlet(&signal, &[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(map.dim(), (4, 8));
        assert!(map.iter().all(|c| c.re.is_finite() && c.im.is_finite()));
    }

    #[test]
    fn invalid_arguments_are_rejected() {
        assert!(cwt_morlet(&[], &[1.0]).is_err());
        assert!(cwt_morlet(&[1.0], &[]).is_err());
        assert!(cwt_morlet(&[1.0], &[0.0]).is_err());
        assert!(cwt_morlet(&[1.0], &[f64::NAN]).is_err());
    }
}
