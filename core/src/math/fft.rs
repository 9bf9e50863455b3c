use crate::prelude::{RefError, RefResult};
use num_complex::Complex64;
use rustfft::{Fft, FftPlanner};
use std::sync::Arc;

/// Helper that wraps the `rustfft` planner for a fixed transform length.
///
/// Forward transforms are unnormalized with the `e^{-2πikn/N}` kernel.
pub struct FftHelper {
    fft: Arc<dyn Fft<f64>>,
    len: usize,
}

impl FftHelper {
    pub fn new(len: usize) -> RefResult<Self> {
        if len == 0 {
            return Err(RefError::InvalidInput(
                "FFT length must be at least 1".into(),
            ));
        }
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(len);
        Ok(Self { fft, len })
    }

    pub fn size(&self) -> usize {
        self.len
    }

    pub fn forward_real(&self, input: &[f64]) -> RefResult<Vec<Complex64>> {
        let buffer = input
            .iter()
            .map(|&value| Complex64::new(value, 0.0))
            .collect::<Vec<_>>();
        self.forward_complex(buffer)
    }

    pub fn forward_complex(&self, mut buffer: Vec<Complex64>) -> RefResult<Vec<Complex64>> {
        if buffer.len() != self.len {
            return Err(RefError::InvalidInput(format!(
                "expected {} samples, got {}",
                self.len,
                buffer.len()
            )));
        }
        self.fft.process(&mut buffer);
        Ok(buffer)
    }

    /// Plans and runs a one-off forward transform of a real signal.
    pub fn transform_real(input: &[f64]) -> RefResult<Vec<Complex64>> {
        Self::new(input.len())?.forward_real(input)
    }
}

/// Splits a spectrum into its real and imaginary parts.
pub fn split_parts(spectrum: &[Complex64]) -> (Vec<f64>, Vec<f64>) {
    spectrum.iter().map(|c| (c.re, c.im)).unzip()
}
