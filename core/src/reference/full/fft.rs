use crate::math::fft::{split_parts, FftHelper};
use crate::prelude::{RefResult, ReferenceSection};
use crate::serialize::ReferenceWriter;
use crate::signals;
use num_complex::Complex64;

const SINE_LEN: usize = 64;
const SINE_FREQUENCY: f64 = 50.0;
const SAMPLE_RATE: f64 = 1000.0;

/// `[1+2i, 3+4i, ..., 15+16i]`
pub fn complex_test_signal() -> Vec<Complex64> {
    (0..8)
        .map(|k| {
            let re = (2 * k + 1) as f64;
            Complex64::new(re, re + 1.0)
        })
        .collect()
}

fn to_pairs(values: &[Complex64]) -> Vec<(f64, f64)> {
    values.iter().map(|c| (c.re, c.im)).collect()
}

pub struct FftSection;

impl ReferenceSection for FftSection {
    fn title(&self) -> &'static str {
        "Generating FFT Reference Data"
    }

    fn generate(&mut self, writer: &mut ReferenceWriter) -> RefResult<()> {
        let sine = signals::sampled_sine(SINE_LEN, SINE_FREQUENCY, SAMPLE_RATE);
        let spectrum = FftHelper::new(SINE_LEN)?.forward_real(&sine)?;
        let (real, imag) = split_parts(&spectrum);

        writer.write_vector(
            "fft_sine_input.txt",
            &sine,
            Some("64-point sine wave at 50Hz, fs=1000Hz"),
        )?;
        writer.write_vector("fft_sine_output_real.txt", &real, Some("FFT real part"))?;
        writer.write_vector(
            "fft_sine_output_imag.txt",
            &imag,
            Some("FFT imaginary part"),
        )?;

        let signal = complex_test_signal();
        let spectrum = FftHelper::new(signal.len())?.forward_complex(signal.clone())?;
        writer.write_complex_vector(
            "fft_complex_input.txt",
            &to_pairs(&signal),
            Some("Complex test signal"),
        )?;
        writer.write_complex_vector(
            "fft_complex_output.txt",
            &to_pairs(&spectrum),
            Some("FFT of complex signal"),
        )?;
        Ok(())
    }
}
