//! Closed-form fixtures computed with plain arithmetic.
//!
//! Nothing here touches the numeric backend, so these files double as an
//! independent cross-check of the full generator's output.

#![allow(clippy::excessive_precision)]

use crate::prelude::{RefResult, ReferenceSection};
use crate::serialize::ReferenceWriter;
use crate::signals;

/// Daubechies 4-tap low-pass decomposition taps as printed in the literature.
pub const DB4_LITERATURE_DEC_LO: [f64; 4] = [
    0.48296291314469025,
    0.83651630373746899,
    0.22414386804185735,
    -0.12940952255092145,
];

/// One level of the orthonormal Haar transform, computed pair by pair.
///
/// A trailing unpaired sample is ignored.
pub fn manual_haar(signal: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let sqrt2 = 2.0_f64.sqrt();
    signal
        .chunks_exact(2)
        .map(|pair| ((pair[0] + pair[1]) / sqrt2, (pair[0] - pair[1]) / sqrt2))
        .unzip()
}

/// `g[k] = (-1)^k h[L-1-k]`
pub fn alternating_flip(low_pass: &[f64]) -> Vec<f64> {
    low_pass
        .iter()
        .rev()
        .enumerate()
        .map(|(k, &tap)| if k % 2 == 0 { tap } else { -tap })
        .collect()
}

pub struct HaarSection;

impl ReferenceSection for HaarSection {
    fn title(&self) -> &'static str {
        "Generating Haar Wavelet Reference Data"
    }

    fn generate(&mut self, writer: &mut ReferenceWriter) -> RefResult<()> {
        let signal = signals::ramp(1.0, 8);
        let (approx, detail) = manual_haar(&signal);

        writer.write_vector(
            "haar_simple_input.txt",
            &signal,
            Some("Simple test signal [1,2,3,4,5,6,7,8]"),
        )?;
        writer.write_vector(
            "haar_level1_approx_manual.txt",
            &approx,
            Some("Haar level 1 approximation (manual calc)"),
        )?;
        writer.write_vector(
            "haar_level1_detail_manual.txt",
            &detail,
            Some("Haar level 1 detail (manual calc)"),
        )?;

        // Inputs only: consumers check that constants give zero detail.
        writer.write_vector(
            "haar_constant_input.txt",
            &signals::constant(5.0, 8),
            Some("Constant signal [5,5,5,5,5,5,5,5]"),
        )?;
        writer.write_vector(
            "haar_linear_input.txt",
            &signals::arange(8),
            Some("Linear signal [0,1,2,3,4,5,6,7]"),
        )?;
        Ok(())
    }
}

pub struct FftClosedFormSection;

impl ReferenceSection for FftClosedFormSection {
    fn title(&self) -> &'static str {
        "Generating FFT Reference Data"
    }

    fn generate(&mut self, writer: &mut ReferenceWriter) -> RefResult<()> {
        let len = 8;

        let dc = signals::constant(1.0, len);
        let mut dc_real = vec![0.0; len];
        dc_real[0] = dc.iter().sum();
        writer.write_vector("fft_dc_input.txt", &dc, Some("DC signal (all ones)"))?;
        writer.write_vector(
            "fft_dc_output_real.txt",
            &dc_real,
            Some("FFT of DC signal (real part)"),
        )?;
        writer.write_vector(
            "fft_dc_output_imag.txt",
            &vec![0.0; len],
            Some("FFT of DC signal (imaginary part)"),
        )?;

        writer.write_vector(
            "fft_sine_simple_input.txt",
            &signals::sine_cycle(len),
            Some("One cycle sine wave over 8 points"),
        )?;

        writer.write_vector(
            "fft_impulse_input.txt",
            &signals::impulse(len, 0),
            Some("Impulse signal"),
        )?;
        writer.write_vector(
            "fft_impulse_output_real.txt",
            &vec![1.0; len],
            Some("FFT of impulse (real)"),
        )?;
        writer.write_vector(
            "fft_impulse_output_imag.txt",
            &vec![0.0; len],
            Some("FFT of impulse (imag)"),
        )?;
        Ok(())
    }
}

pub struct FilterTableSection;

impl ReferenceSection for FilterTableSection {
    fn title(&self) -> &'static str {
        "Generating Wavelet Filter Coefficients"
    }

    fn generate(&mut self, writer: &mut ReferenceWriter) -> RefResult<()> {
        let inv_sqrt2 = 1.0 / 2.0_f64.sqrt();
        let haar_dec_lo = [inv_sqrt2, inv_sqrt2];
        let haar_dec_hi = [inv_sqrt2, -inv_sqrt2];
        let haar_rec_lo = [inv_sqrt2, inv_sqrt2];
        let haar_rec_hi = [-inv_sqrt2, inv_sqrt2];

        writer.write_vector(
            "filter_haar_dec_lo.txt",
            &haar_dec_lo,
            Some("Haar decomposition low-pass"),
        )?;
        writer.write_vector(
            "filter_haar_dec_hi.txt",
            &haar_dec_hi,
            Some("Haar decomposition high-pass"),
        )?;
        writer.write_vector(
            "filter_haar_rec_lo.txt",
            &haar_rec_lo,
            Some("Haar reconstruction low-pass"),
        )?;
        writer.write_vector(
            "filter_haar_rec_hi.txt",
            &haar_rec_hi,
            Some("Haar reconstruction high-pass"),
        )?;

        writer.write_vector(
            "filter_db2_dec_lo.txt",
            &haar_dec_lo,
            Some("Daubechies 2 = Haar"),
        )?;

        writer.write_vector(
            "filter_db4_dec_lo.txt",
            &DB4_LITERATURE_DEC_LO,
            Some("Daubechies 4 decomposition low-pass"),
        )?;
        writer.write_vector(
            "filter_db4_dec_hi.txt",
            &alternating_flip(&DB4_LITERATURE_DEC_LO),
            Some("Daubechies 4 decomposition high-pass"),
        )?;
        Ok(())
    }
}

/// Scalar configuration for the downstream CWT test.
#[derive(Debug, Clone, PartialEq)]
pub struct CwtTestParams {
    pub sampling_rate: f64,
    pub signal_length: usize,
    pub num_scales: usize,
    pub scale_min: f64,
    pub scale_max: f64,
}

impl Default for CwtTestParams {
    fn default() -> Self {
        Self {
            sampling_rate: 1000.0,
            signal_length: 256,
            num_scales: 20,
            scale_min: 1.0,
            scale_max: 50.0,
        }
    }
}

impl CwtTestParams {
    /// Reals keep a trailing `.0`, matching how the consumer parses them.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("sampling_rate", format!("{:?}", self.sampling_rate)),
            ("signal_length", self.signal_length.to_string()),
            ("num_scales", self.num_scales.to_string()),
            ("scale_min", format!("{:?}", self.scale_min)),
            ("scale_max", format!("{:?}", self.scale_max)),
        ]
    }
}

#[derive(Default)]
pub struct ParameterSection {
    params: CwtTestParams,
}

impl ReferenceSection for ParameterSection {
    fn title(&self) -> &'static str {
        "Generating Test Parameters"
    }

    fn generate(&mut self, writer: &mut ReferenceWriter) -> RefResult<()> {
        writer.write_params(
            "cwt_test_params.txt",
            "CWT test parameters",
            &self.params.entries(),
        )
    }
}

pub fn sections() -> Vec<Box<dyn ReferenceSection>> {
    vec![
        Box::new(HaarSection),
        Box::new(FftClosedFormSection),
        Box::new(FilterTableSection),
        Box::new(ParameterSection::default()),
    ]
}
