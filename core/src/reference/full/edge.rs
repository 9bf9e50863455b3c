use crate::math::fft::{split_parts, FftHelper};
use crate::prelude::{RefError, RefResult, ReferenceSection};
use crate::serialize::ReferenceWriter;
use crate::signals;
use crate::wavelet::{dwt, FilterBank, WaveletFamily};
use log::warn;

/// Named degenerate or boundary inputs.
pub struct EdgeCase {
    pub name: &'static str,
    pub signal: Vec<f64>,
}

impl EdgeCase {
    pub fn new(name: &'static str, signal: Vec<f64>) -> Self {
        Self { name, signal }
    }
}

pub struct EdgeCaseSection {
    cases: Vec<EdgeCase>,
    /// Haar when unset.
    bank: Option<FilterBank>,
}

impl Default for EdgeCaseSection {
    fn default() -> Self {
        Self {
            cases: vec![
                EdgeCase::new("empty", Vec::new()),
                EdgeCase::new("single", vec![42.0]),
                EdgeCase::new("power_of_2", signals::arange(16)),
                EdgeCase::new("non_power_of_2", signals::arange(13)),
                EdgeCase::new("zeros", signals::constant(0.0, 8)),
                EdgeCase::new("ones", signals::constant(1.0, 8)),
                EdgeCase::new("impulse", signals::impulse(8, 3)),
            ],
            bank: None,
        }
    }
}

impl EdgeCaseSection {
    pub fn with_cases(cases: Vec<EdgeCase>) -> Self {
        Self { cases, bank: None }
    }

    /// Decomposes with `bank` instead of Haar.
    pub fn with_bank(mut self, bank: FilterBank) -> Self {
        self.bank = Some(bank);
        self
    }

    fn write_case(
        case: &EdgeCase,
        bank: &FilterBank,
        writer: &mut ReferenceWriter,
    ) -> RefResult<()> {
        let name = case.name;
        writer.write_vector(
            &format!("edge_case_{}_input.txt", name),
            &case.signal,
            Some(&format!("Edge case: {}", name)),
        )?;

        let spectrum = FftHelper::transform_real(&case.signal)?;
        let (real, imag) = split_parts(&spectrum);
        writer.write_vector(
            &format!("edge_case_{}_fft_real.txt", name),
            &real,
            Some(&format!("FFT real part of {}", name)),
        )?;
        writer.write_vector(
            &format!("edge_case_{}_fft_imag.txt", name),
            &imag,
            Some(&format!("FFT imag part of {}", name)),
        )?;

        if case.signal.len() > 1 {
            match dwt(&case.signal, bank) {
                Ok(coeffs) => {
                    writer.write_vector(
                        &format!("edge_case_{}_dwt_approx.txt", name),
                        &coeffs.approximations,
                        Some(&format!("DWT approx of {}", name)),
                    )?;
                    writer.write_vector(
                        &format!("edge_case_{}_dwt_detail.txt", name),
                        &coeffs.details,
                        Some(&format!("DWT detail of {}", name)),
                    )?;
                }
                Err(RefError::InvalidInput(reason)) => {
                    warn!("skipping DWT for edge case {}: {}", name, reason);
                    writer.record_skipped();
                }
                Err(err) => return Err(err),
            }
        }
        Ok(())
    }
}

impl ReferenceSection for EdgeCaseSection {
    fn title(&self) -> &'static str {
        "Generating Special Test Cases"
    }

    fn generate(&mut self, writer: &mut ReferenceWriter) -> RefResult<()> {
        let bank = match &self.bank {
            Some(bank) => bank.clone(),
            None => WaveletFamily::Haar.filter_bank()?,
        };
        for case in &self.cases {
            if case.signal.is_empty() {
                writer
                    .progress()
                    .record(&format!("edge case {} is empty, nothing to write", case.name));
                continue;
            }
            Self::write_case(case, &bank, writer)?;
        }
        Ok(())
    }
}
