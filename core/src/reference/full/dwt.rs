use crate::prelude::{RefResult, ReferenceSection};
use crate::serialize::ReferenceWriter;
use crate::signals;
use crate::wavelet::{dwt, wavedec, WaveletFamily};

pub struct DwtSection {
    signal: Vec<f64>,
    levels: usize,
}

impl Default for DwtSection {
    fn default() -> Self {
        Self {
            signal: signals::ramp(1.0, 8),
            levels: 3,
        }
    }
}

impl ReferenceSection for DwtSection {
    fn title(&self) -> &'static str {
        "Generating DWT Reference Data"
    }

    fn generate(&mut self, writer: &mut ReferenceWriter) -> RefResult<()> {
        let haar = WaveletFamily::Haar.filter_bank()?;
        let haar_coeffs = dwt(&self.signal, &haar)?;
        writer.write_vector(
            "dwt_haar_input.txt",
            &self.signal,
            Some("Test signal [1,2,3,4,5,6,7,8]"),
        )?;
        writer.write_vector(
            "dwt_haar_approx.txt",
            &haar_coeffs.approximations,
            Some("Haar approximation coefficients"),
        )?;
        writer.write_vector(
            "dwt_haar_detail.txt",
            &haar_coeffs.details,
            Some("Haar detail coefficients"),
        )?;

        let db4 = WaveletFamily::Db4.filter_bank()?;
        let db4_coeffs = dwt(&self.signal, &db4)?;
        writer.write_vector(
            "dwt_db4_approx.txt",
            &db4_coeffs.approximations,
            Some("Daubechies 4 approximation coefficients"),
        )?;
        writer.write_vector(
            "dwt_db4_detail.txt",
            &db4_coeffs.details,
            Some("Daubechies 4 detail coefficients"),
        )?;

        let bands = wavedec(&self.signal, &haar, self.levels)?;
        for (index, band) in bands.iter().enumerate() {
            writer.write_vector(
                &format!("dwt_haar_multilevel_{}.txt", index),
                band,
                Some(&format!("Haar multi-level decomposition level {}", index)),
            )?;
        }
        Ok(())
    }
}
