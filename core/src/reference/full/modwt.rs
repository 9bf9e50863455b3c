use crate::prelude::{RefResult, ReferenceSection};
use crate::serialize::ReferenceWriter;
use crate::signals;
use crate::wavelet::{swt, WaveletFamily};

/// Shift-invariant decomposition files.
///
/// Level numbers follow the transform's output order, which lists the
/// coarsest level first: `modwt_haar_*_level1.txt` holds level 3.
pub struct ModwtSection {
    signal: Vec<f64>,
    levels: u32,
}

impl Default for ModwtSection {
    fn default() -> Self {
        Self {
            signal: signals::ramp(1.0, 8),
            levels: 3,
        }
    }
}

impl ReferenceSection for ModwtSection {
    fn title(&self) -> &'static str {
        "Generating MODWT Reference Data"
    }

    fn generate(&mut self, writer: &mut ReferenceWriter) -> RefResult<()> {
        let haar = WaveletFamily::Haar.filter_bank()?;
        let levels = swt(&self.signal, &haar, self.levels)?;

        writer.write_vector(
            "modwt_haar_input.txt",
            &self.signal,
            Some("Test signal for MODWT"),
        )?;
        for (index, band) in levels.iter().enumerate() {
            let number = index + 1;
            writer.write_vector(
                &format!("modwt_haar_detail_level{}.txt", number),
                &band.details,
                Some(&format!("MODWT Haar detail coefficients level {}", number)),
            )?;
            writer.write_vector(
                &format!("modwt_haar_approx_level{}.txt", number),
                &band.approximations,
                Some(&format!(
                    "MODWT Haar approximation coefficients level {}",
                    number
                )),
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn writes_full_length_bands_for_each_level() {
        let dir = tempdir().unwrap();
        let mut writer = ReferenceWriter::create(dir.path()).unwrap();
        ModwtSection::default().generate(&mut writer).unwrap();

        for level in 1..=3 {
            for band in ["approx", "detail"] {
                let name = format!("modwt_haar_{}_level{}.txt", band, level);
                let text = fs::read_to_string(dir.path().join(&name)).unwrap();
                assert_eq!(text.lines().count(), 9, "{}", name);
            }
        }
        assert!(!dir.path().join("modwt_haar_approx_level4.txt").exists());

        let coarsest = fs::read_to_string(dir.path().join("modwt_haar_approx_level1.txt")).unwrap();
        let first: f64 = coarsest.lines().nth(1).unwrap().parse().unwrap();
        assert_abs_diff_eq!(first, 36.0 / 8.0_f64.sqrt(), epsilon = 1e-12);
    }
}
