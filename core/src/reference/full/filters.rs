use crate::prelude::{RefResult, ReferenceSection};
use crate::serialize::ReferenceWriter;
use crate::wavelet::WaveletFamily;

/// Looser than the tables' precision; catches transcription errors only.
const ORTHONORMAL_TOLERANCE: f64 = 1e-9;

pub struct FilterBankSection;

impl ReferenceSection for FilterBankSection {
    fn title(&self) -> &'static str {
        "Generating Wavelet Filter Reference Data"
    }

    fn generate(&mut self, writer: &mut ReferenceWriter) -> RefResult<()> {
        for family in WaveletFamily::ALL {
            let name = family.name();
            let bank = family.filter_bank()?;
            bank.check_orthonormal(ORTHONORMAL_TOLERANCE)?;

            let filters = [
                ("dec_lo", &bank.dec_lo, "decomposition low-pass filter"),
                ("dec_hi", &bank.dec_hi, "decomposition high-pass filter"),
                ("rec_lo", &bank.rec_lo, "reconstruction low-pass filter"),
                ("rec_hi", &bank.rec_hi, "reconstruction high-pass filter"),
            ];
            for (role, taps, description) in filters {
                writer.write_vector(
                    &format!("filter_{}_{}.txt", name, role),
                    taps,
                    Some(&format!("{} {}", name, description)),
                )?;
            }
        }
        Ok(())
    }
}
