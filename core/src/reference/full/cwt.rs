use crate::math::MatrixHelper;
use crate::prelude::{RefResult, ReferenceSection};
use crate::serialize::ReferenceWriter;
use crate::signals;
use crate::wavelet::cwt_morlet;

const CHIRP_SAMPLES: usize = 1000;
const CHIRP_START_HZ: f64 = 10.0;
const CHIRP_END_HZ: f64 = 100.0;
const CHIRP_SECONDS: f64 = 1.0;
const CHIRP_SCALES: usize = 30;
const SMALL_SCALES: usize = 4;

/// Integer scales `1..=count` as reals.
fn integer_scales(count: usize) -> Vec<f64> {
    (1..=count).map(|s| s as f64).collect()
}

pub struct CwtSection;

impl ReferenceSection for CwtSection {
    fn title(&self) -> &'static str {
        "Generating CWT Reference Data"
    }

    fn generate(&mut self, writer: &mut ReferenceWriter) -> RefResult<()> {
        let times = signals::linspace(0.0, CHIRP_SECONDS, CHIRP_SAMPLES);
        let chirp = signals::linear_chirp(&times, CHIRP_START_HZ, CHIRP_SECONDS, CHIRP_END_HZ);
        let scales = integer_scales(CHIRP_SCALES);
        let map = cwt_morlet(&chirp, &scales)?;
        writer.progress().record(&format!(
            "CWT chirp map {} x {}",
            map.nrows(),
            map.ncols()
        ));

        writer.write_vector(
            "cwt_chirp_input.txt",
            &chirp,
            Some("Chirp signal 10-100Hz, 1 second, fs=1000Hz"),
        )?;
        writer.write_vector("cwt_scales.txt", &scales, Some("CWT scales"))?;
        writer.write_matrix(
            "cwt_morlet_magnitude.txt",
            &MatrixHelper::to_rows(&MatrixHelper::magnitude(&map)),
            Some("CWT magnitude (Morlet)"),
        )?;
        writer.write_matrix(
            "cwt_morlet_phase.txt",
            &MatrixHelper::to_rows(&MatrixHelper::phase(&map)),
            Some("CWT phase (Morlet)"),
        )?;

        let small = signals::ramp(1.0, 8);
        let small_scales = integer_scales(SMALL_SCALES);
        let small_map = cwt_morlet(&small, &small_scales)?;
        writer.write_vector("cwt_small_input.txt", &small, Some("Small test signal"))?;
        writer.write_vector(
            "cwt_small_scales.txt",
            &small_scales,
            Some("Small test scales"),
        )?;
        writer.write_complex_matrix(
            "cwt_small_output.txt",
            &MatrixHelper::to_pair_rows(&small_map),
            Some("CWT output (complex)"),
        )?;
        Ok(())
    }
}
