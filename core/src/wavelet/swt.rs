use crate::prelude::{RefError, RefResult};
use crate::wavelet::dwt::Dwt;
use crate::wavelet::filters::FilterBank;
use osclet::{BorderMode, MoDwtExecutor, Osclet};
use std::sync::Arc;

/// Stationary (undecimated) wavelet transform on osclet's periodized SWT
/// executor.
///
/// Every level's approximation and detail band is kept, full length, and the
/// result is ordered coarsest level first: `[level n, ..., level 1]`. The
/// signal length must be a multiple of `2^level`.
pub fn swt(signal: &[f64], bank: &FilterBank, level: u32) -> RefResult<Vec<Dwt>> {
    if signal.is_empty() {
        return Err(RefError::InvalidInput("cannot decompose an empty signal".into()));
    }
    if level == 0 {
        return Err(RefError::InvalidInput("decomposition level must be at least 1".into()));
    }
    if level >= usize::BITS || signal.len() % (1usize << level) != 0 {
        return Err(RefError::InvalidInput(format!(
            "signal length {} is not a multiple of 2^{}",
            signal.len(),
            level
        )));
    }

    let executor = Osclet::make_swt_f64(Arc::new(bank.clone()), BorderMode::Wrap)?;
    let mut levels = executor.multi_dwt(signal, level as usize)?.levels;
    levels.reverse();
    Ok(levels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wavelet::filters::WaveletFamily;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::SQRT_2;

    fn haar() -> FilterBank {
        WaveletFamily::Haar.filter_bank().unwrap()
    }

    fn one_to_eight() -> Vec<f64> {
        (1..=8).map(f64::from).collect()
    }

    #[test]
    fn first_level_wraps_around_the_end() {
        let levels = swt(&one_to_eight(), &haar(), 1).unwrap();
        let first = &levels[0];
        assert_abs_diff_eq!(first.approximations[0], 3.0 / SQRT_2, epsilon = 1e-12);
        assert_abs_diff_eq!(first.approximations[7], 9.0 / SQRT_2, epsilon = 1e-12);
        assert_abs_diff_eq!(first.details[0], -1.0 / SQRT_2, epsilon = 1e-12);
        assert_abs_diff_eq!(first.details[7], 7.0 / SQRT_2, epsilon = 1e-12);
    }

    #[test]
    fn levels_are_full_length_and_coarsest_first() {
        let levels = swt(&one_to_eight(), &haar(), 3).unwrap();
        assert_eq!(levels.len(), 3);
        for band in &levels {
            assert_eq!(band.approximations.len(), 8);
            assert_eq!(band.details.len(), 8);
        }
        // At level 3 the upsampled filter covers the whole period.
        for a in &levels[0].approximations {
            assert_abs_diff_eq!(*a, 36.0 / (2.0 * SQRT_2), epsilon = 1e-12);
        }
        assert_abs_diff_eq!(levels[2].approximations[0], 3.0 / SQRT_2, epsilon = 1e-12);
    }

    #[test]
    fn second_level_uses_stride_two() {
        let levels = swt(&one_to_eight(), &haar(), 2).unwrap();
        // a1 = (x[o] + x[o+1]) / √2, a2[o] = (a1[o] + a1[o+2]) / √2
        assert_abs_diff_eq!(levels[0].approximations[0], (3.0 + 7.0) / 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(levels[0].details[0], (3.0 - 7.0) / 2.0, epsilon = 1e-12);
    }

    /// Periodized filtering at the library alignment: output `o` reads
    /// `x[o + F·2^(j-1)/2 - k·2^(j-1)]`.
    fn periodized(signal: &[f64], filter: &[f64], level: u32) -> Vec<f64> {
        let n = signal.len() as isize;
        let stride = 1isize << (level - 1);
        let offset = filter.len() as isize * stride / 2;
        (0..n)
            .map(|o| {
                filter
                    .iter()
                    .enumerate()
                    .map(|(k, tap)| {
                        let index = (o + offset - k as isize * stride).rem_euclid(n);
                        tap * signal[index as usize]
                    })
                    .sum::<f64>()
            })
            .collect()
    }

    #[test]
    fn longer_filters_keep_the_library_alignment() {
        let signal = [
            1.0, 2.0, 3.0, 4.0, 2.0, 1.0, 0.0, 1.0, 2.4, 6.5, 2.4, 6.4, 5.2, 0.6, 0.5, 1.3,
        ];
        let bank = WaveletFamily::Db4.filter_bank().unwrap();
        let levels = swt(&signal, &bank, 2).unwrap();

        let a1 = periodized(&signal, &bank.dec_lo, 1);
        let d2 = periodized(&a1, &bank.dec_hi, 2);
        let a2 = periodized(&a1, &bank.dec_lo, 2);
        for o in 0..signal.len() {
            assert_abs_diff_eq!(levels[1].approximations[o], a1[o], epsilon = 1e-12);
            assert_abs_diff_eq!(levels[0].approximations[o], a2[o], epsilon = 1e-12);
            assert_abs_diff_eq!(levels[0].details[o], d2[o], epsilon = 1e-12);
        }
    }

    #[test]
    fn constant_signal_has_zero_details_at_every_level() {
        let levels = swt(&[5.0; 8], &haar(), 3).unwrap();
        for band in levels {
            assert!(band.details.iter().all(|d| d.abs() < 1e-12));
        }
    }

    #[test]
    fn length_must_divide_by_power_of_two() {
        assert!(swt(&[1.0; 6], &haar(), 2).is_err());
        assert!(swt(&[], &haar(), 1).is_err());
        assert!(swt(&one_to_eight(), &haar(), 0).is_err());
        assert!(swt(&one_to_eight(), &haar(), 4).is_err());
    }
}
