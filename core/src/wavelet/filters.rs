use crate::math::stats::StatsHelper;
use crate::prelude::{RefError, RefResult};
use osclet::{CoifletFamily, DaubechiesFamily, SymletFamily, WaveletFilterProvider};
use std::borrow::Cow;
use std::f64::consts::SQRT_2;

/// Orthogonal wavelet families with published filter tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveletFamily {
    Haar,
    Db2,
    Db4,
    Db8,
    Sym4,
    Coif2,
}

impl WaveletFamily {
    pub const ALL: [WaveletFamily; 6] = [
        WaveletFamily::Haar,
        WaveletFamily::Db2,
        WaveletFamily::Db4,
        WaveletFamily::Db8,
        WaveletFamily::Sym4,
        WaveletFamily::Coif2,
    ];

    /// Short name used in file names, e.g. `db4`.
    pub fn name(self) -> &'static str {
        match self {
            WaveletFamily::Haar => "haar",
            WaveletFamily::Db2 => "db2",
            WaveletFamily::Db4 => "db4",
            WaveletFamily::Db8 => "db8",
            WaveletFamily::Sym4 => "sym4",
            WaveletFamily::Coif2 => "coif2",
        }
    }

    /// Scaling (reconstruction low-pass) filter, read from osclet's tables.
    /// `dbN` and `symN` carry `N` vanishing moments, so `db4` has eight taps.
    /// Coiflets come back already scaled to sum to `√2`.
    pub fn scaling_filter(self) -> Vec<f64> {
        match self {
            WaveletFamily::Haar => taps(DaubechiesFamily::Db1),
            WaveletFamily::Db2 => taps(DaubechiesFamily::Db2),
            WaveletFamily::Db4 => taps(DaubechiesFamily::Db4),
            WaveletFamily::Db8 => taps(DaubechiesFamily::Db8),
            WaveletFamily::Sym4 => taps(SymletFamily::Sym4),
            WaveletFamily::Coif2 => taps(CoifletFamily::Coif2),
        }
    }

    pub fn filter_bank(self) -> RefResult<FilterBank> {
        FilterBank::from_scaling(&self.scaling_filter())
    }
}

fn taps<P: WaveletFilterProvider<f64>>(provider: P) -> Vec<f64> {
    provider.get_wavelet().into_owned()
}

/// Decomposition and reconstruction filters of an orthogonal wavelet.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterBank {
    pub dec_lo: Vec<f64>,
    pub dec_hi: Vec<f64>,
    pub rec_lo: Vec<f64>,
    pub rec_hi: Vec<f64>,
}

impl FilterBank {
    /// Builds the four filters from the scaling filter `h`:
    /// `rec_lo = h`, `dec_lo = reverse(h)`, `rec_hi[k] = (-1)^k h[L-1-k]`,
    /// `dec_hi = reverse(rec_hi)`.
    pub fn from_scaling(scaling: &[f64]) -> RefResult<Self> {
        let len = scaling.len();
        if len == 0 || len % 2 != 0 {
            return Err(RefError::InvalidInput(format!(
                "scaling filter must have a non-zero even length, got {}",
                len
            )));
        }

        let rec_lo = scaling.to_vec();
        let dec_lo: Vec<f64> = scaling.iter().rev().copied().collect();
        let rec_hi: Vec<f64> = (0..len)
            .map(|k| {
                let tap = scaling[len - 1 - k];
                if k % 2 == 0 {
                    tap
                } else {
                    -tap
                }
            })
            .collect();
        let dec_hi: Vec<f64> = rec_hi.iter().rev().copied().collect();

        Ok(Self {
            dec_lo,
            dec_hi,
            rec_lo,
            rec_hi,
        })
    }

    pub fn len(&self) -> usize {
        self.dec_lo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dec_lo.is_empty()
    }

    /// Checks `Σ h = √2`, `Σ h² = 1` and orthogonality to even shifts.
    pub fn check_orthonormal(&self, tolerance: f64) -> RefResult<()> {
        let h = &self.rec_lo;
        let sum = StatsHelper::sum(h);
        if (sum - SQRT_2).abs() > tolerance {
            return Err(RefError::InvalidInput(format!(
                "low-pass taps sum to {} instead of sqrt(2)",
                sum
            )));
        }
        let energy = StatsHelper::energy(h);
        if (energy - 1.0).abs() > tolerance {
            return Err(RefError::InvalidInput(format!(
                "low-pass energy is {} instead of 1",
                energy
            )));
        }
        for shift in (2..h.len()).step_by(2) {
            let overlap = StatsHelper::shifted_dot(h, h, shift);
            if overlap.abs() > tolerance {
                return Err(RefError::InvalidInput(format!(
                    "low-pass filter not orthogonal to its shift by {}: {}",
                    shift, overlap
                )));
            }
        }
        Ok(())
    }
}

/// Hands the scaling filter to osclet executors, which derive the other
/// three filters the same way [`FilterBank::from_scaling`] does.
impl WaveletFilterProvider<f64> for FilterBank {
    fn get_wavelet(&self) -> Cow<'_, [f64]> {
        Cow::Borrowed(&self.rec_lo)
    }
}
