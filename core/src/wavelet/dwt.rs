//! Single-level and multi-level DWT with half-sample symmetric boundaries.
//!
//! osclet's `Reflect` border places the filter differently and gives other
//! coefficients, so the convolution is done here; the result type and the
//! length rule are osclet's.

use crate::prelude::{RefError, RefResult};
use crate::wavelet::filters::FilterBank;
pub use osclet::dwt_length;

/// Approximation and detail bands of one decomposition level.
pub type Dwt = osclet::Dwt<f64>;

/// Maps an index of the infinitely extended signal back into `0..len` using
/// half-sample symmetric extension (`... x1 x0 | x0 x1 ... xn | xn xn-1 ...`).
fn symmetric_index(index: isize, len: usize) -> usize {
    let period = 2 * len as isize;
    let folded = index.rem_euclid(period);
    if folded < len as isize {
        folded as usize
    } else {
        (period - 1 - folded) as usize
    }
}

/// Convolves with `filter` and keeps every odd output of the full
/// convolution, reading past the edges through symmetric extension.
fn downsample_symmetric(signal: &[f64], filter: &[f64]) -> Vec<f64> {
    let out_len = dwt_length(signal.len(), filter.len());
    (0..out_len)
        .map(|k| {
            let center = (2 * k + 1) as isize;
            filter
                .iter()
                .enumerate()
                .map(|(j, &tap)| tap * signal[symmetric_index(center - j as isize, signal.len())])
                .sum::<f64>()
        })
        .collect()
}

/// Single-level discrete wavelet transform with symmetric boundaries.
pub fn dwt(signal: &[f64], bank: &FilterBank) -> RefResult<Dwt> {
    if signal.is_empty() {
        return Err(RefError::InvalidInput("cannot decompose an empty signal".into()));
    }
    if bank.is_empty() {
        return Err(RefError::InvalidInput("filter bank has no taps".into()));
    }
    Ok(Dwt {
        approximations: downsample_symmetric(signal, &bank.dec_lo),
        details: downsample_symmetric(signal, &bank.dec_hi),
    })
}

/// Multi-level decomposition, returned coarsest first:
/// `[cA_n, cD_n, cD_n-1, ..., cD_1]`.
pub fn wavedec(signal: &[f64], bank: &FilterBank, level: usize) -> RefResult<Vec<Vec<f64>>> {
    if level == 0 {
        return Err(RefError::InvalidInput("decomposition level must be at least 1".into()));
    }

    let mut approximations = signal.to_vec();
    let mut bands = Vec::with_capacity(level + 1);
    for _ in 0..level {
        let step = dwt(&approximations, bank)?;
        bands.push(step.details);
        approximations = step.approximations;
    }
    bands.push(approximations);
    bands.reverse();
    Ok(bands)
}
