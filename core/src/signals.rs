//! Deterministic test signals.
//!
//! The arithmetic in each builder is ordered the same way the published
//! golden files were computed, so regenerated inputs stay bit-identical.

use std::f64::consts::PI;

/// `first, first + 1, ..., first + len - 1`
pub fn ramp(first: f64, len: usize) -> Vec<f64> {
    (0..len).map(|i| first + i as f64).collect()
}

/// `0, 1, ..., len - 1`
pub fn arange(len: usize) -> Vec<f64> {
    ramp(0.0, len)
}

pub fn constant(value: f64, len: usize) -> Vec<f64> {
    vec![value; len]
}

/// Zeros with a single `1.0` at `position`. A position past the end yields
/// all zeros.
pub fn impulse(len: usize, position: usize) -> Vec<f64> {
    let mut signal = vec![0.0; len];
    if let Some(sample) = signal.get_mut(position) {
        *sample = 1.0;
    }
    signal
}

/// Exactly one sine period spread over `len` samples.
pub fn sine_cycle(len: usize) -> Vec<f64> {
    (0..len)
        .map(|i| (2.0 * PI * i as f64 / len as f64).sin())
        .collect()
}

/// `sin(2π f t)` sampled at `t = i / sample_rate`.
pub fn sampled_sine(len: usize, frequency: f64, sample_rate: f64) -> Vec<f64> {
    (0..len)
        .map(|i| {
            let t = i as f64 / sample_rate;
            (2.0 * PI * frequency * t).sin()
        })
        .collect()
}

/// `num` evenly spaced points over `[start, stop]`, endpoint included.
pub fn linspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (num - 1) as f64;
            let mut points: Vec<f64> = (0..num).map(|i| i as f64 * step + start).collect();
            points[num - 1] = stop;
            points
        }
    }
}

/// Linear frequency sweep from `f0` at `t = 0` to `f1` at `t = t1`,
/// `cos(2π (f0 t + β t² / 2))` with `β = (f1 - f0) / t1`.
pub fn linear_chirp(times: &[f64], f0: f64, t1: f64, f1: f64) -> Vec<f64> {
    let beta = (f1 - f0) / t1;
    times
        .iter()
        .map(|&t| {
            let phase = 2.0 * PI * (f0 * t + 0.5 * beta * t * t);
            phase.cos()
        })
        .collect()
}
