pub struct StatsHelper;

impl StatsHelper {
    pub fn sum(samples: &[f64]) -> f64 {
        samples.iter().sum()
    }

    /// Sum of squares.
    pub fn energy(samples: &[f64]) -> f64 {
        samples.iter().map(|&v| v * v).sum()
    }

    /// Inner product of `lhs` with `rhs` shifted right by `shift` samples,
    /// over the overlapping range only.
    pub fn shifted_dot(lhs: &[f64], rhs: &[f64], shift: usize) -> f64 {
        lhs.iter()
            .skip(shift)
            .zip(rhs.iter())
            .map(|(&a, &b)| a * b)
            .sum()
    }
}
