//! Distribution test utilities
use super::Continuous;
use crate::Prng;
use ndarray::{ArrayD, IxDyn};
use rand::SeedableRng;
use std::iter::FromIterator;

/// Sample count, extremes, and mean / variance by Welford's Algorithm.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct SampleStats {
    mean: f64,
    squared_residual_sum: f64,
    min: Option<f64>,
    max: Option<f64>,
    count: u64,
}

impl SampleStats {
    pub const fn mean(&self) -> f64 {
        self.mean
    }

    /// Population variance.
    pub fn variance(&self) -> f64 {
        self.squared_residual_sum / self.count as f64
    }

    pub const fn min(&self) -> Option<f64> {
        self.min
    }

    pub const fn max(&self) -> Option<f64> {
        self.max
    }

    pub const fn count(&self) -> u64 {
        self.count
    }

    pub fn push(&mut self, value: f64) {
        let residual_pre = value - self.mean;
        self.count += 1;
        self.mean += residual_pre / self.count as f64;
        self.squared_residual_sum += residual_pre * (value - self.mean);
        self.min = Some(self.min.map_or(value, |m| m.min(value)));
        self.max = Some(self.max.map_or(value, |m| m.max(value)));
    }
}

impl FromIterator<f64> for SampleStats {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut stats = Self::default();
        for value in iter {
            stats.push(value);
        }
        stats
    }
}

/// Array of the given shape holding `start, start + step, ...` in row-major order.
pub fn arange(shape: &[usize], start: f64, step: f64) -> ArrayD<f64> {
    let len: usize = shape.iter().product();
    let values = (0..len).map(|i| start + step * i as f64).collect();
    ArrayD::from_shape_vec(IxDyn(shape), values).unwrap()
}

/// Check that samples have a log-density greater than negative infinity.
pub fn check_samples_in_support<D: Continuous + ?Sized>(d: &D, num_samples: u32) {
    let mut rng = Prng::seed_from_u64(1);
    for _ in 0..num_samples {
        let x = d.random(None, &mut rng).unwrap();
        let logp = d.logp(&x).unwrap();
        for (&x, &lp) in x.iter().zip(logp.iter()) {
            assert!(lp > f64::NEG_INFINITY, "sample {} outside support", x);
        }
    }
}

/// Check that samples have the configured shape.
pub fn check_sample_shape<D: Continuous + ?Sized>(d: &D) {
    let mut rng = Prng::seed_from_u64(2);
    let x = d.random(None, &mut rng).unwrap();
    assert_eq!(x.shape(), d.shape());
}

/// Check that the mean of all elements of a sample is close to the expected value.
///
/// # Args
/// * `d` - The distribution to test. Should have a large sample shape.
///         Each element minus its mean must be sub-gaussian.
/// * `expected_mean` - The expected value for the mean.
/// * `stddev_upper_bound` - An upper bound on the standard deviation of a single element.
/// * `seed` - Random seed.
pub fn check_sample_mean<D: Continuous + ?Sized>(
    d: &D,
    expected_mean: f64,
    stddev_upper_bound: f64,
    seed: u64,
) {
    let mut rng = Prng::seed_from_u64(seed);
    let stats: SampleStats = d.random(None, &mut rng).unwrap().iter().copied().collect();
    let num_samples = stats.count() as f64;
    // Want to be close enough to the mean to have false positive probability < 1e-5
    let false_positive_prob: f64 = 1e-5;
    let error_bound = stddev_upper_bound * (-2.0 / num_samples * false_positive_prob.ln()).sqrt();
    // Make sure our error bound isn't huge
    assert!(
        error_bound < 0.1 || error_bound < 0.1 * expected_mean.abs(),
        "Use more samples"
    );
    assert!(
        (stats.mean() - expected_mean).abs() < error_bound,
        "empirical mean {} not within {} of {}",
        stats.mean(),
        error_bound,
        expected_mean
    );
}

#[test]
fn sample_stats_collect() {
    let stats: SampleStats = [1.0, 2.0, 3.0, 4.0].iter().copied().collect();
    assert!((stats.mean() - 2.5).abs() < 1e-12);
    assert!((stats.variance() - 1.25).abs() < 1e-12);
    assert_eq!(stats.min(), Some(1.0));
    assert_eq!(stats.max(), Some(4.0));
    assert_eq!(stats.count(), 4);
}
