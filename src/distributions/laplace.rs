//! Laplace distribution
use super::{stat, Continuous, Moments};
use crate::error::{DistributionError, Result};
use crate::math::bound;
use crate::params::{resolve_values, Param, Point};
use crate::utils::array::{map_n, try_fill_from};
use crate::Prng;
use ndarray::ArrayD;
use rand::Rng;
use rand_distr::Open01;

/// Laplace (double exponential) distribution with location `mu` and scale `b`.
#[derive(Debug, Clone)]
pub struct Laplace {
    mu: Param,
    b: Param,
    shape: Vec<usize>,
    moments: Moments,
}

impl Laplace {
    pub fn new(mu: impl Into<Param>, b: impl Into<Param>) -> Self {
        let mu = mu.into();
        let b = b.into();
        let mean = stat([&mu], |[mu]| mu);
        Self {
            moments: Moments {
                median: mean.clone(),
                mode: mean.clone(),
                mean,
                variance: stat([&b], |[b]| 2.0 * b.powi(2)),
            },
            mu,
            b,
            shape: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_shape(mut self, shape: &[usize]) -> Self {
        self.shape = shape.to_vec();
        self
    }

    pub const fn mu(&self) -> &Param {
        &self.mu
    }

    pub const fn b(&self) -> &Param {
        &self.b
    }
}

impl Continuous for Laplace {
    fn shape(&self) -> &[usize] {
        &self.shape
    }

    fn moments(&self) -> &Moments {
        &self.moments
    }

    fn params(&self) -> Vec<&Param> {
        vec![&self.mu, &self.b]
    }

    /// Support is all reals; no constraints are applied.
    fn logp_at(&self, value: &ArrayD<f64>, point: &Point) -> Result<ArrayD<f64>> {
        let mu = self.mu.current(point)?;
        let b = self.b.current(point)?;
        Ok(bound(
            map_n([value, &*mu, &*b], |[x, mu, b]| {
                -(2.0 * b).ln() - (x - mu).abs() / b
            }),
            &[],
        ))
    }

    /// Samples by inverting the CDF.
    fn random(&self, point: Option<&Point>, rng: &mut Prng) -> Result<ArrayD<f64>> {
        let [mu, b] = resolve_values([&self.mu, &self.b], point, rng)?;
        try_fill_from([&mu, &b], &self.shape, |[mu, b]| {
            if b.is_nan() || b <= 0.0 {
                return Err(DistributionError::invalid(
                    "Laplace",
                    format!("scale must be > 0, got {}", b),
                ));
            }
            Ok(inverse_cdf(mu, b, rng.sample(Open01)))
        })
    }
}

/// Quantile function at probability `p` in the open interval `(0, 1)`.
fn inverse_cdf(mu: f64, b: f64, p: f64) -> f64 {
    let u = p - 0.5;
    mu - b * u.signum() * (1.0 - 2.0 * u.abs()).ln()
}
