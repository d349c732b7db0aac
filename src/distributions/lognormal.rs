//! Log-normal distribution
use super::{stat, Continuous, Moments};
use crate::error::{DistributionError, Result};
use crate::math::bound;
use crate::params::{resolve_values, Param, Point};
use crate::utils::array::{map_n, try_fill_from};
use crate::Prng;
use ndarray::ArrayD;
use rand_distr::{Distribution, LogNormal};
use std::f64::consts::PI;

/// Log-normal distribution: `ln(x)` is normal with mean `mu` and precision `tau`.
///
/// `f(x | mu, tau) = sqrt(tau / 2π) exp(-tau (ln(x) - mu)^2 / 2) / x`
#[derive(Debug, Clone)]
pub struct Lognormal {
    mu: Param,
    tau: Param,
    shape: Vec<usize>,
    moments: Moments,
}

impl Lognormal {
    pub fn new(mu: impl Into<Param>, tau: impl Into<Param>) -> Self {
        let mu = mu.into();
        let tau = tau.into();
        Self {
            moments: Moments {
                mean: stat([&mu, &tau], |[mu, tau]| (mu + 0.5 / tau).exp()),
                median: stat([&mu], |[mu]| mu.exp()),
                mode: stat([&mu, &tau], |[mu, tau]| (mu - tau.recip()).exp()),
                variance: stat([&mu, &tau], |[mu, tau]| {
                    (tau.recip().exp() - 1.0) * (2.0 * mu + tau.recip()).exp()
                }),
            },
            mu,
            tau,
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

    pub const fn tau(&self) -> &Param {
        &self.tau
    }
}

/// `mu = 0`, `tau = 1`
impl Default for Lognormal {
    fn default() -> Self {
        Self::new(0.0, 1.0)
    }
}

impl Continuous for Lognormal {
    fn shape(&self) -> &[usize] {
        &self.shape
    }

    fn moments(&self) -> &Moments {
        &self.moments
    }

    fn params(&self) -> Vec<&Param> {
        vec![&self.mu, &self.tau]
    }

    fn logp_at(&self, value: &ArrayD<f64>, point: &Point) -> Result<ArrayD<f64>> {
        let mu = self.mu.current(point)?;
        let tau = self.tau.current(point)?;
        Ok(bound(
            map_n([value, &*mu, &*tau], |[x, mu, tau]| {
                -0.5 * tau * (x.ln() - mu).powi(2) + 0.5 * (tau / (2.0 * PI)).ln() - x.ln()
            }),
            &[
                map_n([&*tau], |[tau]| tau > 0.0),
                map_n([value], |[x]| x > 0.0),
            ],
        ))
    }

    fn random(&self, point: Option<&Point>, rng: &mut Prng) -> Result<ArrayD<f64>> {
        let [mu, tau] = resolve_values([&self.mu, &self.tau], point, rng)?;
        try_fill_from([&mu, &tau], &self.shape, |[mu, tau]| {
            let d = LogNormal::new(mu, tau.sqrt().recip())
                .map_err(|e| DistributionError::invalid("Lognormal", e))?;
            Ok(d.sample(rng))
        })
    }
}
