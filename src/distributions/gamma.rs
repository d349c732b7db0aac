//! Gamma distribution
use super::{stat, Continuous, Moments};
use crate::error::{DistributionError, Result};
use crate::math::{bound, logpow};
use crate::params::{resolve_values, Param, Point};
use crate::utils::array::{map_n, try_fill_from};
use crate::Prng;
use ndarray::ArrayD;
use rand_distr::Distribution;
use statrs::function::gamma::ln_gamma;

/// Gamma distribution with shape `alpha` and rate `beta`.
///
/// `f(x | alpha, beta) = beta^alpha x^(alpha - 1) exp(-beta x) / Γ(alpha)`
///
/// Support: `x >= 0`.
#[derive(Debug, Clone)]
pub struct Gamma {
    alpha: Param,
    beta: Param,
    shape: Vec<usize>,
    moments: Moments,
}

impl Gamma {
    pub fn new(alpha: impl Into<Param>, beta: impl Into<Param>) -> Self {
        let alpha = alpha.into();
        let beta = beta.into();
        Self {
            moments: Moments {
                mean: stat([&alpha, &beta], |[alpha, beta]| alpha / beta),
                median: stat([&alpha, &beta], |[alpha, beta]| {
                    ((alpha - 1.0) / beta).max(0.0)
                }),
                variance: stat([&alpha, &beta], |[alpha, beta]| alpha / beta.powi(2)),
                ..Moments::default()
            },
            alpha,
            beta,
            shape: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_shape(mut self, shape: &[usize]) -> Self {
        self.shape = shape.to_vec();
        self
    }

    pub const fn alpha(&self) -> &Param {
        &self.alpha
    }

    pub const fn beta(&self) -> &Param {
        &self.beta
    }
}

impl Continuous for Gamma {
    fn shape(&self) -> &[usize] {
        &self.shape
    }

    fn moments(&self) -> &Moments {
        &self.moments
    }

    fn params(&self) -> Vec<&Param> {
        vec![&self.alpha, &self.beta]
    }

    fn logp_at(&self, value: &ArrayD<f64>, point: &Point) -> Result<ArrayD<f64>> {
        let alpha = self.alpha.current(point)?;
        let beta = self.beta.current(point)?;
        let (alpha, beta) = (&*alpha, &*beta);
        Ok(bound(
            map_n([value, alpha, beta], |[x, alpha, beta]| {
                -ln_gamma(alpha) + logpow(beta, alpha) - beta * x + logpow(x, alpha - 1.0)
            }),
            &[
                map_n([value], |[x]| x >= 0.0),
                map_n([alpha], |[alpha]| alpha > 0.0),
                map_n([beta], |[beta]| beta > 0.0),
            ],
        ))
    }

    fn random(&self, point: Option<&Point>, rng: &mut Prng) -> Result<ArrayD<f64>> {
        let [alpha, beta] = resolve_values([&self.alpha, &self.beta], point, rng)?;
        try_fill_from([&alpha, &beta], &self.shape, |[alpha, beta]| {
            let d = rand_distr::Gamma::new(alpha, beta.recip())
                .map_err(|e| DistributionError::invalid("Gamma", e))?;
            Ok(d.sample(rng))
        })
    }
}
