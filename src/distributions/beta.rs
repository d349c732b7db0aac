//! Beta distribution
use super::{stat, Continuous, Moments};
use crate::error::{DistributionError, Result};
use crate::math::{bound, logpow};
use crate::params::{resolve_values, Param, Point};
use crate::utils::array::{map_n, try_fill_from};
use crate::Prng;
use ndarray::ArrayD;
use rand::Rng;
use statrs::distribution::ContinuousCDF;
use statrs::function::gamma::ln_gamma;

/// Beta distribution on `[0, 1]`.
///
/// `f(x | alpha, beta) = Γ(alpha + beta) / (Γ(alpha) Γ(beta)) x^(alpha - 1) (1 - x)^(beta - 1)`
///
/// The conjugate prior for the success probability of a binomial distribution.
#[derive(Debug, Clone)]
pub struct Beta {
    alpha: Param,
    beta: Param,
    shape: Vec<usize>,
    moments: Moments,
}

impl Beta {
    /// Create a beta distribution with `alpha > 0` and `beta > 0`.
    pub fn new(alpha: impl Into<Param>, beta: impl Into<Param>) -> Self {
        let alpha = alpha.into();
        let beta = beta.into();
        Self {
            moments: Moments {
                mean: stat([&alpha, &beta], |[a, b]| a / (a + b)),
                variance: stat([&alpha, &beta], |[a, b]| {
                    a * b / ((a + b).powi(2) * (a + b + 1.0))
                }),
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

impl Continuous for Beta {
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
            map_n([value, alpha, beta], |[x, a, b]| {
                ln_gamma(a + b) - ln_gamma(a) - ln_gamma(b)
                    + logpow(x, a - 1.0)
                    + logpow(1.0 - x, b - 1.0)
            }),
            &[
                map_n([value], |[x]| 0.0 <= x),
                map_n([value], |[x]| x <= 1.0),
                map_n([alpha], |[a]| a > 0.0),
                map_n([beta], |[b]| b > 0.0),
            ],
        ))
    }

    /// Samples by inverting the CDF at a uniform random probability.
    fn random(&self, point: Option<&Point>, rng: &mut Prng) -> Result<ArrayD<f64>> {
        let [alpha, beta] = resolve_values([&self.alpha, &self.beta], point, rng)?;
        try_fill_from([&alpha, &beta], &self.shape, |[a, b]| {
            let d = statrs::distribution::Beta::new(a, b)
                .map_err(|e| DistributionError::invalid("Beta", e))?;
            Ok(d.inverse_cdf(rng.gen::<f64>()))
        })
    }
}
