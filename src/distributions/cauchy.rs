//! Cauchy distribution
use super::{stat, Continuous, Moments};
use crate::error::{DistributionError, Result};
use crate::math::{bound, LN_PI};
use crate::params::{resolve_values, Param, Point};
use crate::utils::array::{map_n, try_fill_from};
use crate::Prng;
use ndarray::ArrayD;
use rand::Rng;
use std::f64::consts::PI;

/// Cauchy (Lorentz) distribution with location `alpha` and scale `beta`.
///
/// The mean and variance are undefined.
#[derive(Debug, Clone)]
pub struct Cauchy {
    alpha: Param,
    beta: Param,
    shape: Vec<usize>,
    moments: Moments,
}

impl Cauchy {
    pub fn new(alpha: impl Into<Param>, beta: impl Into<Param>) -> Self {
        let alpha = alpha.into();
        let beta = beta.into();
        let median = stat([&alpha], |[alpha]| alpha);
        Self {
            moments: Moments {
                mode: median.clone(),
                median,
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

impl Continuous for Cauchy {
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
        Ok(bound(
            map_n([value, &*alpha, &*beta], |[x, alpha, beta]| {
                -LN_PI - beta.ln() - ((x - alpha) / beta).powi(2).ln_1p()
            }),
            &[map_n([&*beta], |[beta]| beta > 0.0)],
        ))
    }

    /// Samples with the tangent of a uniform random angle.
    fn random(&self, point: Option<&Point>, rng: &mut Prng) -> Result<ArrayD<f64>> {
        let [alpha, beta] = resolve_values([&self.alpha, &self.beta], point, rng)?;
        try_fill_from([&alpha, &beta], &self.shape, |[alpha, beta]| {
            if beta.is_nan() || beta <= 0.0 {
                return Err(DistributionError::invalid(
                    "Cauchy",
                    format!("scale must be > 0, got {}", beta),
                ));
            }
            Ok(alpha + beta * (PI * rng.gen::<f64>() - PI / 2.0).tan())
        })
    }
}
