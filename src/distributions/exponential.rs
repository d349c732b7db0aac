//! Exponential distribution
use super::{stat, Continuous, Moments};
use crate::error::{DistributionError, Result};
use crate::math::bound;
use crate::params::{resolve_values, Param, Point};
use crate::utils::array::{map_n, try_fill_from};
use crate::Prng;
use ndarray::ArrayD;
use rand_distr::{Distribution, Exp};
use std::f64::consts::LN_2;

/// Exponential distribution with rate `lam > 0`.
#[derive(Debug, Clone)]
pub struct Exponential {
    lam: Param,
    shape: Vec<usize>,
    moments: Moments,
}

impl Exponential {
    pub fn new(lam: impl Into<Param>) -> Self {
        let lam = lam.into();
        let mean = stat([&lam], |[lam]| lam.recip());
        Self {
            moments: Moments {
                median: mean.as_ref().map(|mean| mean * LN_2),
                mode: stat([&lam], |_| 0.0),
                variance: stat([&lam], |[lam]| lam.powi(-2)),
                mean,
            },
            lam,
            shape: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_shape(mut self, shape: &[usize]) -> Self {
        self.shape = shape.to_vec();
        self
    }

    pub const fn lam(&self) -> &Param {
        &self.lam
    }
}

impl Continuous for Exponential {
    fn shape(&self) -> &[usize] {
        &self.shape
    }

    fn moments(&self) -> &Moments {
        &self.moments
    }

    fn params(&self) -> Vec<&Param> {
        vec![&self.lam]
    }

    fn logp_at(&self, value: &ArrayD<f64>, point: &Point) -> Result<ArrayD<f64>> {
        let lam = self.lam.current(point)?;
        Ok(bound(
            map_n([value, &*lam], |[x, lam]| lam.ln() - lam * x),
            &[
                map_n([value], |[x]| x > 0.0),
                map_n([&*lam], |[lam]| lam > 0.0),
            ],
        ))
    }

    fn random(&self, point: Option<&Point>, rng: &mut Prng) -> Result<ArrayD<f64>> {
        let [lam] = resolve_values([&self.lam], point, rng)?;
        try_fill_from([&lam], &self.shape, |[lam]| {
            let d = Exp::new(lam).map_err(|e| DistributionError::invalid("Exponential", e))?;
            Ok(d.sample(rng))
        })
    }
}
