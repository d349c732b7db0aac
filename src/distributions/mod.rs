//! Continuous distributions
//!
//! Each distribution evaluates an elementwise log-density and draws samples at a
//! configured output shape. Parameters may be concrete values or other random variables
//! (see [`Param`]).
//!
//! # Summary statistics
//! Statistics are computed once, at construction, from concrete parameter values.
//! A statistic that depends on a stochastic parameter is `None`,
//! as is any statistic the distribution does not define.
mod beta;
mod bounded;
mod cauchy;
mod exponential;
mod flat;
mod gamma;
mod laplace;
mod lognormal;
mod normal;
mod student_t;
#[cfg(test)]
pub mod testing;
mod uniform;

pub use beta::Beta;
pub use bounded::{tpos, Bound, Bounded, MAX_REJECTION_ROUNDS};
pub use cauchy::Cauchy;
pub use exponential::Exponential;
pub use flat::Flat;
pub use gamma::Gamma;
pub use laplace::Laplace;
pub use lognormal::Lognormal;
pub use normal::{get_tau, Normal, Precision};
pub use student_t::StudentT;
pub use uniform::Uniform;

use crate::error::Result;
use crate::params::{Param, Point};
use crate::utils::array::map_n;
use crate::Prng;
use ndarray::ArrayD;
use std::fmt;

/// A continuous distribution over arrays of `f64`.
pub trait Continuous: fmt::Debug + Send + Sync {
    /// Shape of the values produced by [`Continuous::random`].
    fn shape(&self) -> &[usize];

    /// Summary statistics.
    fn moments(&self) -> &Moments;

    /// All parameter slots, concrete and stochastic.
    fn params(&self) -> Vec<&Param>;

    /// Elementwise log-density of `value`.
    ///
    /// Stochastic parameters take their values from `point`.
    /// Values or parameters outside the support have a log-density of negative infinity.
    ///
    /// # Errors
    /// [`DistributionError::Unresolved`](crate::DistributionError::Unresolved)
    /// if a stochastic parameter has no entry in `point`.
    fn logp_at(&self, value: &ArrayD<f64>, point: &Point) -> Result<ArrayD<f64>>;

    /// Draw a sample with shape [`Continuous::shape`].
    ///
    /// Stochastic parameters are taken from `point` where present and sampled otherwise.
    fn random(&self, point: Option<&Point>, rng: &mut Prng) -> Result<ArrayD<f64>>;

    /// Elementwise log-density of `value` for a distribution with concrete parameters.
    fn logp(&self, value: &ArrayD<f64>) -> Result<ArrayD<f64>> {
        self.logp_at(value, &Point::new())
    }

    /// Total log-density of all elements of `value`.
    fn logp_sum(&self, value: &ArrayD<f64>, point: &Point) -> Result<f64> {
        Ok(self.logp_at(value, point)?.sum())
    }

    fn mean(&self) -> Option<&ArrayD<f64>> {
        self.moments().mean.as_ref()
    }

    fn median(&self) -> Option<&ArrayD<f64>> {
        self.moments().median.as_ref()
    }

    fn mode(&self) -> Option<&ArrayD<f64>> {
        self.moments().mode.as_ref()
    }

    fn variance(&self) -> Option<&ArrayD<f64>> {
        self.moments().variance.as_ref()
    }
}

impl<D: Continuous + ?Sized> Continuous for Box<D> {
    fn shape(&self) -> &[usize] {
        D::shape(self)
    }
    fn moments(&self) -> &Moments {
        D::moments(self)
    }
    fn params(&self) -> Vec<&Param> {
        D::params(self)
    }
    fn logp_at(&self, value: &ArrayD<f64>, point: &Point) -> Result<ArrayD<f64>> {
        D::logp_at(self, value, point)
    }
    fn random(&self, point: Option<&Point>, rng: &mut Prng) -> Result<ArrayD<f64>> {
        D::random(self, point, rng)
    }
}

/// Summary statistics of a distribution.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Moments {
    pub mean: Option<ArrayD<f64>>,
    pub median: Option<ArrayD<f64>>,
    pub mode: Option<ArrayD<f64>>,
    pub variance: Option<ArrayD<f64>>,
}

/// Evaluate a statistic elementwise if all of its parameters are concrete.
fn stat<F, const N: usize>(params: [&Param; N], f: F) -> Option<ArrayD<f64>>
where
    F: FnMut([f64; N]) -> f64,
{
    let values: [&ArrayD<f64>; N] =
        array_init::try_array_init(|i| params[i].value().ok_or(())).ok()?;
    Some(map_n(values, f))
}
