//! Flat (improper uniform) distribution
use super::{Continuous, Moments};
use crate::error::{DistributionError, Result};
use crate::math::bound;
use crate::params::{Param, Point};
use crate::utils::array::scalar;
use crate::Prng;
use ndarray::ArrayD;

/// Uninformative distribution with a log-density of 0 everywhere.
///
/// Cannot be sampled.
#[derive(Debug, Clone)]
pub struct Flat {
    shape: Vec<usize>,
    moments: Moments,
}

impl Flat {
    pub fn new() -> Self {
        Self {
            shape: Vec::new(),
            moments: Moments {
                median: Some(scalar(0.0)),
                ..Moments::default()
            },
        }
    }

    #[must_use]
    pub fn with_shape(mut self, shape: &[usize]) -> Self {
        self.shape = shape.to_vec();
        self
    }
}

impl Default for Flat {
    fn default() -> Self {
        Self::new()
    }
}

impl Continuous for Flat {
    fn shape(&self) -> &[usize] {
        &self.shape
    }

    fn moments(&self) -> &Moments {
        &self.moments
    }

    fn params(&self) -> Vec<&Param> {
        Vec::new()
    }

    fn logp_at(&self, value: &ArrayD<f64>, _: &Point) -> Result<ArrayD<f64>> {
        Ok(bound(ArrayD::zeros(value.raw_dim()), &[]))
    }

    fn random(&self, _: Option<&Point>, _: &mut Prng) -> Result<ArrayD<f64>> {
        Err(DistributionError::Unsupported {
            distribution: "Flat",
            operation: "sampling",
        })
    }
}
