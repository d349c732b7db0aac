//! Uniform distribution
use super::{stat, Continuous, Moments};
use crate::error::Result;
use crate::math::bound;
use crate::params::{resolve_values, Param, Point};
use crate::utils::array::{map_n, try_fill_from};
use crate::Prng;
use ndarray::ArrayD;
use rand::Rng;

/// Continuous uniform distribution on `[lower, upper]`.
///
/// `f(x | lower, upper) = 1 / (upper - lower)`
#[derive(Debug, Clone)]
pub struct Uniform {
    lower: Param,
    upper: Param,
    shape: Vec<usize>,
    moments: Moments,
}

impl Uniform {
    pub fn new(lower: impl Into<Param>, upper: impl Into<Param>) -> Self {
        let lower = lower.into();
        let upper = upper.into();
        let mean = stat([&lower, &upper], |[lower, upper]| (lower + upper) / 2.0);
        Self {
            moments: Moments {
                median: mean.clone(),
                mean,
                ..Moments::default()
            },
            lower,
            upper,
            shape: Vec::new(),
        }
    }

    /// Set the shape of sampled values.
    #[must_use]
    pub fn with_shape(mut self, shape: &[usize]) -> Self {
        self.shape = shape.to_vec();
        self
    }

    pub const fn lower(&self) -> &Param {
        &self.lower
    }

    pub const fn upper(&self) -> &Param {
        &self.upper
    }
}

/// The unit interval `[0, 1]`.
impl Default for Uniform {
    fn default() -> Self {
        Self::new(0.0, 1.0)
    }
}

impl Continuous for Uniform {
    fn shape(&self) -> &[usize] {
        &self.shape
    }

    fn moments(&self) -> &Moments {
        &self.moments
    }

    fn params(&self) -> Vec<&Param> {
        vec![&self.lower, &self.upper]
    }

    fn logp_at(&self, value: &ArrayD<f64>, point: &Point) -> Result<ArrayD<f64>> {
        let lower = self.lower.current(point)?;
        let upper = self.upper.current(point)?;
        let (lower, upper) = (&*lower, &*upper);
        Ok(bound(
            map_n([lower, upper], |[lower, upper]| -(upper - lower).ln()),
            &[
                map_n([lower, value], |[lower, x]| lower <= x),
                map_n([value, upper], |[x, upper]| x <= upper),
            ],
        ))
    }

    fn random(&self, point: Option<&Point>, rng: &mut Prng) -> Result<ArrayD<f64>> {
        let [lower, upper] = resolve_values([&self.lower, &self.upper], point, rng)?;
        try_fill_from([&lower, &upper], &self.shape, |[lower, upper]| {
            Ok(lower + (upper - lower) * rng.gen::<f64>())
        })
    }
}
