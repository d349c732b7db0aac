//! Distribution parameters and their resolution to concrete values.
use crate::distributions::Continuous;
use crate::error::{DistributionError, Result};
use crate::utils::array::{scalar, squeeze};
use crate::Prng;
use ndarray::{Array, ArrayD, Dimension};
use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::trace;

/// Fixed values of random variables, by name.
pub type Point = HashMap<String, ArrayD<f64>>;

/// A named random quantity.
///
/// Used as a stochastic distribution parameter by wrapping it in a [`Param`].
#[derive(Debug)]
pub struct RandomVariable {
    name: String,
    distribution: Box<dyn Continuous>,
}

impl RandomVariable {
    pub fn new<D: Continuous + 'static>(name: impl Into<String>, distribution: D) -> Self {
        Self {
            name: name.into(),
            distribution: Box::new(distribution),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn distribution(&self) -> &dyn Continuous {
        self.distribution.as_ref()
    }

    /// Sample a value, resolving the distribution's own parameters with `point`.
    pub fn random(&self, point: Option<&Point>, rng: &mut Prng) -> Result<ArrayD<f64>> {
        self.distribution.random(point, rng)
    }
}

/// A distribution parameter slot.
#[derive(Debug, Clone)]
pub enum Param {
    /// A concrete value.
    Value(ArrayD<f64>),
    /// A reference to another random variable.
    Stochastic(Arc<RandomVariable>),
}

impl Param {
    /// The concrete value, if this is not a stochastic parameter.
    pub const fn value(&self) -> Option<&ArrayD<f64>> {
        match self {
            Self::Value(value) => Some(value),
            Self::Stochastic(_) => None,
        }
    }

    pub const fn is_stochastic(&self) -> bool {
        matches!(self, Self::Stochastic(_))
    }

    /// The current value of this parameter at `point`.
    ///
    /// # Errors
    /// [`DistributionError::Unresolved`] if this is a stochastic parameter without an
    /// entry in `point`.
    pub fn current<'a>(&'a self, point: &'a Point) -> Result<Cow<'a, ArrayD<f64>>> {
        match self {
            Self::Value(value) => Ok(Cow::Borrowed(value)),
            Self::Stochastic(rv) => point
                .get(rv.name())
                .map(Cow::Borrowed)
                .ok_or_else(|| DistributionError::Unresolved {
                    name: rv.name().to_string(),
                }),
        }
    }

    /// Resolve to a concrete value.
    ///
    /// A stochastic parameter takes its value from `point` if present there,
    /// otherwise it is sampled (with the same `point` for its own parameters).
    pub fn resolve(&self, point: Option<&Point>, rng: &mut Prng) -> Result<ArrayD<f64>> {
        match self {
            Self::Value(value) => Ok(value.clone()),
            Self::Stochastic(rv) => match point.and_then(|p| p.get(rv.name())) {
                Some(value) => {
                    trace!(name = rv.name(), "stochastic parameter fixed by point");
                    Ok(value.clone())
                }
                None => {
                    trace!(name = rv.name(), "sampling stochastic parameter");
                    rv.random(point, rng)
                }
            },
        }
    }
}

impl From<f64> for Param {
    fn from(value: f64) -> Self {
        Self::Value(scalar(value))
    }
}

impl<D: Dimension> From<Array<f64, D>> for Param {
    fn from(value: Array<f64, D>) -> Self {
        Self::Value(value.into_dyn())
    }
}

impl From<Arc<RandomVariable>> for Param {
    fn from(rv: Arc<RandomVariable>) -> Self {
        Self::Stochastic(rv)
    }
}

impl From<&Arc<RandomVariable>> for Param {
    fn from(rv: &Arc<RandomVariable>) -> Self {
        Self::Stochastic(Arc::clone(rv))
    }
}

impl From<RandomVariable> for Param {
    fn from(rv: RandomVariable) -> Self {
        Self::Stochastic(Arc::new(rv))
    }
}

/// Resolve a parameter to a concrete value with singleton axes removed.
///
/// See [`Param::resolve`].
pub fn draw_value(param: &Param, point: Option<&Point>, rng: &mut Prng) -> Result<ArrayD<f64>> {
    param.resolve(point, rng).map(squeeze)
}

/// Resolve each parameter independently, in order, with [`draw_value`].
pub fn draw_values<const N: usize>(
    params: [&Param; N],
    point: Option<&Point>,
    rng: &mut Prng,
) -> Result<[ArrayD<f64>; N]> {
    let values = resolve_values(params, point, rng)?;
    Ok(values.map(squeeze))
}

/// Resolve each parameter, in order, keeping the resolved shapes.
///
/// Unlike [`draw_values`] no axes are removed, so the values broadcast against a sample
/// shape the same way the parameters do in a log-density.
pub fn resolve_values<const N: usize>(
    params: [&Param; N],
    point: Option<&Point>,
    rng: &mut Prng,
) -> Result<[ArrayD<f64>; N]> {
    array_init::try_array_init(|i| params[i].resolve(point, rng))
}
