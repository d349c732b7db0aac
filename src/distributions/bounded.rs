//! Truncation of a distribution to an interval
use super::{Continuous, Moments, StudentT};
use crate::error::{DistributionError, Result};
use crate::math::bound;
use crate::params::{Param, Point};
use crate::utils::array::{map_n, scalar};
use crate::Prng;
use ndarray::{ArrayD, Zip};
use std::marker::PhantomData;
use tracing::debug;

/// Maximum number of redraws by [`Bounded::random`] before giving up.
pub const MAX_REJECTION_ROUNDS: usize = 1000;

/// A reusable template for truncating distributions of type `D` to `[lower, upper]`.
///
/// # Example
/// ```
/// use randvars::distributions::{Bound, Continuous, Exponential};
/// use randvars::utils::array::scalar;
///
/// let at_least_one = Bound::<Exponential>::lower(1.0);
/// let d = at_least_one.dist(Exponential::new(1.0));
/// assert_eq!(d.logp(&scalar(0.5)).unwrap(), scalar(f64::NEG_INFINITY));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bound<D> {
    lower: f64,
    upper: f64,
    distribution: PhantomData<fn() -> D>,
}

impl<D> Bound<D> {
    pub const fn new(lower: f64, upper: f64) -> Self {
        Self {
            lower,
            upper,
            distribution: PhantomData,
        }
    }

    /// Bound from below only.
    pub const fn lower(lower: f64) -> Self {
        Self::new(lower, f64::INFINITY)
    }

    /// Bound from above only.
    pub const fn upper(upper: f64) -> Self {
        Self::new(f64::NEG_INFINITY, upper)
    }

    pub const fn limits(&self) -> (f64, f64) {
        (self.lower, self.upper)
    }

    /// Truncate a distribution instance.
    pub const fn dist(&self, distribution: D) -> Bounded<D> {
        Bounded {
            inner: distribution,
            lower: self.lower,
            upper: self.upper,
        }
    }
}

/// The unbounded interval.
impl<D> Default for Bound<D> {
    fn default() -> Self {
        Self::new(f64::NEG_INFINITY, f64::INFINITY)
    }
}

/// Non-negative Student's t distributions.
pub const fn tpos() -> Bound<StudentT> {
    Bound::lower(0.0)
}

/// A distribution truncated to `[lower, upper]`.
///
/// The log-density is that of the inner distribution wherever `lower <= x <= upper`
/// and negative infinity elsewhere. It is not renormalized so in general does not
/// integrate to one. Shape and summary statistics are those of the inner distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct Bounded<D> {
    inner: D,
    lower: f64,
    upper: f64,
}

impl<D> Bounded<D> {
    pub const fn inner(&self) -> &D {
        &self.inner
    }

    #[allow(clippy::missing_const_for_fn)] // false positive
    pub fn into_inner(self) -> D {
        self.inner
    }

    pub const fn lower(&self) -> f64 {
        self.lower
    }

    pub const fn upper(&self) -> f64 {
        self.upper
    }

    fn contains(&self, x: f64) -> bool {
        self.lower <= x && x <= self.upper
    }
}

impl<D: Continuous> Bounded<D> {
    /// Sample the stochastic parameters of the inner distribution that `point` leaves free.
    ///
    /// Returns `point` extended with the sampled values, or `None` if nothing was sampled.
    fn fix_params(&self, point: Option<&Point>, rng: &mut Prng) -> Result<Option<Point>> {
        let mut fixed: Option<Point> = None;
        for param in self.inner.params() {
            if let Param::Stochastic(rv) = param {
                let current = fixed.as_ref().or(point);
                if current.map_or(false, |p| p.contains_key(rv.name())) {
                    continue;
                }
                let value = rv.random(current, rng)?;
                fixed
                    .get_or_insert_with(|| point.cloned().unwrap_or_default())
                    .insert(rv.name().to_string(), value);
            }
        }
        Ok(fixed)
    }
}

impl<D: Continuous> Continuous for Bounded<D> {
    fn shape(&self) -> &[usize] {
        self.inner.shape()
    }

    fn moments(&self) -> &Moments {
        self.inner.moments()
    }

    fn params(&self) -> Vec<&Param> {
        self.inner.params()
    }

    fn logp_at(&self, value: &ArrayD<f64>, point: &Point) -> Result<ArrayD<f64>> {
        let (lower, upper) = (scalar(self.lower), scalar(self.upper));
        Ok(bound(
            self.inner.logp_at(value, point)?,
            &[
                map_n([&lower, value], |[lower, x]| lower <= x),
                map_n([value, &upper], |[x, upper]| x <= upper),
            ],
        ))
    }

    /// Sample by rejection: elements outside the bounds are redrawn from the inner distribution.
    ///
    /// Stochastic parameters of the inner distribution are resolved once, before the first
    /// draw, and held fixed for every redraw so that all elements share one realization.
    ///
    /// # Errors
    /// [`DistributionError::Rejection`] if some element is still out of bounds after
    /// [`MAX_REJECTION_ROUNDS`] redraws.
    fn random(&self, point: Option<&Point>, rng: &mut Prng) -> Result<ArrayD<f64>> {
        let fixed = self.fix_params(point, rng)?;
        let point = fixed.as_ref().or(point);
        let mut out = self.inner.random(point, rng)?;
        for round in 0..MAX_REJECTION_ROUNDS {
            if out.iter().all(|&x| self.contains(x)) {
                return Ok(out);
            }
            debug!(
                round,
                lower = self.lower,
                upper = self.upper,
                "redrawing out-of-bounds elements"
            );
            let redraw = self.inner.random(point, rng)?;
            Zip::from(&mut out).and(&redraw).for_each(|x, &y| {
                if !self.contains(*x) {
                    *x = y;
                }
            });
        }
        if out.iter().all(|&x| self.contains(x)) {
            Ok(out)
        } else {
            Err(DistributionError::Rejection {
                rounds: MAX_REJECTION_ROUNDS,
            })
        }
    }
}
