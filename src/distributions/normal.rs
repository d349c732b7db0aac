//! Normal distribution
use super::{stat, Continuous, Moments};
use crate::error::{DistributionError, Result};
use crate::math::bound;
use crate::params::{resolve_values, Param, Point};
use crate::utils::array::{map_n, try_fill_from};
use crate::Prng;
use ndarray::ArrayD;
use rand_distr::Distribution;
use std::borrow::Cow;
use std::f64::consts::PI;

/// Precision of a normal distribution, given directly or as a standard deviation.
#[derive(Debug, Clone)]
pub enum Precision {
    /// Precision `tau = 1 / sd^2`.
    Tau(Param),
    /// A stochastic standard deviation, converted to a precision when resolved.
    Sd(Param),
}

impl Precision {
    /// The parameter holding the precision or standard deviation.
    pub const fn param(&self) -> &Param {
        match self {
            Self::Tau(param) | Self::Sd(param) => param,
        }
    }

    /// Convert a resolved value of [`Precision::param`] to a precision.
    fn to_tau(&self, value: ArrayD<f64>) -> ArrayD<f64> {
        match self {
            Self::Tau(_) => value,
            Self::Sd(_) => value.mapv_into(|sd| sd.powi(-2)),
        }
    }

    /// The current precision at `point`.
    pub fn current<'a>(&'a self, point: &'a Point) -> Result<Cow<'a, ArrayD<f64>>> {
        let value = self.param().current(point)?;
        Ok(match self {
            Self::Tau(_) => value,
            Self::Sd(_) => Cow::Owned(self.to_tau(value.into_owned())),
        })
    }
}

/// Resolve the precision from an optional precision `tau` or standard deviation `sd`.
///
/// Neither: `tau = 1`. Only `sd`: `tau = sd^-2`. Only `tau`: `tau`.
///
/// # Errors
/// [`DistributionError::ParameterConflict`] if both are given.
pub fn get_tau(tau: Option<Param>, sd: Option<Param>) -> Result<Precision> {
    match (tau, sd) {
        (None, None) => Ok(Precision::Tau(1.0.into())),
        (None, Some(Param::Value(sd))) => {
            Ok(Precision::Tau(Param::Value(sd.mapv_into(|sd| sd.powi(-2)))))
        }
        (None, Some(sd)) => Ok(Precision::Sd(sd)),
        (Some(tau), None) => Ok(Precision::Tau(tau)),
        (Some(_), Some(_)) => Err(DistributionError::ParameterConflict {
            first: "tau",
            second: "sd",
        }),
    }
}

/// Normal distribution with mean `mu` and precision `tau`.
///
/// `f(x | mu, tau) = sqrt(tau / 2π) exp(-tau (x - mu)^2 / 2)`
#[derive(Debug, Clone)]
pub struct Normal {
    mu: Param,
    precision: Precision,
    shape: Vec<usize>,
    moments: Moments,
}

impl Normal {
    /// Create a normal distribution.
    ///
    /// # Args
    /// * `mu` - Mean.
    /// * `tau` - Precision (`tau > 0`).
    /// * `sd` - Standard deviation. Alternative to `tau`.
    ///
    /// # Errors
    /// [`DistributionError::ParameterConflict`] if both `tau` and `sd` are given.
    pub fn new(mu: impl Into<Param>, tau: Option<Param>, sd: Option<Param>) -> Result<Self> {
        let mu = mu.into();
        let precision = get_tau(tau, sd)?;
        let mean = stat([&mu], |[mu]| mu);
        let variance = match &precision {
            Precision::Tau(tau) => stat([tau], |[tau]| 1.0 / tau),
            Precision::Sd(_) => None,
        };
        Ok(Self {
            moments: Moments {
                median: mean.clone(),
                mode: mean.clone(),
                mean,
                variance,
            },
            mu,
            precision,
            shape: Vec::new(),
        })
    }

    #[must_use]
    pub fn with_shape(mut self, shape: &[usize]) -> Self {
        self.shape = shape.to_vec();
        self
    }

    pub const fn mu(&self) -> &Param {
        &self.mu
    }

    pub const fn precision(&self) -> &Precision {
        &self.precision
    }

    /// The precision, if it is concrete.
    pub const fn tau(&self) -> Option<&ArrayD<f64>> {
        match &self.precision {
            Precision::Tau(tau) => tau.value(),
            Precision::Sd(_) => None,
        }
    }
}

impl Continuous for Normal {
    fn shape(&self) -> &[usize] {
        &self.shape
    }

    fn moments(&self) -> &Moments {
        &self.moments
    }

    fn params(&self) -> Vec<&Param> {
        vec![&self.mu, self.precision.param()]
    }

    fn logp_at(&self, value: &ArrayD<f64>, point: &Point) -> Result<ArrayD<f64>> {
        let mu = self.mu.current(point)?;
        let tau = self.precision.current(point)?;
        Ok(bound(
            map_n([value, &*mu, &*tau], |[x, mu, tau]| {
                (-tau * (x - mu).powi(2) + (tau / PI / 2.0).ln()) / 2.0
            }),
            &[map_n([&*tau], |[tau]| tau > 0.0)],
        ))
    }

    fn random(&self, point: Option<&Point>, rng: &mut Prng) -> Result<ArrayD<f64>> {
        let [mu, tau] = resolve_values([&self.mu, self.precision.param()], point, rng)?;
        let tau = self.precision.to_tau(tau);
        try_fill_from([&mu, &tau], &self.shape, |[mu, tau]| {
            let d = rand_distr::Normal::new(mu, tau.sqrt().recip())
                .map_err(|e| DistributionError::invalid("Normal", e))?;
            Ok(d.sample(rng))
        })
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::super::testing;
    use super::*;
    use crate::distributions::{Flat, Uniform};
    use crate::params::RandomVariable;
    use crate::utils::array::scalar;
    use ndarray::{arr1, arr2, IxDyn, Zip};
    use rand::SeedableRng;
    use rstest::rstest;
    use std::sync::Arc;

    #[test]
    fn standard_logp_at_zero() {
        let d = Normal::new(0.0, None, None).unwrap();
        let lp = d.logp(&scalar(0.0)).unwrap();
        assert!((lp.sum() - 0.5 * (1.0 / (2.0 * PI)).ln()).abs() < 1e-12);
        assert!((lp.sum() + 0.919).abs() < 1e-3);
    }

    #[test]
    fn logp_symmetric() {
        let d = Normal::new(1.0, Some(4.0.into()), None).unwrap();
        let lp = d.logp(&arr1(&[0.5, 1.5]).into_dyn()).unwrap();
        assert!((lp[0] - lp[1]).abs() < 1e-12);
    }

    #[test]
    fn both_tau_and_sd_conflict() {
        let err = Normal::new(0.0, Some(1.0.into()), Some(1.0.into())).unwrap_err();
        assert_eq!(
            err,
            DistributionError::ParameterConflict {
                first: "tau",
                second: "sd"
            }
        );
    }

    #[test]
    fn sd_converted_to_tau() {
        let d = Normal::new(0.0, None, Some(2.0.into())).unwrap();
        assert_eq!(d.tau(), Some(&scalar(0.25)));
        assert_eq!(d.variance(), Some(&scalar(4.0)));
    }

    #[test]
    fn default_tau_is_one() {
        let d = Normal::new(0.0, None, None).unwrap();
        assert_eq!(d.tau(), Some(&scalar(1.0)));
    }

    #[test]
    fn non_positive_tau_neg_inf() {
        let d = Normal::new(0.0, Some(arr1(&[0.0, -1.0]).into()), None).unwrap();
        let lp = d.logp(&scalar(0.0)).unwrap();
        assert_eq!(lp, arr1(&[f64::NEG_INFINITY; 2]).into_dyn());
    }

    #[test]
    fn moments() {
        let d = Normal::new(3.0, Some(2.0.into()), None).unwrap();
        assert_eq!(d.mean(), Some(&scalar(3.0)));
        assert_eq!(d.median(), Some(&scalar(3.0)));
        assert_eq!(d.mode(), Some(&scalar(3.0)));
        assert_eq!(d.variance(), Some(&scalar(0.5)));
    }

    #[test]
    fn stochastic_mu_undefined_mean() {
        let mu = Arc::new(RandomVariable::new("mu", Flat::new()));
        let d = Normal::new(&mu, None, None).unwrap();
        assert_eq!(d.mean(), None);
        assert_eq!(d.variance(), Some(&scalar(1.0)));
    }

    #[test]
    fn stochastic_mu_logp_from_point() {
        let mu = Arc::new(RandomVariable::new("mu", Flat::new()));
        let d = Normal::new(&mu, None, None).unwrap();
        let mut point = Point::new();
        point.insert("mu".into(), scalar(2.0));
        let lp = d.logp_at(&scalar(2.0), &point).unwrap();
        assert!((lp.sum() - 0.5 * (1.0 / (2.0 * PI)).ln()).abs() < 1e-12);
        assert_eq!(
            d.logp(&scalar(2.0)).unwrap_err(),
            DistributionError::Unresolved { name: "mu".into() }
        );
    }

    #[test]
    fn stochastic_sd() {
        let sd = Arc::new(RandomVariable::new("sd", Uniform::new(1.0, 2.0)));
        let d = Normal::new(0.0, None, Some((&sd).into())).unwrap();
        assert!(d.tau().is_none());
        assert_eq!(d.variance(), None);
        let mut point = Point::new();
        point.insert("sd".into(), scalar(2.0));
        let lp = d.logp_at(&scalar(0.0), &point).unwrap();
        assert!((lp.sum() - 0.5 * (0.25 / (2.0 * PI)).ln()).abs() < 1e-12);
    }

    #[test]
    fn sample_mu_from_point() {
        let mu = Arc::new(RandomVariable::new("mu", Flat::new()));
        let d = Normal::new(&mu, None, None)
            .unwrap()
            .with_shape(&[10_000]);
        let mut point = Point::new();
        point.insert("mu".into(), scalar(100.0));
        let mut rng = Prng::seed_from_u64(3);
        let x = d.random(Some(&point), &mut rng).unwrap();
        let mean = x.mean().unwrap();
        assert!((mean - 100.0).abs() < 0.1);
    }

    #[test]
    fn sample_unresolvable_stochastic_param_errors() {
        let mu = Arc::new(RandomVariable::new("mu", Flat::new()));
        let d = Normal::new(&mu, None, None).unwrap();
        let mut rng = Prng::seed_from_u64(4);
        assert!(matches!(
            d.random(None, &mut rng),
            Err(DistributionError::Unsupported { .. })
        ));
    }

    #[test]
    fn samples_in_support() {
        testing::check_samples_in_support(&Normal::new(0.0, None, None).unwrap(), 100);
    }

    #[test]
    fn sample_shape() {
        testing::check_sample_shape(&Normal::new(0.0, None, None).unwrap().with_shape(&[4, 1]));
    }

    #[test]
    fn sample_mean_uses_sd() {
        // Standard deviation 2 (tau = 0.25)
        let d = Normal::new(-1.0, None, Some(2.0.into()))
            .unwrap()
            .with_shape(&[100_000]);
        testing::check_sample_mean(&d, -1.0, 2.0, 5);
        let mut rng = Prng::seed_from_u64(6);
        let x = d.random(None, &mut rng).unwrap();
        assert!((x.std(0.0) - 2.0).abs() < 0.05);
    }

    #[rstest]
    #[case(&[2, 1], &[2, 1])]
    #[case(&[2, 1], &[2, 3])]
    #[case(&[1, 3], &[2, 3])]
    #[case(&[2, 3], &[2, 3])]
    #[case(&[3], &[2, 3])]
    fn sample_array_mu(#[case] mu_shape: &[usize], #[case] shape: &[usize]) {
        let mu = testing::arange(mu_shape, 0.0, 10.0);
        let d = Normal::new(mu.clone(), Some(1e12.into()), None)
            .unwrap()
            .with_shape(shape);
        let mut rng = Prng::seed_from_u64(7);
        let x = d.random(None, &mut rng).unwrap();
        assert_eq!(x.shape(), shape);
        Zip::from(&x)
            .and(&mu.broadcast(IxDyn(shape)).unwrap())
            .for_each(|x, mu| assert!((x - mu).abs() < 1e-3));
    }

    #[test]
    fn sample_column_mu_matches_logp_shape() {
        let d = Normal::new(arr2(&[[0.0], [10.0]]), None, None)
            .unwrap()
            .with_shape(&[2, 1]);
        let mut rng = Prng::seed_from_u64(8);
        let x = d.random(None, &mut rng).unwrap();
        assert_eq!(d.logp(&x).unwrap().shape(), &[2, 1]);
    }

    #[test]
    fn sample_stochastic_mu_with_singleton_axis() {
        // mu is sampled with shape [1] for a scalar output
        let mu = Arc::new(RandomVariable::new(
            "mu",
            Uniform::new(10.0, 11.0).with_shape(&[1]),
        ));
        let d = Normal::new(&mu, Some(1e12.into()), None).unwrap();
        let mut rng = Prng::seed_from_u64(9);
        let x = d.random(None, &mut rng).unwrap();
        assert_eq!(x.ndim(), 0);
        assert!((10.0..=11.0).contains(&x.sum()));
    }

    #[test]
    fn sample_incompatible_mu_shape() {
        let d = Normal::new(testing::arange(&[2], 0.0, 1.0), None, None)
            .unwrap()
            .with_shape(&[3]);
        let mut rng = Prng::seed_from_u64(10);
        assert_eq!(
            d.random(None, &mut rng),
            Err(DistributionError::IncompatibleShape {
                from: vec![2],
                to: vec![3]
            })
        );
    }
}
